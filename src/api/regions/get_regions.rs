use crate::api::APIError;
use crate::{models::*, telemetry::TraceMessageExt};
use actix_web::{get, web};
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[get("/api/v1/regions")]
pub async fn get_regions_v1(
    state: web::Data<GlobalState>,
) -> Result<web::Json<Vec<RegionV1>>, APIError> {
    state
        .store
        .send(GetRegions {}.trace())
        .await?
        .map(|regions| regions.into_iter().map(|r| r.into()).collect::<Vec<_>>())
        .map(web::Json)
}
