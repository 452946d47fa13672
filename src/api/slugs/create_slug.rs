use crate::api::APIError;
use crate::models::*;
use crate::utils::citation_slug;
use actix_web::{post, web};
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(body), fields(otel.kind = "internal"))]
#[post("/api/v1/slug")]
pub async fn create_slug_v1(body: web::Json<SlugRequestV1>) -> Result<SlugV1, APIError> {
    Ok(SlugV1 {
        slug: citation_slug(body.into_inner().parts),
    })
}
