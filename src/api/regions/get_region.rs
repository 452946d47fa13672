use crate::api::APIError;
use crate::{models::*, telemetry::TraceMessageExt};
use actix_web::{HttpRequest, get, web};
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[get("/api/v1/regions/{id}")]
pub async fn get_region_v1(
    req: HttpRequest,
    state: web::Data<GlobalState>,
) -> Result<RegionV1, APIError> {
    let id = req.match_info().query("id").to_lowercase();
    state
        .store
        .send(GetRegion { id }.trace())
        .await?
        .map(|region| region.into())
}

#[cfg(test)]
mod tests {
    use crate::api::test::*;
    use crate::models::*;

    #[actix_rt::test]
    async fn get_region_v1() {
        test_log_init();

        let regions = test_regions();
        test_state!(state = [regions[0].clone(), regions[1].clone()]);

        let content: RegionV1 =
            test_request!(GET "/api/v1/regions/NorthAmerica" => OK with content | state = state);
        assert_eq!(content.id, "northamerica".to_string());
        assert_eq!(content.name, "North America".to_string());
        assert_eq!(content.url, "https://na.example.com/docs".to_string());
    }

    #[actix_rt::test]
    async fn get_region_v1_missing() {
        test_log_init();

        let regions = test_regions();
        test_state!(state = [regions[0].clone()]);

        test_request!(GET "/api/v1/regions/antarctica" => NOT_FOUND | state = state);
    }
}
