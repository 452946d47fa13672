use crate::api::APIError;
use crate::models::*;
use crate::utils::{normalize_name, NameStyle};
use actix_web::{HttpRequest, post, web};
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(body), fields(otel.kind = "internal"))]
#[post("/api/v1/normalize/{style}")]
pub async fn create_name_v1(
    req: HttpRequest,
    body: web::Json<NameRequestV1>,
) -> Result<NameV1, APIError> {
    let style: NameStyle = req
        .match_info()
        .query("style")
        .to_lowercase()
        .parse()
        .map_err(|err: String| APIError::bad_request(&err))?;

    let request = body.into_inner();
    debug!(
        "Normalizing {} part(s) using the {} name style",
        request.parts.len(),
        style
    );
    Ok(NameV1 {
        name: normalize_name(style, &request.delimiter, &request.parts),
    })
}
