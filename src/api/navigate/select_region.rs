use crate::api::APIError;
use crate::navigation::{Page, RegionNavigation, REGION_SELECTOR_ID};
use crate::{models::*, telemetry::TraceMessageExt};
use actix_web::http::header::{HeaderValue, LOCATION};
use actix_web::{HttpResponse, get, web};
use tracing_batteries::prelude::*;

#[derive(Debug, Deserialize)]
pub struct RegionSelection {
    target: Option<String>,
}

/// Handles the region selector's form submission for clients which do not run
/// the page script, redirecting to whatever value was selected.
#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[get("/region")]
pub async fn select_region(
    query: web::Query<RegionSelection>,
    state: web::Data<GlobalState>,
) -> Result<HttpResponse, APIError> {
    let target = query.into_inner().target.ok_or_else(|| {
        APIError::bad_request("You must select a region to navigate to.")
    })?;

    let regions = state.store.send(GetRegions {}.trace()).await??;

    let page = Page::new();
    let selector = page.add_select(REGION_SELECTOR_ID, regions.into_iter().map(|r| r.url));
    let binding = RegionNavigation::install(&page, page.location())?;
    debug!("Listening to the region selector with {:?}", binding.listener());

    selector.select(target);
    if !selector.options().contains(&selector.value()) {
        debug!(
            "The selected region '{}' is not one of the configured regions",
            selector.value()
        );
    }

    binding.detach();

    let location = HeaderValue::from_str(&page.location().href()).map_err(|_| {
        APIError::bad_request("The selected region cannot be used as a navigation target.")
    })?;

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish())
}
