use crate::api::APIError;
use crate::navigation::REGION_SELECTOR_ID;
use crate::{models::*, telemetry::TraceMessageExt};
use actix_web::{HttpResponse, get, web};
use askama::Template;
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[get("/")]
pub async fn get_index(state: web::Data<GlobalState>) -> Result<HttpResponse, APIError> {
    let regions = state.store.send(GetRegions {}.trace()).await??;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_index(&regions)?))
}

struct RegionOption {
    id: String,
    name: String,
    url: String,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Select a region</title>
  </head>
  <body>
    <form method="get" action="/region">
      <label for="{{ selector_id }}">Region</label>
      <select id="{{ selector_id }}" name="target" onchange="window.location.href = this.value">
      {%- for region in regions %}
      <option id="region-{{ region.id }}" value="{{ region.url }}">{{ region.name }}</option>
      {%- endfor %}
      </select>
      <noscript><button type="submit">Go</button></noscript>
    </form>
  </body>
</html>
"#,
    ext = "html"
)]
struct IndexTemplate {
    selector_id: &'static str,
    regions: Vec<RegionOption>,
}

fn render_index(regions: &[Region]) -> Result<String, askama::Error> {
    IndexTemplate {
        selector_id: REGION_SELECTOR_ID,
        regions: regions
            .iter()
            .map(|region| RegionOption {
                id: region.id(),
                name: region.name.clone(),
                url: region.url.clone(),
            })
            .collect(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test::*;

    #[actix_rt::test]
    async fn get_index() {
        test_log_init();

        let regions = test_regions();
        test_state!(state = [regions[0].clone(), regions[1].clone()]);

        let response = test_request!(GET "/" => OK | state = state);
        let body = get_text(response).await;

        assert!(body.contains(r#"<select id="region_selector" name="target""#));
        assert!(body.contains(
            r#"<option id="region-europe" value="https://eu.example.com/docs">Europe</option>"#
        ));
        assert!(body.contains(r#"<option id="region-northamerica" value="https://na.example.com/docs">North America</option>"#));
    }

    #[test]
    fn render_index_escapes_regions() {
        let body = render_index(&[Region::new("R&D <Labs>", "/r?a=1&b=\"2\"")])
            .expect("the index should render");
        assert!(body.contains(
            r#"<option id="region-rdlabs" value="/r?a=1&amp;b=&quot;2&quot;">R&amp;D &lt;Labs&gt;</option>"#
        ));
    }
}
