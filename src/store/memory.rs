use crate::api::APIError;
use crate::{models::*, trace_handler};
use actix::prelude::*;

/// Holds the regions offered by the region selector, in the order they were configured.
pub struct RegionCatalog {
    started_at: chrono::DateTime<chrono::Utc>,
    regions: Vec<Region>,
}

impl RegionCatalog {
    pub fn new(regions: Vec<Region>) -> Result<Self, RegionError> {
        validate_regions(&regions)?;

        Ok(Self {
            started_at: chrono::Utc::now(),
            regions,
        })
    }
}

impl Actor for RegionCatalog {
    type Context = Context<Self>;
}

trace_handler!(RegionCatalog, GetHealth, Result<Health, APIError>);

impl Handler<GetHealth> for RegionCatalog {
    type Result = Result<Health, APIError>;

    fn handle(&mut self, _: GetHealth, _: &mut Self::Context) -> Self::Result {
        Ok(Health {
            ok: true,
            started_at: self.started_at,
        })
    }
}

trace_handler!(RegionCatalog, GetRegions, Result<Vec<Region>, APIError>);

impl Handler<GetRegions> for RegionCatalog {
    type Result = Result<Vec<Region>, APIError>;

    fn handle(&mut self, _: GetRegions, _: &mut Self::Context) -> Self::Result {
        Ok(self.regions.clone())
    }
}

trace_handler!(RegionCatalog, GetRegion, Result<Region, APIError>);

impl Handler<GetRegion> for RegionCatalog {
    type Result = Result<Region, APIError>;

    fn handle(&mut self, msg: GetRegion, _: &mut Self::Context) -> Self::Result {
        self.regions
            .iter()
            .find(|region| region.id() == msg.id)
            .cloned()
            .ok_or_else(|| {
                APIError::new(
                    404,
                    "Not Found",
                    "The region you requested could not be found.",
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_colliding_regions() {
        let result = RegionCatalog::new(vec![
            Region::new("Europe", "https://eu.example.com/"),
            Region::new("EUROPE!", "https://eu2.example.com/"),
        ]);
        assert!(matches!(result, Err(RegionError::DuplicateId { .. })));

        let result = RegionCatalog::new(vec![Region::new("!!!", "/x")]);
        assert!(matches!(result, Err(RegionError::EmptyId(_))));
    }

    #[actix_rt::test]
    async fn get_region_by_id() {
        let catalog = RegionCatalog::new(vec![
            Region::new("Europe", "https://eu.example.com/"),
            Region::new("Europe West", "https://euw.example.com/"),
        ])
        .expect("distinct regions should be accepted")
        .start();

        let region = catalog
            .send(GetRegion {
                id: "europewest".to_string(),
            })
            .await
            .expect("the actor should be run")
            .expect("the region should be found");
        assert_eq!(region.url, "https://euw.example.com/");
    }
}
