use crate::utils::citation_slug;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A destination offered by the region selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub url: String,
}

impl Region {
    pub fn new<N: Into<String>, U: Into<String>>(name: N, url: U) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// The identifier used for this region's option in the selector and in the API.
    pub fn id(&self) -> String {
        citation_slug([Some(self.name.as_str())])
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, url) = s
            .split_once('=')
            .ok_or_else(|| format!("expected a region in the form NAME=URL, got '{s}'"))?;

        let name = name.trim();
        let url = url.trim();
        if name.is_empty() || url.is_empty() {
            return Err(format!(
                "both the name and URL of a region must be provided, got '{s}'"
            ));
        }

        Ok(Region::new(name, url))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.url)
    }
}

/// Raised when the configured regions cannot each be addressed by a distinct id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    EmptyId(String),
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::EmptyId(name) => write!(
                f,
                "the region '{name}' must contain at least one letter or digit to be given an id"
            ),
            RegionError::DuplicateId { id, first, second } => write!(
                f,
                "the regions '{first}' and '{second}' would both use the id '{id}', please rename one of them"
            ),
        }
    }
}

impl std::error::Error for RegionError {}

/// Ensures every region has a non-empty id that no other region shares.
pub fn validate_regions(regions: &[Region]) -> Result<(), RegionError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for region in regions {
        let id = region.id();
        if id.is_empty() {
            return Err(RegionError::EmptyId(region.name.clone()));
        }

        if let Some(first) = seen.get(&id) {
            return Err(RegionError::DuplicateId {
                id,
                first: first.to_string(),
                second: region.name.clone(),
            });
        }

        seen.insert(id, region.name.as_str());
    }

    Ok(())
}

actor_message!(GetRegions() -> Vec<Region>);
actor_message!(GetRegion(id: String) -> Region);

#[derive(Serialize, Deserialize)]
pub struct RegionV1 {
    pub id: String,
    pub name: String,
    pub url: String,
}

json_responder!(RegionV1);

impl From<Region> for RegionV1 {
    fn from(state: Region) -> Self {
        Self {
            id: state.id(),
            name: state.name,
            url: state.url,
        }
    }
}
