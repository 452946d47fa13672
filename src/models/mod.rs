#[macro_use]
mod macros;

mod health;
mod region;
mod slug;

use actix::prelude::*;

pub use health::*;
pub use region::*;
pub use slug::*;

#[derive(Clone)]
pub struct GlobalState {
    pub store: Addr<crate::store::Store>,
}

impl GlobalState {
    pub fn new(regions: Vec<Region>) -> Result<Self, RegionError> {
        Ok(Self {
            store: crate::store::Store::new(regions)?.start(),
        })
    }
}
