#[macro_use]
mod macros;

mod error;
mod health;
mod navigate;
mod regions;
mod slugs;

#[cfg(test)]
pub mod test;

use actix_web::web;

pub use error::APIError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure(cfg);
    navigate::configure(cfg);
    regions::configure(cfg);
    slugs::configure(cfg);
}
