use actix_web::web;

mod get_region;
mod get_regions;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_regions::get_regions_v1)
        .service(get_region::get_region_v1);
}
