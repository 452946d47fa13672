use actix_web::web;

mod get_index;
mod select_region;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_index::get_index)
        .service(select_region::select_region);
}
