use actix_web::web;

mod create_name;
mod create_slug;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_slug::create_slug_v1)
        .service(create_name::create_name_v1);
}
