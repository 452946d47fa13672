/// Declares an actor message whose handler answers with `Result<$result, APIError>`.
macro_rules! actor_message {
    ($name:ident($($field:ident: $ty:ty),*) -> $result:ty) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            $(pub $field: $ty),*
        }

        impl actix::Message for $name {
            type Result = Result<$result, $crate::api::APIError>;
        }
    };
}

/// Renders the type as a `200 OK` JSON response.
macro_rules! json_responder {
    ($name:ty) => {
        impl actix_web::Responder for $name {
            type Body = actix_web::body::BoxBody;

            fn respond_to(self, _req: &actix_web::HttpRequest) -> actix_web::HttpResponse<Self::Body> {
                actix_web::HttpResponse::Ok()
                    .content_type("application/json; charset=utf-8")
                    .json(&self)
            }
        }
    };
}
