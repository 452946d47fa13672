use actix::Message;
use actix_service::{forward_ready, Service, Transform};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use futures::future::{ready, LocalBoxFuture, Ready};
use tracing_batteries::prelude::*;

/// Wraps an actor message with the span it was sent from, so that the handler
/// runs within the caller's trace.
pub struct TraceMessage<M> {
    pub message: M,
    pub span: tracing::Span,
}

impl<M: Message> Message for TraceMessage<M> {
    type Result = M::Result;
}

pub trait TraceMessageExt: Sized {
    fn trace(self) -> TraceMessage<Self>;
}

impl<M: Message> TraceMessageExt for M {
    fn trace(self) -> TraceMessage<Self> {
        TraceMessage {
            message: self,
            span: tracing::Span::current(),
        }
    }
}

/// Implements `Handler<TraceMessage<M>>` for an actor which already handles `M`.
#[macro_export]
macro_rules! trace_handler {
    ($actor:ty, $msg:ty, $result:ty) => {
        impl actix::Handler<$crate::telemetry::TraceMessage<$msg>> for $actor {
            type Result = $result;

            fn handle(
                &mut self,
                msg: $crate::telemetry::TraceMessage<$msg>,
                ctx: &mut Self::Context,
            ) -> Self::Result {
                let _enter = msg.span.enter();
                <Self as actix::Handler<$msg>>::handle(self, msg.message, ctx)
            }
        }
    };
}

/// Opens a server span for every request and records the response status on it.
pub struct TracingLogger;

impl<S, B> Transform<S, ServiceRequest> for TracingLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Transform = TracingLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TracingLoggerMiddleware { service }))
    }
}

pub struct TracingLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TracingLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let span = tracing::info_span!(
            "http.request",
            otel.kind = "server",
            http.method = %req.method(),
            http.target = %req.path(),
            http.status_code = tracing::field::Empty,
        );

        let fut = span.in_scope(|| self.service.call(req));

        Box::pin(async move {
            let result = tracing::Instrument::instrument(fut, span.clone()).await;

            match &result {
                Ok(response) => {
                    span.record("http.status_code", response.status().as_u16());
                    debug!(parent: &span, "Responded with {}", response.status());
                }
                Err(err) => {
                    span.record("http.status_code", err.as_response_error().status_code().as_u16());
                    error!(parent: &span, "Failed to handle request: {}", err);
                }
            }

            result
        })
    }
}
