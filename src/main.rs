extern crate actix_web;
extern crate chrono;
#[macro_use]
extern crate serde;
extern crate serde_json;

use actix_cors::Cors;
use clap::Parser;
use tracing_batteries::{prelude::*, OpenTelemetry, Sentry, Session};

#[macro_use]
mod macros;

mod api;
mod models;
mod navigation;
mod store;
mod telemetry;
mod utils;

use actix_web::{App, HttpServer};
use models::Region;
use telemetry::TracingLogger;

/// Citation slugs and region navigation for your documentation site(s).
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The port to listen for incoming requests on.
    #[arg(short, long, default_value_t = 8000, env = "PORT")]
    port: u16,

    /// The regions offered by the region selector, as `NAME=URL` pairs.
    ///
    /// May be passed multiple times, or provided as a semicolon separated list
    /// through the `REGIONS` environment variable. Any `;` within a URL must be
    /// percent-encoded as `%3B`. The order given here is the order in which the
    /// regions are presented.
    #[arg(short, long = "region", env = "REGIONS", value_delimiter = ';')]
    regions: Vec<Region>,

    /// The name of the service which will be reported to OpenTelemetry endpoints.
    #[arg(long, env = "SERVICE_NAME", default_value = "cite-web")]
    service_name: String,

    /// The Sentry DSN to use for error reporting.
    #[arg(long, env = "SENTRY_DSN")]
    sentry_dsn: Option<String>,

    /// The environment to report to Sentry.
    #[arg(long, env = "SENTRY_ENVIRONMENT")]
    sentry_environment: Option<String>,
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let mut session = Session::new(args.service_name, version!("v"));
    if let Some(dsn) = args.sentry_dsn {
        session = session.with_battery(Sentry::new((
            dsn,
            sentry::ClientOptions {
                environment: args.sentry_environment.map(|v| v.into()),
                ..Default::default()
            },
        )));
    }
    let session = session.with_battery(OpenTelemetry::new(""));

    if args.regions.is_empty() {
        warn!("No regions were configured, the region selector will be empty");
    }

    let state = models::GlobalState::new(args.regions).map_err(|e| {
        eprintln!("Failed to load the configured regions: {e}");
        session.record_error(&e);

        std::io::ErrorKind::InvalidInput
    })?;
    let port = args.port;

    info!("Starting server on :{}", port);
    let result = HttpServer::new(move || {
        App::new()
            .app_data(actix_web::web::Data::new(state.clone()))
            .wrap(TracingLogger)
            .wrap(Cors::default().allow_any_origin().send_wildcard())
            .configure(api::configure)
    })
    .bind(format!("0.0.0.0:{}", port))?
    .run()
    .await
    .map_err(|err| {
        error!("The server exited unexpectedly: {}", err);
        sentry::capture_event(sentry::protocol::Event {
            message: Some(format!("Server Exited Unexpectedly: {}", err)),
            level: sentry::protocol::Level::Fatal,
            ..Default::default()
        });

        err
    });

    session.shutdown();
    result
}
