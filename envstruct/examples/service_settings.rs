//! Loads service settings from `SVC_*` variables and reports them.
//!
//! Run with `RUST_LOG=envstruct=trace` to see how each field was resolved:
//!
//! ```text
//! SVC_PORT=9000 SVC_ALLOWED_ORIGINS=a.example,b.example \
//!     RUST_LOG=envstruct=trace cargo run -p envstruct --example service_settings
//! ```

use envstruct::{EnvConfig, describe, load_envs};
use tracing_subscriber::EnvFilter;

#[derive(Default, EnvConfig)]
#[envstruct(prefix = "svc")]
struct ServiceSettings {
    #[envstruct(default = "127.0.0.1")]
    bind_address: String,
    #[envstruct(default = "8080")]
    port: u16,
    #[envstruct(default = "4")]
    worker_threads: usize,
    allowed_origins: Vec<String>,
    #[envstruct(default = "yes")]
    compress_responses: bool,
    #[envstruct(default = "2.5")]
    request_timeout_secs: f64,
    #[envstruct(skip)]
    started_by: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    for field in describe::<ServiceSettings>(ServiceSettings::prefix()) {
        tracing::info!(
            field = field.name,
            key = %field.key,
            kind = %field.kind,
            default = field.default.unwrap_or("-"),
            "configurable field"
        );
    }

    let settings: ServiceSettings = load_envs();
    tracing::info!(
        bind = %format_args!("{}:{}", settings.bind_address, settings.port),
        workers = settings.worker_threads,
        origins = ?settings.allowed_origins,
        compress = settings.compress_responses,
        timeout_secs = settings.request_timeout_secs,
        started_by = %settings.started_by,
        "loaded service settings"
    );
}
