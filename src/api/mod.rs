//! REST API server.

mod error;
pub mod routes;
mod state;
pub mod static_assets;
pub mod timing;
mod v1;


use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::{Router, middleware};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::SqliteDatabase;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// Environment variable overriding the web root.
pub const WEB_ROOT_ENV: &str = "TASKPAD_WEB_ROOT";

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Number of `-v` flags given on the command line
    pub verbosity: u8,
    /// Serve OpenAPI documentation at `/docs`
    pub enable_docs: bool,
    /// Directory holding `index.html` and `static/`
    pub web_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            verbosity: 0,
            enable_docs: false,
            web_root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Defaults overlaid with environment variables.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = env::var(WEB_ROOT_ENV) {
            config.web_root = PathBuf::from(dir);
        }
        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_docs(mut self, enable_docs: bool) -> Self {
        self.enable_docs = enable_docs;
        self
    }

    pub fn with_web_root(mut self, web_root: PathBuf) -> Self {
        self.web_root = web_root;
        self
    }
}

/// Default log filter for a given `-v` count.
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("taskpad={level},tower_http={level}")
}

/// Initialize tracing subscriber with env filter
fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbosity).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Full application: API, landing page, static assets, timing and tracing.
pub fn app(state: AppState, config: &Config) -> Router {
    routes::create_router(state, config.enable_docs)
        .merge(static_assets::router(&config.web_root))
        .layer(middleware::from_fn(timing::process_time))
        .layer(TraceLayer::new_for_http())
}

/// Run the API server with the given configuration
pub async fn run(config: Config, db: SqliteDatabase) -> std::io::Result<()> {
    init_tracing(config.verbosity);

    let app = app(AppState::new(db), &config);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await
}
