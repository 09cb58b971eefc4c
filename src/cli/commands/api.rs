//! API server command - opens the database and starts the REST API

use std::net::IpAddr;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};

use crate::api::{self, Config};
use crate::db::SqliteDatabase;
use crate::paths::resolve_db_path;

/// Run the API server
pub async fn run(
    host: IpAddr,
    port: u16,
    db: Option<PathBuf>,
    web_root: Option<PathBuf>,
    verbosity: u8,
    enable_docs: bool,
) -> Result<()> {
    let db_path = resolve_db_path(db);

    println!("Opening database at {:?}", db_path);

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).into_diagnostic()?;
    }

    let db = SqliteDatabase::open(&db_path).await?;

    // Create tables before starting the server
    db.migrate().await?;
    println!("Database ready");

    let mut config = Config::new()
        .with_host(host)
        .with_port(port)
        .with_verbosity(verbosity)
        .with_docs(enable_docs);
    if let Some(dir) = web_root {
        config = config.with_web_root(dir);
    }

    // Print startup banner before logging is initialized
    println!();
    println!("taskpad API server starting...");
    println!("   API:      http://{}:{}/api", host, port);
    println!("   Frontend: http://{}:{}/", host, port);
    if enable_docs {
        println!("   Docs:     http://{}:{}/docs", host, port);
    }
    println!();
    println!("   Database: {}", db_path.display());
    println!("   Web root: {}", config.web_root.display());
    println!();

    api::run(config, db).await.into_diagnostic()?;

    Ok(())
}
