use std::time::Duration;

use clap::Args;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Connection settings. Without `DATABASE_URL` the standard `PG*` variables are used.
#[derive(Args, Debug, Clone)]
pub struct ConnectArgs {
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(long, env = "CATALOG_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,

    #[arg(long, env = "CATALOG_ACQUIRE_TIMEOUT_SECS", default_value_t = 30)]
    acquire_timeout_secs: u64,

    /// Server-side limit of a single catalog query
    #[arg(long, env = "CATALOG_STATEMENT_TIMEOUT_SECS", default_value_t = 60)]
    statement_timeout_secs: u64,

    /// Create the catalog tables before running the query
    #[arg(long, env = "CATALOG_SETUP_SCHEMA", default_value_t = false)]
    pub setup_schema: bool,
}

pub async fn connect(args: &ConnectArgs) -> anyhow::Result<PgPool> {
    let connect_options = match &args.database_url {
        Some(url) => url.parse::<PgConnectOptions>()?,
        None => PgConnectOptions::new(),
    };
    let statement_timeout = Duration::from_secs(args.statement_timeout_secs);
    let connect_options =
        connect_options.options([("statement_timeout", statement_timeout.as_millis())]);

    Ok(PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(Duration::from_secs(args.acquire_timeout_secs))
        .connect_with(connect_options)
        .await?)
}
