use crate::cli::actions::Action;
use crate::hash_current_passwords;
use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use url::Url;

/// Handle the upgrade action
pub async fn handle(action: Action) -> Result<()> {
    let Action::Upgrade { dsn, table } = action;

    // Reject obviously wrong DSNs before opening a pool.
    let url = Url::parse(&dsn).context("invalid database DSN")?;
    if url.scheme() != "postgres" && url.scheme() != "postgresql" {
        return Err(anyhow::anyhow!("unsupported DSN scheme: {}", url.scheme()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&dsn)
        .await
        .context("failed to connect to the database")?;

    let upgraded = hash_current_passwords(&pool, &table)
        .await
        .context("failed to hash stored passwords")?;

    if upgraded == 0 {
        info!("all passwords are already hashed");
    } else {
        info!(upgraded, "hashed plaintext passwords in place");
    }

    Ok(())
}
