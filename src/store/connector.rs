//! Startup-only store connectivity: liveness probing with bounded
//! fixed-delay retries, pool construction, and schema creation.
//!
//! Everything here runs once, serially, before the HTTP listener
//! binds. The database is typically slower to start than this process
//! in a compose deployment, so the probe loop is what keeps startup
//! ordering correct without orchestration-level hooks.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use sqlx::Connection;
use sqlx::postgres::{PgConnection, PgPool, PgPoolOptions};

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Idempotent table definition, run on every process start.
const CREATE_NOTES_TABLE: &str = "CREATE TABLE IF NOT EXISTS notes (\
     id BIGSERIAL PRIMARY KEY, \
     text TEXT NOT NULL, \
     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW())";

/// Blocks until the configured store answers a liveness probe.
///
/// Probes up to `store_connect_attempts` times with a fixed
/// `store_retry_delay_secs` delay between attempts. No exponential
/// backoff, no jitter: the attempt count is small and the dependency
/// startup time is roughly known.
///
/// # Errors
///
/// Returns [`ServiceError::Unavailable`] once the attempt budget is
/// exhausted. The caller must treat this as fatal and exit without
/// binding a listening socket.
pub async fn wait_for_store(config: &ServiceConfig) -> Result<(), ServiceError> {
    let url = config.database_url();
    wait_for_availability(
        config.store_connect_attempts,
        Duration::from_secs(config.store_retry_delay_secs),
        || probe(&url),
    )
    .await
}

/// Retry loop over an arbitrary liveness probe.
///
/// Returns as soon as any attempt succeeds; sleeps the fixed `delay`
/// between failed attempts. Generic over the probe so tests can
/// substitute one without a running database.
///
/// # Errors
///
/// Returns [`ServiceError::Unavailable`] after `max_attempts` failed
/// probes.
pub async fn wait_for_availability<F, Fut, E>(
    max_attempts: u32,
    delay: Duration,
    mut probe: F,
) -> Result<(), ServiceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    for attempt in 1..=max_attempts {
        match probe().await {
            Ok(()) => {
                tracing::info!(attempt, "store is available");
                return Ok(());
            }
            Err(e) => {
                tracing::warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    "store not ready, retrying"
                );
                if attempt < max_attempts {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    Err(ServiceError::Unavailable {
        attempts: max_attempts,
    })
}

/// One liveness probe: open a single connection, run a trivial
/// round-trip query, close it. No state survives the probe; the real
/// pool is built separately after availability is confirmed.
async fn probe(url: &str) -> Result<(), sqlx::Error> {
    let mut conn = PgConnection::connect(url).await?;
    sqlx::query("SELECT 1").execute(&mut conn).await?;
    conn.close().await?;
    Ok(())
}

/// Builds the process-wide connection pool.
///
/// Fixed capacity; callers queue for a connection when the pool is
/// exhausted (sqlx's default acquire behavior) rather than failing
/// fast. Created exactly once at startup and owned by the process
/// root for the remaining lifetime of the process.
///
/// # Errors
///
/// Returns [`ServiceError::Store`] if the pool cannot be established.
pub async fn build_pool(config: &ServiceConfig) -> Result<PgPool, ServiceError> {
    PgPoolOptions::new()
        .max_connections(config.store_max_connections)
        .connect(&config.database_url())
        .await
        .map_err(|e| ServiceError::Store(e.to_string()))
}

/// Ensures the `notes` table exists.
///
/// Idempotent and run unconditionally after every successful startup
/// connection sequence.
///
/// # Errors
///
/// Returns [`ServiceError::Store`] on failure; the caller must treat
/// this as fatal rather than serve without a guaranteed-present table.
pub async fn init_schema(pool: &PgPool) -> Result<(), ServiceError> {
    sqlx::query(CREATE_NOTES_TABLE)
        .execute(pool)
        .await
        .map_err(|e| ServiceError::Store(e.to_string()))?;
    tracing::info!("notes table ensured");
    Ok(())
}
