use custform_core::config::{AppConfig, LoadOptions, StorageBackend};
use custform_db::{connect_with_settings, migrations};
use tracing::info;

use crate::commands::{CommandResult, EXIT_CONFIG, EXIT_STORAGE};

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "migrate",
                "config_validation",
                format!("configuration issue: {error}"),
                EXIT_CONFIG,
            );
        }
    };

    if config.storage.backend == StorageBackend::Memory {
        return CommandResult::success("migrate", "memory backend has no migrations");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "migrate",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                1,
            );
        }
    };

    let storage = &config.storage;
    let max_connections = if storage.is_in_memory() { 1 } else { storage.max_connections };
    let result = runtime.block_on(async {
        let pool = connect_with_settings(&storage.url, max_connections, storage.timeout_secs)
            .await
            .map_err(|error| ("db_connectivity", error.to_string(), EXIT_STORAGE))?;
        migrations::run_pending(&pool)
            .await
            .map_err(|error| ("migration", error.to_string(), EXIT_STORAGE))?;
        pool.close().await;
        Ok::<(), (&'static str, String, u8)>(())
    });

    match result {
        Ok(()) => {
            info!(
                event_name = "storage.migrations.applied",
                database_url = %storage.url,
                "applied pending migrations"
            );
            CommandResult::success("migrate", "applied pending migrations")
        }
        Err((error_class, message, exit_code)) => {
            CommandResult::failure("migrate", error_class, message, exit_code)
        }
    }
}
