//! Hotel back office server
//!
//! # Overview
//!
//! - **Database** (`db`): SQLite schema for staff, guests, rooms, bookings,
//!   services and payments, with one repository module per table
//! - **Admin** (`admin`): model registry and CRUD intent dispatch for the
//!   scaffolded admin console
//! - **Config** (`core`): environment-driven settings
//!
//! # Layout
//!
//! ```text
//! hotel-server/src/
//! ├── core/          # configuration
//! ├── db/            # pool, migrations, repositories
//! ├── admin/         # registry, model metadata, dispatch
//! └── utils/         # errors, logging, passwords, validation
//! ```

pub mod admin;
pub mod core;
pub mod db;
pub mod utils;

pub use admin::{AdminService, AdminSite, ModelAdmin};
pub use core::Config;
pub use db::DbService;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

use db::repository::employee;

/// Load `.env`, read configuration and start logging
pub fn setup_environment() -> Result<Config, Box<dyn std::error::Error>> {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

/// Open the database, make sure the initial administrator exists and build
/// the admin console backend
pub async fn provision(config: &Config) -> AppResult<AdminService> {
    let db_path = config.database_path();
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::config(format!(
                "Cannot create database directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    let db_path = db_path
        .to_str()
        .ok_or_else(|| AppError::config("Database path is not valid UTF-8"))?;

    let db = DbService::connect(&format!("sqlite:{db_path}"), config.db_max_connections).await?;

    match config.admin_credentials() {
        Some((username, password)) => {
            match employee::ensure_admin(&db.pool, username, password, &config.admin_full_name)
                .await?
            {
                Some(admin) => tracing::info!(id = admin.id, username = %admin.username, "Administrator account created"),
                None => tracing::info!(username, "Administrator account already exists"),
            }
        }
        None => tracing::warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set, skipping administrator provisioning"),
    }

    let site = AdminSite::hotel();
    for meta in site.models() {
        tracing::info!(
            model = meta.model,
            table = meta.table,
            fields = meta.fields.len(),
            "Admin model: {}",
            meta.verbose_name_plural
        );
    }

    Ok(AdminService::new(db.pool, site))
}

pub fn print_banner() {
    println!(
        r#"
  _   _       _       _
 | | | | ___ | |_ ___| |
 | |_| |/ _ \| __/ _ \ |
 |  _  | (_) | ||  __/ |
 |_| |_|\___/ \__\___|_|
    "#
    );
}
