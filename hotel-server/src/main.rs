use hotel_server::{print_banner, provision, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env, work dir, logging)
    let config = setup_environment()?;

    print_banner();
    tracing::info!(environment = %config.environment, "Hotel server provisioning...");

    // 2. Database, administrator account, admin registry
    let admin = provision(&config).await.inspect_err(|e| {
        tracing::error!(code = %e.code, "Provisioning failed: {}", e.message);
    })?;

    tracing::info!(
        database = %config.database_path().display(),
        models = admin.site().len(),
        "Hotel back office ready"
    );

    Ok(())
}
