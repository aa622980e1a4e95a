use tracing::{error, info, warn, Instrument};
use user_registry::{setup_tracing, RegistryConfig, UserCreate, UserSystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting user registry");
    let system = UserSystem::start(RegistryConfig::from_env());
    let client = system.user_client.clone();

    let span = tracing::info_span!("user_creation");
    let (user, admin) = async {
        info!("Creating users");
        let user = client
            .create_user(UserCreate::new("John Doe", "john@test.com", 25))
            .await
            .map_err(|e| e.to_string())?;
        let admin = client
            .create_user(UserCreate::new("Admin User", "admin@test.com", 30).admin(true))
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((user, admin))
    }
    .instrument(span)
    .await?;

    info!(user_id = %user.id, admin_id = %admin.id, "Users created successfully");

    match client.create_user(UserCreate::new("Minor User", "minor@test.com", 17)).await {
        Ok(minor) => error!(user_id = %minor.id, "Underage user was accepted"),
        Err(e) => warn!(error = %e, "Underage user rejected"),
    }

    let span = tracing::info_span!("deactivation");
    async {
        let deactivated = client.deactivate_user(user.id.clone()).await.map_err(|e| e.to_string())?;
        info!(user_id = %user.id, deactivated, "Deactivated regular user");
        let deactivated = client.deactivate_user(admin.id.clone()).await.map_err(|e| e.to_string())?;
        info!(user_id = %admin.id, deactivated, "Attempted admin deactivation");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let report = client.generate_report().await.map_err(|e| e.to_string())?;
    println!("{}", report);

    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
