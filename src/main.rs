use tracing::{info, warn, Instrument};

use registry_recipe::{setup_tracing, Calculator, RegistrySystem, SystemConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SystemConfig::default();
    setup_tracing(&config);

    info!("Starting registry demo");

    let system = RegistrySystem::new(&config);
    let client = system.client.clone();

    let span = tracing::info_span!("user_registration");
    async {
        info!("Registering demo users");
        client
            .register("alice@example.com".into(), "wonderland".into(), "Alice".into())
            .await?;
        let again = client
            .register("alice@example.com".into(), "x".into(), "Impostor".into())
            .await?;
        info!(registered = again, "Duplicate registration attempt");
        client
            .register("bob@example.com".into(), "builder".into(), "Bob".into())
            .await
    }
    .instrument(span)
    .await?;

    if let Err(e) = client
        .register("not-an-email".into(), "12345".into(), "Nobody".into())
        .await
    {
        warn!(error = %e, "Registration rejected");
    }

    let span = tracing::info_span!("credentials");
    async {
        match client.authenticate("alice@example.com".into(), "wonderland".into()).await? {
            Some(user) => info!(user = %user, "Authenticated"),
            None => warn!("Authentication failed"),
        }
        let changed = client
            .change_password("alice@example.com".into(), "wonderland".into(), "looking-glass".into())
            .await?;
        info!(changed, "Password change");
        client.update_name("bob@example.com".into(), "Bob the Builder".into()).await
    }
    .instrument(span)
    .await?;

    let stats = client.stats().await?;
    info!(%stats, "Registry state");

    let calc = Calculator::new();
    let quotient = calc.divide(7.0, 2.0)?;
    let root = calc.sqrt(9.0)?;
    info!(quotient, root, power = calc.power(2.0, -2), "Calculator results");
    if let Err(e) = calc.divide(10.0, 0.0) {
        warn!(error = %e, "10 / 0");
    }
    info!(even = calc.is_even(-2), "is_even(-2)");

    drop(client);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
