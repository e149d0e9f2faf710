//! Example: Arm and disarm the whole system.

use visonic_alarm::{Alarm, ArmState, ClientConfig, ALL_PARTITIONS};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ClientConfig::builder()
        .hostname("visonic.tycomonitor.com")
        .app_id("00000000-0000-0000-0000-000000000001")
        .build();

    let mut alarm = Alarm::new(&config)?;
    alarm.authenticate("user@example.com", "password").await?;
    alarm.panel_login("123ABC", "1234").await?;

    // Arm in home (stay) mode
    println!("Arming (home)...");
    let token = alarm.set_state(ALL_PARTITIONS, ArmState::Home).await?;
    println!("Process token: {token}");

    // The command runs asynchronously on the server; look at it once after
    // a short grace period
    tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
    for process in alarm.process_status(&token).await? {
        println!(
            "Process {}: {}",
            process.token,
            process.status.as_deref().unwrap_or("-")
        );
    }

    // Disarm again
    println!("\nDisarming...");
    match alarm.disarm(ALL_PARTITIONS).await {
        Ok(token) => println!("Disarm process: {token}"),
        Err(e) => println!("Error disarming: {e}"),
    }

    Ok(())
}
