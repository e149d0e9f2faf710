//! Example: Print panel status, devices and open troubles.

use visonic_alarm::{Alarm, ClientConfig};

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

    // Connection and partition state
    let status = alarm.status().await?;
    println!("Panel connected: {}", status.connected);
    println!("Broadband: {} ({})", status.bba_connected(), status.bba_state());
    println!("Cellular:  {} ({})", status.gprs_connected(), status.gprs_state());
    for part in &status.partitions {
        println!(
            "Partition {}: {} (ready={})",
            part.id,
            part.state.as_deref().unwrap_or("-"),
            part.ready
        );
    }

    // Enrolled devices with their classification
    println!();
    for device in alarm.devices().await? {
        println!(
            "Device {} [{}] at {}: {:?}",
            device.id,
            device.subtype,
            device.location.as_deref().unwrap_or("-"),
            device.kind
        );
    }

    // Anything blocking arming
    let troubles = alarm.troubles().await?;
    if !troubles.is_empty() {
        println!();
        for trouble in &troubles {
            println!(
                "Trouble: {} at {} (zone {:?})",
                trouble.trouble_type.as_deref().unwrap_or("-"),
                trouble.location.as_deref().unwrap_or("-"),
                trouble.zone
            );
        }
    }

    Ok(())
}
