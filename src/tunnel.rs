use anyhow::{bail, Context, Result};
use log::info;
use std::process::Stdio;
use tokio::process::Command;

/// gcloud argv for a background SOCKS tunnel to the cluster master.
/// The flag shapes are part of the external contract with gcloud/ssh
/// and must not be reworded.
pub fn command_args(cluster: &str, zone: &str, local_port: &str) -> Vec<String> {
    vec![
        "compute".to_string(),
        "ssh".to_string(),
        format!("{}-m", cluster),
        format!("--zone={}", zone),
        format!("--ssh-flag=-D {}", local_port),
        "--ssh-flag=-N".to_string(),
        "--ssh-flag=-f".to_string(),
        "--ssh-flag=-n".to_string(),
    ]
}

/// Open the tunnel and wait for gcloud's setup phase to finish. The ssh
/// process itself forks into the background (-f), so a successful exit
/// here means the local SOCKS endpoint is up.
pub async fn open(cluster: &str, zone: &str, local_port: &str) -> Result<()> {
    info!(
        "[dpconnect] opening SOCKS tunnel to {}-m (zone={}, local port {})",
        cluster, zone, local_port
    );
    let status = Command::new("gcloud")
        .args(command_args(cluster, zone, local_port))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .context("failed to run gcloud compute ssh")?;
    if !status.success() {
        bail!("gcloud compute ssh exited with status {}", status);
    }
    info!("[dpconnect] tunnel established on localhost:{}", local_port);
    Ok(())
}
