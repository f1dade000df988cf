use crate::connect;
use crate::service::{self, Service};
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dpconnect",
    version,
    about = "Open a SOCKS tunnel to a Dataproc cluster master and browse its web UIs"
)]
pub struct Cli {
    /// Cluster name
    pub name: String,
    /// Web service to launch (notebook|nb|spark-ui|ui|spark-ui1|ui1|spark-ui2|ui2|spark-history|hist)
    #[arg(value_parser = service::parse)]
    pub service: Service,
    /// Local port to use for SSH tunnel to master node
    #[arg(long, short, default_value = "10000")]
    pub port: String,
    /// Compute zone for Dataproc cluster
    #[arg(long, short, default_value = "us-central1-b")]
    pub zone: String,
    /// Log level: error, info, debug
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    connect::run(cli).await
}
