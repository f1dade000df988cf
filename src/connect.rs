use crate::browser;
use crate::cli::Cli;
use crate::tunnel;
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

fn init_logger(level_arg: &str) {
    let mut builder = env_logger::Builder::new();
    builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    builder.parse_filters(level_arg);
    let _ = builder.try_init();
}

pub async fn run(args: Cli) -> Result<()> {
    init_logger(&args.log_level);
    println!("Connecting to cluster '{}'...", args.name);

    let service_port = args.service.remote_port();
    info!(
        "[dpconnect] service {} on master port {}",
        args.service.canonical_name(),
        service_port
    );

    tunnel::open(&args.name, &args.zone, &args.port)
        .await
        .with_context(|| format!("failed to open tunnel to cluster `{}`", args.name))?;

    let browser_path = browser::resolve()?;
    browser::launch(&browser_path, service_port, &args.port)?;
    Ok(())
}
