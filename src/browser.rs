use crate::pathsearch;
use anyhow::{bail, Context, Result};
use log::info;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

const MACOS_CHROME: &str = "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome";

/// Probed in order on platforms without a fixed install path.
const SEARCH_CANDIDATES: &[&str] = &["chromium-browser", "chromium", "google-chrome"];

enum BrowserLocation {
    Fixed(&'static str),
    Search(&'static [&'static str]),
}

fn location_for(os: &str) -> BrowserLocation {
    if os == "macos" {
        BrowserLocation::Fixed(MACOS_CHROME)
    } else {
        BrowserLocation::Search(SEARCH_CANDIDATES)
    }
}

/// Resolve a Chrome/Chromium executable for the current platform.
pub fn resolve() -> Result<PathBuf> {
    match location_for(std::env::consts::OS) {
        BrowserLocation::Fixed(path) => Ok(PathBuf::from(path)),
        BrowserLocation::Search(candidates) => {
            let path_var = std::env::var("PATH").ok();
            search(candidates, path_var.as_deref())
        }
    }
}

fn search(candidates: &[&str], path_var: Option<&str>) -> Result<PathBuf> {
    for name in candidates {
        if let Some(path) = pathsearch::find_in(name, path_var) {
            return Ok(path);
        }
    }
    bail!(
        "could not find a chromium browser. searched for {:?}",
        candidates
    )
}

/// Browser argv: service URL plus the SOCKS proxy flags. Hostname
/// resolution is mapped away from the local network so DNS goes through
/// the proxy, and session data lands in a scratch profile directory.
/// The flag shapes are part of the external contract with Chrome.
pub fn command_args(service_port: u16, local_port: &str) -> Vec<String> {
    vec![
        format!("http://localhost:{}", service_port),
        format!("--proxy-server=socks5://localhost:{}", local_port),
        "--host-resolver-rules=MAP * 0.0.0.0 , EXCLUDE localhost".to_string(),
        "--user-data-dir=/tmp/".to_string(),
    ]
}

/// Fire-and-forget launch; the browser outlives this process. If this
/// fails the tunnel stays up and is the user's to tear down.
pub fn launch(browser: &Path, service_port: u16, local_port: &str) -> Result<()> {
    info!(
        "[dpconnect] launching {} against http://localhost:{}",
        browser.display(),
        service_port
    );
    Command::new(browser)
        .args(command_args(service_port, local_port))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to launch browser {}", browser.display()))?;
    Ok(())
}
