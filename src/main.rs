mod browser;
mod cli;
mod connect;
mod pathsearch;
mod service;
mod tunnel;

#[tokio::main]
async fn main() {
    if let Err(err) = cli::run().await {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
