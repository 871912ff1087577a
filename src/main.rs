use clap::Parser as _;

mod cli;
mod config;
mod gateways;
mod session;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    cli::run(cli::Args::parse()).await
}
