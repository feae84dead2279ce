//! WXD CLI - Command line tool for the weather dashboard API.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wxd-cli",
    version,
    about = "Weekly weather and solar yield from the dashboard API"
)]
struct Cli {
    #[command(subcommand)]
    command: wxd_cmd::Command,

    #[command(flatten)]
    api: wxd_cmd::ApiArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using weather API at {:?}", cli.api.weather_api_url);
    wxd_cmd::run(cli.command, cli.api).await
}
