use clap::Parser;
use vas_admin_lib::cli::Cli;
use vas_admin_lib::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.command()).await?;
    Ok(())
}
