use anyhow::Result;
use ghstats::cli::{self, Parsed, report_parse_errors};
use ghstats::commands::stats;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match cli::parse_from(std::env::args_os()) {
        Parsed::Options(options) => stats(&options).await?,
        Parsed::Display(help) => help.exit(),
        Parsed::Failed(failure) => {
            report_parse_errors(&failure, &mut std::io::stdout(), &mut std::io::stderr())?
        }
    }
    Ok(())
}
