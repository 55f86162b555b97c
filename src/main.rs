use clap::Parser;
use colored::Colorize;
use std::process;

use ringba_export::config::{ExportConfig, DEFAULT_API_URL};
use ringba_export::export::RingbaExporter;
use ringba_export::logging;

#[derive(Parser)]
#[command(name = "ringba-export")]
#[command(about = "Export Ringba account data (publishers, buyers, pingtrees and targets) to JSON and CSV")]
#[command(version = "1.0.0")]
struct Cli {
    /// Ringba account ID (required)
    #[arg(short = 'a', long = "account-id", value_name = "ID")]
    account_id: Option<String>,

    /// Ringba API key (required)
    #[arg(short = 'k', long = "api-key", value_name = "KEY")]
    api_key: Option<String>,

    /// Ringba API base URL
    #[arg(long = "api-url", value_name = "URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() {
    logging::init_logging();

    let cli = Cli::parse();

    // The required values are checked by hand: a missing one must exit with
    // status 1 and a single combined message, where clap's own
    // required-argument handling would exit with status 2.
    let (account_id, api_key) = match (cli.account_id, cli.api_key) {
        (Some(account_id), Some(api_key)) => (account_id, api_key),
        _ => {
            eprintln!("Error: --account-id (-a) and --api-key (-k) are required");
            eprintln!("Run with --help for usage information");
            process::exit(1);
        }
    };

    let mut config = ExportConfig::new(account_id, api_key);
    config.api_url = cli.api_url;

    println!("{}", "Exporting Ringba data...".bold());

    let exporter = RingbaExporter::new(&config);
    match exporter.run().await {
        Ok(()) => println!("{}", "Export complete!".green()),
        Err(e) => {
            eprintln!("Export failed: {e:#}");
            process::exit(1);
        }
    }
}
