//! cookiecrumb CLI - market status, market summary and quotes.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use cookiecrumb_lib::prelude::*;
use std::time::Duration;

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "cookiecrumb")]
#[command(about = "Market status, market summary and quotes behind a cookie and crumb handshake", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout: u64,

    /// Override the browser user agent
    #[arg(long, global = true)]
    user_agent: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the cookie, crumb and quote requests step by step and print each response
    Debug {
        /// Symbol used for the test quote request
        #[arg(short, long, default_value = "AAPL")]
        symbol: String,
    },

    /// Fetch quotes for one or more symbols
    Quote {
        /// Ticker symbols (e.g., AAPL MSFT)
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Show trading hours and state of a market
    Status {
        /// Market identifier or region code (e.g., us, gb_market)
        #[arg(short, long, default_value = "us")]
        market: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Show the index summary of a market
    Summary {
        /// Market identifier or region code (e.g., us, gb_market)
        #[arg(short, long, default_value = "us")]
        market: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// List predefined market identifiers
    Markets,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut config = ClientConfig::default().with_timeout(Duration::from_secs(cli.timeout));
    if let Some(user_agent) = cli.user_agent {
        config = config.with_user_agent(user_agent);
    }

    match command {
        Commands::Debug { symbol } => commands::debug::debug(config, &symbol).await,
        Commands::Quote { symbols, format } => {
            commands::quote::quote(config, &symbols, format).await
        }
        Commands::Status { market, format } => {
            commands::status::status(config, &market, format).await
        }
        Commands::Summary { market, format } => {
            commands::summary::summary(config, &market, format).await
        }
        Commands::Markets => commands::markets::list_markets(),
    }
}
