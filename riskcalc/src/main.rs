//! Riskcalc
//!
//! Computes stop-loss and take-profit levels from entry price, capital, risk
//! and a risk:reward ratio.
//!
//! # Usage
//!
//! ```bash
//! # Fixed risk of $5 on $100 at 0.7983, ratio 1:2
//! cargo run -p riskcalc -- -e 0.7983 -c 100 -r 5 -x 2
//!
//! # 1.3% of capital, JSON output
//! cargo run -p riskcalc -- -e 100 -c 1000 -r 1.3 -t percent -x 2.7 --format json
//! ```
//!
//! # Environment Variables
//!
//! - `RISKCALC_VALIDATION`: strict or presence-only (default: strict)
//! - `RISKCALC_RISK_TYPE`: fixed or percent (default: fixed)
//! - `RISKCALC_OUTPUT`: text or json (default: text)
//! - `RISKCALC_CURRENCY_SYMBOL`: currency prefix in text output (default: $)
//! - `RISKCALC_LOG_FORMAT`: pretty or json (default: pretty)

use clap::Parser;
use riskcalc::{Cli, LogFormat};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration (flags take precedence over the environment)
    let config = cli.load_config()?;

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "warn" };
    let json_logs = config.output.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(json_logs.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json_logs).then(|| fmt::layer().with_writer(std::io::stderr)))
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("riskcalc={}", level).parse()?)
                .add_directive(format!("riskcalc_engine={}", level).parse()?),
        )
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        validation = %config.validation,
        format = %config.output.format,
        "Riskcalc"
    );

    let output = riskcalc::run(&cli, &config)?;
    println!("{}", output);

    Ok(())
}
