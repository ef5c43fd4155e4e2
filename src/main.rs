use std::process::ExitCode;

use clap::{Parser, Subcommand};
use insightflow::dashboard;
use insightflow::gateway::{GatewayClient, GatewayConfig, GatewayError, MarketIntel};
use insightflow::render;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl CliError {
    /// 2 for startup configuration problems, 1 for anything else.
    fn exit_code(&self) -> u8 {
        match self {
            Self::Gateway(e) if e.is_config() => 2,
            _ => 1,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "insightflow", about = "Crypto market intelligence terminal backed by an n8n webhook")]
struct Cli {
    /// Print the normalized response as JSON instead of a text report.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pre-market context: regime, fear & greed, BTC dominance.
    Quant,
    /// Narrative radar.
    Narrative,
    /// Quant context and narrative radar together.
    Sync,
    /// Fundamental and tokenomics audit of one coin.
    DeepDive {
        /// Project or coin name, e.g. "Solana".
        query: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "insightflow: aborted");
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = GatewayConfig::from_env()?;
    let client = GatewayClient::new(config)?;
    tracing::info!(host = client.endpoint().host_str().unwrap_or("-"), "gateway configured");

    let (output, failed) = match &cli.command {
        Command::Quant => {
            let envelope = client.fetch_quant_context().await;
            (present(cli.json, envelope.to_value(), || render::render_quant(&envelope))?, envelope.is_error())
        }
        Command::Narrative => {
            let envelope = client.fetch_narrative_trends().await;
            (present(cli.json, envelope.to_value(), || render::render_narrative(&envelope))?, envelope.is_error())
        }
        Command::Sync => {
            let snapshot = dashboard::sync_market_data(&client).await;
            (present(cli.json, snapshot.to_value(), || render::render_snapshot(&snapshot))?, snapshot.has_errors())
        }
        Command::DeepDive { query } => {
            let envelope = dashboard::analyze_coin(&client, query).await;
            (
                present(cli.json, envelope.to_value(), || render::render_deep_dive(&envelope, query))?,
                envelope.is_error(),
            )
        }
    };

    println!("{output}");
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn present(json: bool, value: Value, text: impl FnOnce() -> String) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string_pretty(&value)?)
    } else {
        Ok(text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_exit_with_2() {
        let err = CliError::from(GatewayError::MissingEndpoint { var: "N8N_CRYPTO_WEBHOOK_URL".into() });
        assert_eq!(err.exit_code(), 2);
        let err = CliError::from(GatewayError::ConfigParse("bad url".into()));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn other_errors_exit_with_1() {
        let err = CliError::from(GatewayError::Connection("refused".into()));
        assert_eq!(err.exit_code(), 1);
        let json_err = serde_json::from_str::<Value>("{").unwrap_err();
        assert_eq!(CliError::from(json_err).exit_code(), 1);
    }
}
