use anyhow::Result;
use clap::{Parser, Subcommand};
use rainwatch_core::{
    AlertConfig, AlertRunner, ForecastProvider, NoopAlertSender, RunOutcome,
    model::ForecastRequest,
    provider::provider_from_config,
    rain,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "rainwatch", version, about = "Rain alert job")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the forecast and mail a rain alert if rain is expected.
    Run {
        /// Evaluate the forecast but log instead of sending mail.
        #[arg(long)]
        dry_run: bool,
    },

    /// Fetch the forecast and print the decision without sending anything.
    Check,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Run { dry_run } => run_alert(dry_run).await,
            Command::Check => check_forecast().await,
        }
    }
}

async fn run_alert(dry_run: bool) -> Result<()> {
    let runner = if dry_run {
        let config = AlertConfig::from_env()?;
        let provider = provider_from_config(&config);
        AlertRunner::with_parts(config, provider, Box::new(NoopAlertSender::new()))
    } else {
        AlertRunner::from_env()?
    };

    match runner.run().await? {
        RunOutcome::AlertSent => println!("Rain alert sent."),
        RunOutcome::NoAlertNeeded => println!("No rain expected; no alert needed."),
    }

    Ok(())
}

async fn check_forecast() -> Result<()> {
    let config = AlertConfig::from_env()?;
    let provider = provider_from_config(&config);

    let request = ForecastRequest {
        latitude: config.latitude,
        longitude: config.longitude,
        periods: config.forecast_periods,
    };
    let forecast = provider.fetch_forecast(&request).await?;

    for period in &forecast.periods {
        let when = period
            .at
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "(no timestamp)".to_string());

        match &period.condition {
            Some(c) => println!("{when}  {} (code {})", c.description, c.id),
            None => println!("{when}  (no condition data)"),
        }
    }

    if rain::expects_rain(&forecast) {
        println!("Rain expected - bring an umbrella.");
    } else {
        println!("No rain expected.");
    }

    Ok(())
}
