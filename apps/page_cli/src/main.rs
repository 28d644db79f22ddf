use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use page_core::{
    initialize,
    surface::{KeyEvent, SubmitEvent},
    GateOutcome, HttpContactTransport,
};
use shared::domain::SubmitResult;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod console;

use config::{load_settings, DEFAULT_CONFIG_FILE};
use console::ConsolePage;

#[derive(Parser, Debug)]
#[command(about = "Drive the contact page controllers from a terminal")]
struct Args {
    /// Site origin; overrides page.toml and environment.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit the contact form once.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        /// Additional form field as name=value.
        #[arg(long = "field", value_parser = parse_field)]
        extra: Vec<(String, String)>,
    },
    /// Answer the modal question.
    Gate {
        answer: Option<String>,
        /// Confirm with the Enter key instead of the submit button.
        #[arg(long)]
        enter: bool,
        /// Simulate a page where the modal library failed to load.
        #[arg(long)]
        without_modal_library: bool,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    if name.trim().is_empty() {
        return Err(format!("empty field name in '{raw}'"));
    }
    Ok((name.trim().to_string(), value.to_string()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config);
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    info!(server_url = %settings.server_url, "page settings loaded");

    let transport = HttpContactTransport::with_path(&settings.server_url, &settings.contact_path)
        .with_context(|| format!("invalid server url '{}'", settings.server_url))?;

    let console_page = match &args.command {
        Command::Contact {
            name,
            email,
            message,
            extra,
        } => {
            let mut fields = vec![
                ("name".to_string(), name.clone()),
                ("email".to_string(), email.clone()),
                ("message".to_string(), message.clone()),
            ];
            fields.extend(extra.iter().cloned());
            ConsolePage {
                fields,
                answer: Some(String::new()),
                modal_library: true,
            }
        }
        Command::Gate {
            answer,
            without_modal_library,
            ..
        } => ConsolePage {
            fields: Vec::new(),
            answer: answer.clone(),
            modal_library: !without_modal_library,
        },
    };

    let mut page = initialize(
        console_page.into_capabilities(&settings),
        Arc::new(transport),
    );

    match args.command {
        Command::Contact { .. } => match page.form.on_submit(&mut SubmitEvent::new()).await {
            Some(SubmitResult::Failure(message)) => bail!("contact submission failed: {message}"),
            Some(SubmitResult::Success) | None => Ok(()),
        },
        Command::Gate { enter, .. } => {
            let Some(mut gate) = page.gate else {
                warn!("modal presentation unavailable; gate not installed");
                return Ok(());
            };
            gate.on_shown();
            let outcome = if enter {
                gate.on_keydown(&mut KeyEvent::new("Enter"))
            } else {
                gate.on_click()
            };
            if outcome == Some(GateOutcome::Rejected) {
                info!("gate closed after wrong answer");
            }
            Ok(())
        }
    }
}
