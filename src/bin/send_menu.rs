//! Posts today's menu to the incoming webhook, meant to be run from cron.
//!
//! `--dry-run` prints the message instead of posting it, `--json` prints the
//! resolved menu as json. Exits with status 1 when anything fails.
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::{env, process::ExitCode, sync::Arc};

use cau_menu::{
    format_menu_message, render::ChromeFactory, webhook::WebhookSender, Config, MenuResolver,
};
use chrono::{Local, NaiveDate};

#[derive(Debug, Default)]
struct Args {
    dry_run: bool,
    json: bool,
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Self::default();
        for arg in args {
            match arg.as_str() {
                "--dry-run" => parsed.dry_run = true,
                "--json" => parsed.json = true,
                other => return Err(format!("unknown argument `{other}`")),
            }
        }
        Ok(parsed)
    }
}

/// Resolves the menu of `date` and sends or prints it.
async fn run(
    args: Args,
    config: Arc<Config>,
    date: NaiveDate,
) -> Result<(), Box<dyn std::error::Error>> {
    let webhook_url = match (&config.webhook_url, args.dry_run || args.json) {
        (Some(url), _) => Some(url.clone()),
        (None, true) => None,
        (None, false) => return Err("SLACK_WEBHOOK_URL is not set".into()),
    };

    let resolver = MenuResolver::new(Arc::clone(&config), ChromeFactory::from_config(&config));
    let snapshot = resolver.resolve(date).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }
    let message = format_menu_message(&snapshot);
    match webhook_url {
        Some(url) if !args.dry_run => WebhookSender::new(url).send(&message).await?,
        _ => println!("{message}"),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\nusage: send_menu [--dry-run] [--json]");
            return ExitCode::FAILURE;
        }
    };
    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            log::error!("bad configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    match run(args, config, Local::now().date_naive()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("sending the menu failed: {e}");
            ExitCode::FAILURE
        }
    }
}
