use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod context;
mod models;
mod services;
mod utils;

use commands::Outcome;
use config::AppConfig;
use context::AppContext;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("stakesim=info")
            .add_directive("headless_chrome=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap())
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };
    debug!("Loaded configuration: {:?}", config);

    let ctx = AppContext::from_config(config);

    // One-shot mode: run the command given on the command line and exit
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(line) = commands::line_from_args(&args) {
        match commands::handle_message(&ctx, &line).await {
            Ok(Outcome::Reply(text)) => println!("{}", text),
            Ok(_) => {}
            Err(e) => {
                eprintln!("{}", commands::error_reply(&e));
                std::process::exit(1);
            }
        }
        return;
    }

    info!("📈 stakesim ready ({} prices). Type `$help` for commands.", ctx.config.currency.to_uppercase());
    println!("{}", commands::help::execute());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        match commands::handle_message(&ctx, &line).await {
            Ok(Outcome::Reply(text)) => println!("{}\n", text),
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Ignored) => {}
            Err(e) => {
                warn!("Command '{}' failed: {}", line.trim(), e);
                println!("{}\n", commands::error_reply(&e));
            }
        }
        prompt();
    }

    info!("Goodbye");
}
