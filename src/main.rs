//! Emotion Router
//!
//! Interactive front end for the emotion routing engine: route a selection
//! of up to three emotions, search the vocabulary, read level explanations
//! and keep a short "recently felt" history.
//!
//! Any arguments are run as a single command, e.g.
//! `emotion_router route burned out, anxious`.

use anyhow::Result;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{error, info};

use emotion_router::cli::{Command, CommandRunner, HELP};
use emotion_router::config::{ConfigManager, RouterConfig};
use emotion_router::explanations::ExplanationCatalog;
use emotion_router::history::{EmotionHistory, HistoryStore};
use emotion_router::router::EmotionRouter;
use emotion_router::taxonomy::Taxonomy;
use emotion_router::utils::init_logging;

/// Config file read from the working directory
const CONFIG_FILE: &str = "emotion_router.json";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Start with the default filter; the configured one is swapped in below
    let logging = init_logging(&RouterConfig::default().log_filter)?;

    let mut config = ConfigManager::new(CONFIG_FILE).load().await?;
    config.apply_env_overrides();
    logging.set_filter(&config.log_filter)?;
    info!("Config loaded: {:?}", config);

    let taxonomy = Arc::new(Taxonomy::standard());
    info!("Taxonomy ready with {} clusters", taxonomy.len());

    let router = EmotionRouter::new(taxonomy).with_fuzzy_limit(config.fuzzy_limit);
    let history: Arc<dyn HistoryStore> =
        Arc::new(EmotionHistory::new(&config.history_file).with_capacity(config.history_capacity));
    let runner = CommandRunner::new(router, ExplanationCatalog::standard(), history);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return run_once(&runner, &args.join(" ")).await;
    }

    println!("\n{}", "═".repeat(60));
    println!("Emotion Router v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", "═".repeat(60));
    println!("{}\n", HELP);

    loop {
        print!("feeling> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let command = match Command::parse(&input) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("⚠️  {}\n", e);
                continue;
            }
        };

        if command == Command::Quit {
            println!("\nTake care.\n");
            break;
        }

        match runner.execute(&command).await {
            Ok(output) => println!("\n{}\n", output),
            Err(e) => {
                error!("Command failed: {:#}", e);
                println!("❌ Error: {:#}\n", e);
            }
        }
    }

    Ok(())
}

async fn run_once(runner: &CommandRunner, line: &str) -> Result<()> {
    if let Some(command) = Command::parse(line)? {
        let output = runner.execute(&command).await?;
        if !output.is_empty() {
            println!("{}", output);
        }
    }
    Ok(())
}
