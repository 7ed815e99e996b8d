mod input;
mod render;
mod runtime;
mod tracing_setup;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use phonebook_core::config::PhonebookConfig;
use phonebook_core::constants::LOG_FILE_ENV;

use crate::runtime::run_app;
use crate::tracing_setup::init_tracing;
use ui::App;

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(about = "Search and add contacts in the terminal")]
struct Cli {
    /// Contact list: a JSON file path or an http(s) URL
    #[arg(long, short)]
    source: Option<String>,

    /// Path to JSON config file (contains source, logFile)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Append debug logs to this file
    #[arg(long, env = LOG_FILE_ENV)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PhonebookConfig::discover(cli.config.as_deref())?.merge(cli.source, cli.log_file);
    init_tracing(config.log_file.as_deref())?;
    let source = config.resolve_source();
    tracing::info!(source = %source, "starting phonebook");

    ui::terminal::install_panic_hook();

    let mut app = App::new();
    let mut terminal = ui::init_terminal()?;
    app.start_load(source);

    let result = run_app(&mut terminal, &mut app).await;

    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
