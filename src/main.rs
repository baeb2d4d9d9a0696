use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use toolboard::config::Config;
use toolboard::domain::LoadOutcome;
use toolboard::loader::Loader;
use toolboard::normalize::characteristic_counts;
use toolboard::selector::{
    CardModel, CharacteristicsCell, Presentation, StatusLine, TableRow, ViewMode, filter_records, present,
};

fn setup_logging(default_level: &str) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(env!("CARGO_PKG_NAME"))
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join(format!("{}.log", env!("CARGO_PKG_NAME")));

    // The dashboard owns the terminal, so logs always go to the file
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    let loader = Loader::from_config(&config.source);

    if cli.is_verbose() {
        eprintln!("{} {}", "Source:".yellow(), loader.describe());
    }

    match &cli.command {
        // Default: launch the dashboard
        None => toolboard::tui::run(Arc::new(loader), &config.tui).await,
        Some(Commands::Print { query, table }) => {
            let view_mode = if *table { ViewMode::Table } else { ViewMode::Cards };
            handle_print_command(&loader, query.as_deref().unwrap_or(""), view_mode).await
        }
        Some(Commands::Chart { query }) => handle_chart_command(&loader, query.as_deref().unwrap_or("")).await,
    }
}

/// Report a fallback on stderr so stdout stays clean for piping
fn report_outcome(outcome: &LoadOutcome) {
    if let Some(error) = outcome.error() {
        eprintln!("{} {}", "offline mode:".red().bold(), error);
    }
}

async fn handle_print_command(loader: &Loader, query: &str, view_mode: ViewMode) -> Result<()> {
    info!("Printing records - query: {:?}, view: {}", query, view_mode.name());
    let outcome = loader.load().await;
    report_outcome(&outcome);

    let visible = filter_records(outcome.records(), query);
    let status = StatusLine::new(visible.len(), query, outcome.error());
    println!("{}", status.badges().join("  ").dimmed());

    match present(&visible, view_mode) {
        Presentation::NoResults => println!("{}", "No results. Try a different search.".dimmed()),
        Presentation::Cards(cards) => cards.iter().for_each(print_card),
        Presentation::Table(rows) => print_table(&rows),
    }
    Ok(())
}

fn print_card(card: &CardModel) {
    println!();
    println!("{} {}", format!("[{}]", card.monogram).cyan(), card.title.bold());
    for line in card.body_lines() {
        println!("  {}", line);
    }
    if let Some(url) = &card.how_to_url {
        println!("  {} {}", "How to:".green(), url);
    }
    if let Some(url) = &card.site_url {
        println!("  {} {}", "Site:".green(), url);
    }
}

fn print_table(rows: &[TableRow]) {
    println!("{}", TableRow::HEADERS.join("\t").cyan().bold());
    for row in rows {
        let characteristics = match &row.characteristics {
            CharacteristicsCell::Bullets(bullets) => bullets.join("; "),
            CharacteristicsCell::Text(text) => text.clone(),
        };
        println!(
            "{}\t{}\t{}\t{}",
            row.tool,
            characteristics,
            row.how_to.url.as_deref().unwrap_or(row.how_to.label()),
            row.site.url.as_deref().unwrap_or(row.site.label()),
        );
    }
}

async fn handle_chart_command(loader: &Loader, query: &str) -> Result<()> {
    info!("Printing chart - query: {:?}", query);
    let outcome = loader.load().await;
    report_outcome(&outcome);

    for point in characteristic_counts(filter_records(outcome.records(), query)) {
        println!("{}\t{}", point.tool, point.items);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_base(cli.base.as_deref());

    let level = if cli.is_verbose() {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };
    setup_logging(level).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
