mod cli;
mod config;
mod datasources;
mod db;
mod error;
mod logic;
mod models;

use chrono::{Datelike, Local};
use clap::Parser;
use cli::{Cli, ClosetCommand, Commands, ItemArgs, LogCommand, SuggestArgs};
use config::Config;
use db::Database;
use error::{ConciergeError, Result};
use logic::fallback::synthesize_fallback;
use logic::rules::RulesEngine;
use logic::{Outing, Recommender, WeatherSyncService};
use models::{GarmentCategory, Suggestion, WardrobeItem};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let data_dir = cli.data_dir.as_ref();

    match cli.command.unwrap_or(Commands::Suggest(SuggestArgs::default())) {
        Commands::Init => {
            Config::setup_interactive().await?;
            Ok(())
        }
        Commands::Check => check(cli.config, data_dir).await,
        Commands::Suggest(args) => {
            let config = load_config(cli.config).await?;
            let db = Database::open(Config::db_path(data_dir)?)?;
            suggest(config, &db, args).await
        }
        Commands::Closet(command) => {
            let db = Database::open(Config::db_path(data_dir)?)?;
            closet(&db, command)
        }
        Commands::Log(command) => {
            let db = Database::open(Config::db_path(data_dir)?)?;
            log(&db, command)
        }
        Commands::Categories => {
            print_categories();
            Ok(())
        }
        Commands::Ideal { temp, sensitivity } => {
            let user_type = sensitivity.unwrap_or_default();
            let id = synthesize_fallback(temp, user_type);
            let name = GarmentCategory::lookup(id).map(|c| c.name).unwrap_or("Unknown");
            println!("{} -> {} ({})", format_temp(temp), name, id);
            Ok(())
        }
    }
}

/// Load config, running first-time setup when none exists
async fn load_config(config_override: Option<PathBuf>) -> Result<Config> {
    if config_override.is_none() && !Config::exists(None) {
        let (config, _) = Config::setup_interactive().await?;
        return Ok(config);
    }
    Config::load(config_override)
}

async fn check(config_override: Option<PathBuf>, data_dir: Option<&PathBuf>) -> Result<()> {
    let config = Config::load(config_override)?;
    println!(
        "Config OK: {} ({:.3}, {:.3})",
        config.location.name, config.location.latitude, config.location.longitude
    );

    let db_path = Config::db_path(data_dir)?;
    let db = Database::open(&db_path)?;
    println!(
        "Database OK: {} ({} items, {} logs)",
        db.path().display(),
        db.list_items()?.len(),
        db.list_logs()?.len()
    );

    let weather = WeatherSyncService::new(config)?;
    if weather.check_connection().await {
        println!("Open-Meteo: OK");
        Ok(())
    } else {
        Err(ConciergeError::DataSourceUnavailable(
            "Open-Meteo is not reachable".into(),
        ))
    }
}

async fn suggest(config: Config, db: &Database, args: SuggestArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let outing = Outing {
        start_hour: args.start.unwrap_or(config.profile.start_hour),
        end_hour: args.end.unwrap_or(config.profile.end_hour),
        transport: args.transport.unwrap_or(config.profile.transport),
        user_type: args.sensitivity.unwrap_or(config.profile.sensitivity),
        month: today.month(),
    };

    let location = config.location.name.clone();
    let weather = WeatherSyncService::new(config)?;
    let env = weather.snapshot(outing).await?;

    let items = db.list_items()?;
    let history = db.list_logs()?;
    let suggestion = Recommender::new().recommend(&items, &env, &history);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        print_suggestion(&location, &outing, &suggestion);
    }

    if args.wear {
        if suggestion.is_recommendation {
            return Err(ConciergeError::InvalidData(
                "the suggestion is a category you don't own yet; add an item with `closet add` first"
                    .into(),
            ));
        }
        let log = suggestion.to_wear_log(uuid::Uuid::new_v4().to_string(), today, &env);
        db.add_log(&log)?;
        if !args.json {
            println!();
            println!("Logged as {}. Rate it later with `log rate {} good|ok|bad`.", log.id, log.id);
        }
    }

    Ok(())
}

fn closet(db: &Database, command: ClosetCommand) -> Result<()> {
    match command {
        ClosetCommand::Add(args) => {
            let category_id = args.category.ok_or_else(|| {
                ConciergeError::InvalidData("--category is required (see `categories`)".into())
            })?;
            let item = WardrobeItem::new(
                uuid::Uuid::new_v4().to_string(),
                category_id,
                args.name.clone().unwrap_or_default(),
            );
            let item = apply_item_args(item, args);
            db.add_item(&item)?;
            tracing::info!(id = %item.id, name = %item.name, "Added wardrobe item");
            println!("Added {} ({})", item.name, item.id);
            Ok(())
        }
        ClosetCommand::List => {
            let items = db.list_items()?;
            if items.is_empty() {
                println!("Your closet is empty. Add something with `closet add --category <id>`.");
            }
            for item in items {
                println!(
                    "{}  {:<24} {:<22} warmth {:<2} thickness {:<6} weight {:<6} wind {:<6}{}",
                    item.id,
                    item.name,
                    item.category_name(),
                    item.warmth.map(|w| w.to_string()).unwrap_or_else(|| "-".into()),
                    item.thickness.as_str(),
                    item.weight.as_str(),
                    item.wind_resistance.as_str(),
                    if item.has_hood { " hood" } else { "" },
                );
            }
            Ok(())
        }
        ClosetCommand::Remove { id } => {
            db.delete_item(&id)?;
            println!("Removed {}", id);
            Ok(())
        }
        ClosetCommand::Edit { id, changes } => {
            let item = db
                .get_item(&id)?
                .ok_or_else(|| ConciergeError::NotFound(format!("wardrobe item {}", id)))?;
            let item = apply_item_args(item, changes);
            db.update_item(&item)?;
            println!("Updated {} ({})", item.name, item.id);
            Ok(())
        }
    }
}

fn apply_item_args(mut item: WardrobeItem, args: ItemArgs) -> WardrobeItem {
    if let Some(category) = args.category {
        item.category_id = category;
    }
    if let Some(name) = args.name {
        item.name = name;
    }
    if let Some(thickness) = args.thickness {
        item = item.with_thickness(thickness);
    }
    if let Some(weight) = args.weight {
        item = item.with_weight(weight);
    }
    if let Some(wind) = args.wind {
        item = item.with_wind_resistance(wind);
    }
    if let Some(color) = args.color {
        item = item.with_color(color);
    }
    if let Some(image) = args.image {
        item = item.with_image(image);
    }
    if let Some(warmth) = args.warmth {
        item = item.with_warmth(warmth);
    }
    if let Some(hood) = args.hood {
        item = item.with_hood(hood);
    }
    if item.name.trim().is_empty() {
        item.name = item.category_name().to_string();
    }
    item
}

fn log(db: &Database, command: LogCommand) -> Result<()> {
    match command {
        LogCommand::List { limit } => {
            let logs = db.list_logs()?;
            if logs.is_empty() {
                println!("No wear logs yet. Use `suggest --wear` to record an outfit.");
            }
            for log in logs.into_iter().take(limit) {
                let rating = log
                    .rating
                    .map(|r| format!("{} {}", r.symbol(), r))
                    .unwrap_or_else(|| "unrated".into());
                let outing = match (log.transport, log.start_hour, log.end_hour) {
                    (Some(t), Some(s), Some(e)) => format!("{} {:02}-{:02}h", t, s, e),
                    _ => String::new(),
                };
                println!(
                    "{}  {}  {:<24} {} / {}  {:<16} {}",
                    log.id,
                    log.date,
                    log.item_name,
                    format_temp(log.min_temp),
                    format_temp(log.max_temp),
                    outing,
                    rating,
                );
            }
            Ok(())
        }
        LogCommand::Rate { id, rating } => {
            db.rate_log(&id, rating)?;
            println!("Rated {} as {}", id, rating);
            Ok(())
        }
        LogCommand::Remove { id } => {
            db.delete_log(&id)?;
            println!("Removed log {}", id);
            Ok(())
        }
    }
}

fn print_categories() {
    println!("{:<3} {:<22} {:>12}  {:<5} description", "id", "name", "comfort", "rain");
    for category in GarmentCategory::all() {
        println!(
            "{:<3} {:<22} {:>5}..{:<5}  {:<5} {}",
            category.id,
            category.name,
            format!("{}", category.comfort_min),
            format!("{}", category.comfort_max),
            if category.rain_resistant { "yes" } else { "" },
            category.description,
        );
    }

    let rules: Vec<&str> = RulesEngine::new()
        .list_rules()
        .into_iter()
        .map(|(_, name)| name)
        .collect();
    println!();
    println!("Situational adjustments: {}", rules.join(", "));
}

fn print_suggestion(location: &str, outing: &Outing, suggestion: &Suggestion) {
    println!(
        "{} | {:02}:00-{:02}:00 | {} | {}",
        location,
        outing.start_hour,
        outing.end_hour,
        outing.transport,
        outing.user_type.label()
    );
    println!(
        "Temperatures {} to {}",
        format_temp(suggestion.min_temp),
        format_temp(suggestion.max_temp)
    );
    println!();

    if suggestion.is_recommendation {
        println!("Nothing in your closet fits today. Ideal pick:");
    } else {
        println!("Wear:");
    }
    println!(
        "  {} ({})  score {}",
        suggestion.item.name,
        suggestion.item.category_name(),
        suggestion.score
    );
    println!("Underneath: {}", suggestion.inner);
    println!("{}", suggestion.advice);
}

fn format_temp(temp: f64) -> String {
    format!("{:.1}°C", temp)
}
