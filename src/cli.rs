use crate::models::{Rating, Thickness, Transport, UserType, Weight, WindResistance};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "outer-concierge",
    version,
    about = "Picks the outer layer to wear from your wardrobe and today's weather"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override SQLite data directory
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-run interactive setup
    Init,
    /// Validate config and test the Open-Meteo connection
    Check,
    /// Suggest an outer for today (the default command)
    Suggest(SuggestArgs),
    /// Manage wardrobe items
    #[command(subcommand)]
    Closet(ClosetCommand),
    /// Review and rate what you wore
    #[command(subcommand)]
    Log(LogCommand),
    /// Print the garment category table
    Categories,
    /// Ideal category for a temperature, ignoring the wardrobe
    Ideal {
        /// Coldest expected temperature, already adjusted for wind and sun (°C)
        #[arg(allow_negative_numbers = true, value_parser = parse_temperature)]
        temp: f64,
        #[arg(long, value_parser = parse_user_type)]
        sensitivity: Option<UserType>,
    },
}

#[derive(Args, Default)]
pub struct SuggestArgs {
    /// First hour of the outing (0-23)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub start: Option<u32>,
    /// Last hour of the outing (0-23); earlier than --start means until midnight
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub end: Option<u32>,
    #[arg(long, value_parser = parse_transport)]
    pub transport: Option<Transport>,
    #[arg(long, value_parser = parse_user_type)]
    pub sensitivity: Option<UserType>,
    /// Print the suggestion as JSON
    #[arg(long)]
    pub json: bool,
    /// Record that you are wearing the suggestion
    #[arg(long)]
    pub wear: bool,
}

#[derive(Subcommand)]
pub enum ClosetCommand {
    /// Add an item
    Add(ItemArgs),
    /// List items in the order they were added
    List,
    /// Remove an item by id
    Remove { id: String },
    /// Change attributes of an item
    Edit {
        id: String,
        #[command(flatten)]
        changes: ItemArgs,
    },
}

#[derive(Args, Default)]
pub struct ItemArgs {
    /// Category id (see `categories`)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub category: Option<u8>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_parser = parse_thickness)]
    pub thickness: Option<Thickness>,
    #[arg(long, value_parser = parse_weight)]
    pub weight: Option<Weight>,
    /// "bad" blocks wind, "good" lets it through
    #[arg(long, value_parser = parse_wind_resistance)]
    pub wind: Option<WindResistance>,
    /// Display colour, e.g. #1f2937
    #[arg(long)]
    pub color: Option<String>,
    /// Image path or URL
    #[arg(long)]
    pub image: Option<String>,
    /// 1 (barely warm) to 5 (very warm)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub warmth: Option<u8>,
    #[arg(long)]
    pub hood: Option<bool>,
}

#[derive(Subcommand)]
pub enum LogCommand {
    /// List wear logs, newest first
    List {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Rate how a logged outfit felt (good, ok, bad)
    Rate {
        id: String,
        #[arg(value_parser = parse_rating)]
        rating: Rating,
    },
    /// Remove a wear log
    Remove { id: String },
}

fn parse_temperature(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(temp) if temp.is_finite() => Ok(temp),
        _ => Err(format!("'{}' is not a temperature in °C", s)),
    }
}

fn parse_transport(s: &str) -> Result<Transport, String> {
    Transport::from_str(s).ok_or_else(|| format!("unknown transport '{}' (walk, train, car)", s))
}

fn parse_user_type(s: &str) -> Result<UserType, String> {
    UserType::from_str(s).ok_or_else(|| {
        format!(
            "unknown sensitivity '{}' (cold_sensitive, normal, heat_sensitive)",
            s
        )
    })
}

fn parse_thickness(s: &str) -> Result<Thickness, String> {
    Thickness::from_str(s).ok_or_else(|| format!("unknown thickness '{}' (thick, normal, thin)", s))
}

fn parse_weight(s: &str) -> Result<Weight, String> {
    Weight::from_str(s).ok_or_else(|| format!("unknown weight '{}' (heavy, normal, light)", s))
}

fn parse_wind_resistance(s: &str) -> Result<WindResistance, String> {
    WindResistance::from_str(s)
        .ok_or_else(|| format!("unknown wind resistance '{}' (bad, normal, good)", s))
}

fn parse_rating(s: &str) -> Result<Rating, String> {
    Rating::from_str(s).ok_or_else(|| format!("unknown rating '{}' (good, ok, bad)", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn suggest_flags_parse() {
        let cli = Cli::try_parse_from([
            "outer-concierge",
            "suggest",
            "--start",
            "7",
            "--end",
            "22",
            "--transport",
            "walk",
            "--sensitivity",
            "cold",
            "--wear",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Suggest(args)) => {
                assert_eq!(args.start, Some(7));
                assert_eq!(args.end, Some(22));
                assert_eq!(args.transport, Some(Transport::Walk));
                assert_eq!(args.sensitivity, Some(UserType::ColdSensitive));
                assert!(args.wear);
                assert!(!args.json);
            }
            _ => panic!("expected suggest"),
        }
    }

    #[test]
    fn out_of_range_hour_rejected() {
        assert!(Cli::try_parse_from(["outer-concierge", "suggest", "--start", "24"]).is_err());
    }

    #[test]
    fn closet_add_parses_attributes() {
        let cli = Cli::try_parse_from([
            "outer-concierge",
            "closet",
            "add",
            "--category",
            "3",
            "--name",
            "Rider",
            "--wind",
            "bad",
            "--warmth",
            "4",
            "--hood",
            "true",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Closet(ClosetCommand::Add(item))) => {
                assert_eq!(item.category, Some(3));
                assert_eq!(item.wind, Some(WindResistance::Bad));
                assert_eq!(item.warmth, Some(4));
                assert_eq!(item.hood, Some(true));
            }
            _ => panic!("expected closet add"),
        }
    }

    #[test]
    fn ideal_accepts_negative_temperature() {
        let cli = Cli::try_parse_from(["outer-concierge", "ideal", "-4.5"]).unwrap();
        match cli.command {
            Some(Commands::Ideal { temp, sensitivity }) => {
                assert_eq!(temp, -4.5);
                assert!(sensitivity.is_none());
            }
            _ => panic!("expected ideal"),
        }
    }

    #[test]
    fn ideal_rejects_non_finite_temperature() {
        for temp in ["NaN", "inf", "-inf", "cold"] {
            assert!(
                Cli::try_parse_from(["outer-concierge", "ideal", temp]).is_err(),
                "{} accepted",
                temp
            );
        }
    }

    #[test]
    fn bad_rating_rejected() {
        assert!(Cli::try_parse_from(["outer-concierge", "log", "rate", "abc", "meh"]).is_err());
    }
}
