use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use drills::output::{format_list, Printer};
use drills::predicate::Predicate;
use drills::temperature::Thermostat;
use drills::utils::{self, AppConfig};
use log::{debug, warn};
use termcolor::{ColorChoice, StandardStream};

#[derive(Parser)]
#[command(name = "drills")]
#[command(about = "Small algorithm drills: temperatures, truncation, search, slugs and lists")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    json: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a Fahrenheit temperature in Celsius
    Celsius {
        #[arg(allow_negative_numbers = true)]
        fahrenheit: f64,
    },
    /// Set a thermostat in Celsius and show the Fahrenheit it stores
    Fahrenheit {
        #[arg(allow_negative_numbers = true)]
        celsius: f64,
    },
    /// Truncate text, appending "..." when it is cut
    Truncate {
        text: String,

        /// Maximum characters to keep (defaults to the configured length)
        #[arg(short = 'n', long)]
        max_length: Option<usize>,
    },
    /// Find the first number matching a predicate (even, odd, gt:N, lt:N, eq:N)
    Find {
        predicate: String,

        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Convert a title to a URL slug
    Slug {
        #[arg(required = true, trailing_var_arg = true)]
        words: Vec<String>,
    },
    /// Append an item to a list
    Add {
        item: String,

        /// List entry (repeatable)
        #[arg(short, long = "list")]
        list: Vec<String>,
    },
    /// Remove the first occurrence of an item from a list
    Remove {
        item: String,

        /// List entry (repeatable)
        #[arg(short, long = "list")]
        list: Vec<String>,
    },
    /// Run the sample calls from the course exercises
    Demo,
    /// Show the config file location and effective settings
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    drills::logging::init_logger(cli.debug);

    let choice = match cli.color {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if load_config_or_default().color => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    };
    let mut printer = Printer::stdout(choice, cli.json);

    match cli.command {
        Commands::Celsius { fahrenheit } => {
            let thermos = Thermostat::new(fahrenheit);
            let celsius = thermos.celsius();
            printer.result("celsius", &format!("{:.2}", celsius), &celsius)?;
        }
        Commands::Fahrenheit { celsius } => {
            let thermos = Thermostat::from_celsius(celsius);
            let fahrenheit = thermos.fahrenheit();
            printer.result("fahrenheit", &format!("{:.2}", fahrenheit), &fahrenheit)?;
        }
        Commands::Truncate { text, max_length } => {
            let max_length = match max_length {
                Some(n) => n,
                None => AppConfig::load()?.truncate_length,
            };
            let truncated = utils::truncate_string(&text, max_length);
            printer.result("truncate", &truncated, &truncated)?;
        }
        Commands::Find { predicate, numbers } => {
            let predicate: Predicate = predicate.parse()?;
            match utils::find_element(&numbers, |n| predicate.matches(*n)) {
                Some(n) => printer.result("find", &n.to_string(), n)?,
                None => printer.missing("find", &format!("no number is {}", predicate))?,
            }
        }
        Commands::Slug { words } => {
            let slug = utils::url_slug(&words.join(" "));
            printer.result("slug", &slug, &slug)?;
        }
        Commands::Add { item, list } => {
            let updated = utils::add(&list, item);
            printer.result("add", &format_list(&updated), &updated)?;
        }
        Commands::Remove { item, list } => match utils::remove(&list, item.as_str()) {
            Some(updated) => printer.result("remove", &format_list(&updated), &updated)?,
            None => printer.missing("remove", &format!("'{}' is not in the list", item))?,
        },
        Commands::Demo => run_demo(&mut printer)?,
        Commands::Config { init } => {
            let path = utils::get_config_path();
            match &path {
                Some(path) => printer.result("path", &path.display().to_string(), path)?,
                None => printer.missing("path", "no config directory on this platform")?,
            }
            printer.flush()?;

            if init {
                match path {
                    Some(path) if path.exists() => {
                        printer.missing("init", "config file already exists")?
                    }
                    _ => {
                        let path = AppConfig::default().save()?;
                        printer.result("init", &path.display().to_string(), &path)?;
                    }
                }
            }

            let config = AppConfig::load()?;
            let text = serde_json::to_string(&config).context("Failed to serialize config")?;
            printer.result("config", &text, &config)?;
        }
    }

    printer.flush()
}

/// Load config for optional settings, warning instead of failing on a bad file
fn load_config_or_default() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => {
            debug!("loaded config: {:?}", config);
            config
        }
        Err(e) => {
            warn!("{:#}; using default settings", e);
            AppConfig::default()
        }
    }
}

/// Replay the sample calls that accompanied each exercise
fn run_demo(printer: &mut Printer<StandardStream>) -> Result<()> {
    printer.heading("Getters and setters")?;
    let mut thermos = Thermostat::new(76.0);
    let before = thermos.celsius();
    printer.result("thermostat(76 °F).celsius", &format!("{:.2}", before), &before)?;
    thermos.set_celsius(26.0);
    let after = thermos.celsius();
    printer.result("after set_celsius(26)", &thermos.to_string(), &after)?;

    printer.heading("Truncate a string")?;
    let truncated = utils::truncate_string("A-tisket a-tasket A green and yellow basket", 8);
    printer.result("truncate_string(.., 8)", &truncated, &truncated)?;

    printer.heading("Finders keepers")?;
    let numbers = [1, 3, 5, 8, 9, 10];
    match utils::find_element(&numbers, |n| n % 2 == 0) {
        Some(n) => printer.result("first even of [1, 3, 5, 8, 9, 10]", &n.to_string(), n)?,
        None => printer.missing("first even of [1, 3, 5, 8, 9, 10]", "none")?,
    }

    printer.heading("URL slugs")?;
    let slug = utils::url_slug("Winter Is Coming");
    printer.result("url_slug(\"Winter Is Coming\")", &slug, &slug)?;

    printer.heading("Refactor global variables out of functions")?;
    let books = [
        "The Hound of the Baskervilles",
        "On The Electrodynamics of Moving Bodies",
        "Philosophiæ Naturalis Principia Mathematica",
        "Disquisitiones Arithmeticae",
    ];
    let added = utils::add(&books, "A Brief History of Time");
    printer.result("add", &format_list(&added), &added)?;

    let removed = utils::remove(&books, &"On The Electrodynamics of Moving Bodies");
    match &removed {
        Some(list) => printer.result("remove", &format_list(list), list)?,
        None => printer.missing("remove", "not found")?,
    }

    let both = utils::remove(&added, &"On The Electrodynamics of Moving Bodies");
    match &both {
        Some(list) => printer.result("remove(add(..))", &format_list(list), list)?,
        None => printer.missing("remove(add(..))", "not found")?,
    }

    printer.result("original", &format_list(&books), &books)?;
    Ok(())
}
