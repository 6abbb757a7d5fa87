use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use forgemagie::catalog::{is_equipment, CatalogClient, Item};
use forgemagie::config::AppConfig;
use forgemagie::forge::{analyze_item, CalculatorInputs};
use forgemagie::prices::{
    export_prices, import_prices, load_prices, save_prices, DEFAULT_EXPORT_FILE,
};
use forgemagie::{build_info, draw, report};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "forgemagie", disable_version_flag = true)]
#[command(about = "Forgemagie breakage profitability calculator and draw wheel")]
struct Cli {
    /// Show version information
    #[arg(short = 'V', long, global = true)]
    version: bool,

    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the item catalog base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search equipment by name
    Search {
        #[arg(required = true)]
        query: Vec<String>,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show an item's effects and the runes they map to
    Item {
        id: u32,
        /// Print the normalized item as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze breakage profitability of an item
    Analyze {
        id: u32,
        /// Price paid to craft one item, in kamas
        #[arg(long, allow_negative_numbers = true)]
        craft_price: i64,
        /// Safety margin above the breakeven percentage
        #[arg(long, allow_negative_numbers = true)]
        margin: Option<f64>,
        /// Current item percentage; enables the simulation
        #[arg(long, allow_negative_numbers = true)]
        percentage: Option<f64>,
        /// Also simulate exactly this many rerolls
        #[arg(long, allow_negative_numbers = true)]
        rerolls: Option<i64>,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage rune prices
    Prices {
        #[command(subcommand)]
        action: PriceAction,
    },
    /// List the rune table
    Runes,
    /// List the catalog's item types
    Types,
    /// Show the configuration, or write it to the data directory
    Config {
        #[arg(long)]
        init: bool,
    },
    /// Shuffle names separated by '|' or '/' and draw winners
    Draw {
        names: String,
        /// Number of winners
        #[arg(long)]
        winners: Option<usize>,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Subcommand)]
enum PriceAction {
    /// Print every rune price
    Show,
    /// Set one rune price
    Set { key: String, price: u64 },
    /// Merge prices from a JSON file
    Import { file: PathBuf },
    /// Write prices to a JSON file
    Export { file: Option<PathBuf> },
    /// Set every price back to 0
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.version {
        println!("forgemagie {}", build_info::version_line());
        return Ok(());
    }

    let mut config = AppConfig::load();
    if let Some(url) = &cli.api_url {
        config = config.with_api_base_url(url);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Search { query, limit } => search(&config, &query.join(" "), limit),
        Command::Item { id, json } => show_item(&config, id, json),
        Command::Analyze {
            id,
            craft_price,
            margin,
            percentage,
            rerolls,
            json,
        } => {
            let inputs = CalculatorInputs {
                craft_price,
                margin_percentage: margin.unwrap_or(config.default_margin),
                current_percentage: percentage,
                reroll_count: rerolls,
            };
            analyze(&config, id, &inputs, json)
        }
        Command::Prices { action } => prices(action),
        Command::Runes => {
            print!("{}", report::rune_table_text());
            Ok(())
        }
        Command::Types => list_types(&config),
        Command::Config { init } => {
            if init {
                config.save().context("could not write config")?;
                println!("Configuration written to ~/.forgemagie/config.json");
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Command::Draw {
            names,
            winners,
            seed,
        } => run_draw(&names, winners, seed),
    }
}

fn fetch_item(config: &AppConfig, id: u32) -> Result<Item> {
    let client = CatalogClient::from_config(config);
    let raw = client
        .get_item_by_id(id)
        .with_context(|| format!("could not load item #{id}"))?;
    Ok(Item::from_catalog(&raw, config.dice))
}

fn search(config: &AppConfig, query: &str, limit: Option<usize>) -> Result<()> {
    let client = CatalogClient::from_config(config);
    let items = client
        .search_equipments(query, limit.unwrap_or(config.search_limit))
        .context("search failed")?;

    if items.is_empty() {
        println!("No results");
        return Ok(());
    }
    for item in items {
        println!(
            "  #{:<7} {:<40} level {:>3}  type {}",
            item.id,
            item.name.text(),
            item.level,
            item.type_id.map(|t| t.to_string()).unwrap_or_default()
        );
    }
    Ok(())
}

fn list_types(config: &AppConfig) -> Result<()> {
    let client = CatalogClient::from_config(config);
    let types = client.get_item_types().context("could not list item types")?;
    for item_type in types {
        let marker = if is_equipment(Some(item_type.id)) { "*" } else { " " };
        println!("{} {:>4}  {}", marker, item_type.id, item_type.name.text());
    }
    Ok(())
}

fn show_item(config: &AppConfig, id: u32, json: bool) -> Result<()> {
    let item = fetch_item(config, id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        print!("{}", report::item_text(&item));
        if let Some(icon) = item.icon_id {
            println!(
                "\n  Icon: {}",
                CatalogClient::from_config(config).item_image_url(icon)
            );
        }
    }
    Ok(())
}

fn analyze(config: &AppConfig, id: u32, inputs: &CalculatorInputs, json: bool) -> Result<()> {
    // Reject bad input before touching the network
    let request = inputs.validate()?.with_max_iterations(config.max_iterations);

    let prices = load_prices();
    if !prices.has_any_price() {
        eprintln!("Warning: no rune price configured, results will be meaningless.");
        eprintln!("Set them with 'forgemagie prices set <rune> <price>' or 'prices import'.");
    }

    let item = fetch_item(config, id)?;
    let analysis = analyze_item(&item, &request, &prices)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", report::analysis_text(&item, &analysis));
    }
    Ok(())
}

fn prices(action: PriceAction) -> Result<()> {
    let mut table = load_prices();
    match action {
        PriceAction::Show => print!("{}", report::price_list_text(&table)),
        PriceAction::Set { key, price } => {
            table.set(&key, price)?;
            save_prices(&table)?;
            println!("{} = {} K", key, price);
        }
        PriceAction::Import { file } => {
            let summary = import_prices(&mut table, &file)?;
            save_prices(&table)?;
            println!("Imported {} prices", summary.applied);
            if !summary.ignored.is_empty() {
                println!("Ignored: {}", summary.ignored.join(", "));
            }
        }
        PriceAction::Export { file } => {
            let path = file.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
            export_prices(&table, &path)?;
            println!("Prices exported to {}", path.display());
        }
        PriceAction::Reset => {
            table.reset();
            save_prices(&table)?;
            println!("All rune prices reset to 0");
        }
    }
    Ok(())
}

fn run_draw(names: &str, winners: Option<usize>, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let result = draw::run_draw(names, winners, &mut rng)?;

    println!("Participants: {}", result.order.join(" | "));
    if result.winners.len() == 1 {
        println!("Winner: {}", result.winners[0]);
    } else {
        println!("Winners:");
        for (rank, name) in result.winners.iter().enumerate() {
            println!("  {}. {}", rank + 1, name);
        }
    }
    Ok(())
}
