//! Gilded Rose inventory simulator.
//!
//! Runs the daily update over a stock list and prints the whole inventory
//! after each simulated day. The stock comes from a JSON file or, without
//! one, a built-in demo list covering every category.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASS, GildedRose, Item, SULFURAS};

/// Gilded Rose - daily inventory simulator
#[derive(Parser, Debug)]
#[command(name = "gilded-rose")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of days to simulate
    #[arg(short, long, default_value_t = 30)]
    days: u32,

    /// JSON file holding the initial stock as an array of
    /// {"name", "sell_in", "quality"} objects
    #[arg(short, long)]
    inventory: Option<PathBuf>,
}

fn main() -> Result<()> {
    gildedrose_observability::init();

    let cli = Cli::parse();
    let items = match &cli.inventory {
        Some(path) => load_inventory(path)?,
        None => demo_stock(),
    };

    tracing::info!(items = items.len(), days = cli.days, "starting simulation");

    let mut shop = GildedRose::new(items);
    print_day(0, shop.items());
    for day in 1..=cli.days {
        shop.advance_day();
        print_day(day, shop.items());
    }

    Ok(())
}

fn print_day(day: u32, items: &[Item]) {
    println!("-------- day {day} --------");
    println!("name, sell_in, quality");
    for item in items {
        println!("{item}");
    }
    println!();
}

fn load_inventory(path: &Path) -> Result<Vec<Item>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory file {}", path.display()))?;
    parse_inventory(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse_inventory(raw: &str) -> Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(raw)?;
    Ok(items)
}

/// The classic stock list: every category plus names that resolve to the
/// default rule.
fn demo_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(BACKSTAGE_PASS, 10, 49),
        Item::new(BACKSTAGE_PASS, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
