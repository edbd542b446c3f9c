//! # Seed Data Generator
//!
//! Populates an empty inventory database with sample products for
//! development and demos.
//!
//! ## Usage
//! ```bash
//! # Generate 60 products into ./inventory.db (defaults)
//! cargo run -p stockroom-db --bin seed
//!
//! # Custom amount and path
//! cargo run -p stockroom-db --bin seed -- --count 200 --db ./data/demo.db
//! ```
//!
//! Every product gets a deterministic quantity between 0 and 25, so a
//! low-stock report with limit 5 always has something to show.

use clap::Parser;
use stockroom_core::NewProduct;
use stockroom_db::{Database, DbConfig};

/// Product categories for realistic test data
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Hardware",
        &[
            "Hex Bolt",
            "Wood Screw",
            "Wall Anchor",
            "Hinge",
            "Padlock",
            "Cable Tie",
        ],
    ),
    (
        "Hand Tools",
        &[
            "Claw Hammer",
            "Flat Screwdriver",
            "Adjustable Wrench",
            "Tape Measure",
            "Utility Knife",
            "Spirit Level",
        ],
    ),
    (
        "Electrical",
        &[
            "Extension Cord",
            "LED Bulb",
            "Wall Switch",
            "Fuse",
            "Electrical Tape",
            "Junction Box",
        ],
    ),
    (
        "Paint",
        &[
            "Interior White",
            "Primer",
            "Wood Stain",
            "Paint Roller",
            "Brush Set",
            "Masking Tape",
        ],
    ),
];

/// Size variants with a price add-on in cents
const SIZES: &[(&str, i64)] = &[("Small", 0), ("Medium", 150), ("Large", 400)];

/// Stockroom seed data generator
#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(about = "Fill an empty inventory database with sample products")]
struct Args {
    /// Number of products to generate
    #[arg(short, long, default_value_t = 60)]
    count: usize,

    /// Database file path
    #[arg(short, long, default_value = "./inventory.db")]
    db: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("🌱 Stockroom Seed Data Generator");
    println!("================================");
    println!("Database: {}", args.db);
    println!("Products: {}", args.count);
    println!();

    let db = Database::open(DbConfig::new(&args.db)).await?;
    if !db.health_check().await {
        return Err(format!("database {} does not answer queries", args.db).into());
    }
    println!("✓ Database ready");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let start = std::time::Instant::now();
    let mut generated = 0;

    'outer: for (category, names) in CATEGORIES {
        for name in names.iter() {
            for (size, price_addon) in SIZES {
                if generated >= args.count {
                    break 'outer;
                }

                let product = generate_product(category, name, size, *price_addon, generated);
                db.products().create(&product).await?;
                generated += 1;
            }
        }
    }

    println!();
    println!("✓ Generated {} products in {:?}", generated, start.elapsed());

    let low = db.products().find_by_stock_threshold(5).await?;
    println!("  Low-stock (<= 5): {} products", low.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with deterministic data.
fn generate_product(
    category: &str,
    name: &str,
    size: &str,
    price_addon: i64,
    seed: usize,
) -> NewProduct {
    // $0.99 - $24.98 base, plus size add-on
    let price_cents = 99 + ((seed * 37) % 2400) as i64 + price_addon;

    NewProduct {
        name: format!("{} {}", name, size),
        description: Some(format!("{} {} ({})", size, name.to_lowercase(), category)),
        quantity: ((seed * 7) % 26) as i64,
        price: price_cents as f64 / 100.0,
        category: Some(category.to_string()),
    }
}
