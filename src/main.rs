use anyhow::{Context, Result};
use std::env;
use std::fs;

use receipt_points::{breakdown, validate, RawReceipt};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        score_file(&args[1])?;
    } else {
        eprintln!("Usage: receipt-points <receipt.json>");
        eprintln!("   Validates a receipt file and prints its points breakdown.");
        eprintln!("   For the HTTP API, run: cargo run --bin receipt-server --features server");
        std::process::exit(2);
    }

    Ok(())
}

fn score_file(path: &str) -> Result<()> {
    println!("🧾 Receipt Points - Offline Scoring");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load receipt JSON
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt file: {}", path))?;
    let raw: RawReceipt =
        serde_json::from_str(&content).context("Failed to parse receipt JSON")?;

    // 2. Validate
    let receipt = match validate(raw) {
        Ok(receipt) => receipt,
        Err(err) => {
            eprintln!("❌ Receipt rejected: {}", err);
            std::process::exit(1);
        }
    };
    println!("✓ Receipt is valid: {} ({} items)", receipt.retailer, receipt.items.len());

    // 3. Score, rule by rule
    println!("\n📊 Points breakdown:");
    let awards = breakdown(&receipt);
    for award in &awards {
        println!("   {:<24} {:>5}", award.rule, award.points);
    }

    let total: u64 = awards.iter().map(|a| a.points).sum();
    println!("\n🎉 Total points: {}", total);

    Ok(())
}
