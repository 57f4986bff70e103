//! Basic logger usage example
//!
//! Demonstrates the default instance, a dedicated file logger, and the
//! fallback to standard error when a log file cannot be opened.
//!
//! Run with: cargo run --example basic_usage

use flg::prelude::*;
use flg::{logf, logln};

fn main() -> Result<()> {
    println!("=== flg - Basic Usage Example ===\n");

    println!("1. Default instance (standard error):");
    flg::set_prefix("[main] ");
    logln!("starting with {} workers", 4)?;
    flg::println_values(&[&"values", &"joined", &"by", &"spaces"])?;

    println!("\n2. Dedicated logger appending to a file:");
    let path = std::env::temp_dir().join("flg_basic_usage.log");
    let logger = Logger::builder().filename(&path).prefix("[file] ").build();
    logln!(logger => "written to {}", path.display())?;
    logf!(logger => "no newline is added by logf!")?;
    logger.write("\n")?;
    println!("   wrote two lines to {}", path.display());

    println!("\n3. Unopenable file falls back to standard error:");
    logger.set_filename("/nonexistent/dir/app.log");
    println!("   sink is now {}", logger.sink_kind());
    logger.set_time_format("");
    logln!(logger => "this line goes to standard error")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
