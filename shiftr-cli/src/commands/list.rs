//! List command implementation

use anyhow::Result;

use shiftr_core::{MULTI_LINE_CHAIN, SINGLE_LINE_CHAIN};

/// Prints both matcher chains in their classification priority order.
pub fn types() -> Result<()> {
    println!("Single-line types (priority order):");
    for (idx, entry) in SINGLE_LINE_CHAIN.iter().enumerate() {
        println!("  {:2}. {}", idx + 1, entry.shiftable_type);
    }
    println!();
    println!("Multi-line types (priority order):");
    for (idx, entry) in MULTI_LINE_CHAIN.iter().enumerate() {
        println!("  {:2}. {}", idx + 1, entry.shiftable_type);
    }
    Ok(())
}
