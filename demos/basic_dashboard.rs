//! Basic example demonstrating the dashboard pipeline.
//!
//! This example shows how to:
//! 1. Upload a dataset
//! 2. Summarize it
//! 3. Plot a column histogram

use csv_insight::prelude::*;

fn main() -> Result<()> {
    println!("=== CSV Insight Example ===\n");

    let base = std::env::temp_dir().join("csv-insight-demo");
    let dashboard = Dashboard::new(DashboardConfig::default().with_base_dir(&base))?;

    // Upload a small dataset
    let csv = "Name, Age ,Height\nAlice,30,1.65\nBob,,1.80\nCarol,50,\nDan,41,1.72\n";
    let current = dashboard.upload("people.csv", csv.as_bytes())?;
    println!("Stored upload at {}\n", current.display());

    // Summary only
    let view = dashboard.view(Some(&current), None)?;
    println!("{}", view.report);

    // Summary plus histogram
    let view = dashboard.view(Some(&current), Some("age"))?;
    if let Some(artifact) = &view.plot {
        println!(
            "Histogram of '{}' ({} values) written to {}",
            artifact.column,
            artifact.n_values,
            artifact.path.display()
        );
    }

    // Errors are explicit
    match dashboard.view(Some(&current), Some("weight")) {
        Err(e) => println!("Plotting 'weight' failed: {}", e),
        Ok(_) => println!("Unexpectedly plotted 'weight'"),
    }

    Ok(())
}
