//! Integration tests for the upload, summarize and plot pipeline.

use csv_insight::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Write a CSV with a mix of text, integer and sparse float columns.
fn create_dataset_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, " Region ,Units,Price , Discount").unwrap();
    for i in 0..40 {
        let region = ["north", "south", "east", "west"][i % 4];
        let units = 10 + (i * 7) % 50;
        let price = 2.5 + i as f64 * 0.25;
        let discount = if i % 5 == 0 { String::new() } else { format!("{:.2}", (i % 3) as f64 * 0.1) };
        writeln!(file, "{},{},{},{}", region, units, price, discount).unwrap();
    }
    file.flush().unwrap();
    file
}

fn png_signature(path: &std::path::Path) -> Vec<u8> {
    fs::read(path).unwrap().into_iter().take(8).collect()
}

#[test]
fn test_summary_of_dataset() {
    let file = create_dataset_csv();
    let table = Table::from_csv(file.path()).unwrap();
    let report = summarize(&table);

    assert_eq!(report.shape, (40, 4));
    assert_eq!(table.column_names(), vec!["region", "units", "price", "discount"]);
    assert_eq!(report.numeric_columns, vec!["units", "price", "discount"]);
    assert_eq!(report.missing("discount"), Some(8));
    assert_eq!(report.total_missing, 8);

    let sum: usize = report.missing_per_column.iter().map(|(_, n)| n).sum();
    assert_eq!(sum, report.total_missing);

    let price = report.describe_table.get("price").unwrap();
    assert_eq!(price.count, 40);
    assert!((price.min - 2.5).abs() < 1e-12);
    assert!((price.max - 12.25).abs() < 1e-12);
    assert!((price.q50 - 7.375).abs() < 1e-12);

    let discount = report.describe_table.get("discount").unwrap();
    assert_eq!(discount.count, 32);
}

#[test]
fn test_shape_matches_columns() {
    let file = create_dataset_csv();
    let table = Table::from_csv(file.path()).unwrap();
    let (rows, cols) = table.shape();
    assert_eq!(cols, table.columns().len());
    for column in table.columns() {
        assert_eq!(column.len(), rows);
    }
}

#[test]
fn test_numeric_columns_are_exactly_the_numeric_ones() {
    let file = create_dataset_csv();
    let table = Table::from_csv(file.path()).unwrap();

    for column in table.columns() {
        let every_value_numeric = column
            .cells()
            .iter()
            .all(|c| c.is_missing() || c.as_number().is_some());
        assert_eq!(
            table.numeric_columns().contains(&column.name()),
            every_value_numeric && !column.is_empty()
        );
    }
}

#[test]
fn test_plot_uses_non_missing_values() {
    let dir = TempDir::new().unwrap();
    let store = PlotStore::new(dir.path()).unwrap();

    let file = create_dataset_csv();
    let table = Table::from_csv(file.path()).unwrap();

    let units = plot(&table, "units", &store, &PlotOptions::default()).unwrap();
    assert_eq!(units.n_values, 40);
    assert_eq!(units.histogram.total(), 40);
    assert_eq!(units.histogram.n_bins(), 20);

    let discount = plot(&table, "discount", &store, &PlotOptions::default()).unwrap();
    assert_eq!(discount.n_values, 40 - 8);
    assert_eq!(discount.histogram.total(), 32);
}

#[test]
fn test_plot_writes_png() {
    let dir = TempDir::new().unwrap();
    let store = PlotStore::new(dir.path().join("plots")).unwrap();

    let rows = vec![
        vec!["30".to_string()],
        vec!["".to_string()],
        vec!["50".to_string()],
    ];
    let table = Table::from_records(&["age"], &rows).unwrap();

    let artifact = plot(&table, "age", &store, &PlotOptions::default()).unwrap();
    assert!(artifact.name.starts_with("plot_"));
    assert!(artifact.name.ends_with(".png"));
    assert_eq!(artifact.n_values, 2);
    assert_eq!(png_signature(&artifact.path), b"\x89PNG\r\n\x1a\n".to_vec());

    let missing = plot(&table, "height", &store, &PlotOptions::default());
    assert!(matches!(missing, Err(InsightError::ColumnNotFound(_))));
}

#[test]
fn test_repeated_plots_never_overwrite() {
    let dir = TempDir::new().unwrap();
    let store = PlotStore::new(dir.path()).unwrap();

    let file = create_dataset_csv();
    let table = Table::from_csv(file.path()).unwrap();

    let first = plot(&table, "price", &store, &PlotOptions::default()).unwrap();
    let second = plot(&table, "price", &store, &PlotOptions::default()).unwrap();

    assert_ne!(first.name, second.name);
    assert!(first.path.exists());
    assert!(second.path.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_dashboard_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = DashboardConfig::default().with_base_dir(dir.path());
    let dashboard = Dashboard::new(config).unwrap();

    let bytes = b"Name, Age \nAlice,30\nBob,\nCarol,50\n";
    let current = dashboard.upload("people.csv", bytes).unwrap();
    assert!(current.starts_with(dir.path().join("uploads")));

    let view = dashboard.view(Some(&current), Some("age")).unwrap();
    assert_eq!(view.report.shape, (3, 2));
    assert_eq!(view.report.numeric_columns, vec!["age"]);
    assert_eq!(view.report.missing("name"), Some(0));
    assert_eq!(view.report.missing("age"), Some(1));

    let artifact = view.plot.unwrap();
    assert_eq!(artifact.column, "age");
    assert_eq!(artifact.n_values, 2);
    assert!(artifact.path.starts_with(dir.path().join("static/plots")));

    let json = serde_json::to_value(&view.report).unwrap();
    assert_eq!(json["total_missing"], 1);
}

#[test]
fn test_empty_dataset() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "a,b").unwrap();
    file.flush().unwrap();

    let table = Table::from_csv(file.path()).unwrap();
    let report = summarize(&table);
    assert_eq!(report.shape, (0, 2));
    assert_eq!(report.total_missing, 0);
    assert!(report.describe_table.is_empty());
    assert!(report.describe_html().contains("No numeric columns"));
}

#[test]
fn test_nan_spellings_dropped_from_summary_and_plot() {
    let dir = TempDir::new().unwrap();
    let store = PlotStore::new(dir.path()).unwrap();
    let table = Table::from_reader("x\n1\nNAN\n3\nNan\n".as_bytes()).unwrap();

    let report = summarize(&table);
    assert_eq!(report.missing("x"), Some(2));
    assert_eq!(report.total_missing, 2);
    let stats = report.describe_table.get("x").unwrap();
    assert_eq!(stats.count, 2);
    assert!((stats.mean - 2.0).abs() < 1e-12);
    assert!((stats.min - 1.0).abs() < 1e-12);
    assert!((stats.max - 3.0).abs() < 1e-12);

    let artifact = plot(&table, "x", &store, &PlotOptions::default()).unwrap();
    assert_eq!(artifact.n_values, 2);
    assert_eq!(artifact.histogram.total(), 2);
}

#[test]
fn test_infinite_values_summarize_but_do_not_plot() {
    let dir = TempDir::new().unwrap();
    let store = PlotStore::new(dir.path()).unwrap();
    let table = Table::from_reader("x\n1\ninf\n3\n".as_bytes()).unwrap();

    let report = summarize(&table);
    assert_eq!(report.numeric_columns, vec!["x"]);
    assert_eq!(report.total_missing, 0);
    let stats = report.describe_table.get("x").unwrap();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.max, f64::INFINITY);
    assert!((stats.min - 1.0).abs() < 1e-12);

    let result = plot(&table, "x", &store, &PlotOptions::default());
    assert!(matches!(result, Err(InsightError::InvalidParameter(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
