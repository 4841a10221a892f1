//! insight - CSV dataset summary CLI
//!
//! Command-line front end for uploading datasets, summarizing them and
//! plotting column histograms.

use clap::{Parser, Subcommand, ValueEnum};
use csv_insight::dashboard::{Dashboard, DashboardConfig, DashboardView};
use csv_insight::error::Result;
use log::info;
use std::path::{Path, PathBuf};

/// Output format for summaries
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
    /// HTML statistics table only
    Html,
}

/// Summarize and plot CSV datasets
#[derive(Parser)]
#[command(name = "insight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy a CSV file into the uploads directory under a unique name
    Upload {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Summarize a CSV file
    Summary {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Summarize a CSV file and plot a histogram of one column
    Plot {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Column to plot (normalized name, e.g. "age")
        #[arg(short = 'c', long)]
        column: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate an example configuration file
    ExampleConfig {
        /// Output path for the example YAML
        #[arg(short, long, default_value = "insight.yaml")]
        output: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Upload { file } => cmd_upload(cli.config.as_deref(), &file),
        Commands::Summary { file, format } => cmd_summary(cli.config.as_deref(), &file, format),
        Commands::Plot {
            file,
            column,
            format,
        } => cmd_plot(cli.config.as_deref(), &file, &column, format),
        Commands::ExampleConfig { output } => cmd_example_config(&output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn open_dashboard(config_path: Option<&Path>) -> Result<Dashboard> {
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            DashboardConfig::from_file(path)?
        }
        None => DashboardConfig::default(),
    };
    Dashboard::new(config)
}

/// Store a file in the uploads directory
fn cmd_upload(config_path: Option<&Path>, file: &Path) -> Result<()> {
    let dashboard = open_dashboard(config_path)?;
    let stored = dashboard.uploads().save_from_path(file)?;
    println!("{}", stored.display());
    Ok(())
}

/// Print a dataset summary
fn cmd_summary(config_path: Option<&Path>, file: &Path, format: OutputFormat) -> Result<()> {
    let dashboard = open_dashboard(config_path)?;
    let view = dashboard.view(Some(file), None)?;
    print_view(&view, format)
}

/// Plot a column and print the summary
fn cmd_plot(
    config_path: Option<&Path>,
    file: &Path,
    column: &str,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = open_dashboard(config_path)?;
    let view = dashboard.view(Some(file), Some(column))?;
    if let Some(artifact) = &view.plot {
        info!(
            "Plotted {} values of '{}' to {:?}",
            artifact.n_values, artifact.column, artifact.path
        );
    }
    print_view(&view, format)
}

fn print_view(view: &DashboardView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(view)?),
        OutputFormat::Html => println!("{}", view.report.describe_html()),
        OutputFormat::Text => {
            print!("{}", view.report);
            if let Some(artifact) = &view.plot {
                println!();
                println!("Plot: {}", artifact.path.display());
            }
        }
    }
    Ok(())
}

/// Write the default configuration as YAML
fn cmd_example_config(output_path: &Path) -> Result<()> {
    let yaml = DashboardConfig::default().to_yaml()?;
    std::fs::write(output_path, &yaml)?;
    eprintln!("Wrote example configuration to {:?}", output_path);
    eprintln!();
    eprintln!("Contents:");
    println!("{}", yaml);
    Ok(())
}
