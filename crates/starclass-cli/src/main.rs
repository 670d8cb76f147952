//! starclass - classifier and training set registry
//!
//! Usage:
//!   starclass list                  # List classifiers and training sets
//!   starclass check keplerq9v2      # Is a training set installed?
//!   starclass status                # Availability of every training set

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starclass_core::availability::{AvailabilityChecker, AvailabilityReport};
use starclass_core::classifier::{classifier_list, lookup_classifier};
use starclass_core::config::{DataRootSource, TSETS_ENV_VAR};
use starclass_core::trainingset::{lookup_trainingset, resolve_trainingset, trainingset_list};

#[derive(Parser)]
#[command(name = "starclass")]
#[command(about = "Stellar classifier and training set registry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered classifiers and training sets
    List {
        /// What to list (classifiers or trainingsets)
        kind: Option<String>,
    },

    /// Check whether a training set's data is installed
    ///
    /// Exits with status 1 when the data is missing.
    Check {
        /// Training set key (e.g. keplerq9v2)
        trainingset: String,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show availability of every training set
    ///
    /// The data root is taken from STARCLASS_TSETS when set.
    Status {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
    /// Only show issues (non-zero exit if problems)
    Quiet,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "starclass_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { kind } => run_list(kind.as_deref())?,
        Commands::Check {
            trainingset,
            format,
        } => {
            let exit_code = run_check(&trainingset, format)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Commands::Status { format } => {
            let exit_code = run_status(format)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

// =============================================================================
// Commands
// =============================================================================

fn run_list(kind: Option<&str>) -> Result<()> {
    match kind {
        Some("classifiers" | "classifier") => print_classifiers(),
        Some("trainingsets" | "trainingset" | "tsets") => print_trainingsets(),
        None => {
            print_classifiers();
            println!();
            print_trainingsets();
        }
        Some(other) => anyhow::bail!(
            "Unknown list kind: {}. Use 'classifiers' or 'trainingsets'",
            other
        ),
    }
    Ok(())
}

fn run_check(key: &str, format: OutputFormat) -> Result<i32> {
    let checker = AvailabilityChecker::new();
    let available = checker.is_available(key)?;

    match format {
        OutputFormat::Table => {
            let tset = resolve_trainingset(key)?;
            let root = checker.data_root()?;
            println!("Training set: {}", tset.key());
            println!("Marker:       {}", tset.todo_file(root.path()).display());
            println!("Status:       {}", availability_label(available));
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "schema_version": 1,
                "trainingset": key,
                "available": available,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Quiet => {
            if !available {
                println!("{} is not available", key);
            }
        }
    }

    Ok(if available { 0 } else { 1 })
}

fn run_status(format: OutputFormat) -> Result<i32> {
    let report = AvailabilityChecker::new().status()?;
    tracing::debug!(
        available = report.summary.available,
        missing = report.summary.missing,
        "collected availability report"
    );

    match format {
        OutputFormat::Table => {
            print_table(&report);
            Ok(0)
        }
        OutputFormat::Json => {
            print_json(&report)?;
            Ok(0)
        }
        OutputFormat::Quiet => Ok(print_quiet(&report)),
    }
}

// =============================================================================
// Output
// =============================================================================

fn print_classifiers() {
    let keys = classifier_list();
    println!("Classifiers ({}):", keys.len());
    for key in keys {
        if let Some(classifier) = lookup_classifier(key) {
            println!("  {:<12} {}", key, classifier.description());
        }
    }
}

fn print_trainingsets() {
    let keys = trainingset_list();
    println!("Training sets ({}):", keys.len());
    println!("  {:<16} {:<6} Linfit", "Key", "Level");
    println!("  {}", "-".repeat(30));
    for key in keys {
        let tset = lookup_trainingset(key);
        println!(
            "  {:<16} {:<6} {}",
            key,
            tset.data_level().as_str(),
            if tset.linfit() { "yes" } else { "no" }
        );
    }
}

fn print_table(report: &AvailabilityReport) {
    let source = match report.source {
        DataRootSource::Environment => TSETS_ENV_VAR,
        DataRootSource::Default => "default",
    };
    println!("Data root: {} ({})", report.data_root.display(), source);
    println!();

    println!("  {:<16} {:<6} Status", "Training set", "Level");
    println!("  {}", "-".repeat(40));
    for tset in &report.trainingsets {
        println!(
            "  {:<16} {:<6} {}",
            tset.key,
            tset.data_level.as_str(),
            availability_label(tset.available)
        );
    }

    println!();
    println!(
        "{} of {} training sets available",
        report.summary.available, report.summary.total
    );
}

fn print_json(report: &AvailabilityReport) -> Result<()> {
    // Wrap in versioned output
    let output = serde_json::json!({
        "schema_version": 1,
        "data_root": report.data_root,
        "source": report.source,
        "trainingsets": report.trainingsets,
        "summary": report.summary,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_quiet(report: &AvailabilityReport) -> i32 {
    if report.summary.missing > 0 {
        println!("{} training sets missing", report.summary.missing);
        1
    } else {
        0
    }
}

fn availability_label(available: bool) -> String {
    if available {
        style("Available").green().to_string()
    } else {
        style("Missing").yellow().to_string()
    }
}
