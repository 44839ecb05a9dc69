//! CLI for the valuation stock-valuation library.
//!
//! This binary provides a command-line interface for discovering,
//! introspecting, and computing valuation models from the valuation library.

use clap::{Args, Parser, Subcommand};
use std::collections::HashMap;
use std::io::Read;
use valuation::{
    FinancialMetrics, ModelCategory, ModelRegistry, ValuationResults, calculate_all_values,
};

#[derive(Parser)]
#[command(name = "valuation")]
#[command(about = "Value-investing stock valuation calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available valuation models
    List,
    /// Show information about a specific model
    Info {
        /// Model name
        model: String,
    },
    /// Compute valuations from financial metrics
    Compute(ComputeArgs),
}

#[derive(Args)]
struct ComputeArgs {
    /// Earnings per share
    #[arg(long, default_value_t = 0.0, value_parser = coerce_number)]
    eps: f64,

    /// Annual growth rate, percent
    #[arg(long, default_value_t = 0.0, value_parser = coerce_number)]
    growth_rate: f64,

    /// Required rate of return, percent
    #[arg(long, default_value_t = 15.0, value_parser = coerce_number)]
    required_return: f64,

    /// Price-to-earnings ratio (accepted, not used by any model yet)
    #[arg(long, default_value_t = 0.0, value_parser = coerce_number)]
    pe_ratio: f64,

    /// Book value per share
    #[arg(long, default_value_t = 0.0, value_parser = coerce_number)]
    book_value: f64,

    /// Current-period free cash flow
    #[arg(long, default_value_t = 0.0, value_parser = coerce_number)]
    free_cash_flow: f64,

    /// Shares outstanding
    #[arg(long, default_value_t = 0.0, value_parser = coerce_number)]
    shares: f64,

    /// Current assets
    #[arg(long, default_value_t = 0.0, value_parser = coerce_number)]
    net_current_assets: f64,

    /// Total liabilities
    #[arg(long, default_value_t = 0.0, value_parser = coerce_number)]
    total_liabilities: f64,

    /// Read metrics from a camelCase JSON file instead of flags ("-" for stdin)
    #[arg(long)]
    input: Option<String>,

    /// Compute a single model instead of all three
    #[arg(long)]
    model: Option<String>,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Numeric coercion at the input boundary: anything that fails to parse
/// becomes 0 rather than an argument error.
#[allow(clippy::unnecessary_wraps)]
fn coerce_number(raw: &str) -> Result<f64, std::convert::Infallible> {
    Ok(raw.trim().parse().unwrap_or(0.0))
}

fn main() {
    let cli = Cli::parse();
    let registry = ModelRegistry::with_defaults();

    match cli.command {
        Commands::List => list_models(&registry),
        Commands::Info { model } => show_model_info(&registry, &model),
        Commands::Compute(args) => compute(&registry, &args),
    }
}

/// List all available models grouped by category.
fn list_models(registry: &ModelRegistry) {
    let all_info = registry.all_info();

    // Group models by category
    let mut by_category: HashMap<ModelCategory, Vec<_>> = HashMap::new();
    for info in all_info {
        by_category.entry(info.category).or_default().push(info);
    }

    println!("Available Models ({} total)\n", registry.len());

    // Sort categories for consistent output
    let mut categories: Vec<_> = by_category.keys().collect();
    categories.sort_by_key(|c| format!("{}", c));

    for category in categories {
        println!("{}:", category);
        let mut models = by_category.get(category).unwrap().clone();
        models.sort_by_key(|m| m.name.clone());

        for info in models {
            println!("  {} - {}", info.name, info.description);
        }
        println!();
    }
}

/// Show detailed information about a specific model.
fn show_model_info(registry: &ModelRegistry, model_name: &str) {
    let all_info = registry.all_info();

    let info = all_info
        .iter()
        .find(|m| m.name == model_name)
        .unwrap_or_else(|| {
            eprintln!("Error: Model '{}' not found", model_name);
            eprintln!("\nAvailable models:");
            for info in &all_info {
                eprintln!("  {}", info.name);
            }
            std::process::exit(1);
        });

    println!("Model: {}", info.name);
    println!("Category: {}", info.category);
    println!("Description: {}", info.description);
    println!("Required fields:");
    for field in &info.required_fields {
        println!("  - {}", field);
    }
}

/// Compute one or all models for the metrics given on the command line.
fn compute(registry: &ModelRegistry, args: &ComputeArgs) {
    let metrics = match &args.input {
        Some(path) => read_metrics(path),
        None => metrics_from_flags(args),
    };

    match &args.model {
        Some(name) => {
            let value = registry.compute(name, &metrics).unwrap_or_else(|err| {
                eprintln!("Error: {}", err);
                eprintln!("\nAvailable models:");
                for name in registry.names() {
                    eprintln!("  {}", name);
                }
                std::process::exit(1);
            });

            if args.json {
                println!("{}", serde_json::json!({ "model": name, "value": value }));
            } else {
                println!("{}: ${:.2}", name, value);
            }
        }
        None => {
            let results = calculate_all_values(&metrics);
            if args.json {
                print_json(&results);
            } else {
                println!("Valuation Results");
                println!("Graham Formula Value: ${:.2}", results.graham_value);
                println!("DCF Value: ${:.2}", results.dcf_value);
                println!("NCAV per Share: ${:.2}", results.ncav_value);
            }
        }
    }
}

/// Assemble a metrics snapshot from the individual compute flags.
fn metrics_from_flags(args: &ComputeArgs) -> FinancialMetrics {
    FinancialMetrics {
        eps: args.eps,
        growth_rate: args.growth_rate,
        required_return: args.required_return,
        pe_ratio: args.pe_ratio,
        book_value: args.book_value,
        free_cash_flow: args.free_cash_flow,
        shares: args.shares,
        net_current_assets: args.net_current_assets,
        total_liabilities: args.total_liabilities,
    }
}

/// Read a JSON metrics document from a file, or stdin when `path` is `-`.
fn read_metrics(path: &str) -> FinancialMetrics {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).unwrap_or_else(|err| {
            eprintln!("Error reading stdin: {}", err);
            std::process::exit(1);
        });
        buf
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|err| {
            eprintln!("Error reading '{}': {}", path, err);
            std::process::exit(1);
        })
    };

    FinancialMetrics::from_json(&raw).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    })
}

fn print_json(results: &ValuationResults) {
    match serde_json::to_string_pretty(results) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Error serializing results: {}", err);
            std::process::exit(1);
        }
    }
}
