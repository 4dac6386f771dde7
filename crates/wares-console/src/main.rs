//! Console demonstration for the wares libraries.
//!
//! Builds a small catalog, runs the stock filters, prints the matches, then
//! accumulates a few journal entries and writes their rendering to a file.
//!
//! Usage:
//!   wares [--journal <path>] [--filter-file <path>] [-v]

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wares_filter::{
    filter, Color, ColorPredicate, Item, Predicate, PredicateSpec, Size, SizePredicate,
};
use wares_journal::{save_to_file, Journal};

/// Catalog filtering and journaling demo
#[derive(Parser, Debug)]
#[command(name = "wares", version, about = "Catalog filtering and journaling demo")]
struct Args {
    /// Where to write the journal rendering
    #[arg(long, default_value = "journal.txt")]
    journal: PathBuf,

    /// Extra predicate spec document (.json, .yaml or .yml) to apply to the catalog
    #[arg(long)]
    filter_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let catalog = vec![
        Item::new("Apple", Size::Small, Color::Green),
        Item::new("Potter", Size::Medium, Color::Blue),
        Item::new("Truck", Size::Large, Color::Red),
        Item::new("Mansion", Size::Yuge, Color::Blue),
    ];

    println!("Catalog:");
    for item in &catalog {
        println!("  {item}");
    }

    print_matches("Red items", &catalog, &ColorPredicate::new(Color::Red));
    print_matches("Medium items", &catalog, &SizePredicate::new(Size::Medium));
    print_matches(
        "Blue medium items",
        &catalog,
        &ColorPredicate::new(Color::Blue).and(SizePredicate::new(Size::Medium)),
    );
    print_matches(
        "Blue yuge items",
        &catalog,
        &ColorPredicate::new(Color::Blue).and(SizePredicate::new(Size::Yuge)),
    );

    if let Some(path) = &args.filter_file {
        let predicate = load_predicate(path)?;
        let label = format!("Items matching {}", path.display());
        print_matches(&label, &catalog, predicate.as_ref());
    }

    let mut journal = Journal::new();
    journal.add("Filtered the catalog by color and size.");
    journal.add("The blue medium search found Potter.");
    journal.add("Restock yuge blue mansions.");

    println!("\nJournal:");
    print!("{journal}");

    save_to_file(&journal, &args.journal)
        .with_context(|| format!("writing journal to {}", args.journal.display()))?;
    println!("\nJournal written to {}", args.journal.display());

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_matches<P: Predicate + ?Sized>(label: &str, catalog: &[Item], predicate: &P) {
    println!("\n{label}:");
    let mut matched = false;
    for item in filter(catalog, predicate) {
        matched = true;
        println!("  {item}");
    }
    if !matched {
        println!("  (none)");
    }
}

fn load_predicate(path: &Path) -> anyhow::Result<Box<dyn Predicate>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading predicate spec {}", path.display()))?;

    let spec = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => PredicateSpec::from_yaml(&text),
        _ => PredicateSpec::from_json(&text),
    }
    .with_context(|| format!("parsing predicate spec {}", path.display()))?;

    tracing::debug!(?spec, "loaded predicate spec");
    let predicate = spec
        .compile()
        .with_context(|| format!("compiling predicate spec {}", path.display()))?;
    Ok(predicate)
}
