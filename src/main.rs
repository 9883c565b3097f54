use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;
use wiki2neo::config::{CSV_BUFFER_SIZE, LINKS_CSV_FILENAME, PAGES_CSV_FILENAME, PROGRESS_N};
use wiki2neo::extract::{run_extraction, ExtractConfig, SpinnerProgress};
use wiki2neo::input::open_dump;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Parse a Wikipedia pages-articles XML dump into two Neo4j import CSV files:
/// nodes (`title:ID,id`) and relationships (`:START_ID,:END_ID`).
///
/// Reads from stdin when no input file is given.
#[derive(Parser)]
#[command(name = "wiki2neo")]
#[command(about = "Convert a Wikipedia XML dump into Neo4j bulk-import CSV files")]
struct Cli {
    /// Wikipedia XML dump (.xml or .xml.bz2); stdin if omitted
    #[arg(value_name = "WIKI_XML_INFILE")]
    input: Option<PathBuf>,

    /// Node (pages) CSV output file
    #[arg(short, long, default_value = PAGES_CSV_FILENAME)]
    pages_outfile: PathBuf,

    /// Relationship (links) CSV output file
    #[arg(short, long, default_value = LINKS_CSV_FILENAME)]
    links_outfile: PathBuf,

    /// Limit number of pages to process (for testing)
    #[arg(long)]
    limit: Option<u64>,

    /// Report progress every N pages (0 disables)
    #[arg(long, default_value_t = PROGRESS_N)]
    progress_interval: u64,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(BufWriter::with_capacity(CSV_BUFFER_SIZE, file))
}

fn run(cli: Cli) -> Result<()> {
    let input = open_dump(cli.input.as_deref())?;
    let nodes = create_output(&cli.pages_outfile)?;
    let edges = create_output(&cli.links_outfile)?;

    let config = ExtractConfig {
        progress_interval: cli.progress_interval,
        limit: cli.limit,
    };
    let mut progress = SpinnerProgress::new();

    info!("Starting extraction pass");
    let start = Instant::now();
    let result = run_extraction(input, nodes, edges, &config, &mut progress);
    progress.finish();
    let stats = result?;
    let duration = start.elapsed();

    println!();
    println!("=== Summary ===");
    println!("Processing time:    {:.2}s", duration.as_secs_f64());
    println!(
        "Pages:              {} -> {}",
        stats.pages(),
        cli.pages_outfile.display()
    );
    println!(
        "Links:              {} -> {}",
        stats.links(),
        cli.links_outfile.display()
    );
    println!("Edges written:      {}", stats.edges());
    if stats.missing_ids() > 0 || stats.missing_titles() > 0 {
        println!("Pages without id:    {}", stats.missing_ids());
        println!("Pages without title: {}", stats.missing_titles());
    }
    println!();
    println!("Import CSVs into Neo4j:");
    println!(
        "neo4j-admin import --nodes:Page {} \\",
        cli.pages_outfile.display()
    );
    println!(
        "\t--relationships:LINKS_TO {} \\",
        cli.links_outfile.display()
    );
    println!("\t--ignore-duplicate-nodes --ignore-missing-nodes --multiline-fields");

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
