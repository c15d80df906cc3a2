use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use anthology::{
    execute_stage1, execute_stage2, execute_stage3, parse_articles_file, parse_enhancements_file,
    parse_order_file, write_module, ArticleRecord, AssemblyReport, EmitTarget,
};

#[derive(Parser)]
#[command(name = "anthology")]
#[command(author, version, about = "Article data-module assembler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge article fragments and write the generated data module
    Assemble {
        /// Input fragment files (JSON arrays of article records), in load order
        #[arg(short, long, required = true)]
        input: Vec<PathBuf>,

        /// Enhancement file (JSON object mapping slug to enhancement)
        #[arg(short, long)]
        enhancements: Option<PathBuf>,

        /// Desired slug order, one per line; defaults to input order
        #[arg(long)]
        order: Option<PathBuf>,

        /// Output module file, overwritten wholesale
        #[arg(short, long)]
        output: PathBuf,

        /// Exported constant identifier in the generated module
        #[arg(long, default_value = "articles")]
        const_name: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Merge and resolve without writing, then print the diagnostics report
    Inspect {
        /// Input fragment files (JSON arrays of article records), in load order
        #[arg(short, long, required = true)]
        input: Vec<PathBuf>,

        /// Enhancement file (JSON object mapping slug to enhancement)
        #[arg(short, long)]
        enhancements: Option<PathBuf>,

        /// Desired slug order, one per line; defaults to input order
        #[arg(long)]
        order: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assemble {
            input,
            enhancements,
            order,
            output,
            const_name,
            verbose,
        } => {
            setup_logging(verbose);
            assemble(input, enhancements, order, output, const_name)
        }
        Commands::Inspect {
            input,
            enhancements,
            order,
            verbose,
        } => {
            setup_logging(verbose);
            inspect(input, enhancements, order)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn assemble(
    inputs: Vec<PathBuf>,
    enhancements: Option<PathBuf>,
    order: Option<PathBuf>,
    output: PathBuf,
    const_name: String,
) -> Result<()> {
    let (records, report) = run_stages(&inputs, enhancements.as_deref(), order.as_deref())?;

    info!("Stage 3: Emitting module source...");
    let target = EmitTarget::with_const_name(const_name);
    let module =
        execute_stage3(&records, &target).context("Emission failed, no output written")?;

    write_module(&output, &module)?;
    info!("Output written to {:?}", output);

    println!();
    report.print();

    Ok(())
}

fn inspect(
    inputs: Vec<PathBuf>,
    enhancements: Option<PathBuf>,
    order: Option<PathBuf>,
) -> Result<()> {
    let (_records, report) = run_stages(&inputs, enhancements.as_deref(), order.as_deref())?;

    report.print();

    Ok(())
}

/// Load all inputs and run Stages 1 and 2, accumulating the batch report
fn run_stages(
    inputs: &[PathBuf],
    enhancements_path: Option<&Path>,
    order_path: Option<&Path>,
) -> Result<(Vec<ArticleRecord>, AssemblyReport)> {
    let mut articles = Vec::new();
    for path in inputs {
        info!("Loading fragments from {:?}", path);
        let fragments = parse_articles_file(path)?;
        info!("Loaded {} records from {:?}", fragments.len(), path);
        articles.extend(fragments);
    }
    let articles_loaded = articles.len();

    let enhancements = match enhancements_path {
        Some(path) => {
            info!("Loading enhancements from {:?}", path);
            parse_enhancements_file(path)?
        }
        None => HashMap::new(),
    };
    let enhancements_loaded = enhancements.len();

    // Desired order defaults to the first-seen input order of the fragments
    let order = match order_path {
        Some(path) => {
            info!("Loading slug order from {:?}", path);
            parse_order_file(path)?
        }
        None => {
            let mut seen = HashSet::new();
            articles
                .iter()
                .filter(|a| seen.insert(a.slug.clone()))
                .map(|a| a.slug.clone())
                .collect()
        }
    };

    info!("Stage 1: Merging enhancements...");
    let stage1 = execute_stage1(articles, &enhancements);
    info!(
        "Stage 1: {} records, {} enhancements applied",
        stage1.records.len(),
        stage1.enhancements_applied
    );

    info!("Stage 2: Resolving emission order...");
    let stage2 = execute_stage2(&order, &stage1.records);
    info!(
        "Stage 2: {} records resolved, {} ordered slugs missing",
        stage2.records.len(),
        stage2.missing_slugs.len()
    );

    let report = AssemblyReport {
        articles_loaded,
        enhancements_loaded,
        enhancements_applied: stage1.enhancements_applied,
        records_emitted: stage2.records.len(),
        duplicate_slugs: stage1.duplicate_slugs,
        missing_slugs: stage2.missing_slugs,
        unused_enhancements: stage1.unused_enhancements,
    };

    Ok((stage2.records, report))
}
