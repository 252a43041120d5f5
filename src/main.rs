// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use luxe_search::utils::logging::{format_match_badge, format_success, format_warning};
use luxe_search::{
    Config, ContentItem, ContentRepository, JsonStore, KindFilter, ModelProfile, Ranked,
    SearchEngine, SearchFilters, SortBy, SortOrder, Validator,
};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "luxe_search")]
#[command(version = "0.1.0")]
#[command(about = "Relevance search over the LUXE media catalog", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the demo catalog (explicit, never triggered by a read)
    Seed {
        #[arg(long)]
        force: bool,
    },

    /// Search the catalog and print ranked results
    Search {
        /// Free-text query (may be empty when only filtering)
        #[arg(default_value = "")]
        query: String,

        #[arg(short, long, default_value = "all")]
        kind: KindFilter,

        #[arg(long)]
        category: Option<String>,

        /// Required tag, repeatable; items must carry all of them
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Model name, repeatable; items must carry at least one
        #[arg(short, long = "model")]
        models: Vec<String>,

        #[arg(long)]
        featured: bool,

        /// Inclusive lower date bound (RFC 3339)
        #[arg(long, value_name = "DATE")]
        from: Option<DateTime<Utc>>,

        /// Inclusive upper date bound (RFC 3339)
        #[arg(long, value_name = "DATE")]
        to: Option<DateTime<Utc>>,

        #[arg(long, default_value = "relevance")]
        sort: SortBy,

        #[arg(long, default_value = "desc")]
        order: SortOrder,

        /// Per-collection result cap (e.g. 8 for the compact modal view)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit the full result structure as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print "did you mean" chips for a query
    Suggest {
        query: String,

        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },

    /// Catalog statistics
    Stats,

    /// Delete the catalog file
    Reset {
        #[arg(long)]
        confirm: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    luxe_search::utils::logging::init_logger(cli.color, cli.verbose);

    info!("LUXE catalog search");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Seed { force } => cmd_seed(&config, force)?,
        Commands::Search {
            query,
            kind,
            category,
            tags,
            models,
            featured,
            from,
            to,
            sort,
            order,
            limit,
            json,
        } => {
            let filters = SearchFilters {
                kind,
                category,
                tags,
                models,
                featured,
                date_from: from,
                date_to: to,
                sort_by: sort,
                sort_order: order,
                limit: limit.or(config.search.result_limit),
            };
            cmd_search(&config, &query, &filters, json)?;
        }
        Commands::Suggest { query, limit } => cmd_suggest(&config, &query, limit)?,
        Commands::Stats => cmd_stats(&config)?,
        Commands::Reset { confirm } => cmd_reset(&config, confirm)?,
    }

    Ok(())
}

fn open_store(config: &Config) -> Result<JsonStore> {
    JsonStore::open(&config.storage.catalog_path)
        .map(|s| s.with_pretty(config.storage.pretty))
        .context("Failed to open catalog store")
}

fn cmd_seed(config: &Config, force: bool) -> Result<()> {
    let mut store = open_store(config)?;

    if store.seed(force)? {
        println!(
            "{}",
            format_success(&format!(
                "Seeded {} entries into {}",
                store.len(),
                store.path().display()
            ))
        );
    } else {
        println!(
            "{}",
            format_warning("Catalog already populated; pass --force to reseed")
        );
    }

    Ok(())
}

fn cmd_search(config: &Config, query: &str, filters: &SearchFilters, json: bool) -> Result<()> {
    let store = open_store(config)?;
    let corpus = store.corpus();

    let engine = SearchEngine::from_config(config);
    let start = Instant::now();
    let results = engine.search(&corpus, query, filters);
    info!(
        "Search completed in {:.2}ms ({} results)",
        start.elapsed().as_secs_f64() * 1000.0,
        results.total
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("\nNo results found for query: \"{}\"\n", query);
        if !results.suggestions.is_empty() {
            println!("Did you mean: {}", results.suggestions.join(", "));
        } else {
            println!("Try:");
            println!("  - Using different search terms");
            println!("  - Removing filters");
            println!("  - Seeding the catalog first (luxe_search seed)");
        }
        return Ok(());
    }

    println!("\nSearch Results for: \"{}\"\n", query);
    println!("Found {} result(s)\n", results.total);
    println!("{}", "=".repeat(72));

    if !results.videos.is_empty() {
        println!("\n{}", "Videos".bold());
        for (idx, ranked) in results.videos.iter().enumerate() {
            print_content_row(idx, ranked);
        }
    }

    if !results.galleries.is_empty() {
        println!("\n{}", "Galleries".bold());
        for (idx, ranked) in results.galleries.iter().enumerate() {
            print_content_row(idx, ranked);
        }
    }

    if !results.models.is_empty() {
        println!("\n{}", "Models".bold());
        for (idx, ranked) in results.models.iter().enumerate() {
            print_model_row(idx, ranked);
        }
    }

    println!("\n{}", "=".repeat(72));

    Ok(())
}

fn print_content_row(idx: usize, ranked: &Ranked<ContentItem>) {
    println!(
        "{}. {} {} (score: {})",
        idx + 1,
        ranked.item.title,
        format_match_badge(ranked.match_type),
        ranked.relevance_score
    );

    if !ranked.item.tags.is_empty() {
        println!("   tags: {}", ranked.item.tags.join(", "));
    }
    if let Some(description) = &ranked.item.description {
        println!("   {}", Validator::truncate_text(description, 72));
    }
}

fn print_model_row(idx: usize, ranked: &Ranked<ModelProfile>) {
    println!(
        "{}. {} {} (score: {})",
        idx + 1,
        ranked.item.name,
        format_match_badge(ranked.match_type),
        ranked.relevance_score
    );

    if let Some(famous_for) = &ranked.item.famous_for {
        println!("   known for: {}", famous_for);
    }
}

fn cmd_suggest(config: &Config, query: &str, limit: usize) -> Result<()> {
    let store = open_store(config)?;
    let corpus = store.corpus();

    let normalized = query.trim().to_lowercase();
    let chips = luxe_search::search::suggest::suggestions(&corpus, &normalized, limit);

    if chips.is_empty() {
        println!("No suggestions for \"{}\"", query);
    } else {
        println!("Did you mean: {}", chips.join(", "));
    }

    Ok(())
}

fn cmd_stats(config: &Config) -> Result<()> {
    let store = open_store(config)?;

    let featured = store
        .list_videos()
        .iter()
        .filter(|v| v.is_featured)
        .count();
    let tags: BTreeSet<String> = store
        .list_videos()
        .iter()
        .chain(store.list_galleries().iter())
        .flat_map(|item| item.tags.iter().map(|t| t.to_lowercase()))
        .collect();

    println!("Catalog: {}", store.path().display());
    println!("  videos:    {} ({} featured)", store.list_videos().len(), featured);
    println!("  galleries: {}", store.list_galleries().len());
    println!("  models:    {}", store.list_models().len());
    println!("  distinct tags: {}", tags.len());

    Ok(())
}

fn cmd_reset(config: &Config, confirm: bool) -> Result<()> {
    if !confirm {
        println!(
            "{}",
            format_warning("This will delete the catalog. Use --confirm to proceed")
        );
        return Ok(());
    }

    let mut store = open_store(config)?;
    store.purge().context("Failed to delete catalog")?;
    println!("{}", format_success("Catalog deleted"));

    Ok(())
}
