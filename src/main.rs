use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use storefront_search::catalog::{
    CatalogWatcher, CategoryFilter, FileProbe, ListingQuery, ProductPage, SnapshotProvider,
    SortOption, categories, filtered_products, load_items,
};
use storefront_search::config::SearchConfig;
use storefront_search::core::search::{ItemMatch, compute_matches_limited};
use storefront_search::logging::{self, LogTarget};
use storefront_search::runtime::Runtime;
use storefront_search::terminal::Terminal;
use storefront_search::{Result, StorefrontApp, StorefrontError};

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Product search over a storefront catalog")]
struct Cli {
    /// Catalog JSON file (`{"items": [...]}` or a bare array)
    #[arg(short, long, value_name = "PATH", global = true)]
    catalog: Option<PathBuf>,

    /// YAML settings file
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Quiet window before a query is matched
    #[arg(long, value_name = "MS", global = true)]
    debounce_ms: Option<u64>,

    /// Maximum number of matches to show
    #[arg(long, value_name = "N", global = true)]
    max_matches: Option<usize>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive search with keyboard selection
    Search,
    /// Print the matches for one query
    Query {
        text: String,
    },
    /// List products by category and sort order
    Browse {
        #[arg(long, default_value = "All")]
        category: String,
        #[arg(long, default_value = "popular")]
        sort: String,
    },
    /// Show the variants of one product
    Product {
        title: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let target = match cli.command {
        Commands::Search => LogTarget::Screen,
        _ => LogTarget::Stderr,
    };
    logging::init(target, cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "storefront failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let catalog = config
        .catalog
        .clone()
        .ok_or(StorefrontError::MissingCatalog)?;

    match cli.command {
        Commands::Search => run_search(&config, &catalog),
        Commands::Query { text } => {
            let items = load_items(&catalog)?;
            let matches = compute_matches_limited(&text, &items, config.max_matches);
            if matches.is_empty() {
                println!("(no matches)");
            }
            for entry in &matches {
                print_row(entry);
            }
            Ok(())
        }
        Commands::Browse { category, sort } => {
            let items = load_items(&catalog)?;
            let query = ListingQuery::new()
                .with_category(CategoryFilter::parse(&category))
                .with_sort(sort.parse::<SortOption>()?);
            println!("Categories: {}", categories(&items).join(", "));
            println!("Sorted by: {}", query.sort);
            for entry in filtered_products(&items, &query) {
                print_row(&entry);
            }
            Ok(())
        }
        Commands::Product { title } => {
            let items = load_items(&catalog)?;
            let page = ProductPage::for_title(&items, &title);
            if page.variants().is_empty() {
                return Err(StorefrontError::InvalidSelection(format!(
                    "no product titled '{title}'"
                )));
            }
            println!("{}", page.title());
            for variant in page.variants() {
                println!(
                    "  [{}] size {:<6} ${:>8.2}  stock {}",
                    variant.id, variant.item.size, variant.item.price, variant.item.stock
                );
            }
            Ok(())
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };
    if let Some(catalog) = &cli.catalog {
        config.catalog = Some(catalog.clone());
    }
    if let Some(debounce_ms) = cli.debounce_ms {
        config.debounce_ms = debounce_ms;
    }
    if let Some(max_matches) = cli.max_matches {
        config.max_matches = max_matches;
    }
    Ok(config)
}

fn run_search(config: &SearchConfig, catalog: &Path) -> Result<()> {
    let (probe, store) = FileProbe::open(catalog)?;
    let store = Arc::new(store);
    tracing::info!(
        items = store.current().len(),
        path = %catalog.display(),
        "catalog loaded"
    );
    let _watcher = config
        .refresh_interval()
        .map(|interval| CatalogWatcher::spawn(Arc::clone(&store), probe, interval));

    let app = StorefrontApp::new(store, config.session_config(), config.max_visible);
    let terminal = Terminal::new()?;
    let mut runtime = Runtime::new(app, terminal).with_poll_interval(config.poll_interval());
    runtime.run()?;

    let app = runtime.into_app();
    for request in app.cart() {
        println!(
            "{} x {} ({}) ${:.2}",
            request.quantity, request.title, request.size, request.total
        );
    }
    Ok(())
}

fn print_row(entry: &ItemMatch) {
    println!(
        "{:>3}  {:<32} {:<16} ${:.2}",
        entry.id, entry.item.title, entry.item.category, entry.item.price
    );
}
