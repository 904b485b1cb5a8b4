use std::future::Future;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use terminal_size::{terminal_size, Width};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use vmfind::api::set_silent;
use vmfind::config::{self, Settings};
use vmfind::models::{
    BareMetalFilter, DataSource, InstanceFilter, InstancesPage, Served, SortKey, SortOrder, SortSpec,
};
use vmfind::services::{CatalogService, QueryGuard, QueryTicket};
use vmfind::utils::{format_cost, format_number, MISSING};

#[derive(Parser)]
#[command(
    name = "vmfind",
    author,
    version,
    about = "Find and compare cloud VM and bare-metal offers",
    long_about = r#"vmfind — browse a multi-provider catalog of VM and bare-metal pricing.

When VMFIND_API_BASE_URL is set, queries go to the remote catalog service. If it
cannot be reached (or times out), the session switches to the pricing snapshot
bundled with this binary and stays there until the process exits.

Examples:
  1) Cheapest 4+ vCPU machines on two providers:
      vmfind search --min-vcpus 4 --provider AWS --provider "Hetzner Cloud"
  2) Bare-metal servers under 60/month in Falkenstein:
      vmfind bare-metal --max-monthly 60 --region FSN1
  3) Page through everything interactively:
      vmfind browse
"#,
    after_help = "Use `vmfind <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    HourlyCost,
    Vcpus,
    MemoryGb,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::HourlyCost => SortKey::HourlyCost,
            SortArg::Vcpus => SortKey::Vcpus,
            SortArg::MemoryGb => SortKey::MemoryGb,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search instance offers
    #[command(about = "Search instance offers", long_about = "Filter the catalog and print one page of results, cheapest hourly price first unless --sort-by says otherwise. Repeat --provider, --region, --family or --storage-type to allow several values.")]
    Search {
        /// Case-insensitive substring of the instance name
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        min_vcpus: Option<f64>,
        /// Minimum memory in GB
        #[arg(long)]
        min_memory: Option<f64>,
        /// Minimum storage in GB
        #[arg(long)]
        min_storage: Option<f64>,
        #[arg(long = "provider")]
        providers: Vec<String>,
        #[arg(long = "region")]
        regions: Vec<String>,
        #[arg(long = "family")]
        families: Vec<String>,
        #[arg(long = "storage-type")]
        storage_types: Vec<String>,
        #[arg(long, value_enum, default_value = "hourly-cost")]
        sort_by: SortArg,
        /// Sort descending (offers missing the sort column still come last)
        #[arg(long)]
        desc: bool,
        /// Page number to display (1-indexed)
        #[arg(long, short = 'p', default_value = "1")]
        page: usize,
        /// Number of offers per page (1-100)
        #[arg(long)]
        per_page: Option<usize>,
        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the values available for each filter
    Options {
        #[arg(long)]
        json: bool,
    },
    /// List the regions a provider offers (remote catalog only)
    Regions { provider: String },
    /// Search bare-metal servers
    #[command(about = "Search bare-metal servers", long_about = "Filter dedicated servers from the bundled snapshot, cheapest monthly price first. Servers without a monthly price are excluded whenever --max-monthly is given.")]
    BareMetal {
        #[arg(long)]
        min_cores: Option<f64>,
        #[arg(long)]
        min_memory: Option<f64>,
        #[arg(long)]
        min_storage: Option<f64>,
        #[arg(long)]
        max_monthly: Option<f64>,
        /// Exact location code, e.g. FSN1
        #[arg(long, default_value = "")]
        region: String,
        #[arg(long, short = 'p', default_value = "1")]
        page: usize,
        #[arg(long)]
        per_page: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Dataset size and freshness per provider
    Metrics,
    /// Check that the configured remote catalog answers
    CheckRemote,
    /// Page through offers interactively
    #[command(about = "Page through offers interactively", long_about = "Interactive pager. Commands: n (next), p (previous), <number> (jump to page), /text (filter by name, empty to clear), r (refresh), q (quit). A new command supersedes a request still in flight.")]
    Browse {
        #[arg(long)]
        per_page: Option<usize>,
    },
}

fn build_service(env_file: Option<&str>, per_page: Option<usize>) -> CatalogService {
    config::load_env_file(env_file);
    let mut settings = Settings::from_env();
    if let Some(pp) = per_page {
        settings.page_size = config::clamp_page_size(pp);
    }
    CatalogService::from_settings(&settings)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

/// Show a spinner while a possibly-remote call is pending.
async fn with_spinner<T>(message: &str, fut: impl Future<Output = T>) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    let out = fut.await;
    spinner.finish_and_clear();
    out
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Failed to encode JSON").red(), e);
            process::exit(1);
        }
    }
}

fn print_source(source: DataSource) {
    let label = match source {
        DataSource::Remote => yansi::Paint::new(source.to_string()).green(),
        DataSource::Local => yansi::Paint::new(source.to_string()).yellow(),
    };
    println!("{} {}", yansi::Paint::new("Source:").dim(), label);
}

fn print_offers(result: &Served<InstancesPage>, page: usize, page_size: usize, bare_metal: bool) {
    let offers = &result.data;
    if offers.instances.is_empty() {
        println!("{}", yansi::Paint::new("(no matching offers)").dim());
    } else {
        let mut table = new_table();
        if bare_metal {
            table.set_header(vec![
                "Server", "Provider", "Location", "Cores", "Memory GB", "Storage", "Hourly", "Monthly", "Spot",
            ]);
        } else {
            table.set_header(vec![
                "Instance", "Provider", "Region", "vCPUs", "Memory GB", "Storage", "Hourly", "Monthly", "Spot",
            ]);
        }
        for o in &offers.instances {
            let storage = match (&o.storage_type, o.storage_gb) {
                (Some(t), Some(gb)) if gb > 0.0 => format!("{} GB {}", format_number(Some(gb)), t),
                (Some(t), _) => t.clone(),
                (None, gb) => format_number(gb),
            };
            table.add_row(vec![
                o.instance_name.clone(),
                o.provider.clone(),
                o.region.clone(),
                format_number(o.vcpus),
                format_number(o.memory_gb),
                storage,
                format_cost(o.hourly_cost, &o.currency),
                format_cost(o.monthly_cost, &o.currency),
                format_cost(o.spot_price, &o.currency),
            ]);
        }
        println!("\n{table}");
    }

    let total_pages = offers.total_pages(page_size).max(1);
    println!(
        "\n{}",
        yansi::Paint::new(format!(
            "Page {} of {} | Showing {} of {} total offers",
            page,
            total_pages,
            offers.instances.len(),
            offers.total
        ))
        .cyan()
    );
    print_source(result.source);
    println!();
}

async fn browse(service: Arc<CatalogService>) {
    let guard = Arc::new(QueryGuard::new());
    let (tx, mut rx) = mpsc::unbounded_channel::<(QueryTicket, usize, Served<InstancesPage>)>();
    let mut filter = InstanceFilter::default();
    let mut page: usize = 1;
    let mut last_total: Option<u64> = None;

    let fetch = |filter: InstanceFilter, page: usize| {
        let ticket = guard.issue();
        let service = Arc::clone(&service);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = service.instances(&filter, page).await;
            // The receiver only disappears when the pager exits.
            let _ = tx.send((ticket, page, result));
        })
    };

    println!("{}", yansi::Paint::new("n next · p previous · <number> jump · /text filter · r refresh · q quit").dim());
    let mut in_flight = fetch(filter.clone(), page);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(l)) => l,
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!(%e, "Failed to read from stdin");
                        break;
                    }
                };
                let cmd = line.trim();
                let last_page = last_total
                    .map(|t| (t.div_ceil(service.page_size() as u64) as usize).max(1))
                    .unwrap_or(usize::MAX);
                match cmd {
                    "q" | "quit" | "exit" => break,
                    "n" => page = (page + 1).min(last_page),
                    "p" => page = page.saturating_sub(1).max(1),
                    "r" | "" => {}
                    _ if cmd.starts_with('/') => {
                        filter.instance_name = cmd[1..].trim().to_string();
                        page = 1;
                    }
                    _ => match cmd.parse::<usize>() {
                        Ok(n) if n >= 1 => page = n,
                        _ => {
                            println!("{} '{}'", yansi::Paint::new("Unknown command").red(), cmd);
                            continue;
                        }
                    },
                }
                // Superseded requests finish in the background; their results are discarded.
                in_flight = fetch(filter.clone(), page);
            }
            Some((ticket, shown_page, result)) = rx.recv() => {
                if let Some(result) = guard.accept(ticket, result) {
                    last_total = Some(result.data.total);
                    print_offers(&result, shown_page, service.page_size(), false);
                }
            }
        }
    }

    in_flight.abort();
}

#[tokio::main]
async fn main() {
    // Initialize tracing; stderr keeps stdout free for tables and JSON
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        set_silent(true);
    }

    let env_file = cli.env_file.as_deref();
    match cli.command {
        Commands::Search {
            name,
            min_vcpus,
            min_memory,
            min_storage,
            providers,
            regions,
            families,
            storage_types,
            sort_by,
            desc,
            page,
            per_page,
            json,
        } => {
            let service = build_service(env_file, per_page);
            let filter = InstanceFilter {
                instance_name: name.unwrap_or_default(),
                min_vcpus,
                min_memory,
                min_storage,
                providers,
                regions,
                instance_families: families,
                storage_types,
                sort: SortSpec {
                    key: sort_by.into(),
                    order: if desc { SortOrder::Desc } else { SortOrder::Asc },
                },
            };
            let result = with_spinner("Searching offers…", service.instances(&filter, page)).await;
            if json {
                print_json(&result);
            } else {
                print_offers(&result, page.max(1), service.page_size(), false);
            }
        }
        Commands::Options { json } => {
            let service = build_service(env_file, None);
            let result = with_spinner("Loading filter options…", service.display_filter_options()).await;
            if json {
                print_json(&result);
                return;
            }
            let options = &result.data;
            let mut table = new_table();
            table.set_header(vec!["Filter", "Values"]);
            table.add_row(vec!["Providers".to_string(), options.providers.join(", ")]);
            table.add_row(vec!["Regions".to_string(), options.regions.join(", ")]);
            table.add_row(vec!["Instance families".to_string(), options.instance_families.join(", ")]);
            table.add_row(vec!["Storage types".to_string(), options.storage_types.join(", ")]);
            println!("\n{table}\n");
            print_source(result.source);
        }
        Commands::Regions { provider } => {
            let service = build_service(env_file, None);
            if !service.remote_configured() {
                eprintln!("{}", yansi::Paint::new("No remote catalog configured; region lookup is unavailable").yellow());
            }
            let regions = with_spinner("Looking up regions…", service.regions_for_provider(&provider)).await;
            if regions.is_empty() {
                println!("{}", yansi::Paint::new(format!("Regions for '{}' are unknown", provider)).dim());
                return;
            }
            for r in regions {
                println!("{}", r);
            }
        }
        Commands::BareMetal {
            min_cores,
            min_memory,
            min_storage,
            max_monthly,
            region,
            page,
            per_page,
            json,
        } => {
            let service = build_service(env_file, per_page);
            let filter = BareMetalFilter {
                min_cores,
                min_memory,
                min_storage,
                max_monthly_cost: max_monthly,
                region,
            };
            if !filter.region.is_empty() {
                let known = service.bare_metal_regions().await;
                if !known.contains(&filter.region) {
                    eprintln!(
                        "{} '{}'; known locations: {}",
                        yansi::Paint::new("Unknown location").yellow(),
                        filter.region,
                        if known.is_empty() { MISSING.to_string() } else { known.join(", ") }
                    );
                }
            }
            let result = Served::local(service.bare_metal(&filter, page));
            if json {
                print_json(&result);
            } else {
                print_offers(&result, page.max(1), service.page_size(), true);
            }
        }
        Commands::Metrics => {
            let service = build_service(env_file, None);
            let result = with_spinner("Loading metrics…", service.metrics()).await;
            let mut table = new_table();
            table.set_header(vec!["Provider", "Last updated"]);
            for (provider, updated) in &result.data.last_updated_times {
                table.add_row(vec![provider.clone(), updated.clone().unwrap_or_else(|| MISSING.to_string())]);
            }
            println!("\n{table}");
            println!("\n{} {}", yansi::Paint::new("Total records:").bold(), result.data.total_records);
            print_source(result.source);
        }
        Commands::CheckRemote => {
            let service = build_service(env_file, None);
            if !service.remote_configured() {
                eprintln!("{}", yansi::Paint::new(format!("{} is not configured", config::API_BASE_URL_VAR)).red());
                process::exit(1);
            }
            match service.check_remote().await {
                Ok(health) => {
                    println!("{} ({})", yansi::Paint::new("Remote catalog is reachable").green(), health.status);
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Remote catalog check failed").red(), e);
                    process::exit(1);
                }
            }
        }
        Commands::Browse { per_page } => {
            let service = Arc::new(build_service(env_file, per_page));
            browse(service).await;
        }
    }
}
