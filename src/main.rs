use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use multilist::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use multilist::models::AppState;
use multilist::routes::build_router;
use multilist::seed::{sample_listings, us_cities};
use multilist::services::filter_catalog;

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let seed_mode = config::get_seed_mode();
    let limits = config::get_session_limits();
    tracing::info!(?seed_mode, ?limits, "Seeding new sessions");
    let mut state = AppState::new(seed_mode.build(), config::get_public_base_url());
    state.session_limits = limits;
    state
}

/// Logs `err`, reports it on stderr and exits with status 1.
fn exit_with(what: &str, err: impl std::fmt::Display) -> ! {
    tracing::error!(%err, "{}", what);
    eprintln!("{}: {}", yansi::Paint::new(what).red(), err);
    process::exit(1);
}

async fn serve(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        let css = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| exit_with(&format!("Cannot read stylesheet {}", path), e));
        tracing::info!(%path, "Using custom stylesheet");
        state.custom_css = Some(css);
    }

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .unwrap_or_else(|e| exit_with(&format!("Cannot listen on {}:{} (try another --port)", host, port), e));
    let addr = listener
        .local_addr()
        .unwrap_or_else(|e| exit_with("Cannot read bound address", e));

    tracing::info!(%addr, "Starting MultiList server");
    println!(
        "{} {}",
        yansi::Paint::new("MultiList running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    if let Err(e) = axum::serve(listener, build_router(state)).await {
        exit_with("Server error", e);
    }
}

fn print_catalog(query: &str, exclude_sample: bool) {
    let listed = if exclude_sample { sample_listings() } else { Vec::new() };
    let result = filter_catalog(&us_cities(), &listed, query);

    if let Some(empty) = result.empty {
        println!("{}", yansi::Paint::new(empty.message()).dim());
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["City", "State", "Lat", "Lng"]);
    for entry in &result.entries {
        table.add_row(vec![
            entry.city.clone(),
            entry.state.clone(),
            entry.coordinates.lat.to_string(),
            entry.coordinates.lng.to_string(),
        ]);
    }
    println!("\n{table}");
    println!("\n{}\n", yansi::Paint::new(format!("{} cities offered", result.entries.len())).dim());
}

#[derive(Parser)]
#[command(
    name = "multilist",
    author,
    version,
    about = "MultiList - Google Maps presence manager",
    long_about = r#"MultiList serves a single-page dashboard for managing the cities a business is listed in.

State lives in memory only: every browser gets its own session, and everything resets when the server restarts.

Examples:
  1) Run the dashboard:
      multilist serve --host 127.0.0.1 --port 8080
  2) Start every session without listings:
      MULTILIST_SEED=empty multilist serve
  3) Preview what the add-city dialog would offer:
      multilist catalog --query tx --exclude-sample
"#,
    after_help = "Use `multilist <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Print the add-city candidates for a search
    #[command(about = "Print the city catalog", long_about = "Print the catalog entries the add-city dialog would offer for a search, in catalog order. With --exclude-sample the sample listings are treated as already added.")]
    Catalog {
        /// Case-insensitive substring of city or state
        #[arg(long, short = 'q', default_value = "")]
        query: String,
        /// Hide cities already listed in the sample data
        #[arg(long)]
        exclude_sample: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // If no command provided, serve the dashboard by default
    match cli.command {
        None => {
            let state = build_state_from_env(None);
            serve(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        }
        Some(Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        }) => {
            let state = build_state_from_env(env_file.as_deref());
            serve(state, &host, port, stylesheet).await;
        }
        Some(Commands::Catalog { query, exclude_sample }) => {
            print_catalog(&query, exclude_sample);
        }
    }
}
