use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::{load_catalog, validate_catalog, Candidate, Coordinate, DietaryPreferences};
use rec_client::{RecClientConfig, RecommendationClient};
use search::{SearchConfig, SearchInput, SearchOrchestrator, SearchState};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

/// Campus Eats - restaurant recommendations near UC Irvine
#[derive(Parser)]
#[command(name = "campus-eats")]
#[command(about = "Find restaurants near campus that fit your diet", long_about = None)]
struct Cli {
    /// Base URL of the recommendation service
    #[arg(long, env = "CAMPUS_EATS_URL", default_value = rec_client::DEFAULT_BASE_URL, global = true)]
    service_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get restaurant recommendations
    Recommend(RecommendArgs),

    /// Check that the recommendation service is up
    Health,

    /// Ask the service to reload its restaurant catalog
    Refresh,

    /// Validate a restaurants.json catalog file
    Validate {
        /// Path to the catalog file
        path: PathBuf,
    },
}

#[derive(Args)]
struct RecommendArgs {
    /// What you're in the mood for (e.g. "boba", "late night tacos")
    #[arg(long, default_value = "")]
    query: String,

    /// Only halal restaurants (enforced by the service)
    #[arg(long)]
    halal: bool,

    /// Only restaurants tagged vegan
    #[arg(long)]
    vegan: bool,

    /// Only restaurants tagged vegetarian
    #[arg(long)]
    vegetarian: bool,

    /// Only restaurants tagged gluten_free
    #[arg(long)]
    gluten_free: bool,

    /// Maximum distance from the reference point, in miles
    #[arg(long, default_value_t = search::DEFAULT_MAX_DISTANCE_MILES, value_parser = parse_miles)]
    max_distance: f64,

    /// Candidates to request from the service
    #[arg(long, env = "CAMPUS_EATS_TOP_K", default_value_t = search::DEFAULT_TOP_K)]
    top_k: u32,

    /// Number of restaurants to show
    #[arg(long, env = "CAMPUS_EATS_LIMIT", default_value = "10")]
    limit: NonZeroUsize,

    /// Reference latitude (defaults to campus center)
    #[arg(long, env = "CAMPUS_EATS_REF_LAT", default_value_t = Coordinate::UCI_CAMPUS.lat, allow_hyphen_values = true)]
    ref_lat: f64,

    /// Reference longitude (defaults to campus center)
    #[arg(long, env = "CAMPUS_EATS_REF_LNG", default_value_t = Coordinate::UCI_CAMPUS.lng, allow_hyphen_values = true)]
    ref_lng: f64,

    /// Show why each restaurant was recommended
    #[arg(long)]
    explain: bool,

    /// Print results as JSON instead of a list
    #[arg(long)]
    json: bool,
}

fn parse_miles(s: &str) -> std::result::Result<f64, String> {
    let miles: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !miles.is_finite() || miles <= 0.0 {
        return Err(format!("distance must be a positive number of miles, got {s}"));
    }
    Ok(miles)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let service = RecClientConfig::new(cli.service_url.clone())
        .with_timeout(Duration::from_secs(cli.timeout_secs));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend(args) => handle_recommend(service, args).await?,
        Commands::Health => handle_health(service).await?,
        Commands::Refresh => handle_refresh(service).await?,
        Commands::Validate { path } => handle_validate(path)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(service: RecClientConfig, args: RecommendArgs) -> Result<()> {
    let config = SearchConfig {
        service,
        reference: Coordinate::new(args.ref_lat, args.ref_lng),
        top_k: args.top_k,
        display_limit: args.limit,
    };
    let orchestrator = SearchOrchestrator::new(config)?;

    let input = SearchInput {
        free_text: args.query,
        preferences: DietaryPreferences::from_flags(
            args.halal,
            args.vegan,
            args.vegetarian,
            args.gluten_free,
        ),
        max_distance_miles: args.max_distance,
    };

    let mut state = SearchState::default();
    if !state.begin() {
        bail!("A search is already in progress");
    }
    if !state.finish(orchestrator.search(input).await) {
        bail!("Search finished without being started");
    }

    match state.into_result() {
        Some(Ok(restaurants)) if args.json => {
            println!("{}", serde_json::to_string_pretty(&restaurants)?);
        }
        Some(Ok(restaurants)) => print_restaurants(&restaurants, args.explain),
        Some(Err(message)) => bail!("Couldn't fetch recommendations: {message}"),
        None => bail!("Search did not complete"),
    }
    Ok(())
}

/// Handle the 'health' command
async fn handle_health(service: RecClientConfig) -> Result<()> {
    let client = RecommendationClient::new(service)?;
    let health = client
        .health()
        .await
        .with_context(|| format!("Health check against {} failed", client.service_address()))?;

    if health.ok {
        println!("{} Service is up ({} restaurants loaded)", "✓".green(), health.count);
    } else {
        println!("{} Service reported not ok", "✗".red());
    }
    Ok(())
}

/// Handle the 'refresh' command
async fn handle_refresh(service: RecClientConfig) -> Result<()> {
    let status = RecommendationClient::new(service)?
        .refresh()
        .await
        .context("Failed to refresh restaurant catalog")?;

    println!(
        "{} Reloaded {} restaurants{}",
        "✓".green(),
        status.count,
        status
            .reloaded_from
            .map(|from| format!(" from {from}"))
            .unwrap_or_default()
    );
    Ok(())
}

/// Handle the 'validate' command
fn handle_validate(path: PathBuf) -> Result<()> {
    let records = load_catalog(&path).context("Failed to load restaurant catalog")?;
    let issues = validate_catalog(&records);

    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("{} {}", "ERROR:".red(), issue);
        }
        bail!("{} problems found in {}", issues.len(), path.display());
    }

    println!(
        "{} {} restaurants validated successfully.",
        "OK:".green(),
        records.len()
    );
    Ok(())
}

/// Helper function to format and print restaurants
fn print_restaurants(restaurants: &[Candidate], explain: bool) {
    if restaurants.is_empty() {
        println!("{}", "No restaurants match your filters. Try a wider distance.".yellow());
        return;
    }

    println!("{}", "Recommendations:".bold().blue());
    for (i, restaurant) in restaurants.iter().enumerate() {
        let rank = i + 1;
        let tags = if restaurant.dietary_tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", restaurant.dietary_tags.join(", "))
        };
        println!(
            "{}. {}{} - Rating: {:.1}",
            rank.to_string().green(),
            restaurant.name.bold(),
            tags,
            restaurant.rating
        );
        if explain && !restaurant.why.is_empty() {
            println!("   {}", restaurant.why.join(", ").dimmed());
        }
    }
}
