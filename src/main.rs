use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use unirec_api::{handlers, RecommendRequest};
use unirec_engine::Recommender;

/// A hybrid college recommendation engine
#[derive(Parser, Debug)]
#[command(name = "unirec")]
#[command(about = "Rank colleges by blended preference and similarity scores", long_about = None)]
struct Args {
    /// Path to the merged institutional dataset (CSV)
    #[arg(short, long, default_value = "processed_data/merged_dataset.csv")]
    data: PathBuf,

    /// Maximum acceptable net price in dollars
    #[arg(long)]
    max_net_price: Option<f64>,

    /// Minimum acceptable 6-year graduation rate, in percent
    #[arg(long)]
    min_grad_rate: Option<f64>,

    /// Minimum acceptable retention rate, in percent
    #[arg(long)]
    min_retention: Option<f64>,

    /// Preferred MSI category code (repeatable): HSI, PBI, AANAPII, ANNHI, HBCU, TRIBAL, NANTI
    #[arg(long = "msi")]
    msi_preferences: Vec<String>,

    /// Preferred two-letter state code
    #[arg(long)]
    state: Option<String>,

    /// Score graduation terms on the Pell-specific 6-year rate
    #[arg(long, default_value_t = false)]
    focus_pell: bool,

    /// Number of institutions to return
    #[arg(long, default_value_t = 10)]
    top_n: usize,

    /// List the distinct state codes in the dataset and exit
    #[arg(long, default_value_t = false)]
    states: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting unirec v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.data);

    let engine = Recommender::open(&args.data)?;
    info!("Engine ready");

    if args.states {
        println!("{}", serde_json::to_string_pretty(&handlers::states(&engine))?);
        return Ok(());
    }

    let defaults = RecommendRequest::default();
    let request = RecommendRequest {
        max_net_price: args.max_net_price.unwrap_or(defaults.max_net_price),
        min_grad_rate: args.min_grad_rate.unwrap_or(defaults.min_grad_rate),
        min_retention: args.min_retention.unwrap_or(defaults.min_retention),
        msi_preferences: args.msi_preferences,
        preferred_state: args.state,
        focus_pell: args.focus_pell,
        top_n: args.top_n,
    };

    let response = handlers::recommend(&engine, request);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
