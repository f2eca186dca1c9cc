use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use kundali_base::{Rashi, build_bhavas, mahadasha_for_year};
use kundali_chart::{cluster_offsets, render_chart_svg};
use kundali_engine::{GeneratorConfig, RandomChartGenerator};
use kundali_rs::{AppController, BirthForm, Tab, render_dashboard};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kundali", about = "Mock North Indian birth chart generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a chart and print a dashboard tab
    Generate(GenerateArgs),
    /// House -> sign mapping for an ascendant
    Houses {
        /// Ascendant sign number (1 = Aries .. 12 = Pisces)
        #[arg(long)]
        ascendant: u8,
    },
    /// Current and upcoming mahadashas for a year
    Dasha {
        /// Calendar year
        #[arg(long)]
        year: i32,
    },
    /// Glyph offsets for a house holding `count` planets
    Cluster {
        #[arg(long)]
        count: usize,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Full name
    #[arg(long)]
    name: String,
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM or HH:MM:SS)
    #[arg(long)]
    time: String,
    /// Place of birth
    #[arg(long)]
    location: String,
    /// Fixed RNG seed for a reproducible chart
    #[arg(long)]
    seed: Option<u64>,
    /// Year used to pick the current mahadasha (default: this year)
    #[arg(long)]
    year: Option<i32>,
    /// Artificial generation delay in milliseconds (overrides config)
    #[arg(long)]
    delay_ms: Option<u64>,
    /// Generator config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Always mark Rahu and Ketu retrograde (overrides config)
    #[arg(long)]
    nodes_retrograde: bool,
    /// Tab to print: chart, horoscope, or profile
    #[arg(long, default_value = "chart")]
    tab: String,
    /// Write the chart diagram as SVG to this path
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Print the chart as JSON instead of a tab
    #[arg(long)]
    json: bool,
}

fn load_config(path: Option<&Path>) -> GeneratorConfig {
    let Some(path) = path else {
        return GeneratorConfig::default();
    };
    GeneratorConfig::load(path).unwrap_or_else(|e| {
        eprintln!("Failed to load config {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn parse_tab(s: &str) -> Tab {
    Tab::from_name(&s.to_lowercase()).unwrap_or_else(|| {
        eprintln!("Invalid tab: {s}");
        eprintln!("Valid: chart, horoscope, profile");
        std::process::exit(1);
    })
}

fn require_rashi(number: u8) -> Rashi {
    Rashi::from_number(number).unwrap_or_else(|| {
        eprintln!("Invalid ascendant: {number} (1-12)");
        std::process::exit(1);
    })
}

async fn generate(args: GenerateArgs) {
    let tab = parse_tab(&args.tab);
    let mut config = load_config(args.config.as_deref());
    if let Some(ms) = args.delay_ms {
        config.delay_ms = ms;
    }
    if args.nodes_retrograde {
        config.nodes_always_retrograde = true;
    }
    debug!(?config, "generator config");

    let mut generator = RandomChartGenerator::new(config);
    if let Some(seed) = args.seed {
        generator = generator.with_seed(seed);
    }
    if let Some(year) = args.year {
        generator = generator.with_year(year);
    }

    let mut app = AppController::new(generator);
    let form = BirthForm::new(args.name, args.date, args.time, args.location);
    if let Err(e) = app.start() {
        eprintln!("{e}");
        std::process::exit(1);
    }
    if let Err(e) = app.submit(&form).await {
        eprintln!("Failed to generate chart: {e}");
        std::process::exit(1);
    }
    let Some(chart) = app.chart() else {
        eprintln!("No chart was produced");
        std::process::exit(1);
    };

    if let Some(path) = &args.svg {
        let svg = render_chart_svg(&chart.bhavas, chart.ascendant.western_name());
        if let Err(e) = std::fs::write(path, svg) {
            eprintln!("Failed to write {}: {e}", path.display());
            std::process::exit(1);
        }
    }

    if args.json {
        match serde_json::to_string_pretty(chart) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize chart: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_dashboard(chart, tab, Local::now().date_naive()));
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate(args).await,

        Commands::Houses { ascendant } => {
            let lagna = require_rashi(ascendant);
            for b in build_bhavas(lagna) {
                println!(
                    "House {:>2}: {:>2} {} ({}) {}",
                    b.number,
                    b.rashi.number(),
                    b.rashi.western_name(),
                    b.rashi.name(),
                    b.rashi.symbol()
                );
            }
        }

        Commands::Dasha { year } => {
            let sel = mahadasha_for_year(year);
            let c = sel.current;
            println!(
                "Current: {} Mahadasha {}-{}",
                c.planet,
                c.start_year,
                c.end_year
            );
            println!("  {}", c.description);
            for p in &sel.upcoming {
                println!(
                    "Upcoming: {} Mahadasha {}-{}",
                    p.planet,
                    p.start_year,
                    p.end_year
                );
            }
        }

        Commands::Cluster { count } => {
            for (i, p) in cluster_offsets(count).iter().enumerate() {
                println!("{i}: ({}, {})", p.x, p.y);
            }
        }
    }
}
