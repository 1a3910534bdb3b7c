use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lead_scorer::dataset::{self, LeadFilter, ScoredLead};
use lead_scorer::output;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_OUTPUT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

/// Demo lead file used when no input is given
const DEMO_FILE: &str = "data/saasquatch_leads_dummy.csv";

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score, rank, and filter leads (default if no subcommand)
    Score(ScoreArgs),
    /// Print the active scoring weights, thresholds, and target industries
    Summary {
        #[arg(long, value_enum, default_value_t = SummaryFormat::Json)]
        format: SummaryFormat,
    },
    /// Write a config file with the default scoring rules
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default)]
struct ScoreArgs {
    /// CSV file of leads (defaults to the config's input, then the demo file)
    input: Option<PathBuf>,

    /// Only show leads scoring at least this much
    #[arg(long)]
    min_score: Option<u32>,

    /// Only show leads scoring at most this much
    #[arg(long)]
    max_score: Option<u32>,

    /// Only show leads in this industry (repeatable, exact match)
    #[arg(long = "industry")]
    industries: Vec<String>,

    /// Only show leads whose flags contain this text (case-insensitive)
    #[arg(long)]
    flag: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Export the filtered leads to CSV (timestamped name if no path is given)
    #[arg(long, num_args = 0..=1)]
    export: Option<Option<PathBuf>>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Csv,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SummaryFormat {
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "lead-scorer")]
#[command(about = "Sales lead scoring and prioritization CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and per-lead score breakdowns
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lead-scorer/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "lead_scorer=info"
    } else {
        "lead_scorer=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Score(ScoreArgs::default()));
    let config_path = cli.config.map(PathBuf::from);

    // Init runs before loading, since the config may not exist yet
    if let Commands::Init { force } = command {
        let path = match config_path.map(Ok).unwrap_or_else(lead_scorer::config::get_config_path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };
        if let Err(e) = lead_scorer::config::write_default_config(&path, force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        println!("Config written to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match lead_scorer::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = lead_scorer::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    match command {
        Commands::Summary { format } => {
            let summary = lead_scorer::get_scoring_summary(&scoring);
            let rendered = match format {
                SummaryFormat::Json => serde_json::to_string_pretty(&summary).map_err(|e| e.to_string()),
                SummaryFormat::Yaml => serde_saphyr::to_string(&summary).map_err(|e| e.to_string()),
            };
            match rendered {
                Ok(text) => println!("{}", text.trim_end()),
                Err(e) => {
                    eprintln!("Failed to render summary: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
        Commands::Score(args) => run_score(args, &config, &scoring, cli.verbose),
        Commands::Init { .. } => {}
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run_score(
    args: ScoreArgs,
    config: &lead_scorer::config::Config,
    scoring: &lead_scorer::ScoringConfig,
    verbose: bool,
) {
    let start_time = Instant::now();

    if let (Some(min), Some(max)) = (args.min_score, args.max_score) {
        if min > max {
            eprintln!("Invalid score range: --min-score {} is above --max-score {}", min, max);
            std::process::exit(EXIT_INPUT);
        }
    }

    // Resolve input: command line, then config, then the demo file
    let input = match args.input.or_else(|| config.input.clone()) {
        Some(path) => path,
        None => {
            eprintln!("No input file given, using demo data from {}", DEMO_FILE);
            PathBuf::from(DEMO_FILE)
        }
    };

    let raw = match dataset::read_csv(&input) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };
    info!(path = %input.display(), rows = raw.len(), "Loaded leads");

    let scored = dataset::process_leads(&raw, scoring);

    let filter = LeadFilter {
        min_score: args.min_score,
        max_score: args.max_score,
        industries: args.industries,
        flag_query: args.flag,
    };
    for industry in filter.unknown_industries(&scored) {
        warn!(industry = %industry, "No lead has this industry");
    }
    if let Some((low, high)) = scored.score_bounds() {
        info!(low, high, "Score range");
        if filter.outside_score_bounds(&scored) {
            warn!(low, high, "Score filter is outside the range of scores present");
        }
    }
    let matching: Vec<&ScoredLead> = filter.apply(&scored);

    let use_colors = output::should_use_colors();
    match args.format {
        OutputFormat::Table if verbose && !matching.is_empty() => {
            // Verbose mode: detailed output with score breakdown
            for lead in &matching {
                println!("{}", output::format_lead_detail(lead, use_colors));
                println!();
            }
        }
        OutputFormat::Table => println!("{}", output::format_lead_table(&matching, use_colors)),
        OutputFormat::Tsv => {
            let tsv = output::format_tsv(&matching);
            if !tsv.is_empty() {
                println!("{}", tsv);
            }
        }
        OutputFormat::Csv => {
            if let Err(e) = dataset::write_csv(std::io::stdout().lock(), &scored, &matching) {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_OUTPUT);
            }
        }
    }

    eprintln!();
    eprintln!("{}", output::format_metrics(scored.len(), matching.len()));

    if let Some(target) = args.export {
        let path = target.unwrap_or_else(|| {
            let name = dataset::default_export_name(chrono::Local::now().naive_local());
            match &config.export_dir {
                Some(dir) => dir.join(name),
                None => PathBuf::from(name),
            }
        });
        if let Err(e) = dataset::export_csv(&path, &scored, &matching) {
            eprintln!("Export error: {:#}", e);
            std::process::exit(EXIT_OUTPUT);
        }
        eprintln!("Exported {} leads to {}", matching.len(), path.display());
    }

    if verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }
}
