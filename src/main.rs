use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

use shortlist::candidates::RankedCandidate;
use shortlist::pipeline::{self, DatasetStats, SortKey};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_DATASET: i32 = 2;
const EXIT_UNKNOWN_RANK: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ListFormat {
    #[default]
    Table,
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive dashboard (default when stdout is a terminal)
    Tui,
    /// Print the leaderboard (default when piped)
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
        /// Print every matching candidate, not just the top 10
        #[arg(long)]
        all: bool,
    },
    /// Show the full profile of the candidate holding a rank
    Show {
        /// Rank as shown in the leaderboard (1-based)
        rank: usize,
    },
    /// Print the per-factor score heatmap
    Heatmap,
    /// Print dataset-wide average scores
    Stats,
    /// Print the share text for the candidate holding a rank
    Share {
        /// Rank as shown in the leaderboard (1-based)
        rank: usize,
        /// Also copy the text to the clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "shortlist")]
#[command(about = "Ranked dashboard of recycling production line manager candidates", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/shortlist/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Candidate dataset JSON (defaults to the bundled sample)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Case-insensitive filter on name, skills and certifications
    #[arg(long, global = true, default_value = "")]
    search: String,

    /// Sort order for list and heatmap output
    #[arg(long, global = true, value_enum)]
    sort: Option<SortKey>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    shortlist::logging::init_logging(cli.verbose);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match shortlist::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // --data wins over the configured dataset; neither means the bundled sample
    let data_path = cli
        .data
        .or_else(|| config.dataset.as_deref().map(shortlist::config::expand_home));
    let dataset = match shortlist::candidates::load_dataset(data_path.as_deref()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Dataset error: {}", e);
            std::process::exit(EXIT_DATASET);
        }
    };

    let sort = cli.sort.or(config.default_sort).unwrap_or_default();

    let command = cli.command.unwrap_or_else(|| {
        if std::io::stdout().is_terminal() {
            Commands::Tui
        } else {
            Commands::List {
                format: ListFormat::Table,
                all: false,
            }
        }
    });

    let use_colors = shortlist::output::should_use_colors();

    // Route based on subcommand
    match command {
        Commands::Tui => {
            // Theme detection must happen before ratatui::init() enters raw mode
            let theme = shortlist::tui::resolve_theme(config.theme);
            let mut app = shortlist::tui::App::new(
                dataset,
                config.default_sort.unwrap_or_default(),
                shortlist::tui::ThemeColors::for_theme(theme),
            );
            // CLI flags seed the initial view; 'c' still resets to the configured default
            app.sort_key = sort;
            if !cli.search.is_empty() {
                for c in cli.search.chars() {
                    app.push_search_char(c);
                }
            }

            if let Err(e) = shortlist::tui::run_tui(app).await {
                eprintln!("TUI error: {:#}", e);
                std::process::exit(EXIT_FAILURE);
            }
        }
        Commands::List { format, all } => {
            let visible = pipeline::view(&dataset, &cli.search, sort);
            let rows = if all {
                &visible[..]
            } else {
                pipeline::leaderboard(&visible)
            };
            let output = match format {
                ListFormat::Table => shortlist::output::format_leaderboard(rows, use_colors),
                ListFormat::Tsv => shortlist::output::format_tsv(rows),
            };
            print!("{}", ensure_newline(output));
        }
        Commands::Show { rank } => {
            let candidate = find_rank(&dataset, rank);
            println!(
                "{}",
                shortlist::output::format_candidate_detail(candidate, use_colors)
            );
        }
        Commands::Heatmap => {
            let visible = pipeline::view(&dataset, &cli.search, sort);
            print!(
                "{}",
                ensure_newline(shortlist::output::format_heatmap(&visible, use_colors))
            );
        }
        Commands::Stats => {
            // Means always cover the full dataset
            let stats = DatasetStats::compute(&dataset);
            print!(
                "{}",
                ensure_newline(shortlist::output::format_stats(stats.as_ref()))
            );
        }
        Commands::Share { rank, copy } => {
            let candidate = find_rank(&dataset, rank);
            let text = shortlist::share::share_text(candidate);
            println!("{}", text);
            if copy {
                if let Err(e) = shortlist::share::copy_to_terminal_clipboard(&text) {
                    eprintln!("Failed to copy profile: {:#}", e);
                    std::process::exit(EXIT_FAILURE);
                }
                eprintln!("Copied profile: {}", candidate.name());
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Look up the candidate holding `rank`, exiting when nobody does.
fn find_rank(dataset: &[RankedCandidate], rank: usize) -> &RankedCandidate {
    match dataset.iter().find(|c| c.rank == rank) {
        Some(c) => c,
        None => {
            eprintln!(
                "No candidate with rank {}. Ranks run from 1 to {}.",
                rank,
                dataset.len()
            );
            std::process::exit(EXIT_UNKNOWN_RANK);
        }
    }
}

fn ensure_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
