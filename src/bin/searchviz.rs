use clap::{Parser, Subcommand};
use console::style;
use searchviz::problem::Problem;
use searchviz::search::{
    compare, ComparisonRow, SearchConfig, SearchEngineName, SearchError, SearchResult, Verbosity,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Run graph search algorithms on grid and graph problems, recording every
/// step of the search.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        help = "Search configuration file (TOML), defaults are used if omitted",
        short = 'f',
        long = "config",
        id = "CONFIG",
        global = true
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal,
        global = true
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single algorithm and print a summary of the result.
    Run {
        #[arg(help = "The problem file (JSON)")]
        problem: PathBuf,
        #[arg(
            value_enum,
            help = "The search algorithm to use",
            short = 'a',
            long = "algorithm",
            id = "ALGORITHM",
            default_value_t = SearchEngineName::Astar
        )]
        algorithm: SearchEngineName,
        #[arg(
            help = "Where to write the full result, including every step",
            short = 'o',
            long = "output",
            id = "OUTPUT"
        )]
        output: Option<PathBuf>,
    },
    /// Run several algorithms on the same problem and print them side by
    /// side.
    Compare {
        #[arg(help = "The problem file (JSON)")]
        problem: PathBuf,
        #[arg(
            value_enum,
            help = "The algorithms to compare, all of them if omitted",
            short = 'a',
            long = "algorithms",
            id = "ALGORITHMS",
            value_delimiter = ','
        )]
        algorithms: Vec<SearchEngineName>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
    console::set_colors_enabled(cli.colour);

    if let Err(e) = execute(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), SearchError> {
    let config = match &cli.config {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Commands::Run {
            problem,
            algorithm,
            output,
        } => {
            let problem = load_problem(&problem)?;
            let result = algorithm.search(&problem, &config)?;
            print_summary(&result);
            if let Some(output) = output {
                info!(output = %output.display(), "writing result");
                result.save(&output).map_err(|source| SearchError::ResultWrite {
                    path: output.clone(),
                    source,
                })?;
            }
        }
        Commands::Compare {
            problem,
            algorithms,
        } => {
            let problem = load_problem(&problem)?;
            let algorithms = if algorithms.is_empty() {
                SearchEngineName::iter().collect()
            } else {
                algorithms
            };
            let results = compare(&problem, &algorithms, &config)?;
            print_comparison(&results);
        }
    }
    Ok(())
}

fn load_problem(path: &Path) -> Result<Problem, SearchError> {
    let problem = Problem::from_path(path)?;
    problem.validate()?;
    Ok(problem)
}

fn format_time(execution_time_ms: f64) -> String {
    // Sub-microsecond noise makes the humantime output unreadable
    let micros = (execution_time_ms * 1000.).round() as u64;
    humantime::format_duration(Duration::from_micros(micros)).to_string()
}

fn format_cost(path_cost: Option<f64>) -> String {
    path_cost.map_or_else(|| "-".to_string(), |cost| format!("{:.3}", cost))
}

fn print_summary(result: &SearchResult) {
    let outcome = if result.success {
        style("path found").green()
    } else {
        style("no path").red()
    };
    println!("{}: {}", style(result.algorithm).bold(), outcome);
    if let Some(path) = &result.path {
        let path: Vec<&str> = path.iter().map(|node| node.as_str()).collect();
        println!("Path: {}", path.join(" -> "));
        println!("Path length: {}", path.len());
    }
    println!("Path cost: {}", format_cost(result.path_cost));
    println!("Nodes visited: {}", result.nodes_visited);
    println!("Steps recorded: {}", result.steps.len());
    println!("Estimated memory: {} bytes", result.memory_estimate_bytes);
    println!("Time: {}", format_time(result.execution_time_ms));
}

fn print_comparison(results: &[SearchResult]) {
    println!(
        "{}",
        style(format!(
            "{:<14} {:>8} {:>7} {:>10} {:>8} {:>7}  {}",
            "algorithm", "success", "length", "cost", "visited", "steps", "time"
        ))
        .bold()
    );
    for row in results.iter().map(ComparisonRow::from) {
        let success = if row.success {
            style("yes").green()
        } else {
            style("no").red()
        };
        println!(
            "{:<14} {:>8} {:>7} {:>10} {:>8} {:>7}  {}",
            row.algorithm.to_string(),
            success.to_string(),
            row.path_length.map_or_else(|| "-".to_string(), |len| len.to_string()),
            format_cost(row.path_cost),
            row.nodes_visited,
            row.steps,
            format_time(row.execution_time_ms),
        );
    }
}
