use clap::Parser;
use searchviz::search::{validate_path, SearchResult};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version)]
/// Check the path in a saved search result against the problem it was
/// computed for.
struct Cli {
    #[arg(help = "The result file (JSON) to validate")]
    result: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.result).expect("Failed to read result file");
    let result = SearchResult::from_json(&text).expect("Failed to parse result file");
    validate(&result);
}

fn validate(result: &SearchResult) {
    let problem = &result.problem;
    if let Err(e) = problem.validate() {
        panic!("Embedded problem is invalid: {}", e);
    }

    let Some(path) = &result.path else {
        if result.success {
            panic!("Result claims success but has no path");
        }
        println!("No path to validate ({} reported failure)", result.algorithm);
        return;
    };

    let start = problem.start_id().expect("Problem has no start");
    let goal = problem.goal_id().expect("Problem has no goal");
    let cost = match validate_path(problem, path, &start, &goal) {
        Ok(cost) => cost,
        Err(e) => panic!("Path is invalid: {}", e),
    };

    let reported = result.path_cost.expect("Result has a path but no path cost");
    if (cost - reported).abs() > 1e-9 {
        panic!(
            "Path cost mismatch, reported {} but recomputed {}",
            reported, cost
        );
    }
    println!("Path is valid");
    println!("Path length: {}", path.len());
    println!("Path cost: {}", cost);
}
