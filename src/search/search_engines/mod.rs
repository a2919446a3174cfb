mod astar;
mod beam_search;
mod bfs;
mod dfs;
mod gbfs;
mod hill_climbing;
mod ida_star;
mod search_engine;
mod ucs;

use astar::AStar;
use beam_search::BeamSearch;
use bfs::BFS;
use dfs::DFS;
use gbfs::GBFS;
use hill_climbing::HillClimbing;
use ida_star::IDAStar;
pub use search_engine::{SearchEngine, SearchEngineName, SearchOutcome};
use ucs::UCS;
