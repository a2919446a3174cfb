use crate::problem::{NodeId, Problem, ProblemError};
use crate::search::{
    search_engines::{AStar, BeamSearch, HillClimbing, IDAStar, BFS, DFS, GBFS, UCS},
    DistanceHeuristic, SearchConfig, SearchContext, SearchError, SearchResult,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

/// How a search engine finished.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The goal was reached, with the path from start to goal and its cost
    Success { path: Vec<NodeId>, cost: f64 },
    /// The frontier was exhausted, so no path exists
    ProvablyUnsolvable,
    /// The search gave up, but the engine is incomplete so a path may exist
    IncompleteUnsolvable,
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success { .. })
    }
}

pub trait SearchEngine {
    /// Run the search to completion, recording every step in `context`.
    fn search(&mut self, context: &mut SearchContext) -> SearchOutcome;
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[clap(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SearchEngineName {
    #[clap(help = "Breadth first search, optimal for unit costs.")]
    Bfs,
    #[clap(help = "Depth first search.")]
    Dfs,
    #[clap(help = "Uniform cost search, optimal for any non-negative costs.")]
    Ucs,
    #[clap(help = "Greedy best-first search on the heuristic.")]
    Greedy,
    #[clap(help = "A* search, optimal with an admissible heuristic.")]
    Astar,
    #[clap(help = "Steepest ascent hill climbing on the heuristic.")]
    HillClimbing,
    #[clap(help = "Beam search keeping the best `beam-width` candidates.")]
    BeamSearch,
    #[clap(help = "Iterative deepening A*.")]
    IdaStar,
}

impl SearchEngineName {
    /// Parse an algorithm selector such as `"astar"` or `"hillClimbing"`.
    pub fn from_selector(selector: &str) -> Result<Self, SearchError> {
        Self::from_str(selector)
            .map_err(|_| SearchError::UnsupportedAlgorithm(selector.to_string()))
    }

    pub fn create(&self, config: &SearchConfig) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Bfs => Box::new(BFS::new()),
            SearchEngineName::Dfs => Box::new(DFS::new()),
            SearchEngineName::Ucs => Box::new(UCS::new()),
            SearchEngineName::Greedy => Box::new(GBFS::new()),
            SearchEngineName::Astar => Box::new(AStar::new()),
            SearchEngineName::HillClimbing => Box::new(HillClimbing::new()),
            SearchEngineName::BeamSearch => Box::new(BeamSearch::new(config.beam_width)),
            SearchEngineName::IdaStar => Box::new(IDAStar::new()),
        }
    }

    /// Run this algorithm on `problem` and assemble the result. The problem
    /// is assumed to be valid apart from its start and goal, which are
    /// checked here since no search can begin without them.
    pub fn search(
        &self,
        problem: &Problem,
        config: &SearchConfig,
    ) -> Result<SearchResult, SearchError> {
        config.validate()?;
        let start = problem.start_id().ok_or(ProblemError::MissingStart)?;
        let goal = problem.goal_id().ok_or(ProblemError::MissingGoal)?;

        info!(algorithm = %self, start = %start, goal = %goal);
        let heuristic = DistanceHeuristic::new(&config.heuristic);
        let mut context = SearchContext::new(problem, &heuristic, start, goal);
        let outcome = self.create(config).search(&mut context);

        context.statistics().finalise_search();
        let result = SearchResult::assemble(*self, problem, context, outcome);
        info!(
            success = result.success,
            nodes_visited = result.nodes_visited,
            steps = result.steps.len(),
            path_cost = result.path_cost,
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use strum::IntoEnumIterator;

    #[test]
    fn selectors_round_trip() {
        let selectors: Vec<String> = SearchEngineName::iter().map(|n| n.to_string()).collect();
        assert_eq!(
            selectors,
            vec![
                "bfs",
                "dfs",
                "ucs",
                "greedy",
                "astar",
                "hillClimbing",
                "beamSearch",
                "idaStar"
            ]
        );
        for name in SearchEngineName::iter() {
            assert_eq!(SearchEngineName::from_selector(&name.to_string()).unwrap(), name);
        }
    }

    #[test]
    fn unknown_selector_is_an_error() {
        match SearchEngineName::from_selector("dijkstra") {
            Err(SearchError::UnsupportedAlgorithm(selector)) => assert_eq!(selector, "dijkstra"),
            other => panic!("unexpected result: {:?}", other.map(|n| n.to_string())),
        }
        assert!(SearchEngineName::from_selector("BFS").is_err());
    }

    #[test]
    fn serde_uses_selectors() {
        let json = serde_json::to_string(&SearchEngineName::HillClimbing).unwrap();
        assert_eq!(json, "\"hillClimbing\"");
        let name: SearchEngineName = serde_json::from_str("\"idaStar\"").unwrap();
        assert_eq!(name, SearchEngineName::IdaStar);
    }

    #[test]
    fn missing_start_is_rejected() {
        let mut problem = open_grid(3, false);
        if let Problem::Grid(grid) = &mut problem {
            grid.start = None;
        }
        assert!(matches!(
            SearchEngineName::Bfs.search(&problem, &SearchConfig::default()),
            Err(SearchError::InvalidProblem(ProblemError::MissingStart))
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SearchConfig {
            beam_width: 0,
            ..SearchConfig::default()
        };
        assert!(matches!(
            SearchEngineName::BeamSearch.search(&open_grid(3, false), &config),
            Err(SearchError::InvalidBeamWidth(0))
        ));
    }
}
