pub mod articulation;
pub mod error;
pub mod generate;
pub mod graph;
pub use articulation::{analyze, ArticulationAnalyzer, ArticulationResult, CutVertexFinder};
pub use error::GraphError;
pub use graph::Graph;

use articulation::IterativeDfs;

/// The default analyzer on this crate, safe for deep graphs.
pub type FastArticulationAnalyzer = ArticulationAnalyzer<IterativeDfs>;
