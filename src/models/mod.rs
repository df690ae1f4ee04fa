//! Data models for stakesim commands and services
//!
//! Plain result structs passed from services to commands. Nothing here
//! performs I/O.

pub mod token;
pub mod projection;
pub mod recommendation;
pub mod simulation;

pub use token::{AprSourceKind, RiskTier, StakingToken};
pub use projection::{ProjectionResult, YieldSpec};
pub use recommendation::RecommendationRow;
pub use simulation::{PriceSnapshot, ResolvedApr, SimulationReport, TokenReport};
