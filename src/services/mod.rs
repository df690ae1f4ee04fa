pub mod rate_service;
pub mod projection_service;
pub mod recommendation_service;
pub mod simulation_service;
