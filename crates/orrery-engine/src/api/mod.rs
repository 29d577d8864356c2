pub mod simulation;
pub mod types;
