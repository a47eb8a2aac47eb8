pub mod commands;
pub mod controller;
pub mod simulator;

pub use controller::PipelineController;
pub use simulator::{RandomSampler, WorkSampler};
