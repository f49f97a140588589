/* Modules */
pub mod cli;
pub mod config;
pub mod elevator;
pub mod error;
pub mod input;
pub mod output;
pub mod shared;

pub use elevator::{ElevatorFSM, RequestPanel};
pub use shared::{ElevatorState, StatusEvent};
