//! Probability explorers parametrized from the observed data.

pub mod binomial;
pub mod poisson;
mod view;

pub use binomial::{WinExplorer, WinOutcome};
pub use poisson::{CalorieExplorer, CalorieOutcome};
pub use view::{CalorieDistributionPanel, WinProbabilityPanel};

use thiserror::Error;

/// Recoverable, per-widget failures. The rest of the page keeps rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplorerError {
    #[error("desired wins ({k}) cannot exceed simulated students ({n})")]
    TooManyWins { k: u32, n: u32 },
    #[error("no sparring bouts recorded; win rate is undefined")]
    UndefinedWinRate,
    #[error("calorie rate must be positive, got {0}")]
    InvalidRate(f64),
    #[error("distribution error: {0}")]
    Distribution(String),
}
