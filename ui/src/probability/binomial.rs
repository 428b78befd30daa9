//! Binomial win-probability explorer.
//!
//! The per-bout win rate `p` comes from the whole dataset; the widget asks how
//! likely it is that at least `k` of `n` simulated students win.

use dioxus::logger::tracing::warn;
use statrs::distribution::{Binomial, Discrete, DiscreteCDF};

use super::ExplorerError;
use crate::charts::{palette, Bar, BarChart};
use crate::dataset::Dataset;

/// Observed wins over observed bouts, `None` when nobody has sparred.
pub fn win_rate(dataset: &Dataset) -> Option<f64> {
    let (wins, losses) = dataset
        .students()
        .iter()
        .fold((0u64, 0u64), |(wins, losses), student| {
            (
                wins + u64::from(student.wins_or_zero()),
                losses + u64::from(student.losses_or_zero()),
            )
        });
    let bouts = wins + losses;
    (bouts > 0).then(|| wins as f64 / bouts as f64)
}

/// The only validation rule of the explorer: `k` must not exceed `n`.
pub fn check_request(n: u32, k: u32) -> Result<(), ExplorerError> {
    if k > n {
        warn!(n, k, "binomial request rejected");
        return Err(ExplorerError::TooManyWins { k, n });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinExplorer {
    p: f64,
}

impl WinExplorer {
    pub fn new(p: f64) -> Result<Self, ExplorerError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(ExplorerError::Distribution(format!(
                "win rate {p} outside [0, 1]"
            )));
        }
        Ok(Self { p })
    }

    pub fn from_dataset(dataset: &Dataset) -> Result<Self, ExplorerError> {
        win_rate(dataset)
            .ok_or(ExplorerError::UndefinedWinRate)
            .and_then(Self::new)
    }

    pub fn win_rate(&self) -> f64 {
        self.p
    }

    /// `P(X >= k)` for `X ~ Binomial(n, p)` plus the PMF over `0..=n`.
    pub fn evaluate(&self, n: u32, k: u32) -> Result<WinOutcome, ExplorerError> {
        check_request(n, k)?;
        let distribution = Binomial::new(self.p, u64::from(n))
            .map_err(|err| ExplorerError::Distribution(err.to_string()))?;

        let at_least = if k == 0 {
            1.0
        } else {
            1.0 - distribution.cdf(u64::from(k - 1))
        };
        let pmf = (0..=u64::from(n)).map(|i| distribution.pmf(i)).collect();

        Ok(WinOutcome {
            n,
            k,
            win_rate: self.p,
            at_least: at_least.clamp(0.0, 1.0),
            pmf,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WinOutcome {
    pub n: u32,
    pub k: u32,
    pub win_rate: f64,
    /// Probability of at least `k` wins.
    pub at_least: f64,
    /// `pmf[i]` is the probability of exactly `i` wins.
    pub pmf: Vec<f64>,
}

impl WinOutcome {
    /// One bar per win count; counts below `k` gray, the rest orange.
    pub fn chart(&self) -> BarChart {
        BarChart::new(
            self.pmf
                .iter()
                .enumerate()
                .map(|(i, probability)| {
                    let color = if (i as u32) < self.k {
                        palette::GRAY
                    } else {
                        palette::ORANGE
                    };
                    Bar::new(i.to_string(), *probability, color)
                })
                .collect(),
        )
    }
}
