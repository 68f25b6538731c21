//! Damped PageRank by power iteration over a row-stochastic matrix.

use recap_core::config::defaults;
use recap_core::models::ResolvedOptions;

use super::similarity::TransitionMatrix;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankParams {
    pub damping_factor: f64,
    pub max_iterations: usize,
    pub convergence_threshold: f64,
}

impl Default for PageRankParams {
    fn default() -> Self {
        Self {
            damping_factor: defaults::DEFAULT_DAMPING_FACTOR,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            convergence_threshold: defaults::DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }
}

impl From<&ResolvedOptions> for PageRankParams {
    fn from(options: &ResolvedOptions) -> Self {
        Self {
            damping_factor: options.damping_factor,
            max_iterations: options.max_iterations,
            convergence_threshold: options.convergence_threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageRankOutcome {
    /// One score per node; sums to 1.
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// False when the iteration cap was hit first.
    pub converged: bool,
}

/// Run `score'[i] = (1 - d) / n + d * Σ_j score[j] * M[j][i]` from a uniform
/// start until the largest per-node change drops below the threshold or the
/// iteration cap is reached.
pub fn pagerank(matrix: &TransitionMatrix, params: &PageRankParams) -> PageRankOutcome {
    let n = matrix.size();
    match n {
        0 => {
            return PageRankOutcome {
                scores: Vec::new(),
                iterations: 0,
                converged: true,
            }
        }
        1 => {
            return PageRankOutcome {
                scores: vec![1.0],
                iterations: 0,
                converged: true,
            }
        }
        _ => {}
    }

    let d = params.damping_factor;
    let teleport = (1.0 - d) / n as f64;
    let mut current = vec![1.0 / n as f64; n];
    let mut next = vec![0.0f64; n];

    for iteration in 1..=params.max_iterations {
        for (i, slot) in next.iter_mut().enumerate() {
            let inflow: f64 = current
                .iter()
                .enumerate()
                .map(|(j, score)| score * matrix.get(j, i))
                .sum();
            *slot = teleport + d * inflow;
        }

        let delta = current
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .fold(0.0f64, f64::max);

        std::mem::swap(&mut current, &mut next);

        if delta < params.convergence_threshold {
            return PageRankOutcome {
                scores: current,
                iterations: iteration,
                converged: true,
            };
        }
    }

    PageRankOutcome {
        scores: current,
        iterations: params.max_iterations,
        converged: false,
    }
}
