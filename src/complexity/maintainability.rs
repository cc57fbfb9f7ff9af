//! Maintainability index on a 0-100 scale.
//!
//! MI = max(0, (171 - 5.2 ln(V) - 0.23 G - 16.2 ln(L)) * 100 / 171)
//!
//! V is Halstead volume, G total cyclomatic complexity, L source lines of
//! code. Modules with no volume or no code score 100.

use crate::common::round_to;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintainabilityRank {
    A,
    B,
    C,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintainabilityIndex {
    pub score: f64,
    pub rank: MaintainabilityRank,
}

pub fn compute_maintainability_index(
    halstead_volume: f64,
    total_complexity: u32,
    sloc: usize,
) -> MaintainabilityIndex {
    let score = if halstead_volume <= 0.0 || sloc == 0 {
        100.0
    } else {
        let raw = 171.0
            - 5.2 * halstead_volume.ln()
            - 0.23 * f64::from(total_complexity)
            - 16.2 * (sloc as f64).ln();
        round_to((raw * 100.0 / 171.0).clamp(0.0, 100.0), 2)
    };

    MaintainabilityIndex {
        score,
        rank: rank_for_score(score),
    }
}

/// Non-blank lines that are not pure comments
pub fn count_sloc(source: &str) -> usize {
    source
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .count()
}

fn rank_for_score(score: f64) -> MaintainabilityRank {
    if score >= 20.0 {
        MaintainabilityRank::A
    } else if score >= 10.0 {
        MaintainabilityRank::B
    } else {
        MaintainabilityRank::C
    }
}
