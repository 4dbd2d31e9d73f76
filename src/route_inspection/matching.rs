//! Exact minimum weight perfect matching on small complete graphs via a subset DP.
//!
//! State `mask` is the set of already matched vertices; the lowest unmatched vertex is always
//! matched next, so every matching is generated exactly once. Tables are flat arrays indexed
//! by `mask` and need `2^k` entries for `k` vertices.

use crate::{errors::SolverError, graph::Weight};
use log::debug;

const UNREACHED: Weight = Weight::MAX;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerfectMatching {
    pairs: Vec<(usize, usize)>,
    weight: Weight,
}

impl PerfectMatching {
    /// Matched pairs `(i, j)` with `i < j`, ordered by `i`
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Largest number of vertices whose subset table can be addressed
pub const MAX_MATCHING_VERTICES: usize = usize::BITS as usize - 2;

/// Computes a minimum weight perfect matching of the vertices `0..k`, where `distance(i, j)`
/// is the cost of matching `i` with `j` (`None` if they cannot be matched).
///
/// Returns `Ok(None)` if `k` is odd or no perfect matching exists, and an error if the
/// subset table for `k` cannot be addressed.
pub fn min_weight_perfect_matching<F>(
    k: usize,
    distance: F,
) -> Result<Option<PerfectMatching>, SolverError>
where
    F: Fn(usize, usize) -> Option<Weight>,
{
    if k % 2 == 1 {
        return Ok(None);
    }

    if k > MAX_MATCHING_VERTICES {
        return Err(SolverError::CapacityExceeded {
            nodes: k,
            limit: MAX_MATCHING_VERTICES,
        });
    }

    let full: usize = (1 << k) - 1;
    debug!("matching over {k} vertices with {} states", full + 1);

    let mut cost = vec![UNREACHED; full + 1];
    let mut choice = vec![(0u8, 0u8); full + 1];
    cost[0] = 0;

    for mask in 0..full {
        let current = cost[mask];
        if current == UNREACHED {
            continue;
        }

        let first = (!mask).trailing_zeros() as usize;
        for second in (first + 1)..k {
            if mask & (1 << second) != 0 {
                continue;
            }

            let Some(d) = distance(first, second) else {
                continue;
            };

            let next = mask | (1 << first) | (1 << second);
            let candidate = current
                .checked_add(d)
                .ok_or(SolverError::WeightOverflow)?;
            if candidate < cost[next] {
                cost[next] = candidate;
                choice[next] = (first as u8, second as u8);
            }
        }
    }

    if cost[full] == UNREACHED {
        return Ok(None);
    }

    let mut pairs = Vec::with_capacity(k / 2);
    let mut mask = full;
    while mask != 0 {
        let (first, second) = choice[mask];
        pairs.push((first as usize, second as usize));
        mask &= !((1 << first) | (1 << second));
    }
    pairs.reverse();

    Ok(Some(PerfectMatching {
        pairs,
        weight: cost[full],
    }))
}
