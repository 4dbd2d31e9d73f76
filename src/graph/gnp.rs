use crate::graph::*;
use rand::Rng;
use rand_distr::Geometric;
use std::ops::RangeInclusive;

pub trait GnpGenerator: Sized {
    /// Generates a Gilbert (also, wrongly, known as Erdos-Reyni) graph
    /// The `G(n,p)` contains n nodes and each of the `n(n-1)/2` edges exists
    /// independently with probability `p`. Each edge receives a weight drawn
    /// uniformly from `weights`.
    fn random_gnp<R: Rng>(rng: &mut R, n: Node, p: f64, weights: RangeInclusive<Weight>) -> Self;
}

impl GnpGenerator for WeightedGraph {
    fn random_gnp<R: Rng>(rng: &mut R, n: Node, p: f64, weights: RangeInclusive<Weight>) -> Self {
        // indirection via vector as we need a &mut for rng and the weights also need rng
        let n64 = n as u64;
        let pairs: Vec<_> = BernoulliSamplingRange::new(rng, 0, n64 * n64, p)
            .filter_map(|x| {
                let u = x / n64;
                let v = x % n64;
                (u < v).then_some((u as Node, v as Node))
            })
            .collect();

        let edges: Vec<_> = pairs
            .into_iter()
            .map(|(u, v)| WeightedEdge(u, v, rng.gen_range(weights.clone())))
            .collect();

        Self::from_edges(n, edges)
    }
}

/// Provides an iterator similarly to Range, but
/// includes each element i.i.d. with probability of p
pub struct BernoulliSamplingRange<'a, R: Rng> {
    current: u64,
    end: u64,
    distr: Geometric,
    rng: &'a mut R,
}

impl<'a, R: Rng> BernoulliSamplingRange<'a, R> {
    pub fn new(rng: &'a mut R, begin: u64, end: u64, prob: f64) -> Self {
        debug_assert!(begin <= end);
        debug_assert!((0.0..=1.0).contains(&prob));
        Self {
            rng,
            current: begin,
            end,
            distr: Geometric::new(prob).unwrap(),
        }
    }
}

impl<R: Rng> Iterator for BernoulliSamplingRange<'_, R> {
    type Item = u64;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.end {
            return None;
        }

        let skip = self.rng.sample(self.distr);
        match self.current.checked_add(skip) {
            Some(x) if x < self.end => {
                // x < end <= u64::MAX
                self.current = x + 1;
                Some(x)
            }
            _ => {
                self.current = self.end;
                None
            }
        }
    }
}
