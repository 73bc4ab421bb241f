use super::*;
use crate::corpus::LinkSet;
use crate::{normalize, Corpus, Error, Page, RankTable};
use std::collections::HashMap;
use tracing::debug;

/// Deterministic fixed-point solver: sweep the PageRank update over the
/// whole corpus until every per-page change falls within `epsilon`.
pub struct IteratedPageRank<'a> {
    corpus: &'a Corpus,
    damping: f64,
    epsilon: f64,
    max_sweeps: usize,
    backlinks: HashMap<Page, LinkSet, ahash::RandomState>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub epsilon: f64,
    pub max_sweeps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 0.001,
            max_sweeps: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankTable,
    pub delta: RankTable,
    pub sweeps: usize,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(corpus: &'a Corpus, config: &Config) -> Self {
        let damping = config.damping;
        assert!(damping > 0.0 && damping < 1.0, "damping={damping}");
        let epsilon = config.epsilon;
        assert!(epsilon > 0.0, "epsilon={epsilon}");
        assert!(config.max_sweeps > 0, "max_sweeps={}", config.max_sweeps);
        let backlinks = corpus.reverse_index();
        Self {
            corpus,
            damping,
            epsilon,
            max_sweeps: config.max_sweeps,
            backlinks,
        }
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&mut self) -> crate::Result<Self::Result> {
        if self.corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let n = self.corpus.page_count() as f64;
        let teleport = (1.0 - self.damping) / n;
        let mut p: RankTable = self
            .corpus
            .iter_pages()
            .map(|v| (v.clone(), 1.0 / n))
            .collect();
        for sweep in 1..=self.max_sweeps {
            // Synchronous sweep: r is built from p alone.
            let mut r = RankTable::with_capacity_and_hasher(p.len(), ahash::RandomState::new());
            for v in self.corpus.iter_pages() {
                let mut inbound = 0.0;
                for u in self.backlinks.get(v).into_iter().flatten() {
                    // u links to v, so its link set is non-empty
                    let out = self.corpus.links(u).unwrap().len() as f64;
                    inbound += p.get(u).unwrap() / out;
                }
                r.insert(v.clone(), teleport + self.damping * inbound);
            }
            // A dangling page feeds no backlink set, so its mass is dropped
            // rather than spread uniformly; the sampling walk teleports off
            // dangling pages instead.  Renormalizing restores total mass 1.
            normalize(&mut r);

            let mut delta =
                RankTable::with_capacity_and_hasher(p.len(), ahash::RandomState::new());
            let mut converged = true;
            for (v, next) in r.iter() {
                let d = next - p.get(v).unwrap();
                if d.abs() > self.epsilon {
                    converged = false;
                }
                delta.insert(v.clone(), d);
            }
            if converged {
                debug!(sweeps = sweep, "converged");
                return Ok(Self::Result {
                    page_rank: r,
                    delta,
                    sweeps: sweep,
                });
            }
            p = r;
        }
        Err(Error::NoConvergence(self.max_sweeps))
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &RankTable {
        &self.page_rank
    }
}
