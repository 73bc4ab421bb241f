use super::*;
use crate::{transition, weighted_choice, Corpus, Error, Page, RankTable};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::collections::HashMap;
use tracing::debug;

/// Stochastic estimator: walk a single random-surfer chain for `samples`
/// steps and take visit frequencies as ranks.
///
/// Pages the walk never reaches are absent from the table; callers treat a
/// missing key as rank 0.
pub struct SampledPageRank<'a> {
    corpus: &'a Corpus,
    damping: f64,
    samples: usize,
    rng: SmallRng,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
    /// Fixed seed for reproducible walks; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankTable,
    pub visits: HashMap<Page, usize, ahash::RandomState>,
}

impl<'a> SampledPageRank<'a> {
    pub fn new(corpus: &'a Corpus, config: &Config) -> Self {
        let damping = config.damping;
        assert!(damping > 0.0 && damping < 1.0, "damping={damping}");
        let samples = config.samples;
        assert!(samples > 0, "samples={samples}");
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            corpus,
            damping,
            samples,
            rng,
        }
    }
}

impl PageRank for SampledPageRank<'_> {
    type Result = self::Result;

    fn calc(&mut self) -> crate::Result<Self::Result> {
        if self.corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        // Sorted page order keeps seeded walks reproducible across runs;
        // hash-map iteration order is not.
        let pages = {
            let mut pages: Vec<&Page> = self.corpus.iter_pages().collect();
            pages.sort_unstable();
            pages
        };
        let mut page: Page = pages[self.rng.random_range(0..pages.len())].clone();
        let mut visits: HashMap<Page, usize, ahash::RandomState> = HashMap::default();
        let mut weights = vec![0.0; pages.len()];
        for _ in 0..self.samples {
            let dist = transition(self.corpus, &page, self.damping)?;
            for (slot, p) in weights.iter_mut().zip(pages.iter()) {
                *slot = *dist.get(*p).unwrap();
            }
            page = (*weighted_choice(&pages, &weights, &mut self.rng)?).clone();
            // the starting page is not a visit; every drawn page is
            *visits.entry(page.clone()).or_insert(0) += 1;
        }
        debug!(pages = visits.len(), samples = self.samples, "walk done");
        let n = self.samples as f64;
        let page_rank = visits
            .iter()
            .map(|(v, count)| (v.clone(), *count as f64 / n))
            .collect();
        Ok(Self::Result { page_rank, visits })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &RankTable {
        &self.page_rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::corpus_of;

    fn seeded(corpus: &Corpus, seed: u64) -> super::Result {
        let config = Config {
            seed: Some(seed),
            ..Config::default()
        };
        SampledPageRank::new(corpus, &config).calc().unwrap()
    }

    #[test]
    fn two_page_symmetry() {
        let corpus = corpus_of(&[("a", &["b"]), ("b", &["a"])]);
        let result = seeded(&corpus, 42);
        assert!((result.page_rank["a"] - 0.5).abs() < 0.05);
        assert!((result.page_rank["b"] - 0.5).abs() < 0.05);
    }

    #[test]
    fn every_sample_is_counted() {
        let corpus = corpus_of(&[("a", &["b"]), ("b", &["a", "c"]), ("c", &["a"])]);
        let result = seeded(&corpus, 3);
        let total_visits: usize = result.visits.values().sum();
        assert_eq!(total_visits, Config::default().samples);
        let total: f64 = result.page_rank.values().sum();
        assert!((total - 1.0).abs() < 1e-6, "total={total}");
    }

    #[test]
    fn seeded_walks_are_reproducible() {
        let corpus = corpus_of(&[("a", &["b", "c"]), ("b", &["c"]), ("c", &["a"])]);
        let first = seeded(&corpus, 9);
        let second = seeded(&corpus, 9);
        assert_eq!(first.visits, second.visits);
    }

    #[test]
    fn heavily_linked_page_ranks_higher() {
        let corpus = corpus_of(&[
            ("hub", &["a"]),
            ("a", &["hub"]),
            ("b", &["hub"]),
            ("c", &["hub"]),
        ]);
        let config = Config {
            samples: 50_000,
            seed: Some(5),
            ..Config::default()
        };
        let result = SampledPageRank::new(&corpus, &config).calc().unwrap();
        for v in ["a", "b", "c"] {
            let rank = result.page_rank.get(v).copied().unwrap_or(0.0);
            assert!(result.page_rank["hub"] > rank, "{v}");
        }
    }

    #[test]
    fn dangling_corpus_keeps_walking() {
        let corpus = corpus_of(&[("a", &["b"]), ("b", &[])]);
        let result = seeded(&corpus, 1);
        let total_visits: usize = result.visits.values().sum();
        assert_eq!(total_visits, Config::default().samples);
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let corpus = corpus_of(&[]);
        let mut walker = SampledPageRank::new(&corpus, &Config::default());
        assert!(matches!(walker.calc(), Err(Error::EmptyCorpus)));
    }
}
