use corpus_rank::page_rank::{iterated, sampled, IteratedPageRank, PageRank, SampledPageRank};
use corpus_rank::Corpus;
use criterion::*;
use rand::{prelude::*, rngs::SmallRng};
use std::collections::HashMap;

criterion_main!(benches);
criterion_group!(benches, ring, random_corpus, walk);

fn ring_corpus(n: usize) -> Corpus {
    let raw: HashMap<_, _, ahash::RandomState> = (0..n)
        .map(|i| {
            let targets = [format!("p{}", (i + 1) % n)].into_iter().collect();
            (format!("p{i}"), targets)
        })
        .collect();
    Corpus::new(raw)
}

fn random_corpus_of(n: usize, rng: &mut SmallRng) -> Corpus {
    let pages: Vec<String> = (0..n).map(|i| format!("p{i}")).collect();
    let raw: HashMap<_, _, ahash::RandomState> = pages
        .iter()
        .map(|page| {
            let targets = pages
                .iter()
                .filter(|t| *t != page && rng.random_bool(0.2))
                .cloned()
                .collect();
            (page.clone(), targets)
        })
        .collect();
    Corpus::new(raw)
}

fn ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ring");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[10usize, 20usize, 40usize, 80usize, 160usize];
    for n in SIZES.iter() {
        let corpus = ring_corpus(*n);
        group.bench_with_input(BenchmarkId::new("IteratedPR", n), n, |b, _| {
            b.iter(|| {
                let config = iterated::Config::default();
                let mut solver = IteratedPageRank::new(&corpus, &config);
                solver.calc().unwrap()
            })
        });
    }
    group.finish();
}

fn random_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("RandomCorpus");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[10usize, 20usize, 40usize, 80usize, 160usize];
    let mut rng = SmallRng::seed_from_u64(0);
    for n in SIZES.iter() {
        let corpus = random_corpus_of(*n, &mut rng);
        group.bench_with_input(BenchmarkId::new("IteratedPR", n), n, |b, _| {
            b.iter(|| {
                let config = iterated::Config::default();
                let mut solver = IteratedPageRank::new(&corpus, &config);
                solver.calc().unwrap()
            })
        });
    }
    group.finish();
}

fn walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("Walk");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[10usize, 20usize, 40usize];
    let mut rng = SmallRng::seed_from_u64(0);
    for n in SIZES.iter() {
        let corpus = random_corpus_of(*n, &mut rng);
        group.bench_with_input(BenchmarkId::new("SampledPR", n), n, |b, _| {
            b.iter(|| {
                let config = sampled::Config {
                    samples: 1_000,
                    seed: Some(7),
                    ..sampled::Config::default()
                };
                let mut walker = SampledPageRank::new(&corpus, &config);
                walker.calc().unwrap()
            })
        });
    }
    group.finish();
}
