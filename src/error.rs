use crate::Page;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("page not in corpus: {0}")]
    UnknownPage(Page),

    #[error("population has {population} entries but {weights} weights")]
    LengthMismatch { population: usize, weights: usize },

    #[error("weights sum to zero")]
    ZeroWeightSum,

    #[error("corpus has no pages")]
    EmptyCorpus,

    #[error("no convergence after {0} sweeps")]
    NoConvergence(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
