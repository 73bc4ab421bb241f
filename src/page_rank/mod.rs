pub mod iterated;
pub use self::iterated::IteratedPageRank;
pub mod sampled;
pub use self::sampled::SampledPageRank;
mod traits;
pub use self::traits::*;
