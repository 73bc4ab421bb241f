pub mod corpus;
pub use self::corpus::{Corpus, Page};
pub mod crawl;
pub use self::crawl::crawl;
pub mod error;
pub use self::error::{Error, Result};
mod common;
pub use self::common::*;
pub mod sampling;
pub use self::sampling::{cumulative, weighted_choice};
pub mod transition;
pub use self::transition::transition;

pub mod page_rank;
