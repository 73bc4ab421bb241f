use crate::Page;
use std::collections::HashMap;

/// Probability of moving to each page next; one entry per corpus page.
pub type Distribution = HashMap<Page, f64, ahash::RandomState>;

/// Estimated rank per page.  For sampling results, a missing key means the
/// walk never visited that page, i.e. rank 0.
pub type RankTable = HashMap<Page, f64, ahash::RandomState>;

pub fn norm_1(v: &RankTable) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

/// Rescale so the values sum to exactly 1, absorbing floating-point drift.
pub fn normalize(table: &mut RankTable) {
    let total: f64 = table.values().sum();
    assert!(total > 0.0, "total={total}");
    for w in table.values_mut() {
        *w /= total;
    }
}
