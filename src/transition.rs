use crate::{Corpus, Distribution, Error, Result};

/// Probability distribution over which page a random surfer visits next.
///
/// With probability `damping`, the surfer follows one of `page`'s outgoing
/// links uniformly; with probability `1 - damping`, it teleports to a
/// uniformly random corpus page.  A dangling page always teleports.
pub fn transition(corpus: &Corpus, page: &str, damping: f64) -> Result<Distribution> {
    assert!(damping > 0.0 && damping < 1.0, "damping={damping}");
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    let links = corpus
        .links(page)
        .ok_or_else(|| Error::UnknownPage(page.to_owned()))?;
    let n = corpus.page_count() as f64;
    if links.is_empty() {
        return Ok(corpus.iter_pages().map(|p| (p.clone(), 1.0 / n)).collect());
    }
    let teleport = (1.0 - damping) / n;
    let follow = damping / (links.len() as f64);
    let mut dist: Distribution = corpus
        .iter_pages()
        .map(|p| (p.clone(), teleport))
        .collect();
    for p in links.iter() {
        // links only hold corpus members, per the Corpus invariant
        *dist.get_mut(p).unwrap() += follow;
    }
    Ok(dist)
}
