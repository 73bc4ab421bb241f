use std::collections::{HashMap, HashSet};

/// A corpus document, named by value.
pub type Page = String;

pub type LinkSet = HashSet<Page, ahash::RandomState>;

/// A finite directed link graph over pages.  Built once, immutable after.
///
/// Construction drops every link target that is not itself a corpus key, so
/// link sets only ever refer to members of the same corpus.  A page may keep
/// an empty link set (a dangling page).
#[derive(Debug, Clone)]
pub struct Corpus {
    links: HashMap<Page, LinkSet, ahash::RandomState>,
}

impl Corpus {
    pub fn new(raw: HashMap<Page, LinkSet, ahash::RandomState>) -> Self {
        let keys: HashSet<Page, ahash::RandomState> = raw.keys().cloned().collect();
        let links = raw
            .into_iter()
            .map(|(page, targets)| {
                let targets = targets.into_iter().filter(|t| keys.contains(t)).collect();
                (page, targets)
            })
            .collect();
        Self { links }
    }

    pub fn page_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    pub fn iter_pages(&self) -> impl Iterator<Item = &Page> {
        self.links.keys()
    }

    /// Outgoing links of `page`, or `None` if it is not a corpus member.
    pub fn links(&self, page: &str) -> Option<&LinkSet> {
        self.links.get(page)
    }

    /// Pages that link to each page.  A dangling page contributes to no
    /// entry; a page nothing links to keeps an empty set.
    pub fn reverse_index(&self) -> HashMap<Page, LinkSet, ahash::RandomState> {
        let mut index: HashMap<Page, LinkSet, ahash::RandomState> = self
            .links
            .keys()
            .map(|page| (page.clone(), LinkSet::default()))
            .collect();
        for (source, targets) in self.links.iter() {
            for target in targets.iter() {
                index.get_mut(target).unwrap().insert(source.clone());
            }
        }
        index
    }
}

#[cfg(test)]
pub(crate) fn corpus_of(pairs: &[(&str, &[&str])]) -> Corpus {
    let raw = pairs
        .iter()
        .map(|(page, targets)| {
            let targets = targets.iter().map(|t| t.to_string()).collect();
            (page.to_string(), targets)
        })
        .collect();
    Corpus::new(raw)
}

#[cfg(test)]
use quickcheck::Arbitrary;

#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct RandomCorpus(pub Corpus);

#[cfg(test)]
impl Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 8;

        let n = usize::arbitrary(g) % N + 1;
        let pages: Vec<Page> = (0..n).map(|i| format!("p{i}")).collect();
        let raw = pages
            .iter()
            .map(|page| {
                let targets = pages
                    .iter()
                    .filter(|t| *t != page && bool::arbitrary(g))
                    .cloned()
                    .collect();
                (page.clone(), targets)
            })
            .collect();
        Self(Corpus::new(raw))
    }
}
