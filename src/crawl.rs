use crate::corpus::LinkSet;
use crate::{Corpus, Page, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build a [`Corpus`] from a directory of HTML files.
///
/// Each `*.html` file becomes a page named by its file name; its links are
/// the `href` targets of its anchor tags, minus any self-link.  Targets
/// naming files outside the directory are dropped by [`Corpus::new`].
pub fn crawl(dir: &Path) -> Result<Corpus> {
    let href = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("invalid regex");
    let mut raw: HashMap<Page, LinkSet, ahash::RandomState> = HashMap::default();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().map_or(true, |ext| ext != "html") {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let contents = fs::read_to_string(&path)?;
        let links: LinkSet = href
            .captures_iter(&contents)
            .map(|c| c[1].to_owned())
            .filter(|target| target != name)
            .collect();
        debug!(page = name, links = links.len(), "crawled");
        raw.insert(name.to_owned(), links);
    }
    Ok(Corpus::new(raw))
}
