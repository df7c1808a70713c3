//! Merge, deduplicate and order provider results.

use std::collections::HashSet;

use nf_core::Article;

/// Concatenates per-provider results in provider order, keeps the first
/// article seen for each title, and orders the rest newest first.
pub fn merge(results: Vec<Vec<Article>>) -> Vec<Article> {
    let combined: Vec<Article> = results.into_iter().flatten().collect();
    let mut unique = dedup_by_title(combined);
    sort_newest_first(&mut unique);
    unique
}

/// Exact title match; no case or whitespace folding.
pub fn dedup_by_title(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(article.title.clone()))
        .collect()
}

/// Stable, so articles sharing a timestamp keep their merge order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}
