// src/domain/article/collection.rs
use crate::domain::article::entity::{Article, ArticleRow};
use crate::domain::errors::DomainResult;
use std::cmp::Ordering;

/// The in-memory set of articles shown on a page. Created by the caller and
/// only ever grown by `load_all`, or emptied by an explicit `clear`.
#[derive(Debug, Default, Clone)]
pub struct ArticleCollection {
    articles: Vec<Article>,
}

impl ArticleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts `rows` newest first and appends one article per row. Existing
    /// entries are kept, so loading the same rows twice duplicates them.
    ///
    /// Rows without a parseable `publishedOn` sort after every dated row and
    /// keep their relative order. Nothing is appended if any row is malformed.
    pub fn load_all(&mut self, rows: Vec<ArticleRow>) -> DomainResult<usize> {
        let mut loaded = rows
            .into_iter()
            .map(Article::from_fields)
            .collect::<DomainResult<Vec<_>>>()?;
        loaded.sort_by(newest_first);

        let count = loaded.len();
        self.articles.extend(loaded);
        tracing::debug!(count, total = self.articles.len(), "articles loaded");
        Ok(count)
    }

    pub fn clear(&mut self) {
        self.articles.clear();
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn as_slice(&self) -> &[Article] {
        &self.articles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Article> {
        self.articles.iter_mut()
    }
}

impl<'a> IntoIterator for &'a ArticleCollection {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.articles.iter()
    }
}

fn newest_first(a: &Article, b: &Article) -> Ordering {
    match (a.published_at(), b.published_at()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
