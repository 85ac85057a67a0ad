use crate::domain::article::{Article, PublishedOn};
use serde::Serialize;
use serde_json::{Map, Value};

/// Template data context for one article. Extra row fields are flattened in
/// alongside the known ones so templates can reach any backend column.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<i64>,
    #[serde(rename = "author", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "authorUrl", skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "publishedOn", skip_serializing_if = "Option::is_none")]
    pub published_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "daysAgo", skip_serializing_if = "Option::is_none")]
    pub days_ago: Option<i64>,
    #[serde(rename = "publishStatus", skip_serializing_if = "Option::is_none")]
    pub publish_status: Option<String>,
}

impl From<&Article> for ArticleView {
    fn from(article: &Article) -> Self {
        Self {
            extra: article.extra.clone(),
            article_id: article.id.map(Into::into),
            author: article.author.clone(),
            author_url: article.author_url.clone(),
            body: article.body.clone(),
            category: article.category.clone(),
            published_on: article
                .published_on
                .as_ref()
                .map(|p| PublishedOn::as_str(p).to_owned()),
            title: article.title.clone(),
            days_ago: article.days_ago,
            publish_status: article.publish_status.clone(),
        }
    }
}
