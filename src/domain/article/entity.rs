// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, PublishedOn};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A raw field mapping as returned by the backend or read from the seed file.
pub type ArticleRow = Map<String, Value>;

pub const FIELD_ID: &str = "article_id";
pub const FIELD_AUTHOR: &str = "author";
pub const FIELD_AUTHOR_URL: &str = "authorUrl";
pub const FIELD_BODY: &str = "body";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_PUBLISHED_ON: &str = "publishedOn";
pub const FIELD_TITLE: &str = "title";

pub const DRAFT_STATUS: &str = "(draft)";

/// One blog post. Every field is optional: rows are stored as given, and any
/// key outside the known schema is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub id: Option<ArticleId>,
    pub author: Option<String>,
    pub author_url: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub published_on: Option<PublishedOn>,
    pub title: Option<String>,
    pub extra: Map<String, Value>,
    pub days_ago: Option<i64>,
    pub publish_status: Option<String>,
}

impl Article {
    /// Splits `fields` into the known columns and `extra`.
    ///
    /// `to_fields` gives the same keys back with two exceptions: a known field
    /// holding `null` is dropped, and numbers or booleans in text fields come
    /// back as strings.
    pub fn from_fields(fields: ArticleRow) -> DomainResult<Self> {
        let mut article = Article::default();

        for (key, value) in fields {
            match key.as_str() {
                FIELD_ID => {
                    article.id = match value {
                        Value::Null => None,
                        other => Some(ArticleId::from_value(&other)?),
                    };
                }
                FIELD_AUTHOR => article.author = text_field(&key, value)?,
                FIELD_AUTHOR_URL => article.author_url = text_field(&key, value)?,
                FIELD_BODY => article.body = text_field(&key, value)?,
                FIELD_CATEGORY => article.category = text_field(&key, value)?,
                FIELD_PUBLISHED_ON => {
                    article.published_on = text_field(&key, value)?.map(PublishedOn::parse);
                }
                FIELD_TITLE => article.title = text_field(&key, value)?,
                _ => {
                    article.extra.insert(key, value);
                }
            }
        }

        Ok(article)
    }

    pub fn from_value(value: Value) -> DomainResult<Self> {
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            other => Err(DomainError::MalformedRow(format!(
                "expected an object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// The stored fields as a mapping. Render-time fields are not included.
    pub fn to_fields(&self) -> ArticleRow {
        let mut fields = Map::new();
        if let Some(id) = self.id {
            fields.insert(FIELD_ID.into(), Value::from(id.get()));
        }
        let texts = [
            (FIELD_AUTHOR, self.author.as_deref()),
            (FIELD_AUTHOR_URL, self.author_url.as_deref()),
            (FIELD_BODY, self.body.as_deref()),
            (FIELD_CATEGORY, self.category.as_deref()),
            (FIELD_PUBLISHED_ON, self.published_on.as_ref().map(PublishedOn::as_str)),
            (FIELD_TITLE, self.title.as_deref()),
        ];
        for (key, value) in texts {
            if let Some(value) = value {
                fields.insert(key.into(), Value::String(value.to_owned()));
            }
        }
        for (key, value) in &self.extra {
            fields.insert(key.clone(), value.clone());
        }
        fields
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_on.as_ref().and_then(PublishedOn::timestamp)
    }

    pub fn is_published(&self) -> bool {
        self.published_on.as_ref().is_some_and(PublishedOn::is_set)
    }

    /// Recomputes `days_ago` and `publish_status` against `now`.
    pub fn derive_publish_state(&mut self, now: DateTime<Utc>) {
        self.days_ago = self.published_at().map(|at| (now - at).num_days());
        self.publish_status = Some(if self.is_published() {
            format!("published {} days ago", self.days_ago.unwrap_or(0))
        } else {
            DRAFT_STATUS.to_string()
        });
    }

    pub fn payload(&self) -> ArticlePayload {
        ArticlePayload {
            author: self.author.clone(),
            author_url: self.author_url.clone(),
            body: self.body.clone(),
            category: self.category.clone(),
            published_on: self.published_on.as_ref().map(|p| p.as_str().to_owned()),
            title: self.title.clone(),
        }
    }
}

/// The fields sent on create and update. The identifier travels in the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

fn text_field(key: &str, value: Value) -> DomainResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        other => Err(DomainError::MalformedRow(format!(
            "field `{key}` must be text, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
