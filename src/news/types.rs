//! News API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news source as listed by `/v2/top-headlines/sources`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Identifier used in the `sources` query parameter.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description of the source.
    pub description: String,
    /// Homepage URL.
    pub url: String,
    /// Category such as `general` or `technology`.
    pub category: String,
    /// ISO 639-1 language code.
    pub language: String,
    /// ISO 3166-1 country code.
    pub country: String,
}

/// Response of the sources endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesResponse {
    /// `ok` on success.
    pub status: String,
    /// The listed sources.
    pub sources: Vec<Source>,
}

/// The source reference embedded in an [`Article`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// Source identifier, absent for sources the API does not list.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
}

/// A headline returned by `/v2/top-headlines`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The publishing source.
    pub source: ArticleSource,
    /// The author, when the source provides one.
    pub author: Option<String>,
    /// Headline.
    pub title: String,
    /// Short summary.
    pub description: Option<String>,
    /// Link to the full article.
    pub url: String,
    /// Link to the lead image.
    pub url_to_image: Option<String>,
    /// Publication time in UTC.
    pub published_at: DateTime<Utc>,
    /// Truncated article body.
    pub content: Option<String>,
}

impl Article {
    /// Returns the author, or the source name when the article has none.
    #[must_use]
    pub fn author_name(&self) -> &str {
        self.author.as_deref().unwrap_or(&self.source.name)
    }

    /// Returns the name of the publishing source.
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source.name
    }
}

/// Response of the headlines endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlesResponse {
    /// The returned headlines.
    pub articles: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ARTICLE_JSON: &str = r#"{
        "source": {"id": "bbc-news", "name": "BBC News"},
        "author": null,
        "title": "Markets rally",
        "description": "Stocks rose on Monday.",
        "url": "https://www.bbc.co.uk/news/1",
        "urlToImage": "https://www.bbc.co.uk/news/1.jpg",
        "publishedAt": "2025-08-31T10:15:00Z",
        "content": "Stocks rose..."
    }"#;

    #[test]
    fn test_article_decodes_camel_case_fields() {
        let article: Article = serde_json::from_str(ARTICLE_JSON).unwrap();

        assert_eq!(article.source.id.as_deref(), Some("bbc-news"));
        assert_eq!(
            article.url_to_image.as_deref(),
            Some("https://www.bbc.co.uk/news/1.jpg")
        );
        assert_eq!(
            article.published_at,
            Utc.with_ymd_and_hms(2025, 8, 31, 10, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_author_name_falls_back_to_source_name() {
        let mut article: Article = serde_json::from_str(ARTICLE_JSON).unwrap();
        assert_eq!(article.author_name(), "BBC News");
        assert_eq!(article.source_name(), "BBC News");

        article.author = Some("Jane Doe".to_string());
        assert_eq!(article.author_name(), "Jane Doe");
    }

    #[test]
    fn test_article_accepts_missing_optional_fields() {
        let json = r#"{
            "source": {"id": null, "name": "Example"},
            "title": "Untitled",
            "url": "https://example.com/a",
            "publishedAt": "2025-08-31T10:15:00Z"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();

        assert!(article.author.is_none());
        assert!(article.description.is_none());
        assert!(article.url_to_image.is_none());
        assert!(article.content.is_none());
    }

    #[test]
    fn test_article_rejects_invalid_timestamp() {
        let json = ARTICLE_JSON.replace("2025-08-31T10:15:00Z", "yesterday");
        assert!(serde_json::from_str::<Article>(&json).is_err());
    }

    #[test]
    fn test_sources_response_decodes() {
        let json = r#"{
            "status": "ok",
            "sources": [{
                "id": "cnn",
                "name": "CNN",
                "description": "Breaking news",
                "url": "https://edition.cnn.com",
                "category": "general",
                "language": "en",
                "country": "us"
            }]
        }"#;

        let response: SourcesResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "ok");
        assert_eq!(response.sources.len(), 1);
        assert_eq!(response.sources[0].id, "cnn");
    }
}
