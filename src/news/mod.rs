//! News API services.
//!
//! Typed access to the two news API listings used by the app: the available
//! sources and the top headlines for a set of sources.
//!
//! # Example
//!
//! ```rust,ignore
//! use newsline_client::news::{HeadlinesService, NewsService, SourcesService};
//! use newsline_client::{ClientConfig, RestClient};
//!
//! let config = ClientConfig::from_process_env()?;
//! let news = NewsService::new(RestClient::new(&config)?);
//!
//! let sources = news.fetch_sources().await?;
//! let ids: Vec<String> = sources.into_iter().map(|s| s.id).collect();
//! let articles = news.fetch_headlines(&ids).await?;
//! ```

mod services;
mod types;

pub use services::{
    headlines_endpoint, sources_endpoint, HeadlinesService, NewsService, SourcesService,
    HEADLINES_PATH, SOURCES_PATH,
};
pub use types::{Article, ArticleSource, ArticlesResponse, Source, SourcesResponse};
