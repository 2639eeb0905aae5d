//! Read-only portfolio feed from the Instagram Graph API.

use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::info;
use url::Url;

use super::{check_status, with_timeout};
use crate::core::config::InstagramConfig;
use crate::core::models::FeedItem;
use crate::errors::{ContactError, Provider};
use crate::utils::text::truncate_chars;

pub const GRAPH_API_VERSION: &str = "v21.0";
pub const MEDIA_FIELDS: &str = "id,media_url,thumbnail_url,caption,permalink,media_type";
pub const FEED_LIMIT: usize = 24;
pub const MAX_CAPTION_CHARS: usize = 120;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphMedia {
    #[serde(default)]
    pub id: String,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub permalink: Option<String>,
    pub media_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MediaPage {
    #[serde(default)]
    data: Vec<GraphMedia>,
}

/// Keeps displayable media and projects it to the public item shape.
///
/// Items need an `id` and a `media_url`; videos additionally need a thumbnail.
#[must_use]
pub fn project_feed(media: Vec<GraphMedia>) -> Vec<FeedItem> {
    media
        .into_iter()
        .filter_map(|m| {
            if m.id.is_empty() {
                return None;
            }
            let url = m.media_url.filter(|u| !u.is_empty())?;
            let displayable = match m.media_type.as_deref() {
                Some("IMAGE" | "CAROUSEL_ALBUM") => true,
                Some("VIDEO") => m.thumbnail_url.as_deref().is_some_and(|t| !t.is_empty()),
                _ => false,
            };
            if !displayable {
                return None;
            }

            let thumb = m
                .thumbnail_url
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| url.clone());
            let link = m
                .permalink
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| format!("https://www.instagram.com/p/{}/", m.id));

            Some(FeedItem {
                caption: truncate_chars(m.caption.as_deref().unwrap_or(""), MAX_CAPTION_CHARS),
                id: m.id,
                url,
                thumb,
                link,
            })
        })
        .take(FEED_LIMIT)
        .collect()
}

pub struct InstagramFeedClient {
    http: HttpClient,
    config: InstagramConfig,
}

impl InstagramFeedClient {
    #[must_use]
    pub fn new(http: HttpClient, config: InstagramConfig) -> Self {
        Self { http, config }
    }

    fn media_url(&self) -> Result<Url, ContactError> {
        let mut url = Url::parse(&format!(
            "{}/{}/{}/media",
            self.config.api_url, GRAPH_API_VERSION, self.config.user_id
        ))
        .map_err(|e| ContactError::Unexpected(format!("Invalid graph API URL: {e}")))?;

        url.query_pairs_mut()
            .append_pair("fields", MEDIA_FIELDS)
            .append_pair("limit", &FEED_LIMIT.to_string())
            .append_pair("access_token", &self.config.access_token);
        Ok(url)
    }

    async fn load_feed(&self, url: Url) -> Result<Vec<FeedItem>, ContactError> {
        let response = self.http.get(url).send().await?;
        let page: MediaPage = check_status(Provider::Instagram, response)
            .await?
            .json()
            .await?;

        let feed = project_feed(page.data);
        info!(items = feed.len(), "Loaded Instagram feed");
        Ok(feed)
    }

    pub async fn fetch_feed(&self) -> Result<Vec<FeedItem>, ContactError> {
        let url = self.media_url()?;
        with_timeout(Provider::Instagram, self.config.timeout, self.load_feed(url)).await
    }
}
