//! Pagination helpers for API v2 responses
//!
//! Search endpoints return a `paging` block whose `urls.nextPage` points at
//! the following page. Pages are fetched with a plain `GET` on that URL.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use super::Client;
use crate::error::Result;

/// Paging metadata attached to paginated responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V2Pagination {
    /// Rows in the current page
    #[serde(default)]
    pub rows: u64,

    /// Rows across all pages
    #[serde(default)]
    pub total_rows: u64,

    #[serde(default)]
    pub urls: PaginationUrls,
}

/// Links to neighbouring pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}

impl V2Pagination {
    /// URL of the next page, if there is one
    pub fn next_page(&self) -> Option<&str> {
        self.urls.next_page.as_deref().filter(|u| !u.is_empty())
    }
}

/// A response type that can be walked page by page
pub trait Pageable: DeserializeOwned {
    /// Paging block of this page
    fn page_info(&self) -> Option<&V2Pagination>;

    /// Drop paging information, used once all pages were merged
    fn reset_paging(&mut self);

    /// Merge the items of a following page into this one
    fn append(&mut self, next: Self);
}

/// Reduce a next-page URL to a path (plus query) on the client's host
pub(crate) fn next_page_path(next: &str) -> String {
    match Url::parse(next) {
        Ok(url) => match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        },
        Err(_) => next.to_string(),
    }
}

impl Client {
    /// Replace `page` with the following page.
    ///
    /// Returns `false` without a request when there is no next page.
    pub async fn next_page<P: Pageable>(&self, page: &mut P) -> Result<bool> {
        let Some(next) = page.page_info().and_then(V2Pagination::next_page) else {
            return Ok(false);
        };

        let path = next_page_path(next);
        log::debug!("fetching next page id={} path={}", self.id, path);
        *page = self.request_decoder(Method::GET, &path, None).await?;
        Ok(true)
    }

    /// Follow every next-page link and merge all pages into `first`
    pub async fn all_pages<P: Pageable>(&self, mut first: P) -> Result<P> {
        let mut next = first
            .page_info()
            .and_then(V2Pagination::next_page)
            .map(next_page_path);

        while let Some(path) = next {
            let page: P = self.request_decoder(Method::GET, &path, None).await?;
            next = page
                .page_info()
                .and_then(V2Pagination::next_page)
                .map(next_page_path);
            first.append(page);
        }

        first.reset_paging();
        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_path() {
        assert_eq!(
            next_page_path("https://acme.lacework.net/api/v2/Vulnerabilities/Containers/search/abc123"),
            "/api/v2/Vulnerabilities/Containers/search/abc123"
        );
        assert_eq!(
            next_page_path("http://127.0.0.1:9000/api/v2/Alerts?page=2"),
            "/api/v2/Alerts?page=2"
        );
        assert_eq!(next_page_path("api/v2/Alerts/2"), "api/v2/Alerts/2");
    }

    #[test]
    fn test_pagination_deserialize() {
        let paging: V2Pagination = serde_json::from_str(
            r#"{"rows":1000,"totalRows":3000,"urls":{"nextPage":"https://acme.lacework.net/api/v2/x/1"}}"#,
        )
        .unwrap();
        assert_eq!(paging.rows, 1000);
        assert_eq!(paging.total_rows, 3000);
        assert_eq!(paging.next_page(), Some("https://acme.lacework.net/api/v2/x/1"));
    }

    #[test]
    fn test_pagination_null_or_empty_next_page() {
        let paging: V2Pagination =
            serde_json::from_str(r#"{"rows":2,"totalRows":2,"urls":{"nextPage":null}}"#).unwrap();
        assert_eq!(paging.next_page(), None);

        let paging: V2Pagination =
            serde_json::from_str(r#"{"urls":{"nextPage":""}}"#).unwrap();
        assert_eq!(paging.next_page(), None);
    }
}
