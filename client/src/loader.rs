//! Page loading over HTTP/JSON.
//!
//! The loader contract is a single operation: fetch one 1-based page and
//! return its rows plus the dataset's total row count. Repeated loads for
//! the same index are expected and must be safe (GET semantics). Any
//! transport that yields an ordered row list and a total satisfies it.

use crate::Config;
use datagrid_engine::{LoadError, Page, PageIndex, Record, RowCount};
use serde::Deserialize;
use std::future::Future;

/// The page loader contract consumed by a [`Session`](crate::Session).
pub trait PageLoader {
    /// Fetch the given 1-based page.
    fn load(&self, page: PageIndex) -> impl Future<Output = Result<Page, LoadError>> + Send;
}

/// Wire shape of a paginated response:
/// `{ "data": [ { "id": ..., ... } ], "pagination": { "total": ... } }`.
#[derive(Debug, Deserialize)]
struct PageResponse {
    data: Vec<ApiRecord>,
    pagination: Pagination,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    total: RowCount,
}

/// A row as served by the API: an integer id plus arbitrary display fields.
#[derive(Debug, Deserialize)]
struct ApiRecord {
    id: u64,
    #[serde(flatten)]
    fields: serde_json::Value,
}

/// Loads pages from an HTTP/JSON endpoint with `page` and `limit` query
/// parameters.
#[derive(Debug, Clone)]
pub struct HttpPageLoader {
    client: reqwest::Client,
    base_url: String,
    page_size: RowCount,
}

impl HttpPageLoader {
    /// Create a loader against the given base URL.
    pub fn new(base_url: impl Into<String>, page_size: RowCount) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            page_size,
        }
    }

    /// Create a loader from client configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone(), config.page_size)
    }

    /// Rows requested per page.
    pub fn page_size(&self) -> RowCount {
        self.page_size
    }
}

impl PageLoader for HttpPageLoader {
    async fn load(&self, page: PageIndex) -> Result<Page, LoadError> {
        tracing::debug!(page, url = %self.base_url, "fetching page");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("page", page), ("limit", self.page_size)])
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(page, status = status.as_u16(), "page fetch rejected");
            return Err(LoadError::Status(status.as_u16()));
        }

        let body: PageResponse = response
            .json()
            .await
            .map_err(|e| LoadError::Decode(e.to_string()))?;

        let rows = body
            .data
            .into_iter()
            .map(|r| Record::new(r.id, r.fields))
            .collect();
        Ok(Page::new(page, rows, body.pagination.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_response_parses_reference_shape() {
        let json = r#"{
            "data": [
                {
                    "id": 4,
                    "title": "Veranda Post",
                    "place_of_origin": "Nigeria",
                    "artist_display": "Olowe of Ise",
                    "inscriptions": null,
                    "date_start": 1910,
                    "date_end": 1914
                },
                { "id": 9, "title": "Untitled" }
            ],
            "pagination": { "total": 126335, "limit": 12, "current_page": 1 }
        }"#;

        let parsed: PageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].id, 4);
        assert_eq!(parsed.data[0].fields["title"], "Veranda Post");
        assert_eq!(parsed.pagination.total, 126335);
    }

    #[test]
    fn api_record_keeps_display_fields_opaque() {
        let record: ApiRecord =
            serde_json::from_str(r#"{"id": 7, "title": "A", "unexpected": [1, 2]}"#).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.fields["unexpected"][1], 2);
    }

    #[test]
    fn page_response_rejects_missing_pagination() {
        let result: Result<PageResponse, _> = serde_json::from_str(r#"{"data": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn response_maps_to_engine_page() {
        let json = r#"{
            "data": [ { "id": 1 }, { "id": 2 }, { "id": 3 } ],
            "pagination": { "total": 50 }
        }"#;
        let body: PageResponse = serde_json::from_str(json).unwrap();
        let rows: Vec<Record> = body
            .data
            .into_iter()
            .map(|r| Record::new(r.id, r.fields))
            .collect();
        let page = Page::new(2, rows, body.pagination.total);

        assert_eq!(page.row_ids().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(page.total, 50);
    }
}
