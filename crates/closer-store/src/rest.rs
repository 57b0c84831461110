//! PostgREST (Supabase) record store.

use std::time::Duration;

use async_trait::async_trait;
use closer_config::StoreConfig;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::{Filter, Record, RecordStore, error::StoreError, http::check_response};

/// HTTP client for a PostgREST endpoint.
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
}

impl RestStore {
    /// Create a client for the configured project.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if the key cannot be used as a header
    /// value, and [`StoreError::Http`] if the `reqwest::Client` fails to build.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let header = |value: String| {
            HeaderValue::from_str(&value).map_err(|e| StoreError::InvalidKey(e.to_string()))
        };

        let mut headers = HeaderMap::new();
        headers.insert("apikey", header(config.key.clone())?);
        headers.insert(AUTHORIZATION, header(format!("Bearer {}", config.key))?);

        let http = reqwest::Client::builder()
            .user_agent("closer/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.rest_url(),
        })
    }

    fn url(&self, table: &str, filters: &[Filter], limit: Option<usize>) -> String {
        let mut query: Vec<String> = filters.iter().map(Filter::to_query_pair).collect();
        if let Some(limit) = limit {
            query.push(format!("limit={limit}"));
        }

        let mut url = format!("{}/{}", self.base_url, urlencoding::encode(table));
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }
        url
    }
}

async fn decode_rows(table: &str, resp: reqwest::Response) -> Result<Vec<Record>, StoreError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| StoreError::Decode {
        table: table.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl RecordStore for RestStore {
    async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        limit: Option<usize>,
    ) -> Result<Vec<Record>, StoreError> {
        let url = self.url(table, filters, limit);
        tracing::debug!(table, %url, "select");

        let resp = check_response(table, self.http.get(&url).send().await?).await?;
        decode_rows(table, resp).await
    }

    async fn insert(&self, table: &str, record: Record) -> Result<(), StoreError> {
        let url = self.url(table, &[], None);
        tracing::debug!(table, "insert");

        check_response(
            table,
            self.http
                .post(&url)
                .header("Prefer", "return=minimal")
                .json(&record)
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        patch: Record,
    ) -> Result<usize, StoreError> {
        if filters.is_empty() {
            return Err(StoreError::UnfilteredUpdate(table.to_string()));
        }
        let url = self.url(table, filters, None);
        tracing::debug!(table, %url, "update");

        let resp = check_response(
            table,
            self.http
                .patch(&url)
                .header("Prefer", "return=representation")
                .json(&patch)
                .send()
                .await?,
        )
        .await?;
        Ok(decode_rows(table, resp).await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> RestStore {
        RestStore::new(&StoreConfig {
            url: "https://abcd.supabase.co".into(),
            key: "service-key".into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn select_url_with_filters_and_limit() {
        let url = store().url(
            "prospectos",
            &[
                Filter::eq("campana_id", 1),
                Filter::eq("estado_prospecto", "hunted"),
            ],
            Some(10),
        );
        assert_eq!(
            url,
            "https://abcd.supabase.co/rest/v1/prospectos?campana_id=eq.1&estado_prospecto=eq.hunted&limit=10"
        );
    }

    #[test]
    fn bare_table_url() {
        assert_eq!(
            store().url("argumentarios_venta", &[], None),
            "https://abcd.supabase.co/rest/v1/argumentarios_venta"
        );
    }

    #[test]
    fn rejects_key_with_newline() {
        let result = RestStore::new(&StoreConfig {
            url: "https://abcd.supabase.co".into(),
            key: "bad\nkey".into(),
            ..Default::default()
        });
        let Err(err) = result else {
            panic!("a key with a newline must be rejected");
        };
        assert!(matches!(err, StoreError::InvalidKey(_)));
        assert!(!err.to_string().contains("''"));
    }

    #[tokio::test]
    async fn unfiltered_update_is_refused_before_any_request() {
        let err = store()
            .update("prospectos", &[], Record::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UnfilteredUpdate(table) if table == "prospectos"));
    }

    #[tokio::test]
    async fn decode_rows_rejects_non_array() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(200)
                .body(r#"{"message": "not rows"}"#)
                .unwrap(),
        );
        let err = decode_rows("campanas", resp).await.unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }
}
