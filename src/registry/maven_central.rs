//! Maven Central Search API adapter
//!
//! Fetches the latest published version of an artifact from Maven Central.
//! API endpoint: https://search.maven.org/solrsearch/select
//!
//! Query format: q=g:{groupId}+AND+a:{artifactId}&rows=1&wt=json

use crate::error::RegistryError;
use crate::registry::{HttpClient, QueryResult, RegistryClient};
use async_trait::async_trait;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// Maven Central Search host
pub const DEFAULT_SEARCH_URL: &str = "https://search.maven.org";

/// Path of the Solr select handler
const SEARCH_PATH: &str = "/solrsearch/select";

/// Maven Central adapter
pub struct MavenCentralClient {
    client: HttpClient,
    base_url: String,
}

/// Maven Central search response
#[derive(Debug, Deserialize)]
struct MavenSearchResponse {
    response: MavenResponseBody,
}

/// Maven Central response body
#[derive(Debug, Deserialize)]
struct MavenResponseBody {
    #[serde(rename = "numFound")]
    num_found: u64,
    #[serde(default)]
    docs: Vec<MavenArtifactDoc>,
}

/// Maven Central artifact document
#[derive(Debug, Deserialize)]
struct MavenArtifactDoc {
    #[serde(rename = "latestVersion")]
    latest_version: Option<String>,
}

impl MavenCentralClient {
    /// Create a new Maven Central adapter against the public search host
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, DEFAULT_SEARCH_URL)
    }

    /// Create an adapter against another search host
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Build search URL for group:artifact
    fn build_url(&self, group_id: &str, artifact_id: &str) -> String {
        format!(
            "{}{}?q=g:{}+AND+a:{}&rows=1&wt=json",
            self.base_url, SEARCH_PATH, group_id, artifact_id
        )
    }

    fn into_query_result(response: MavenSearchResponse) -> QueryResult {
        let body = response.response;
        let latest = body
            .docs
            .into_iter()
            .next()
            .and_then(|doc| doc.latest_version);
        QueryResult::from_hits(body.num_found, latest)
    }
}

#[async_trait]
impl RegistryClient for MavenCentralClient {
    fn registry_name(&self) -> &'static str {
        "Maven Central"
    }

    async fn query_latest_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        cancel: &CancellationToken,
    ) -> Result<QueryResult, RegistryError> {
        let package = format!("{}:{}", group_id, artifact_id);
        let url = self.build_url(group_id, artifact_id);
        tracing::debug!(%url, "querying registry");

        let request = self
            .client
            .get_json::<MavenSearchResponse>(&url, &package, self.registry_name());

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(RegistryError::cancelled(package.as_str())),
            response = request => response.map(Self::into_query_result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::time::Duration;

    fn adapter(base_url: &str) -> MavenCentralClient {
        let client = HttpClient::new()
            .unwrap()
            .with_max_retries(0)
            .with_base_delay(Duration::from_millis(1));
        MavenCentralClient::with_base_url(client, base_url)
    }

    #[test]
    fn test_registry_name() {
        let adapter = MavenCentralClient::new(HttpClient::new().unwrap());
        assert_eq!(adapter.registry_name(), "Maven Central");
    }

    #[test]
    fn test_build_url() {
        let adapter = MavenCentralClient::new(HttpClient::new().unwrap());
        let url = adapter.build_url("org.apache.wicket", "wicket-core");
        assert!(url.starts_with("https://search.maven.org/solrsearch/select"));
        assert!(url.contains("q=g:org.apache.wicket+AND+a:wicket-core"));
        assert!(url.contains("rows=1"));
        assert!(url.contains("wt=json"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let adapter = adapter("http://localhost:1234/");
        assert!(adapter
            .build_url("g", "a")
            .starts_with("http://localhost:1234/solrsearch/select?"));
    }

    #[test]
    fn test_deserialize_response() {
        let json = r#"
        {
            "responseHeader": {"status": 0},
            "response": {
                "numFound": 1,
                "start": 0,
                "docs": [
                    {"id": "org.mongodb:bson", "g": "org.mongodb", "a": "bson", "latestVersion": "5.2.1"}
                ]
            }
        }
        "#;

        let response: MavenSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            MavenCentralClient::into_query_result(response),
            QueryResult::Found("5.2.1".to_string())
        );
    }

    #[test]
    fn test_deserialize_empty_response() {
        let json = r#"{"response": {"numFound": 0, "start": 0, "docs": []}}"#;
        let response: MavenSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            MavenCentralClient::into_query_result(response),
            QueryResult::NotFound
        );
    }

    #[tokio::test]
    async fn test_query_latest_version() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "g:org.mongodb AND a:bson".into()),
                Matcher::UrlEncoded("rows".into(), "1".into()),
                Matcher::UrlEncoded("wt".into(), "json".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"response":{"numFound":1,"docs":[{"latestVersion":"5.2.1"}]}}"#)
            .create_async()
            .await;

        let result = adapter(&server.url())
            .query_latest_version("org.mongodb", "bson", &CancellationToken::new())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, QueryResult::Found("5.2.1".to_string()));
    }

    #[tokio::test]
    async fn test_query_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"response":{"numFound":0,"docs":[]}}"#)
            .create_async()
            .await;

        let result = adapter(&server.url())
            .query_latest_version("com.example", "nothing", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(result, QueryResult::NotFound);
    }

    #[tokio::test]
    async fn test_query_failure_surfaces_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(403)
            .create_async()
            .await;

        let err = adapter(&server.url())
            .query_latest_version("org.mongodb", "bson", &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::RequestFailed { .. }));
        assert!(err.to_string().contains("403 Forbidden"));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/solrsearch/select")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = adapter(&server.url())
            .query_latest_version("org.mongodb", "bson", &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_cancelled_query() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = adapter("http://127.0.0.1:9")
            .query_latest_version("org.mongodb", "bson", &cancel)
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::Cancelled { .. }));
    }
}
