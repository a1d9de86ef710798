// Async HTTP client for the customer records REST API.
//
// Base path: {api_url}/customers
// Auth: none

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::CustomerRecord;
use crate::transport::TransportConfig;

// ── Error response shape ─────────────────────────────────────────────

/// Servers in the wild answer errors as `{"message": ".."}` or `{"error": ".."}`.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the customer REST API.
///
/// Every operation is a single request/response; there is no retry,
/// batching, or streaming.
pub struct CustomerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CustomerClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Force a trailing slash so relative joins keep any path prefix
    /// (`https://host/api` + `customers` → `https://host/api/customers`).
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The configured API root (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    fn collection_url(&self) -> Result<Url, Error> {
        Ok(self.base_url.join("customers")?)
    }

    /// `{base}/customers/{id}` with the id percent-encoded as one segment.
    fn record_url(&self, id: &str) -> Result<Url, Error> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(id);
        Ok(url)
    }

    // ── Operations ───────────────────────────────────────────────────

    /// `GET /customers`
    pub async fn list_customers(&self) -> Result<Vec<CustomerRecord>, Error> {
        let url = self.collection_url()?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// `GET /customers/{id}`
    pub async fn get_customer(&self, id: &str) -> Result<CustomerRecord, Error> {
        let url = self.record_url(id)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// `POST /customers` with a draft body. The server assigns the id.
    pub async fn create_customer(&self, draft: &CustomerRecord) -> Result<CustomerRecord, Error> {
        self.send_json(reqwest::Method::POST, self.collection_url()?, draft)
            .await
    }

    /// `PUT /customers/{id}` replacing the whole record.
    ///
    /// Returns `None` when the server acknowledges with an empty body.
    pub async fn update_customer(
        &self,
        id: &str,
        customer: &CustomerRecord,
    ) -> Result<Option<CustomerRecord>, Error> {
        let url = self.record_url(id)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(customer).send().await?;
        self.handle_optional(resp).await
    }

    /// `DELETE /customers/{id}`
    pub async fn delete_customer(&self, id: &str) -> Result<(), Error> {
        let url = self.record_url(id)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn send_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: reqwest::Method,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("{method} {url}");

        let resp = self.http.request(method, url).json(body).send().await?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            decode(body)
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_optional<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Option<T>, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            if body.trim().is_empty() {
                return Ok(None);
            }
            decode(body).map(Some)
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::NOT_FOUND {
            return Error::NotFound {
                path: resp.url().path().to_owned(),
            };
        }

        let raw = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|err| err.message.or(err.error))
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    preview(&raw).to_owned()
                }
            });

        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}

fn decode<T: DeserializeOwned>(body: String) -> Result<T, Error> {
    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: format!("{e} (body preview: {:?})", preview(&body)),
        body,
    })
}

/// First 200 bytes of a body, cut on a char boundary.
fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let client =
            CustomerClient::from_reqwest("http://localhost:5000", reqwest::Client::new()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/");
    }

    #[test]
    fn base_url_keeps_path_prefix() {
        let client =
            CustomerClient::from_reqwest("https://api.example.com/v2/", reqwest::Client::new())
                .unwrap();
        assert_eq!(
            client.collection_url().unwrap().as_str(),
            "https://api.example.com/v2/customers"
        );
    }

    #[test]
    fn record_url_encodes_id() {
        let client =
            CustomerClient::from_reqwest("http://localhost:5000", reqwest::Client::new()).unwrap();
        assert_eq!(
            client.record_url("a b/c").unwrap().as_str(),
            "http://localhost:5000/customers/a%20b%2Fc"
        );
    }

    #[test]
    fn rejects_non_base_url() {
        let result = CustomerClient::from_reqwest("mailto:ops@example.com", reqwest::Client::new());
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let body = "é".repeat(150);
        assert!(preview(&body).len() <= 200);
    }
}
