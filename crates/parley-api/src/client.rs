//! reqwest-backed client for the chat backend

use parley_core::prelude::*;
use parley_core::Document;
use serde::Deserialize;
use url::Url;

use crate::service::{DocumentSource, NetworkProbe};

/// Path of the document-listing endpoint
const UPLOAD_ENDPOINT: &str = "/api/chat/upload";

/// Response envelope of the document-listing endpoint.
///
/// The backend wraps the list twice: `{ "data": { "data": [..] } }`.
#[derive(Debug, Deserialize)]
struct DocumentEnvelope {
    data: DocumentPage,
}

#[derive(Debug, Deserialize)]
struct DocumentPage {
    #[serde(default)]
    data: Vec<Document>,
}

/// HTTP client for the chat backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Create a client for the given base URL, e.g. `http://localhost:5000`
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|_| Error::InvalidServerUrl {
            url: base_url.to_string(),
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(|_| Error::InvalidServerUrl {
            url: format!("{}{}", self.base, path),
        })
    }

    /// Fetch the document list for a chat session.
    ///
    /// Any non-2xx status or transport error is a failure; the caller
    /// decides whether to surface or swallow it.
    pub async fn list_documents(&self, chat_id: &str) -> Result<Vec<Document>> {
        let url = self.endpoint(UPLOAD_ENDPOINT)?;

        let response = self
            .http
            .get(url)
            .query(&[("chatId", chat_id)])
            .send()
            .await
            .map_err(|e| Error::api(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::api_status(status.as_u16(), UPLOAD_ENDPOINT));
        }

        let envelope: DocumentEnvelope = response
            .json()
            .await
            .map_err(|e| Error::api_response(e.to_string()))?;

        debug!(
            chat_id,
            count = envelope.data.data.len(),
            "fetched document list"
        );
        Ok(envelope.data.data)
    }

    /// Probe the server root for reachability.
    ///
    /// Any HTTP response (any status) counts as reachable; only a
    /// transport error counts as unreachable.
    pub async fn probe(&self) -> bool {
        let Ok(url) = self.endpoint("/") else {
            return false;
        };

        match self.http.get(url).send().await {
            Ok(_) => true,
            Err(e) => {
                debug!("reachability probe failed: {e}");
                false
            }
        }
    }
}

impl DocumentSource for ApiClient {
    async fn list_documents(&self, chat_id: &str) -> Result<Vec<Document>> {
        ApiClient::list_documents(self, chat_id).await
    }
}

impl NetworkProbe for ApiClient {
    async fn is_reachable(&self) -> bool {
        self.probe().await
    }
}
