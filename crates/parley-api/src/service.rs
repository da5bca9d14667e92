//! Service traits consumed by the controller layer
//!
//! The app crate talks to these traits, never to `ApiClient` directly, so
//! controller tests can run against scripted fakes.

use parley_core::{Document, Result};

/// Read access to the document-listing endpoint
#[trait_variant::make(DocumentSource: Send)]
pub trait LocalDocumentSource {
    /// List documents for the given chat, in server response order
    async fn list_documents(&self, chat_id: &str) -> Result<Vec<Document>>;
}

/// Network reachability signal
///
/// Any HTTP response counts as reachable; only transport failures count as
/// unreachable. This is a reachability signal, not a health check.
#[trait_variant::make(NetworkProbe: Send)]
pub trait LocalNetworkProbe {
    async fn is_reachable(&self) -> bool;
}
