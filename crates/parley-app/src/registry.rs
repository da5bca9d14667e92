//! Document registry: single owner of the active chat's document list
//!
//! Descendant views never hold a writable reference; they send messages
//! and the registry applies the mutation. Every refresh is stamped with a
//! monotonically increasing sequence number so a response that arrives
//! after a newer refresh was issued is discarded instead of clobbering
//! fresher state.

use parley_core::prelude::*;
use parley_core::Document;

/// An issued refresh: the chat it is scoped to and its sequence stamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    pub chat_id: String,
    pub seq: u64,
}

/// Holds the document list for the active chat session
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: Vec<Document>,

    /// Next sequence number to stamp
    next_seq: u64,

    /// The latest issued ticket, if any
    latest: Option<u64>,

    /// Whether the latest ticket is still unresolved
    in_flight: bool,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents in server response order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Whether the latest refresh has not completed yet
    pub fn is_refreshing(&self) -> bool {
        self.in_flight
    }

    /// Start a refresh for the given chat.
    ///
    /// Without a chat id this is a silent no-op: logged, no ticket, no
    /// request, `documents` untouched. Otherwise the returned ticket is
    /// what the caller turns into a background fetch.
    pub fn begin_refresh(&mut self, chat_id: Option<&str>) -> Option<RefreshTicket> {
        let Some(chat_id) = chat_id else {
            debug!("No chat id, skipping document refresh");
            return None;
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest = Some(seq);
        self.in_flight = true;

        debug!(chat_id, seq, "document refresh issued");
        Some(RefreshTicket {
            chat_id: chat_id.to_string(),
            seq,
        })
    }

    /// Apply the outcome of a refresh.
    ///
    /// Only the latest issued ticket may apply; stale completions are
    /// discarded whatever they carry. On success the list is replaced
    /// wholesale; on failure it is left unchanged (stale-but-consistent).
    /// Returns whether the document list was replaced.
    pub fn complete_refresh(
        &mut self,
        seq: u64,
        result: std::result::Result<Vec<Document>, String>,
    ) -> bool {
        if self.latest != Some(seq) {
            debug!(seq, latest = ?self.latest, "discarding stale document response");
            return false;
        }

        self.in_flight = false;

        match result {
            Ok(documents) => {
                debug!(seq, count = documents.len(), "document list replaced");
                self.documents = documents;
                true
            }
            Err(e) => {
                warn!(seq, "document refresh failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str) -> Document {
        Document {
            id: id.to_string(),
            name: None,
            kind: None,
            size: None,
            uploaded_at: None,
        }
    }

    #[test]
    fn test_begin_refresh_without_chat_id_is_noop() {
        let mut registry = DocumentRegistry::new();
        assert!(registry.begin_refresh(None).is_none());
        assert!(registry.documents().is_empty());
        assert!(!registry.is_refreshing());
    }

    #[test]
    fn test_successful_refresh_replaces_documents() {
        let mut registry = DocumentRegistry::new();

        let ticket = registry.begin_refresh(Some("chat123")).unwrap();
        assert_eq!(ticket.chat_id, "chat123");
        assert!(registry.is_refreshing());

        assert!(registry.complete_refresh(ticket.seq, Ok(vec![doc("d1")])));
        assert_eq!(registry.documents(), &[doc("d1")]);
        assert!(!registry.is_refreshing());

        // A later refresh replaces the whole list, never merges
        let ticket = registry.begin_refresh(Some("chat123")).unwrap();
        assert!(registry.complete_refresh(ticket.seq, Ok(vec![doc("d2"), doc("d3")])));
        assert_eq!(registry.documents().len(), 2);
        assert_eq!(registry.documents()[0].id, "d2");
    }

    #[test]
    fn test_failed_refresh_keeps_prior_documents() {
        let mut registry = DocumentRegistry::new();

        let ticket = registry.begin_refresh(Some("chat123")).unwrap();
        registry.complete_refresh(ticket.seq, Ok(vec![doc("d1")]));

        let ticket = registry.begin_refresh(Some("chat123")).unwrap();
        assert!(!registry.complete_refresh(ticket.seq, Err("connection reset".to_string())));
        assert_eq!(registry.documents(), &[doc("d1")]);
        assert!(!registry.is_refreshing());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut registry = DocumentRegistry::new();

        let first = registry.begin_refresh(Some("chat123")).unwrap();
        let second = registry.begin_refresh(Some("chat456")).unwrap();
        assert!(second.seq > first.seq);

        // The newer refresh resolves first
        assert!(registry.complete_refresh(second.seq, Ok(vec![doc("new")])));

        // The older response arrives late and must not overwrite
        assert!(!registry.complete_refresh(first.seq, Ok(vec![doc("old")])));
        assert_eq!(registry.documents(), &[doc("new")]);
    }

    #[test]
    fn test_stale_in_flight_marker_survives_old_completion() {
        let mut registry = DocumentRegistry::new();

        let first = registry.begin_refresh(Some("chat123")).unwrap();
        let second = registry.begin_refresh(Some("chat123")).unwrap();

        // Old completion while the newer one is still out
        registry.complete_refresh(first.seq, Ok(vec![doc("old")]));
        assert!(registry.is_refreshing());

        registry.complete_refresh(second.seq, Ok(vec![doc("new")]));
        assert!(!registry.is_refreshing());
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let mut registry = DocumentRegistry::new();
        let a = registry.begin_refresh(Some("c")).unwrap();
        let b = registry.begin_refresh(Some("c")).unwrap();
        let c = registry.begin_refresh(Some("c")).unwrap();
        assert!(a.seq < b.seq && b.seq < c.seq);
    }
}
