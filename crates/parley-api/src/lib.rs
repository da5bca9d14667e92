//! parley-api - HTTP client for the Parley chat backend
//!
//! The shell treats the backend as an external collaborator: this crate
//! owns the transport (`ApiClient`) and the service traits the controller
//! layer consumes (`DocumentSource`, `NetworkProbe`).

pub mod client;
pub mod service;

pub use client::ApiClient;
pub use service::{DocumentSource, LocalDocumentSource, LocalNetworkProbe, NetworkProbe};
