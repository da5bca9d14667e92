//! Connectivity monitor
//!
//! One background task per shell lifetime probes the backend on a fixed
//! interval and reports transitions (edges only) into the message channel.
//! The subscription is established once at construction and released when
//! the monitor is dropped; the handlers decide what an edge means
//! (Offline: sticky flag, Online: full reload).

use std::time::Duration;

use parley_api::NetworkProbe;
use parley_core::prelude::*;
use parley_core::Connectivity;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Handle to the probe task; aborts it on drop
#[derive(Debug)]
pub struct ConnectivityMonitor {
    handle: JoinHandle<()>,
}

impl ConnectivityMonitor {
    /// Start monitoring.
    ///
    /// `initial` is the connectivity observed at construction time; only
    /// changes relative to it are reported, one message per edge.
    pub fn spawn<P>(
        probe: P,
        initial: Connectivity,
        interval: Duration,
        tx: mpsc::Sender<Message>,
    ) -> Self
    where
        P: NetworkProbe + Sync + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut last = initial;
            loop {
                tokio::time::sleep(interval).await;

                let observed = Connectivity::from_reachable(probe.is_reachable().await);
                if observed == last {
                    continue;
                }

                info!(?last, ?observed, "connectivity transition");
                last = observed;

                if tx.send(Message::ConnectivityChanged(observed)).await.is_err() {
                    // Receiver gone, shell is tearing down
                    break;
                }
            }
        });

        Self { handle }
    }
}

impl Drop for ConnectivityMonitor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
