//! Host environment seam: window size queries and size-change notifications

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::mpsc;
use tracing::debug;

/// Viewport size in device-independent pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The window-size surface a host environment exposes to the tracker
pub trait WindowHost: Send + Sync {
    /// Current window size, read synchronously
    fn window_size(&self) -> Dimensions;

    /// Register for size-change notifications
    fn subscribe(&self) -> DimensionSubscription;
}

/// Live registration on a host's size-change channel.
///
/// Unsubscribes when dropped.
pub struct DimensionSubscription {
    events: mpsc::UnboundedReceiver<Dimensions>,
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl DimensionSubscription {
    pub fn new(
        events: mpsc::UnboundedReceiver<Dimensions>,
        unsubscribe: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            events,
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Next size-change event, or `None` once the host has gone away
    pub async fn recv(&mut self) -> Option<Dimensions> {
        self.events.recv().await
    }

    pub fn unsubscribe(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
            self.events.close();
        }
    }

    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }
}

impl Drop for DimensionSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

struct HostInner {
    size: Mutex<Dimensions>,
    subscribers: Mutex<HashMap<u64, mpsc::UnboundedSender<Dimensions>>>,
    next_id: AtomicU64,
}

/// In-memory host for tests and headless runs
#[derive(Clone)]
pub struct SimulatedHost {
    inner: Arc<HostInner>,
}

impl SimulatedHost {
    pub fn new(initial: Dimensions) -> Self {
        Self {
            inner: Arc::new(HostInner {
                size: Mutex::new(initial),
                subscribers: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Change the window size and notify every live subscriber
    pub fn resize(&self, size: Dimensions) {
        *self.inner.size.lock() = size;

        let mut subscribers = self.inner.subscribers.lock();
        subscribers.retain(|_, tx| tx.send(size).is_ok());
        debug!(
            "Host resized to {}x{} ({} subscribers)",
            size.width,
            size.height,
            subscribers.len()
        );
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }
}

impl WindowHost for SimulatedHost {
    fn window_size(&self) -> Dimensions {
        *self.inner.size.lock()
    }

    fn subscribe(&self) -> DimensionSubscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.subscribers.lock().insert(id, tx);

        let weak: Weak<HostInner> = Arc::downgrade(&self.inner);
        DimensionSubscription::new(rx, move || {
            if let Some(inner) = weak.upgrade() {
                inner.subscribers.lock().remove(&id);
            }
        })
    }
}
