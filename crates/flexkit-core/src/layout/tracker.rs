//! Window-dimension tracker with trailing-edge debounce

use super::snapshot::LayoutSnapshot;
use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::host::{Dimensions, DimensionSubscription, WindowHost};
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

/// Lifecycle of a [`LayoutTracker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Uninitialized,
    Tracking,
    Disposed,
}

/// Owns the current [`LayoutSnapshot`] and keeps it in step with the host window.
///
/// Raw size notifications are debounced on the trailing edge: each one
/// restarts the quiet period, and only the last size is published once the
/// period elapses. Tearing the tracker down (explicitly or by drop) cancels a
/// pending update and unsubscribes from the host.
///
/// Only [`LayoutTracker::dispose`] waits for the resize loop to finish. On a
/// multi-threaded runtime, a poll already running when the tracker is dropped
/// may still publish once.
pub struct LayoutTracker {
    config: LayoutConfig,
    state: TrackerState,
    snapshots: Option<watch::Receiver<LayoutSnapshot>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl LayoutTracker {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            state: TrackerState::Uninitialized,
            snapshots: None,
            shutdown_tx: None,
            task: None,
        }
    }

    /// Create and start tracking `host` in one step
    pub fn spawn<H>(host: &H, config: LayoutConfig) -> Result<Self>
    where
        H: WindowHost + ?Sized,
    {
        let mut tracker = Self::new(config);
        tracker.start(host)?;
        Ok(tracker)
    }

    /// Read the host's current size, subscribe to changes and begin tracking.
    ///
    /// Fails with [`Error::NoRuntime`] outside a tokio runtime.
    pub fn start<H>(&mut self, host: &H) -> Result<()>
    where
        H: WindowHost + ?Sized,
    {
        match self.state {
            TrackerState::Tracking => {
                debug!("Layout tracker already tracking");
                return Ok(());
            }
            TrackerState::Disposed => return Err(Error::TrackerDisposed),
            TrackerState::Uninitialized => {}
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let initial = LayoutSnapshot::from_dimensions(host.window_size());
        let subscription = host.subscribe();
        let (publisher, receiver) = watch::channel(initial);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        info!(
            "Layout tracker started at {}x{} ({}, {}), debounce {}ms",
            initial.width,
            initial.height,
            initial.breakpoint,
            initial.device_class,
            self.config.debounce_ms
        );

        let resize_loop = ResizeLoop {
            debounce: self.config.debounce(),
            pending: None,
            current: initial,
            publisher,
        };
        self.task = Some(runtime.spawn(resize_loop.run(subscription, shutdown_rx)));
        self.shutdown_tx = Some(shutdown_tx);
        self.snapshots = Some(receiver);
        self.state = TrackerState::Tracking;

        Ok(())
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Latest published snapshot; `None` before the tracker has started
    pub fn snapshot(&self) -> Option<LayoutSnapshot> {
        self.snapshots.as_ref().map(|rx| *rx.borrow())
    }

    /// Accessor handed to layout consumers
    pub fn context(&self) -> Result<LayoutContext> {
        match (self.state, &self.snapshots) {
            (TrackerState::Tracking, Some(rx)) => Ok(LayoutContext { rx: rx.clone() }),
            (TrackerState::Disposed, _) => Err(Error::TrackerDisposed),
            _ => Err(Error::missing_provider("LayoutTracker")),
        }
    }

    /// Stop tracking and wait for the resize loop to wind down.
    ///
    /// Idempotent. No snapshot is published once this returns.
    pub async fn dispose(&mut self) {
        if self.state == TrackerState::Disposed {
            return;
        }

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("Layout tracker task ended abnormally: {}", e);
            }
        }

        self.state = TrackerState::Disposed;
        info!("Layout tracker disposed");
    }
}

impl Drop for LayoutTracker {
    fn drop(&mut self) {
        // Aborting drops the loop along with any pending resize and the
        // host subscription.
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Read-only view of a tracker's snapshots
#[derive(Debug, Clone)]
pub struct LayoutContext {
    rx: watch::Receiver<LayoutSnapshot>,
}

impl LayoutContext {
    /// The snapshot in effect right now
    pub fn current(&self) -> LayoutSnapshot {
        *self.rx.borrow()
    }

    pub fn width(&self) -> f32 {
        self.rx.borrow().width
    }

    /// Wait for the next published snapshot.
    ///
    /// Fails with [`Error::TrackerDisposed`] once the tracker is gone.
    pub async fn changed(&mut self) -> Result<LayoutSnapshot> {
        self.rx.changed().await.map_err(|_| Error::TrackerDisposed)?;
        Ok(*self.rx.borrow_and_update())
    }

    /// Whether a snapshot newer than the last one observed is available
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }
}

/// Size waiting for its quiet period to elapse
#[derive(Debug, Clone, Copy)]
struct PendingResize {
    size: Dimensions,
    deadline: Instant,
}

struct ResizeLoop {
    debounce: Option<Duration>,
    /// At most one pending update; replaced, never queued
    pending: Option<PendingResize>,
    current: LayoutSnapshot,
    publisher: watch::Sender<LayoutSnapshot>,
}

impl ResizeLoop {
    async fn run(mut self, mut subscription: DimensionSubscription, mut shutdown_rx: oneshot::Receiver<()>) {
        let mut host_open = true;

        loop {
            let deadline = self.pending.map(|p| p.deadline);

            tokio::select! {
                biased;

                _ = &mut shutdown_rx => break,

                event = subscription.recv(), if host_open => match event {
                    Some(size) => self.on_notification(size),
                    None => {
                        debug!("Host size channel closed");
                        host_open = false;
                    }
                },

                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some(pending) = self.pending.take() {
                        self.accept(pending.size);
                    }
                }
            }

            if !host_open && self.pending.is_none() {
                // Nothing left to publish; wait only for teardown.
                let _ = (&mut shutdown_rx).await;
                break;
            }
        }

        self.cancel_pending();
        subscription.unsubscribe();
    }

    fn on_notification(&mut self, size: Dimensions) {
        match self.debounce {
            Some(window) => {
                if self.pending.is_some() {
                    debug!("Resize superseded pending update");
                }
                self.pending = Some(PendingResize {
                    size,
                    deadline: Instant::now() + window,
                });
            }
            None => self.accept(size),
        }
    }

    fn accept(&mut self, size: Dimensions) {
        if size == self.current.dimensions() {
            return;
        }

        let snapshot = LayoutSnapshot::from_dimensions(size);
        debug!(
            "Layout updated to {}x{} ({}, {})",
            snapshot.width, snapshot.height, snapshot.breakpoint, snapshot.device_class
        );
        self.current = snapshot;
        self.publisher.send_replace(snapshot);
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            debug!("Cancelled pending layout update");
        }
    }
}
