//! Periodic reachability probe feeding a status indicator.

use crate::connectivity::connectivity_status::ConnectivityStatus;
use crate::presentation::presenter::Presenter;
use crate::remote::auth_api::AuthApi;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::{debug, info};
use tokio::sync::{Notify, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Probes the service root once at start and then on a fixed interval.
///
/// The status is a UI hint only. Nothing in the auth flows reads it.
pub struct ConnectivityMonitor {
    api: Arc<dyn AuthApi>,
    interval: Duration,
    status: RwLock<ConnectivityStatus>,
    probes: AtomicU64,
    probed: Notify,
}

impl ConnectivityMonitor {
    pub fn new(api: Arc<dyn AuthApi>, interval: Duration) -> Self {
        Self {
            api,
            interval,
            status: RwLock::new(ConnectivityStatus::Unknown),
            probes: AtomicU64::new(0),
            probed: Notify::new(),
        }
    }

    /// Run one probe and record the result.
    ///
    /// Returns the new status and whether it differs from the previous one.
    pub async fn probe_once(&self) -> (ConnectivityStatus, bool) {
        let status = ConnectivityStatus::from(self.api.probe().await);
        self.probes.fetch_add(1, Ordering::Relaxed);

        let mut current = self.status.write().await;
        let changed = *current != status;
        *current = status;

        drop(current);

        if changed {
            info!("Connectivity changed to {status}");
        } else {
            debug!("Connectivity still {status}");
        }

        self.probed.notify_waiters();
        (status, changed)
    }

    /// Get current cached status.
    pub async fn status(&self) -> ConnectivityStatus {
        *self.status.read().await
    }

    /// Number of completed probes.
    pub fn probe_count(&self) -> u64 {
        self.probes.load(Ordering::Relaxed)
    }

    /// Resolves once at least `count` probes have completed.
    pub async fn wait_for_probes(&self, count: u64) {
        loop {
            // Registered before the check so a probe finishing in between
            // still wakes us.
            let probed = self.probed.notified();
            if self.probe_count() >= count {
                return;
            }
            probed.await;
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start probing in the background. The presenter hears about every
    /// status change, starting with the first probe.
    ///
    /// Failed probes are not retried early; the next tick simply probes again.
    pub fn spawn(self: Arc<Self>, presenter: Arc<dyn Presenter>) -> MonitorHandle {
        let monitor = self;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(monitor.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                // First tick completes immediately
                ticker.tick().await;

                let (status, changed) = monitor.probe_once().await;
                if changed {
                    presenter.show_connectivity(status);
                }
            }
        });

        MonitorHandle { task: Some(task) }
    }
}

/// Owns the background probe task. Dropping the handle stops probing.
pub struct MonitorHandle {
    task: Option<JoinHandle<()>>,
}

impl MonitorHandle {
    pub fn stop(mut self) {
        self.abort();
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Connectivity monitor stopped");
        }
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.abort();
    }
}
