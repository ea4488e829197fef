//! Shell lifetime: the one long-lived background resource.
//!
//! Mounting the shell loads the catalog and, when a refresh interval is
//! configured, registers a task that re-invokes every loader on that
//! interval. The returned [`ShellGuard`] owns the task; dropping it (on
//! graceful shutdown, or at the end of a test) releases the task exactly
//! once.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::catalog::Catalog;

/// Entry point for mounting the page shell.
pub struct Shell;

impl Shell {
    /// Load the catalog and start the refresh subscription.
    #[must_use = "dropping the guard immediately stops catalog refresh"]
    pub fn mount(catalog: Arc<Catalog>, refresh: Option<Duration>) -> ShellGuard {
        catalog.load_all();

        let refresh_task = refresh.map(|period| spawn_refresh_task(Arc::clone(&catalog), period));
        if let Some(period) = refresh {
            tracing::info!(period_secs = period.as_secs(), "catalog refresh registered");
        }

        ShellGuard { refresh_task }
    }
}

/// Releases the shell's background subscription when dropped.
pub struct ShellGuard {
    refresh_task: Option<JoinHandle<()>>,
}

impl ShellGuard {
    /// Whether a refresh task is registered.
    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.refresh_task.is_some()
    }

    /// Release the subscription now rather than at scope end.
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(task) = self.refresh_task.take() {
            task.abort();
            tracing::info!("catalog refresh released");
        }
    }
}

impl Drop for ShellGuard {
    fn drop(&mut self) {
        self.release_inner();
    }
}

fn spawn_refresh_task(catalog: Arc<Catalog>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick fires immediately; mount already loaded.
        interval.tick().await;
        loop {
            interval.tick().await;
            tracing::debug!("refreshing catalog");
            catalog.load_all();
        }
    })
}
