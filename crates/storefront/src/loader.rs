//! Fetch-with-fallback list loader.
//!
//! A [`RemoteList`] owns one slot of list data. It starts at the fallback,
//! and each [`RemoteList::load`] call:
//!
//! 1. advances the slot's [`Generation`] and aborts any fetch still running,
//! 2. with no URL, clears `loading` immediately without touching the network,
//! 3. otherwise sets `loading` and spawns a single fetch task.
//!
//! The task applies its result only if the slot still carries the
//! generation it was started for and the loader has not been dropped.
//! Every failure (transport, status, JSON, shape) resets `data` to the
//! fallback; callers never see an error.

use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::backend::{self, Endpoint};

/// Identifies one `load` call on a loader.
///
/// Results are only applied to the slot if their generation is still the
/// slot's current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Snapshot of a loader's slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<T> {
    pub data: Vec<T>,
    pub loading: bool,
    pub generation: Generation,
    torn_down: bool,
}

/// A list that is fetched from the backend, falling back to local data.
pub struct RemoteList<T> {
    endpoint: Endpoint,
    client: reqwest::Client,
    fallback: Arc<Vec<T>>,
    slot: Arc<watch::Sender<ListState<T>>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<T> RemoteList<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Create a loader holding `fallback` with `loading = false`.
    #[must_use]
    pub fn new(endpoint: Endpoint, client: reqwest::Client, fallback: Vec<T>) -> Self {
        let (slot, _) = watch::channel(ListState {
            data: fallback.clone(),
            loading: false,
            generation: Generation::default(),
            torn_down: false,
        });

        Self {
            endpoint,
            client,
            fallback: Arc::new(fallback),
            slot: Arc::new(slot),
            task: Mutex::new(None),
        }
    }

    /// Start loading from `url`, superseding any earlier load.
    ///
    /// Returns the generation assigned to this load.
    pub fn load(&self, url: Option<&str>) -> Generation {
        let url = url.filter(|u| !u.is_empty()).map(str::to_owned);

        // Held across the generation bump and the spawn so concurrent
        // callers cannot interleave.
        let mut task = self.task.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = task.take() {
            previous.abort();
        }

        let mut generation = Generation::default();
        self.slot.send_modify(|state| {
            state.generation = state.generation.next();
            state.loading = url.is_some();
            generation = state.generation;
        });

        let Some(url) = url else {
            debug!(endpoint = self.endpoint.name(), "no backend url, keeping fallback");
            return generation;
        };

        let endpoint = self.endpoint;
        let client = self.client.clone();
        let fallback = Arc::clone(&self.fallback);
        let slot = Arc::clone(&self.slot);

        *task = Some(tokio::spawn(async move {
            let data = match backend::fetch_list::<T>(&client, &url).await {
                Ok(items) => {
                    debug!(endpoint = endpoint.name(), count = items.len(), "list loaded");
                    items
                }
                Err(e) => {
                    warn!(
                        endpoint = endpoint.name(),
                        url = %url,
                        error = %e,
                        "list fetch failed, using fallback"
                    );
                    fallback.as_ref().clone()
                }
            };

            slot.send_if_modified(|state| {
                if state.torn_down || state.generation != generation {
                    return false;
                }
                state.data = data;
                state.loading = false;
                true
            });
        }));

        generation
    }

    /// Current `{ data, loading }` snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ListState<T> {
        self.slot.borrow().clone()
    }

    /// Whether a fetch is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.slot.borrow().loading
    }

    /// The data rendered when live data is unavailable.
    #[must_use]
    pub fn fallback(&self) -> &[T] {
        &self.fallback
    }

    /// Watch the slot for transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ListState<T>> {
        self.slot.subscribe()
    }

    /// Wait until the current load has finished, then return the snapshot.
    pub async fn settled(&self) -> ListState<T> {
        let mut rx = self.subscribe();
        // The sender lives as long as `self`, so this only ends on settle.
        let _ = rx.wait_for(|state| !state.loading).await;
        self.snapshot()
    }
}

impl<T> Drop for RemoteList<T> {
    fn drop(&mut self) {
        let task = self
            .task
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = task {
            task.abort();
        }
        // A task that already passed its await point still holds the slot;
        // this flag stops it from publishing.
        self.slot.send_modify(|state| state.torn_down = true);
    }
}
