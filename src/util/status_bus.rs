//! Single-topic change notifier shared by all views.
//!
//! SYSTEM CONTEXT
//! ==============
//! After an admin changes a record, every open list view should re-fetch.
//! `publish` writes a timestamp under [`STATUS_SIGNAL_KEY`] through a
//! [`SignalSink`] (browser: `localStorage`) and notifies in-process observers.
//! Other tabs see the write as a `storage` event, which
//! [`forward_storage_events`] feeds back into their own bus.
//!
//! The signal carries no data; observers re-fetch from the backend. Delivery
//! is fire-and-forget, once per write, with no ordering guarantee.

#[cfg(test)]
#[path = "status_bus_test.rs"]
mod status_bus_test;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Storage key other tabs watch for change notifications.
pub const STATUS_SIGNAL_KEY: &str = "firmaStatusUpdated";

/// Where a published signal is persisted so other browsing contexts see it.
pub trait SignalSink: Send + Sync {
    fn write(&self, key: &str, value: &str);
}

/// Writes signals to `window.localStorage`; no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSink;

impl SignalSink for LocalStorageSink {
    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::warn!("localStorage unavailable, {key} not written");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to write {key} to localStorage");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// A change notification. `stamp` is the publisher's clock in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusSignal {
    pub stamp: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Arc<dyn Fn(StatusSignal) + Send + Sync>;

struct BusInner {
    sink: Box<dyn SignalSink>,
    observers: Mutex<Vec<(SubscriptionId, Observer)>>,
    next_id: AtomicU64,
}

/// Cheap-to-clone handle; clones share observers and sink.
#[derive(Clone)]
pub struct StatusBus {
    inner: Arc<BusInner>,
}

impl fmt::Debug for StatusBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusBus").field("observers", &self.observer_count()).finish_non_exhaustive()
    }
}

impl StatusBus {
    pub fn new(sink: impl SignalSink + 'static) -> Self {
        Self {
            inner: Arc::new(BusInner {
                sink: Box::new(sink),
                observers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Bus backed by `localStorage`.
    pub fn browser() -> Self {
        Self::new(LocalStorageSink)
    }

    /// Record a change: persist the signal and notify local observers.
    pub fn publish(&self) -> StatusSignal {
        let signal = StatusSignal { stamp: now_millis() };
        self.inner.sink.write(STATUS_SIGNAL_KEY, &signal.stamp.to_string());
        self.deliver(signal);
        signal
    }

    pub fn subscribe(&self, observer: impl Fn(StatusSignal) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers().push((id, Arc::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers().len()
    }

    /// Notify every observer once. Observers run outside the lock, so they
    /// may subscribe or unsubscribe.
    pub fn deliver(&self, signal: StatusSignal) {
        let observers: Vec<Observer> = self.observers().iter().map(|(_, o)| Arc::clone(o)).collect();
        for observer in observers {
            observer(signal);
        }
    }

    /// Forward a `storage` event from another browsing context. Only changes
    /// to [`STATUS_SIGNAL_KEY`] are delivered; returns whether it matched.
    pub fn on_storage_change(&self, key: Option<&str>, new_value: Option<&str>) -> bool {
        if key != Some(STATUS_SIGNAL_KEY) {
            return false;
        }
        let stamp = new_value.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or_else(now_millis);
        self.deliver(StatusSignal { stamp });
        true
    }

    fn observers(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, Observer)>> {
        self.inner.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Install a window `storage` listener that feeds matching events into `bus`.
#[cfg(feature = "csr")]
pub fn forward_storage_events(bus: StatusBus) -> leptos::prelude::WindowListenerHandle {
    leptos::prelude::window_event_listener(leptos::ev::storage, move |ev| {
        let key = ev.key();
        let value = ev.new_value();
        if bus.on_storage_change(key.as_deref(), value.as_deref()) {
            log::debug!("status change signal received from another tab");
        }
    })
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(feature = "csr"))]
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
