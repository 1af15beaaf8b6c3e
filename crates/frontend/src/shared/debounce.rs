//! Trailing-edge debounce for input handlers
//!
//! Each call re-arms the gate; a scheduled callback only runs if no newer call
//! happened while it was sleeping. In-flight work started by an earlier
//! callback is not cancelled.

use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generation counter deciding which scheduled callback is still allowed to fire
#[derive(Debug, Default)]
pub struct DebounceGate {
    generation: AtomicU64,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every previously issued token and return a fresh one
    pub fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Invalidate every issued token without issuing a new one
    pub fn disarm(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }
}

/// Source of the quiet-period delay
pub trait Sleep: 'static {
    fn sleep(&self, delay_ms: u32) -> impl Future<Output = ()> + 'static;
}

/// Browser timer (`setTimeout`)
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Sleep for BrowserTimer {
    fn sleep(&self, delay_ms: u32) -> impl Future<Output = ()> + 'static {
        TimeoutFuture::new(delay_ms)
    }
}

/// Debounced callback: only the last value passed to [`Debouncer::call`]
/// within `delay_ms` reaches the callback.
pub struct Debouncer<T, S = BrowserTimer> {
    gate: Arc<DebounceGate>,
    delay_ms: u32,
    timer: Arc<S>,
    callback: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T, S> Clone for Debouncer<T, S> {
    fn clone(&self) -> Self {
        Self {
            gate: Arc::clone(&self.gate),
            delay_ms: self.delay_ms,
            timer: Arc::clone(&self.timer),
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<T: 'static> Debouncer<T, BrowserTimer> {
    pub fn new(delay_ms: u32, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self::with_timer(delay_ms, BrowserTimer, callback)
    }
}

impl<T: 'static, S: Sleep> Debouncer<T, S> {
    pub fn with_timer(
        delay_ms: u32,
        timer: S,
        callback: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            gate: Arc::new(DebounceGate::new()),
            delay_ms,
            timer: Arc::new(timer),
            callback: Arc::new(callback),
        }
    }

    /// Arm the gate now and return the delayed delivery of `value`.
    ///
    /// The returned future sleeps for the quiet period and then hands `value`
    /// to the callback unless a newer call or [`Debouncer::cancel`] came first.
    pub fn schedule(&self, value: T) -> impl Future<Output = ()> + 'static {
        let token = self.gate.arm();
        let gate = Arc::clone(&self.gate);
        let timer = Arc::clone(&self.timer);
        let callback = Arc::clone(&self.callback);
        let delay_ms = self.delay_ms;

        async move {
            timer.sleep(delay_ms).await;
            if gate.is_current(token) {
                callback(value);
            }
        }
    }

    /// Schedule `value`, superseding any call still waiting
    pub fn call(&self, value: T) {
        wasm_bindgen_futures::spawn_local(self.schedule(value));
    }

    /// Drop whatever call is still waiting
    pub fn cancel(&self) {
        self.gate.disarm();
    }
}
