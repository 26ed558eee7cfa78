//! The per-draw-call suppression decision.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::observability::Logger;
use crate::registry::BlockRegistry;
use crate::store::VeilStore;

/// Fail-safe wrapper around [`VeilStore::should_hide`].
///
/// On any panic during evaluation — including one thrown by the
/// injected registry — the guard logs the fault, disables hiding on
/// the store, and answers false. A crashed or stuck-hidden render loop
/// is strictly worse than a cosmetic feature switching itself off;
/// hiding stays off until the user explicitly re-enables it.
pub struct RenderGuard<R: BlockRegistry> {
    store: Arc<VeilStore<R>>,
}

impl<R: BlockRegistry> RenderGuard<R> {
    /// Wraps a shared store.
    pub fn new(store: Arc<VeilStore<R>>) -> Self {
        Self { store }
    }

    /// Whether rendering of the block behind `handle` should be
    /// suppressed.
    ///
    /// The common path is a flag load plus one set lookup; no
    /// allocation, no side effects. Only the fault path mutates state
    /// (flag to disabled) and logs.
    pub fn should_suppress(&self, handle: Option<&R::Handle>) -> bool {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.store.should_hide(handle)));

        match result {
            Ok(hide) => hide,
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                Logger::warn(
                    "VEIL_GUARD_FAULT",
                    &[("action", "disabled"), ("reason", reason.as_str())],
                );
                self.store.set_enabled(false);
                false
            }
        }
    }

    /// The guarded store.
    pub fn store(&self) -> &Arc<VeilStore<R>> {
        &self.store
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
