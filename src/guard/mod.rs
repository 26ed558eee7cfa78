//! Render guard for blockveil
//!
//! Boundary between the store and the render loop. The hook runs per
//! draw call inside code that must never crash, so the guard's contract
//! is: never propagate a fault, always degrade to "show the block."

mod guard;

pub use guard::RenderGuard;
