//! Pointer enter/leave routing for markers and captions.
//!
//! The original event-driven callbacks become explicit handler bundles:
//! synchronous, fire-and-forget closures invoked exactly once per dispatch,
//! defaulting to no-ops. No return value is consumed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Context delivered when the pointer enters a vertex marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerHover {
    pub key: String,
    pub value: f64,
    pub idx: usize,
}

/// Context delivered when the pointer enters an axis caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionHover {
    pub key: String,
    pub idx: usize,
}

/// Enter/leave handler pair for one hoverable primitive family.
pub struct HoverHandlers<C> {
    on_enter: Box<dyn Fn(&C)>,
    on_leave: Box<dyn Fn()>,
}

impl<C> Default for HoverHandlers<C> {
    fn default() -> Self {
        Self {
            on_enter: Box::new(|_| {}),
            on_leave: Box::new(|| {}),
        }
    }
}

impl<C> HoverHandlers<C> {
    #[must_use]
    pub fn with_enter(mut self, on_enter: impl Fn(&C) + 'static) -> Self {
        self.on_enter = Box::new(on_enter);
        self
    }

    #[must_use]
    pub fn with_leave(mut self, on_leave: impl Fn() + 'static) -> Self {
        self.on_leave = Box::new(on_leave);
        self
    }

    /// Notifies the caller that the pointer entered the primitive carrying
    /// `context`.
    pub fn enter(&self, context: &C) {
        (self.on_enter)(context);
    }

    /// Notifies the caller that the pointer left; no context is carried.
    pub fn leave(&self) {
        (self.on_leave)();
    }
}

impl<C> fmt::Debug for HoverHandlers<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverHandlers").finish_non_exhaustive()
    }
}
