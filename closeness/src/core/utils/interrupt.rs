//! Cooperative cancellation for long running computations.
//!
//! Algorithms poll an [`Interrupt`] between units of work and abort with
//! [`CentralityError::Cancelled`](crate::errors::CentralityError::Cancelled) when it fires.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

pub trait Interrupt {
    /// Returns `true` if the running computation should stop.
    fn is_interrupted(&self) -> bool;
}

/// Never interrupts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInterrupt;

impl Interrupt for NoInterrupt {
    fn is_interrupted(&self) -> bool {
        false
    }
}

impl Interrupt for AtomicBool {
    fn is_interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<I: Interrupt + ?Sized> Interrupt for Arc<I> {
    fn is_interrupted(&self) -> bool {
        (**self).is_interrupted()
    }
}

impl<F: Fn() -> bool> Interrupt for F {
    fn is_interrupted(&self) -> bool {
        self()
    }
}
