//! The weak side of a mooring.
//!
//! A [`Tether<T>`] shares an [`Anchor<T>`](crate::Anchor)'s mooring without
//! ever owning the storage behind it. It may [`lock`](Tether::lock) the
//! mooring to read the tracked address for as long as the anchor has neither
//! been rebound, reset nor dropped; afterwards every lock fails and the
//! tether merely keeps the dead cell's memory alive until it lets go.

use crate::{anchor::Anchor, mooring::Mooring};
use alloc::rc::Rc;
use core::{fmt, ptr::NonNull};

pub struct Tether<T: ?Sized> {
    mooring: Option<Rc<Mooring<T>>>,
}

impl<T: ?Sized> Tether<T> {
    /// A tether attached to nothing; [`lock`](Tether::lock) always fails.
    pub const fn new() -> Self {
        Self { mooring: None }
    }

    pub(crate) fn to(mooring: &Rc<Mooring<T>>) -> Self {
        // Attaching to a cut mooring is fine: the cell is shared for memory
        // purposes but keeps reporting a count of 0.
        mooring.attach();
        Self {
            mooring: Some(mooring.clone()),
        }
    }

    /// The tracked address, while the mooring is still live.
    ///
    /// Idempotent and side-effect-free; locking neither consumes nor weakens
    /// the tether. Two tethers locking the same live mooring return the same
    /// address.
    ///
    /// A successful lock only means the owning anchor still points there. The
    /// validity of the storage behind the address remains the contract of
    /// whoever supplied it to the anchor; dereference the pointer only under
    /// that contract.
    pub fn lock(&self) -> Option<NonNull<T>> {
        self.mooring.as_deref()?.lock()
    }

    pub fn expired(&self) -> bool {
        self.lock().is_none()
    }

    /// Detaches from the mooring, if any; the tether ends up attached to
    /// nothing.
    pub fn reset(&mut self) {
        if let Some(mooring) = self.mooring.take() {
            mooring.detach();
        }
    }

    /// The number of tethers attached to the mooring, or 0 when unattached or
    /// once the mooring has been cut.
    pub fn tethers(&self) -> usize {
        self.mooring.as_deref().map_or(0, Mooring::count)
    }
}

impl<T: ?Sized> Clone for Tether<T> {
    fn clone(&self) -> Self {
        match &self.mooring {
            Some(mooring) => Self::to(mooring),
            None => Self::new(),
        }
    }
}

impl<T: ?Sized> Default for Tether<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> From<&Anchor<T>> for Tether<T> {
    fn from(anchor: &Anchor<T>) -> Self {
        anchor.tether()
    }
}

impl<T: ?Sized> Drop for Tether<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T: ?Sized> fmt::Debug for Tether<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lock() {
            Some(target) => write!(f, "Tether::Live({target:?})"),
            None => f.write_str("Tether::Dead"),
        }
    }
}
