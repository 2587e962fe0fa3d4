//! The owner side of a mooring.
//!
//! An [`Anchor<T>`] tracks a caller-supplied address through exactly one
//! mooring at a time. Rebinding or resetting the anchor cuts the current
//! mooring for good and every [`Tether<T>`] attached to it is cast adrift; a
//! rebind then starts an independent new generation that fresh tethers may
//! attach to.

use crate::{mooring::Mooring, pointer::Pointer, tether::Tether};
use alloc::rc::Rc;
use core::{fmt, ptr::NonNull};

pub struct Anchor<T: ?Sized> {
    mooring: Rc<Mooring<T>>,
}

/// An [`Anchor<T>`] that can not be duplicated.
///
/// The binding lifecycle is identical to [`Anchor<T>`]'s; only the owner
/// handle itself refuses to be cloned.
pub struct UniqueAnchor<T: ?Sized>(Anchor<T>);

impl<T: ?Sized> Anchor<T> {
    /// Moors a new live binding to `target`.
    ///
    /// The anchor only records the address; the storage behind it stays
    /// entirely caller-managed and must remain valid for as long as the
    /// binding is live and dereferenced through.
    pub fn new(target: impl Pointer<Target = T>) -> Self {
        Self::moor(Some(target.pointer()))
    }

    /// An anchor with no target. Behaves as if its binding had already been
    /// cut: tethers minted from it never lock.
    pub fn adrift() -> Self {
        Self::moor(None)
    }

    fn moor(target: Option<NonNull<T>>) -> Self {
        Self {
            mooring: Rc::new(Mooring::new(target)),
        }
    }

    /// Cuts the current mooring and moors a brand-new one to `target`.
    ///
    /// Unconditional: even when `target` is the address already tracked, the
    /// old mooring dies and its tethers are cast adrift. It is the binding's
    /// identity that tethers observe, not the address value.
    pub fn rebind(&mut self, target: impl Pointer<Target = T>) {
        self.mooring.cut();
        self.mooring = Rc::new(Mooring::new(Some(target.pointer())));
    }

    /// Cuts the current mooring without replacing it. Idempotent.
    pub fn reset(&mut self) {
        self.mooring.cut();
    }

    /// Mints a new [`Tether<T>`] attached to the current mooring, whether or
    /// not it is still live.
    pub fn tether(&self) -> Tether<T> {
        Tether::to(&self.mooring)
    }

    /// The number of tethers attached to the current mooring, or 0 once it
    /// has been cut.
    pub fn tethers(&self) -> usize {
        self.mooring.count()
    }

    pub fn target(&self) -> Option<NonNull<T>> {
        self.mooring.lock()
    }

    pub fn is_moored(&self) -> bool {
        self.mooring.is_live()
    }
}

impl<T: ?Sized> Clone for Anchor<T> {
    /// Moors a fresh, independent binding to the source's current target.
    ///
    /// The two anchors never share a mooring: tethers attached to one are
    /// unaffected by the other. Cloning an anchor with no target yields an
    /// anchor with no target. Through [`Clone::clone_from`], this is also
    /// assignment between anchors, and the destination's current mooring is
    /// always cut first.
    fn clone(&self) -> Self {
        Self::moor(self.mooring.lock())
    }
}

impl<T: ?Sized> Default for Anchor<T> {
    fn default() -> Self {
        Self::adrift()
    }
}

impl<T: ?Sized> Drop for Anchor<T> {
    fn drop(&mut self) {
        self.mooring.cut();
    }
}

impl<T: ?Sized> fmt::Debug for Anchor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mooring.lock() {
            Some(target) => write!(f, "Anchor::Live({target:?})"),
            None => f.write_str("Anchor::Dead"),
        }
    }
}

impl<T: ?Sized> UniqueAnchor<T> {
    pub fn new(target: impl Pointer<Target = T>) -> Self {
        Self(Anchor::new(target))
    }

    pub fn adrift() -> Self {
        Self(Anchor::adrift())
    }

    pub fn rebind(&mut self, target: impl Pointer<Target = T>) {
        self.0.rebind(target);
    }

    pub fn reset(&mut self) {
        self.0.reset();
    }

    pub fn tether(&self) -> Tether<T> {
        self.0.tether()
    }

    pub fn tethers(&self) -> usize {
        self.0.tethers()
    }

    pub fn target(&self) -> Option<NonNull<T>> {
        self.0.target()
    }

    pub fn is_moored(&self) -> bool {
        self.0.is_moored()
    }
}

impl<T: ?Sized> Default for UniqueAnchor<T> {
    fn default() -> Self {
        Self::adrift()
    }
}

impl<T: ?Sized> fmt::Debug for UniqueAnchor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.target() {
            Some(target) => write!(f, "UniqueAnchor::Live({target:?})"),
            None => f.write_str("UniqueAnchor::Dead"),
        }
    }
}
