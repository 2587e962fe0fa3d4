//! A value bundled with its own anchor.
//!
//! [`Moored<T>`] stores a value together with an embedded
//! [`Anchor<T>`](crate::Anchor) bound to the value's own storage, so the
//! storage and its weak trackability share one lifetime. Since the binding
//! records the value's address, a [`Moored<T>`] must be pinned before tethers
//! can be minted from it.

use crate::{anchor::Anchor, tether::Tether};
use core::{
    borrow::Borrow,
    cell::OnceCell,
    fmt,
    marker::PhantomPinned,
    ops::Deref,
    pin::Pin,
    ptr::NonNull,
};

pub struct Moored<T: ?Sized> {
    _marker: PhantomPinned,
    anchor: OnceCell<Anchor<T>>,
    value: T,
}

impl<T> Moored<T> {
    pub const fn new(value: T) -> Self {
        Self {
            _marker: PhantomPinned,
            anchor: OnceCell::new(),
            value,
        }
    }
}

impl<T: ?Sized> Moored<T> {
    /// Mints a new [`Tether<T>`] attached to this value's binding.
    ///
    /// The binding is moored to the value's own storage, which pinning keeps
    /// in place; dropping the `Moored<T>` cuts it and every minted tether is
    /// cast adrift. There is no rebinding surface: the target stays the value
    /// itself for the whole lifetime.
    pub fn tether(self: Pin<&Self>) -> Tether<T> {
        let this = self.get_ref();
        this.anchor
            .get_or_init(|| Anchor::new(NonNull::from(&this.value)))
            .tether()
    }

    pub fn tethers(&self) -> usize {
        self.anchor.get().map_or(0, Anchor::tethers)
    }

    /// The value's address is what tethers hold on to and a `&mut T` can not
    /// change it, so the value is not structurally pinned.
    pub fn value_mut(self: Pin<&mut Self>) -> &mut T {
        unsafe { &mut self.get_unchecked_mut().value }
    }
}

impl<T: ?Sized> Deref for Moored<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: ?Sized> AsRef<T> for Moored<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: ?Sized> Borrow<T> for Moored<T> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug + ?Sized> fmt::Debug for Moored<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moored({:?})", &self.value)
    }
}
