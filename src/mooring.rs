use core::{cell::Cell, ptr::NonNull};

/// The shared cell behind one generation of an [`Anchor`](crate::Anchor).
///
/// Aliveness is the `target` flag alone; the `Rc` that shares this cell only
/// decides when its memory is reclaimed, never whether a lock succeeds.
pub(crate) struct Mooring<T: ?Sized> {
    target: Cell<Option<NonNull<T>>>,
    tethers: Cell<usize>,
}

impl<T: ?Sized> Mooring<T> {
    pub(crate) const fn new(target: Option<NonNull<T>>) -> Self {
        Self {
            target: Cell::new(target),
            tethers: Cell::new(0),
        }
    }

    pub(crate) fn is_live(&self) -> bool {
        self.target.get().is_some()
    }

    pub(crate) fn lock(&self) -> Option<NonNull<T>> {
        self.target.get()
    }

    /// A cut mooring always reports 0, no matter how many tethers still share
    /// the cell.
    pub(crate) fn count(&self) -> usize {
        if self.is_live() {
            self.tethers.get()
        } else {
            0
        }
    }

    pub(crate) fn attach(&self) {
        self.tethers.set(self.tethers.get() + 1);
    }

    pub(crate) fn detach(&self) {
        let count = self.tethers.get();
        debug_assert!(count > 0);
        self.tethers.set(count - 1);
    }

    /// Permanent: a cut mooring can not be revived. The counter is left as is;
    /// `count` branches on liveness instead.
    pub(crate) fn cut(&self) {
        self.target.set(None);
    }
}
