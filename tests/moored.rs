use core::{pin::pin, ptr::NonNull};
use mooring::{Moored, Tether};

fn read<T: Copy>(tether: &Tether<T>) -> Option<T> {
    tether.lock().map(|target| unsafe { *target.as_ptr() })
}

#[test]
fn moored_starts_with_no_tethers() {
    let moored = Moored::new(42);
    assert_eq!(moored.tethers(), 0);
}

#[test]
fn moored_derefs_to_its_value() {
    let moored = Moored::new("halyard");
    assert_eq!(moored.len(), 7);
    assert_eq!(*moored, "halyard");
}

#[test]
fn moored_mints_attached_tethers() {
    let moored = pin!(Moored::new(42));
    let a = moored.as_ref().tether();
    let b = moored.as_ref().tether();
    assert_eq!(a.tethers(), 2);
    assert_eq!(b.tethers(), 2);
    assert_eq!(moored.tethers(), 2);
    assert_eq!(a.lock(), b.lock());
    assert_eq!(read(&a), Some(42));
}

#[test]
fn moored_locks_its_own_storage() {
    let moored = pin!(Moored::new(42));
    let tether = moored.as_ref().tether();
    let value: &i32 = &moored;
    assert_eq!(tether.lock(), Some(NonNull::from(value)));
}

#[test]
fn mutation_is_visible_through_tethers() {
    let mut moored = pin!(Moored::new(5));
    let tether = moored.as_ref().tether();
    assert_eq!(read(&tether), Some(5));
    *moored.as_mut().value_mut() = 6;
    assert_eq!(read(&tether), Some(6));
}

#[test]
fn dropping_moored_casts_tethers_adrift() {
    let (a, b);
    {
        let moored = Box::pin(Moored::new(-85));
        a = moored.as_ref().tether();
        b = moored.as_ref().tether();
        assert_eq!(read(&a), Some(-85));
        assert_eq!(a.tethers(), 2);
    }
    assert!(a.lock().is_none());
    assert!(b.lock().is_none());
    assert_eq!(a.tethers(), 0);
    assert_eq!(b.tethers(), 0);
}

#[test]
fn releases_cleanly_after_every_tether_resets() {
    let moored = pin!(Moored::new(19));
    let mut r = moored.as_ref().tether();
    let mut s = moored.as_ref().tether();
    let mut t = moored.as_ref().tether();
    assert!(!t.expired());
    r.reset();
    s.reset();
    t.reset();
    assert!(t.expired());
    assert_eq!(moored.tethers(), 0);
}

#[test]
fn debug_shows_the_value() {
    assert_eq!(format!("{:?}", Moored::new(7)), "Moored(7)");
}
