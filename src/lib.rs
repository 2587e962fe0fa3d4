#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

pub mod anchor;
pub mod moored;
mod mooring;
pub mod pointer;
pub mod tether;

pub use crate::{
    anchor::{Anchor, UniqueAnchor},
    moored::Moored,
    pointer::Pointer,
    tether::Tether,
};

#[allow(dead_code)]
mod fails {
    macro_rules! fail {
        ($function: ident, $block: block) => {
            #[doc = concat!("```compile_fail\n", stringify!($block), "\n```")]
            const fn $function() {}
        };
    }

    fail!(can_not_clone_unique_anchor, {
        use mooring::UniqueAnchor;

        let value = 'a';
        let anchor = UniqueAnchor::new(&value);
        <UniqueAnchor<char> as Clone>::clone(&anchor);
    });

    fail!(can_not_send_tether_to_thread, {
        use mooring::Anchor;
        use std::thread::spawn;

        let value = 'a';
        let anchor = Anchor::new(&value);
        let tether = anchor.tether();
        spawn(move || tether.lock());
    });

    fail!(can_not_tether_unpinned_moored, {
        use mooring::Moored;

        let moored = Moored::new('a');
        moored.tether();
    });
}
