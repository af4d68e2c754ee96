//! Textbook in-memory sorts, a radix sort for native integers, a static algorithm chooser and a
//! race harness that reports which routine was fastest on a given input.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod error;
pub mod int_helper;
pub mod race;
pub mod radix;
pub mod select;
pub mod stable;
pub mod unstable;

pub use error::{Error, Result};
