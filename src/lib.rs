macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod baseline;
pub mod error;
pub mod exchange;
pub mod strategy;

pub use error::SortError;
pub use exchange::{sort, sort_by, sort_with, try_sort};
pub use strategy::{Ascending, ComparisonStrategy, Descending};

pub use sort_test_tools::Sort;
