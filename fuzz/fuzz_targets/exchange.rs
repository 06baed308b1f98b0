#![no_main]

use libfuzzer_sys::fuzz_target;

use exchange_sort::exchange as test_sort;
use exchange_sort::strategy::{is_sorted_with, Ascending, Descending};

fuzz_target!(|data: &[u8]| {
    let v = data
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect::<Vec<_>>();

    let mut expected = v.clone();
    expected.sort_unstable();

    let mut ascending = v.clone();
    test_sort::sort_with(&mut ascending, &Ascending);
    assert_eq!(ascending, expected);

    let mut descending = v;
    test_sort::sort_with(&mut descending, &Descending);
    assert!(is_sorted_with(&descending, &Descending));
    descending.reverse();
    assert_eq!(descending, expected);
});
