#![no_main]

use libfuzzer_sys::fuzz_target;

use quick_list::quicksort as test_sort;

#[path = "../src/util.rs"]
mod util;

fuzz_target!(|data: &[u8]| {
    let mut v = util::u8_as_i32(data);
    let mut expected = v.clone();
    expected.sort();

    test_sort::sort(&mut v);
    assert_eq!(v, expected);

    test_sort::sort_by(&mut v, |a, b| b.cmp(a));
    expected.reverse();
    assert_eq!(v, expected);
});
