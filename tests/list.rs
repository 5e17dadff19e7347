use quick_list::{ArrayList, ListConfig, ListError};

use sort_test_tools::patterns;

fn list_of(vals: &[i32]) -> ArrayList<i32> {
    let mut list = ArrayList::new();
    for val in vals {
        assert!(list.push(*val));
    }

    list
}

#[test]
fn new_uses_defaults() {
    let list = ArrayList::<i32>::new();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.capacity(), 10);
    assert_eq!(list.threshold(), 7);
    assert_eq!(list.load_factor(), 0.75);
    assert_eq!(*list.config(), ListConfig::default());
}

#[test]
fn with_capacity() {
    let list = ArrayList::<i32>::with_capacity(15).unwrap();
    assert_eq!(list.capacity(), 15);
    assert_eq!(list.threshold(), 11);

    assert_eq!(
        ArrayList::<i32>::with_capacity(0).unwrap_err(),
        ListError::InvalidCapacity(0)
    );
}

#[test]
fn with_config_validates() {
    let err = ArrayList::<i32>::with_config(ListConfig::default().with_load_factor(-0.5))
        .unwrap_err();
    assert_eq!(err, ListError::InvalidLoadFactor(-0.5));
    assert!(!err.is_out_of_range());

    let list = ArrayList::<i32>::with_config(
        ListConfig::default()
            .with_initial_capacity(4)
            .with_growth_step(2)
            .with_load_factor(0.5),
    )
    .unwrap();
    assert_eq!((list.capacity(), list.threshold()), (4, 2));
}

#[test]
fn push_keeps_order_and_size() {
    let vals = patterns::random(500);
    let list = vals.iter().copied().collect::<ArrayList<_>>();

    assert_eq!(list.len(), vals.len());
    assert_eq!(list.to_vec(), vals);
}

#[test]
fn capacity_grows_by_step() {
    let mut list = ArrayList::new();
    let mut expected_capacity = 10;

    for i in 0..100 {
        let grows = list.len() == list.threshold();
        list.push(i);

        if grows {
            expected_capacity += 10;
        }
        assert_eq!(list.capacity(), expected_capacity);
        assert_eq!(
            list.threshold(),
            (list.capacity() as f64 * 0.75).floor() as usize
        );
    }
}

#[test]
fn custom_growth_step() {
    let config = ListConfig::default()
        .with_initial_capacity(4)
        .with_growth_step(3)
        .with_load_factor(1.0);
    let mut list = ArrayList::with_config(config).unwrap();

    for i in 0..4 {
        list.push(i);
    }
    assert_eq!(list.capacity(), 4);

    list.push(4);
    assert_eq!((list.capacity(), list.threshold()), (7, 7));
}

#[test]
fn insert_at_index() {
    let mut list = list_of(&[1, 2, 3, 4, 5]);

    list.insert(2, 100).unwrap();

    assert_eq!(*list.get(2).unwrap(), 100);
    assert_eq!(list.len(), 6);
    assert_eq!(list.to_vec(), [1, 2, 100, 3, 4, 5]);

    list.insert(0, -1).unwrap();
    assert_eq!(list.to_vec(), [-1, 1, 2, 100, 3, 4, 5]);
}

#[test]
fn insert_rejects_index_at_or_past_size() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(
        list.insert(3, 9),
        Err(ListError::IndexOutOfBounds { index: 3, size: 3 })
    );
    assert_eq!(
        list.insert(1000, 9),
        Err(ListError::IndexOutOfBounds {
            index: 1000,
            size: 3
        })
    );
    assert_eq!(list.to_vec(), [1, 2, 3]);

    let mut empty = ArrayList::new();
    assert!(empty.insert(0, 1).unwrap_err().is_out_of_range());
    assert!(empty.is_empty());
}

#[test]
fn insert_matches_vec_model() {
    let mut list = list_of(&[0]);
    let mut model = vec![0];

    for (i, val) in patterns::random(300).into_iter().enumerate() {
        let index = val.unsigned_abs() as usize % model.len();
        list.insert(index, i as i32).unwrap();
        model.insert(index, i as i32);
    }

    assert_eq!(list.to_vec(), model);
    assert!(list.len() <= list.capacity());
}

#[test]
fn insert_grows_only_when_full() {
    let mut list = list_of(&[0, 1, 2, 3, 4, 5]);

    list.insert(0, 9).unwrap();
    list.insert(0, 9).unwrap();
    assert_eq!((list.len(), list.capacity(), list.threshold()), (8, 10, 7));

    list.insert(0, 9).unwrap();
    list.insert(0, 9).unwrap();
    assert_eq!((list.len(), list.capacity()), (10, 10));

    list.insert(0, 9).unwrap();
    assert_eq!((list.len(), list.capacity(), list.threshold()), (11, 20, 15));
}

#[test]
fn clear_keeps_capacity() {
    let mut list = list_of(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let capacity = list.capacity();

    list.clear();

    assert_eq!(list.len(), 0);
    assert_eq!(list.to_vec().len(), 0);
    assert_eq!(list.capacity(), capacity);

    list.push(42);
    assert_eq!(list.to_vec(), [42]);
}

#[test]
fn contains() {
    let list = list_of(&[5, 12, 38]);

    assert!(list.contains(&38));
    assert!(!list.contains(&1000));

    // Cleared slots must not be visible.
    let mut list = list_of(&[5, 12, 38]);
    list.clear();
    assert!(!list.contains(&38));
}

#[test]
fn get() {
    let list = list_of(&[5, 12, 38]);

    assert_eq!(list.get(2), Ok(&38));
    assert_eq!(
        list.get(3),
        Err(ListError::IndexOutOfBounds { index: 3, size: 3 })
    );
    assert!(ArrayList::<i32>::new().get(1000).is_err());
}

#[test]
fn index_of() {
    let list = list_of(&[12, 43, 44, 11, 44]);

    assert_eq!(list.index_of(&44), Some(2));
    assert_eq!(list.index_of(&12), Some(0));
    assert_eq!(list.index_of(&100), None);
}

#[test]
fn remove_item() {
    let mut list = list_of(&[12, 43, 44, 11, 43]);

    assert!(list.remove_item(&43));
    assert_eq!(list.len(), 4);
    assert_eq!(list.to_vec(), [12, 44, 11, 43]);

    assert!(!list.remove_item(&100));
    assert_eq!(list.to_vec(), [12, 44, 11, 43]);
}

#[test]
fn remove_at_index() {
    let mut list = list_of(&[5]);

    assert_eq!(list.remove(0), Ok(5));
    assert_eq!(list.len(), 0);

    let mut list = list_of(&[1, 2, 3, 4]);
    assert_eq!(list.remove(1), Ok(2));
    assert_eq!(list.to_vec(), [1, 3, 4]);
    assert_eq!(list.remove(2), Ok(4));
    assert_eq!(list.to_vec(), [1, 3]);
}

#[test]
fn remove_rejects_out_of_range() {
    let mut list = ArrayList::<i32>::new();

    let err = list.remove(2341).unwrap_err();
    assert!(err.is_out_of_range());
    assert!(err
        .to_string()
        .starts_with("Cannot call method with index not less than current size"));
    assert_eq!(
        list_of(&[1, 2]).get(2).unwrap_err().to_string(),
        "Cannot call method with index not less than current size; index = 2, size = 2"
    );

    let mut list = list_of(&[1, 2]);
    assert!(list.remove(2).is_err());
    assert_eq!(list.to_vec(), [1, 2]);
}

#[test]
fn to_vec_is_a_snapshot() {
    let mut list = list_of(&[1, 2, 3]);
    let mut snapshot = list.to_vec();

    snapshot[0] = 100;
    list.push(4);

    assert_eq!(snapshot, [100, 2, 3]);
    assert_eq!(list.to_vec(), [1, 2, 3, 4]);
}

#[test]
fn sort_with_comparators() {
    let mut list = list_of(&[5, 2, 3, 4]);
    list.sort_by(|a, b| a.cmp(b));
    assert_eq!(list.to_vec(), [2, 3, 4, 5]);

    let mut list = list_of(&[5, 2, 3, 4]);
    list.sort_by(|a, b| b.cmp(a));
    assert_eq!(list.to_vec(), [5, 4, 3, 2]);

    let mut list = ["zoo", "the", "I", "don't", "like"]
        .into_iter()
        .map(String::from)
        .collect::<ArrayList<_>>();
    list.sort_by(|a, b| a.cmp(b));
    assert_eq!(list.to_vec(), ["I", "don't", "like", "the", "zoo"]);
}

#[test]
fn sort_matches_stdlib_and_keeps_size() {
    for len in [0, 1, 2, 7, 8, 50, 333, 1_000] {
        let vals = patterns::random_uniform(len, -20..=20);
        let mut list = vals.iter().copied().collect::<ArrayList<_>>();
        let capacity = list.capacity();

        list.sort();

        let mut expected = vals.clone();
        expected.sort();
        assert_eq!(list.to_vec(), expected);
        assert_eq!(list.len(), len);
        assert_eq!(list.capacity(), capacity);

        list.sort_by(|a, b| b.cmp(a));
        expected.reverse();
        assert_eq!(list.to_vec(), expected);

        // Sorting again under the same order changes nothing.
        list.sort_by(|a, b| b.cmp(a));
        assert_eq!(list.to_vec(), expected);
    }
}

#[test]
fn sort_after_removals() {
    let mut list = patterns::descending(40)
        .into_iter()
        .collect::<ArrayList<_>>();
    for _ in 0..10 {
        list.remove(0).unwrap();
    }

    list.sort();
    assert_eq!(list.to_vec(), (0..30).collect::<Vec<_>>());
}

#[test]
fn clone_eq_and_debug() {
    let list = list_of(&[3, 1, 2]);
    let mut cloned = list.clone();

    assert_eq!(cloned, list);
    assert_eq!(format!("{:?}", list), "[3, 1, 2]");

    cloned.sort();
    assert_ne!(cloned, list);
    assert_eq!(list.to_vec(), [3, 1, 2]);
}

#[test]
fn extend_and_default() {
    let mut list = ArrayList::default();
    list.extend(patterns::ascending(25));

    assert_eq!(list.len(), 25);
    assert_eq!(list.to_vec(), patterns::ascending(25));
}
