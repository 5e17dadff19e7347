#![no_main]

use libfuzzer_sys::fuzz_target;

use quick_list::{ArrayList, ListConfig};

// Replays the input as a sequence of list operations and mirrors them on a `Vec`.
fuzz_target!(|data: &[u8]| {
    let Some((&config_byte, ops)) = data.split_first() else {
        return;
    };

    let config = ListConfig::default()
        .with_initial_capacity(1 + (config_byte & 0x0f) as usize)
        .with_growth_step(1 + (config_byte >> 4) as usize)
        .with_load_factor(0.75);
    let Ok(mut list) = ArrayList::with_config(config) else {
        return;
    };
    let mut model: Vec<u8> = Vec::new();

    for op in ops.chunks_exact(2) {
        let (kind, val) = (op[0], op[1]);
        let index = val as usize;

        match kind % 7 {
            0 => {
                list.push(val);
                model.push(val);
            }
            1 => {
                let res = list.insert(index, val);
                if index < model.len() {
                    assert!(res.is_ok());
                    model.insert(index, val);
                } else {
                    assert!(res.is_err());
                }
            }
            2 => {
                let res = list.remove(index);
                if index < model.len() {
                    assert_eq!(res.ok(), Some(model.remove(index)));
                } else {
                    assert!(res.is_err());
                }
            }
            3 => {
                let found = model.iter().position(|e| *e == val);
                assert_eq!(list.index_of(&val), found);
                assert_eq!(list.remove_item(&val), found.is_some());
                if let Some(found) = found {
                    model.remove(found);
                }
            }
            4 => {
                list.sort();
                model.sort();
            }
            5 => {
                list.sort_by(|a, b| b.cmp(a));
                model.sort_by(|a, b| b.cmp(a));
            }
            _ => {
                let capacity = list.capacity();
                list.clear();
                model.clear();
                assert_eq!(list.capacity(), capacity);
            }
        }

        assert_eq!(list.len(), model.len());
        assert!(list.len() <= list.capacity());
        assert!(list.threshold() <= list.capacity());
    }

    assert_eq!(list.to_vec(), model);
});
