//! A growable array list with load factor driven capacity growth, and the in-place Lomuto
//! quicksort it sorts with.
//!
//! ```ignore
//! use quick_list::{quicksort, ArrayList};
//!
//! let mut list: ArrayList<i32> = [5, 2, 3, 4].into_iter().collect();
//! list.sort_by(|a, b| b.cmp(a));
//! assert_eq!(list.to_vec(), [5, 4, 3, 2]);
//!
//! let mut v = [5, 8, 12, 34, 41, 0, 0, 9];
//! quicksort::sort(&mut v);
//! assert_eq!(v, [0, 0, 5, 8, 9, 12, 34, 41]);
//! ```

pub mod config;
pub mod error;
pub mod list;
pub mod quicksort;

pub use config::ListConfig;
pub use error::ListError;
pub use list::ArrayList;
