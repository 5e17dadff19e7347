use std::cmp::Ordering;
use std::fmt;
use std::mem::{self, MaybeUninit};
use std::ptr;
use std::slice;

use crate::config::ListConfig;
use crate::error::ListError;
use crate::quicksort;

/// A growable array list with load factor driven growth.
///
/// The backing buffer holds `capacity()` slots, of which only the first `len()` are initialized.
/// Once `len()` reaches `threshold() = floor(capacity() * load_factor)`, the next [`push`] first
/// grows the buffer by a fixed step. [`insert`] only grows a full buffer. The buffer is never
/// shrunk, not even by [`clear`].
///
/// [`push`]: ArrayList::push
/// [`insert`]: ArrayList::insert
///
/// [`clear`]: ArrayList::clear
pub struct ArrayList<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
    threshold: usize,
    config: ListConfig,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with capacity 10, growth step 10 and load factor 0.75.
    pub fn new() -> Self {
        Self::from_valid_config(ListConfig::default())
    }

    /// Creates an empty list with the given initial capacity and otherwise default settings.
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        Self::with_config(ListConfig::default().with_initial_capacity(capacity))
    }

    /// Creates an empty list from `config`, after checking it with [`ListConfig::validate`].
    pub fn with_config(config: ListConfig) -> Result<Self, ListError> {
        config.validate()?;

        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ListConfig) -> Self {
        let capacity = config.initial_capacity;

        Self {
            buf: alloc_buffer(capacity),
            len: 0,
            threshold: config.threshold_for(capacity),
            config,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Size at which the next insertion grows the buffer.
    #[inline]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.config.load_factor
    }

    #[inline]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Appends `element`, growing the buffer first if the threshold is reached.
    ///
    /// Always returns `true`.
    pub fn push(&mut self, element: T) -> bool {
        self.reserve_one();

        self.buf[self.len].write(element);
        self.len += 1;

        true
    }

    /// Inserts `element` before position `index`, shifting the tail right by one.
    ///
    /// Unlike [`push`](ArrayList::push) this ignores the threshold and only grows once the
    /// buffer is completely full.
    ///
    /// `index` has to point at an existing element, inserting at `len()` is rejected. Use
    /// [`push`](ArrayList::push) to append.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), ListError> {
        self.check_index(index)?;
        // Inserting does not look at the threshold, it only needs one free slot for the shift.
        if self.len == self.capacity() {
            self.grow();
        }

        // SAFETY: `index < len < capacity` after the check above, so both the shifted range
        // `index..len` and its destination `index + 1..len + 1` are in-bounds. The slot at
        // `index` is overwritten without dropping, its old value now lives at `index + 1`.
        unsafe {
            let hole = self.buf.as_mut_ptr().add(index);
            ptr::copy(hole, hole.add(1), self.len - index);
            (*hole).write(element);
        }
        self.len += 1;

        Ok(())
    }

    /// Drops all elements and replaces the buffer with an empty one of the same capacity.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        let new_buf = alloc_buffer(self.capacity());
        let mut old_buf = mem::replace(&mut self.buf, new_buf);

        // SAFETY: The first `len` slots of the old buffer were initialized, and the list no longer
        // refers to them.
        unsafe {
            ptr::drop_in_place(slice_assume_init_mut(&mut old_buf[..len]));
        }
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;

        Ok(&self.live()[index])
    }

    /// Removes and returns the element at `index`, shifting the tail left by one.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;

        Ok(self.take_at(index))
    }

    /// Sorts the elements ascending according to `Ord`.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        quicksort::sort(self.live_mut());
    }

    /// Sorts the elements so that `compare` defines ascending order, see [`quicksort::sort_by`].
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        quicksort::sort_by(self.live_mut(), compare);
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                size: self.len,
            });
        }

        Ok(())
    }

    /// Moves the element at `index` out and closes the gap. `index` must be below `len`.
    fn take_at(&mut self, index: usize) -> T {
        assert!(index < self.len);

        // SAFETY: `index < len`, so the slot is initialized and read out exactly once. The tail
        // `index + 1..len` is moved over it, after which `len - 1` slots are initialized.
        let element = unsafe {
            let hole = self.buf.as_mut_ptr().add(index);
            let element = (*hole).assume_init_read();
            ptr::copy(hole.add(1), hole, self.len - index - 1);
            element
        };
        self.len -= 1;

        element
    }

    /// Makes sure one more element can be written at `len`.
    #[inline]
    fn reserve_one(&mut self) {
        if self.len >= self.threshold {
            self.grow();
        }

        debug_assert!(self.len < self.capacity());
    }

    #[cold]
    fn grow(&mut self) {
        let new_capacity = match self.capacity().checked_add(self.config.growth_step) {
            Some(new_capacity) => new_capacity,
            None => capacity_overflow(),
        };

        let mut new_buf = alloc_buffer(new_capacity);

        // SAFETY: Both buffers are distinct allocations of at least `len` slots. The elements are
        // moved bitwise, the old buffer is dropped as `MaybeUninit` which does not drop them.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }

        self.buf = new_buf;
        self.threshold = self.config.threshold_for(new_capacity);
    }

    #[inline]
    fn live(&self) -> &[T] {
        // SAFETY: The first `len` slots are always initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    fn live_mut(&mut self) -> &mut [T] {
        // SAFETY: See `live`.
        unsafe { slice_assume_init_mut(&mut self.buf[..self.len]) }
    }
}

impl<T: PartialEq> ArrayList<T> {
    pub fn contains(&self, element: &T) -> bool {
        self.live().contains(element)
    }

    /// Position of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.live().iter().position(|e| e == element)
    }

    /// Removes the first element equal to `element`, returns whether one was found.
    pub fn remove_item(&mut self, element: &T) -> bool {
        match self.index_of(element) {
            Some(index) => {
                drop(self.take_at(index));
                true
            }
            None => false,
        }
    }
}

impl<T: Clone> ArrayList<T> {
    /// Snapshot of the current elements, independent of the list.
    pub fn to_vec(&self) -> Vec<T> {
        self.live().to_vec()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // SAFETY: The live prefix is dropped exactly once, the buffer itself is `MaybeUninit`.
        unsafe {
            ptr::drop_in_place(self.live_mut());
        }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut cloned = Self {
            buf: alloc_buffer(self.capacity()),
            len: 0,
            threshold: self.threshold,
            config: self.config,
        };

        // Bump `len` per element, so a panicking `clone` only drops what was written.
        for (slot, element) in cloned.buf.iter_mut().zip(self.live()) {
            slot.write(element.clone());
            cloned.len += 1;
        }

        cloned
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live()).finish()
    }
}

/// Compares elements only, capacity and growth settings are ignored.
impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.live() == other.live()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

fn alloc_buffer<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    (0..capacity).map(|_| MaybeUninit::uninit()).collect()
}

/// SAFETY: The caller has to guarantee that every slot in `v` is initialized.
#[inline]
unsafe fn slice_assume_init_mut<T>(v: &mut [MaybeUninit<T>]) -> &mut [T] {
    // SAFETY: `MaybeUninit<T>` has the same layout as `T`.
    unsafe { &mut *(v as *mut [MaybeUninit<T>] as *mut [T]) }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
