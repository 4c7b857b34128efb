use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// Fixed-capacity array whose elements are addressed circularly: any signed index wraps around,
/// so `-1` is the last element. Keeps a cursor that always lies in `[0, capacity)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularArray<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> CircularArray<T> {
    /// Takes at most `capacity` elements from `source`, filling any remaining slots with
    /// `T::default()`.
    pub fn with_capacity_from(capacity: usize, source: impl IntoIterator<Item = T>) -> Result<Self>
    where
        T: Default,
    {
        if capacity == 0 {
            return Err(Error::EmptyCircularArray);
        }
        let mut items: Vec<T> = source.into_iter().take(capacity).collect();
        items.resize_with(capacity, T::default);
        Ok(Self { items, index: 0 })
    }

    pub fn with_capacity(capacity: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::with_capacity_from(capacity, [])
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    fn wrap(&self, index: isize) -> usize {
        // capacity is never 0 and never exceeds isize::MAX for a Vec
        index.rem_euclid(self.items.len() as isize) as usize
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: isize) {
        self.index = self.wrap(index);
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn current_mut(&mut self) -> &mut T {
        &mut self.items[self.index]
    }

    /// Moves the cursor by `offset` in either direction and returns the new current element.
    pub fn move_by(&mut self, offset: isize) -> &T {
        self.index = self.from_cursor(offset);
        self.current()
    }

    fn from_cursor(&self, offset: isize) -> usize {
        // reduce first, the cursor plus a huge offset would overflow
        (self.index + self.wrap(offset)) % self.capacity()
    }

    pub fn next(&mut self, count: usize) -> &T {
        self.move_by(self.wrap_count(count))
    }

    pub fn previous(&mut self, count: usize) -> &T {
        self.move_by(-self.wrap_count(count))
    }

    fn wrap_count(&self, count: usize) -> isize {
        (count % self.capacity()) as isize
    }

    /// Element `offset` away from the cursor, without moving it.
    pub fn peek(&self, offset: isize) -> &T {
        &self.items[self.from_cursor(offset)]
    }

    /// Endless iteration in the positive direction, starting at the current element.
    pub fn forward(&self) -> impl Iterator<Item = &T> {
        self.items[self.index..]
            .iter()
            .chain(&self.items[..self.index])
            .cycle()
    }

    /// Endless iteration in the negative direction, starting at the current element.
    pub fn reverse(&self) -> impl Iterator<Item = &T> {
        self.reverse_once().cycle()
    }

    /// One lap in the positive direction, starting at the current element.
    pub fn forward_once(&self) -> impl Iterator<Item = &T> + Clone {
        self.items[self.index..]
            .iter()
            .chain(&self.items[..self.index])
    }

    /// One lap in the negative direction, starting at the current element.
    pub fn reverse_once(&self) -> impl Iterator<Item = &T> + Clone {
        self.items[..=self.index]
            .iter()
            .rev()
            .chain(self.items[self.index + 1..].iter().rev())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + Clone {
        self.forward_once()
    }

    /// Overwrites elements from the cursor onwards, wrapping as needed. Later elements overwrite
    /// earlier ones once more than `capacity` are given. The cursor stays put.
    pub fn fill(&mut self, elements: impl IntoIterator<Item = T>) {
        let capacity = self.capacity();
        for (offset, element) in elements.into_iter().enumerate() {
            self.items[(self.index + offset) % capacity] = element;
        }
    }

    pub fn fill_n(&mut self, elements: impl IntoIterator<Item = T>, count: usize) {
        self.fill(elements.into_iter().take(count));
    }
}

impl<T> TryFrom<Vec<T>> for CircularArray<T> {
    type Error = Error;

    fn try_from(items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyCircularArray);
        }
        Ok(Self { items, index: 0 })
    }
}

impl<T> Index<isize> for CircularArray<T> {
    type Output = T;

    fn index(&self, index: isize) -> &T {
        &self.items[self.wrap(index)]
    }
}

impl<T> IndexMut<isize> for CircularArray<T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        let i = self.wrap(index);
        &mut self.items[i]
    }
}

impl<'a, T> IntoIterator for &'a CircularArray<T> {
    type Item = &'a T;
    type IntoIter = Box<dyn Iterator<Item = &'a T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.forward_once())
    }
}
