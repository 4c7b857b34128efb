use std::{
    collections::{hash_map::Entry, HashMap},
    fmt::Display,
    hash::{BuildHasher, Hash},
    ops::AddAssign,
};

use crate::error::{Error, Result};

pub trait CountExt<K, V> {
    /// Adds `delta` to the value under `key`, inserting `delta` if the key is new. Returns whether
    /// the key was already present.
    fn add_or_insert(&mut self, key: K, delta: V) -> bool;
}

impl<K, V, S> CountExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: AddAssign,
    S: BuildHasher,
{
    fn add_or_insert(&mut self, key: K, delta: V) -> bool {
        match self.entry(key) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += delta;
                true
            }
            Entry::Vacant(entry) => {
                entry.insert(delta);
                false
            }
        }
    }
}

/// The middle element, favouring the later one for even lengths. Equals the median for sorted
/// input.
pub fn middle<T>(items: &[T]) -> Option<&T> {
    items.get(items.len() / 2)
}

/// Moves the element at `from` to `to`, shifting everything in between by one.
pub fn swap_shift<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

pub fn transpose<T: Clone>(rows: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let width = first.len();
    if let Some((row, found)) = rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != width)
        .map(|(i, r)| (i, r.len()))
    {
        return Err(Error::RaggedRows {
            row,
            expected: width,
            found,
        });
    }
    Ok((0..width)
        .map(|col| rows.iter().map(|r| r[col].clone()).collect())
        .collect())
}

/// One column across all rows, `None` if any row is too short.
pub fn column<T: Clone>(rows: &[Vec<T>], index: usize) -> Option<Vec<T>> {
    rows.iter().map(|r| r.get(index).cloned()).collect()
}

/// `count` consecutive columns starting at `start`.
pub fn columns<T: Clone>(rows: &[Vec<T>], start: usize, count: usize) -> Option<Vec<Vec<T>>> {
    (start..start + count).map(|i| column(rows, i)).collect()
}

pub fn join_display<T: Display>(items: impl IntoIterator<Item = T>, delimiter: &str) -> String {
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        out.push_str(&item.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use rustc_hash::FxHashMap;

    #[test]
    fn test_add_or_insert() {
        let mut counts = FxHashMap::default();
        assert!(!counts.add_or_insert('a', 2));
        assert!(counts.add_or_insert('a', 3));
        assert!(!counts.add_or_insert('b', -1));
        assert_eq!(counts[&'a'], 5);
        assert_eq!(counts[&'b'], -1);

        let mut std_map = HashMap::new();
        std_map.add_or_insert("x", 1.5);
        std_map.add_or_insert("x", 1.5);
        assert_eq!(std_map["x"], 3.0);
    }

    #[test]
    fn test_middle() {
        assert_eq!(middle(&[1, 2, 3]), Some(&2));
        assert_eq!(middle(&[1, 2, 3, 4]), Some(&3));
        assert_eq!(middle::<u8>(&[]), None);
    }

    #[test]
    fn test_swap_shift() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e'];
        swap_shift(&mut v, 0, 3);
        assert_eq!(v, vec!['b', 'c', 'd', 'a', 'e']);
        swap_shift(&mut v, 4, 1);
        assert_eq!(v, vec!['b', 'e', 'c', 'd', 'a']);
        swap_shift(&mut v, 2, 2);
        assert_eq!(v, vec!['b', 'e', 'c', 'd', 'a']);
    }

    #[test]
    fn test_transpose() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(
            transpose(&rows).unwrap(),
            vec![vec![1, 4], vec![2, 5], vec![3, 6]]
        );
        assert_eq!(transpose::<u8>(&[]).unwrap(), Vec::<Vec<u8>>::new());
        assert_eq!(
            transpose(&[vec![1, 2], vec![3]]),
            Err(Error::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_columns() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        assert_eq!(column(&rows, 1), Some(vec![2, 5, 8]));
        assert_eq!(column(&rows, 3), None);
        assert_eq!(
            columns(&rows, 1, 2),
            Some(vec![vec![2, 5, 8], vec![3, 6, 9]])
        );
        assert_eq!(columns(&rows, 2, 2), None);
        assert_eq!(columns(&rows, 0, 0), Some(vec![]));
    }

    #[test]
    fn test_join_display() {
        assert_eq!(join_display([1, 2, 3], ", "), "1, 2, 3");
        assert_eq!(join_display(Vec::<u8>::new(), ", "), "");
        assert_eq!(join_display(["a"], "-"), "a");
    }
}
