use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use super::PriorityFrontier;

/// Wrapper for BinaryHeap to use as min-heap (ordered by key, then sequence)
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub item: T,
    pub key: f64,
    pub seq: u64,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Frontier backed by a binary heap.
///
/// Decrease-key pushes a fresh entry; entries that no longer match the live
/// key or sequence of their item are discarded when popped.
#[derive(Debug, Clone)]
pub struct HeapFrontier<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    live: HashMap<T, (f64, u64)>,
    next_seq: u64,
}

impl<T> HeapFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Default for HeapFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash> PriorityFrontier<T> for HeapFrontier<T> {
    fn insert(&mut self, item: T, key: f64) {
        if self.live.contains_key(&item) {
            self.decrease_key(&item, key);
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(item, (key, seq));
        self.heap.push(Reverse(HeapEntry { item, key, seq }));
    }

    fn decrease_key(&mut self, item: &T, key: f64) -> bool {
        let Some(live) = self.live.get_mut(item) else {
            return false;
        };
        if key >= live.0 {
            return false;
        }
        live.0 = key;
        let seq = live.1;
        self.heap.push(Reverse(HeapEntry {
            item: *item,
            key,
            seq,
        }));
        true
    }

    fn extract_min(&mut self) -> Option<(T, f64)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let current = self.live.get(&entry.item).copied();
            if current == Some((entry.key, entry.seq)) {
                self.live.remove(&entry.item);
                return Some((entry.item, entry.key));
            }
        }
        None
    }

    fn contains(&self, item: &T) -> bool {
        self.live.contains_key(item)
    }

    fn len(&self) -> usize {
        self.live.len()
    }

    fn pending(&self) -> Vec<(T, f64)> {
        let mut out: Vec<(T, f64, u64)> = self
            .live
            .iter()
            .map(|(item, (key, seq))| (*item, *key, *seq))
            .collect();
        out.sort_by_key(|(_, _, seq)| *seq);
        out.into_iter().map(|(item, key, _)| (item, key)).collect()
    }
}
