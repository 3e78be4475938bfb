use super::PriorityFrontier;

#[derive(Debug, Clone)]
struct Pending<T> {
    item: T,
    key: f64,
    seq: u64,
}

/// Frontier backed by a vector scanned on every extraction
#[derive(Debug, Clone)]
pub struct LinearFrontier<T> {
    entries: Vec<Pending<T>>,
    next_seq: u64,
}

impl<T> LinearFrontier<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<T> Default for LinearFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialEq> PriorityFrontier<T> for LinearFrontier<T> {
    fn insert(&mut self, item: T, key: f64) {
        if self.contains(&item) {
            self.decrease_key(&item, key);
            return;
        }
        self.entries.push(Pending {
            item,
            key,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    fn decrease_key(&mut self, item: &T, key: f64) -> bool {
        match self.entries.iter_mut().find(|e| e.item == *item) {
            Some(entry) if key < entry.key => {
                entry.key = key;
                true
            }
            _ => false,
        }
    }

    fn extract_min(&mut self) -> Option<(T, f64)> {
        // Entries stay in insertion order, so the first strict minimum is
        // also the lowest sequence among equal keys.
        let mut best: Option<usize> = None;
        for (i, entry) in self.entries.iter().enumerate() {
            match best {
                Some(b) if self.entries[b].key <= entry.key => {}
                _ => best = Some(i),
            }
        }
        let entry = self.entries.remove(best?);
        Some((entry.item, entry.key))
    }

    fn contains(&self, item: &T) -> bool {
        self.entries.iter().any(|e| e.item == *item)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn pending(&self) -> Vec<(T, f64)> {
        let mut out: Vec<&Pending<T>> = self.entries.iter().collect();
        out.sort_by_key(|e| e.seq);
        out.into_iter().map(|e| (e.item, e.key)).collect()
    }
}
