/*!
A max heap on some subset of elements with fixed indices.

The heap is backed by a vector of values which never moves, with a companion vector tracking where (if anywhere) the index of a value currently sits on the heap.
So, values may be moved on and off the heap without being lost, and revalued while on or off the heap.

[IndexHeap] is used as a store of [atom activities](crate::db::atom::activity), where an atom without a value and with the most activity is wanted when making a decision.
And, as a store of [clause activities](crate::db::clause), where the least active learned clause is wanted during reduction.

Ties between equal values are broken in favour of the lower index, so the order in which indices are popped is fully determined by the values.

```rust
# use marten_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.add(600, 10);
heap.add(0, 70);

heap.activate(600);
heap.activate(0);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), &i32::default());

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(600));

assert!(heap.pop_max().is_none());
```
*/

use std::cmp::Ordering;

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// Values, indexed by their (fixed) value index.
    values: Vec<V>,

    /// The position of a value index on the heap, if active.
    position_in_heap: Vec<Option<usize>>,

    /// The heap, as a vector of value indices.
    /// Only elements below `limit` are part of the heap.
    heap: Vec<usize>,

    /// The count of active value indices.
    limit: usize,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position_in_heap: Vec::default(),
            heap: Vec::default(),
            limit: 0,
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Index `value` with `value_index`.
    /// Returns true if `value_index` was a fresh index, false otherwise.
    ///
    /// To place `value_index` on the heap [activate](IndexHeap::activate) should be called after this method.
    ///
    /// The structure grows to the size required for `value_index` to be an index, with default values for any skipped indices.
    pub fn add(&mut self, value_index: usize, value: V) -> bool {
        if self.values.len() <= value_index {
            self.values.resize_with(value_index + 1, V::default);
            self.position_in_heap.resize(value_index + 1, None);
            self.heap.resize(value_index + 1, usize::MAX);
            self.values[value_index] = value;
            true
        } else {
            self.revalue(value_index, value);
            self.heapify_if_active(value_index);
            false
        }
    }

    /// Remove `value_index` from the heap, if present.
    /// Returns true if `value_index` was removed, false otherwise.
    pub fn remove(&mut self, value_index: usize) -> bool {
        let Some(heap_index) = self.heap_index(value_index) else {
            return false;
        };

        self.limit -= 1;
        self.position_in_heap[value_index] = None;

        if heap_index != self.limit {
            let moved = self.heap[self.limit];
            self.heap[heap_index] = moved;
            self.position_in_heap[moved] = Some(heap_index);
            self.heapify_down(heap_index);
            self.heapify_up(heap_index);
        }
        true
    }

    /// Activate the value at `value_index` on the heap.
    /// Returns true if the index was not already active, false otherwise.
    pub fn activate(&mut self, value_index: usize) -> bool {
        match self.heap_index(value_index) {
            None => {
                let heap_index = self.limit;
                self.heap[heap_index] = value_index;
                self.position_in_heap[value_index] = Some(heap_index);
                self.limit += 1;
                self.heapify_up(heap_index);
                true
            }

            Some(heap_index) => {
                self.heapify_up(heap_index);
                self.heapify_down(heap_index);
                false
            }
        }
    }

    /// Whether `value_index` is on the heap.
    pub fn is_active(&self, value_index: usize) -> bool {
        self.heap_index(value_index).is_some()
    }

    /// Heapify (ensure invariants of the heap are upheld) around `value_index`, if active.
    pub fn heapify_if_active(&mut self, value_index: usize) {
        if let Some(heap_index) = self.heap_index(value_index) {
            self.heapify_up(heap_index);
            if let Some(heap_index) = self.heap_index(value_index) {
                self.heapify_down(heap_index);
            }
        }
    }

    /// Peek at the index of the maximum value on the heap.
    pub fn peek_max(&self) -> Option<usize> {
        match self.limit {
            0 => None,
            _ => Some(self.heap[0]),
        }
    }

    /// Pop the index of the maximum value off the heap.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max_value_index = self.peek_max()?;
        self.remove(max_value_index);
        Some(max_value_index)
    }

    /// Heapify the entire heap.
    pub fn heapify(&mut self) {
        for heap_index in (0..self.limit / 2).rev() {
            self.heapify_down(heap_index)
        }
    }

    /// The value indexed by `value_index`.
    pub fn value_at(&self, value_index: usize) -> &V {
        &self.values[value_index]
    }

    /// Apply `f` to the value at `value_index`, without any update to the heap.
    pub fn apply_to_value_at(&mut self, value_index: usize, f: impl Fn(&V) -> V) {
        self.values[value_index] = f(&self.values[value_index])
    }

    /// Apply `f` to all (indexed) values, without any update to the heap.
    ///
    /// If `f` does not preserve the relative order of values, [heapify](IndexHeap::heapify) should follow.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// Set the value of `value_index` to `value`, without any update to the heap.
    pub fn revalue(&mut self, value_index: usize, value: V) {
        self.values[value_index] = value
    }

    /// A count of values indexed by the structure.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of the indices active on the heap.
    pub fn active_count(&self) -> usize {
        self.limit
    }

    /// True if no values are indexed, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    fn heap_index(&self, value_index: usize) -> Option<usize> {
        self.position_in_heap.get(value_index).copied().flatten()
    }

    /// Whether the value at heap position `a` should sit above the value at heap position `b`.
    fn above(&self, a: usize, b: usize) -> bool {
        let (a_index, b_index) = (self.heap[a], self.heap[b]);
        match self.values[a_index].partial_cmp(&self.values[b_index]) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Less) => false,
            Some(Ordering::Equal) | None => a_index < b_index,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position_in_heap[self.heap[a]] = Some(a);
        self.position_in_heap[self.heap[b]] = Some(b);
    }

    fn heapify_down(&mut self, mut heap_index: usize) {
        loop {
            let left = (2 * heap_index) + 1;
            let right = left + 1;

            let mut update_index = heap_index;
            if left < self.limit && self.above(left, update_index) {
                update_index = left;
            }
            if right < self.limit && self.above(right, update_index) {
                update_index = right;
            }

            if update_index == heap_index {
                break;
            }
            self.swap(heap_index, update_index);
            heap_index = update_index;
        }
    }

    fn heapify_up(&mut self, mut heap_index: usize) {
        while heap_index > 0 {
            let parent = (heap_index - 1) / 2;
            if !self.above(heap_index, parent) {
                break;
            }
            self.swap(heap_index, parent);
            heap_index = parent;
        }
    }
}
