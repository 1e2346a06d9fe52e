//! A min-heap keyed on weight, used to repeatedly pick the two
//! least frequent nodes while building a Huffman tree.
//!
//! The heap lives in a `Vec`: the children of the element at `i` sit at `2i + 1`
//! and `2i + 2`. Equal weights leave the queue in insertion order, so the
//! trees built from it are reproducible.

use alloc::vec::Vec;

/// Anything that can be ordered by the priority queue
pub trait Weighted {
    fn weight(&self) -> usize;
}

/// How many elements a [PriorityQueue] may hold at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueCapacity {
    /// Grow as needed
    #[default]
    Unbounded,
    /// Refuse to hold more than this many elements
    Bounded(usize),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum PriorityQueueError {
    #[error("Priority queue is full, it can hold at most {capacity} elements")]
    CapacityExceeded { capacity: usize },
    #[error("Tried to {operation} on an empty priority queue")]
    EmptyQueue { operation: &'static str },
}

struct Entry<T> {
    item: T,
    /// Insertion order, breaks ties between equal weights
    seq: u64,
}

impl<T: Weighted> Entry<T> {
    fn key(&self) -> (usize, u64) {
        (self.item.weight(), self.seq)
    }
}

pub struct PriorityQueue<T> {
    heap: Vec<Entry<T>>,
    capacity: QueueCapacity,
    next_seq: u64,
}

impl<T: Weighted> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(QueueCapacity::Unbounded)
    }

    pub fn with_capacity(capacity: QueueCapacity) -> Self {
        let heap = match capacity {
            QueueCapacity::Unbounded => Vec::new(),
            QueueCapacity::Bounded(max) => Vec::with_capacity(max),
        };
        PriorityQueue {
            heap,
            capacity,
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert `item` and restore heap order by sifting it up.
    pub fn add(&mut self, item: T) -> Result<(), PriorityQueueError> {
        if let QueueCapacity::Bounded(capacity) = self.capacity {
            if self.heap.len() >= capacity {
                return Err(PriorityQueueError::CapacityExceeded { capacity });
            }
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { item, seq });
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Remove and return the element with the smallest weight.
    pub fn poll(&mut self) -> Result<T, PriorityQueueError> {
        if self.heap.is_empty() {
            return Err(PriorityQueueError::EmptyQueue { operation: "poll" });
        }
        // swap_remove moves the last element into the root slot
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min.item)
    }

    /// Look at the element with the smallest weight without removing it.
    pub fn peek(&self) -> Result<&T, PriorityQueueError> {
        self.heap
            .first()
            .map(|entry| &entry.item)
            .ok_or(PriorityQueueError::EmptyQueue { operation: "peek" })
    }

    /// Checks that no element is lighter than its parent
    pub fn is_valid_heap(&self) -> bool {
        (1..self.heap.len()).all(|idx| {
            let parent = (idx - 1) / 2;
            self.heap[parent].item.weight() <= self.heap[idx].item.weight()
        })
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[parent].key() <= self.heap[idx].key() {
                break;
            }
            self.heap.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = idx * 2 + 1;
            let right = idx * 2 + 2;

            let mut smallest = idx;
            if left < len && self.heap[left].key() < self.heap[smallest].key() {
                smallest = left;
            }
            if right < len && self.heap[right].key() < self.heap[smallest].key() {
                smallest = right;
            }
            if smallest == idx {
                return;
            }
            self.heap.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T: Weighted> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Weighted for usize {
    fn weight(&self) -> usize {
        *self
    }
}
