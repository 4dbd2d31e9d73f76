use num::{FromPrimitive, ToPrimitive};

use crate::graph::{Node, Weight};

/// Trait for all possible types that can be used as a key for a RadixHeap
pub trait RadixKey: Copy + Default + Ord {
    /// Number of bits of Self
    const NUM_BITS: usize;

    /// Number of leading bits shared with another instance of Self
    fn radix_similarity(&self, other: &Self) -> usize;

    /// Inverted radix_similarity (=> how far away is other from self)
    fn radix_distance(&self, other: &Self) -> usize {
        Self::NUM_BITS - self.radix_similarity(other)
    }
}

macro_rules! radix_key_impl_int {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                const NUM_BITS: usize = (std::mem::size_of::<$t>() * 8);

                #[inline]
                fn radix_similarity(&self, other: &Self) -> usize {
                    (self ^ other).leading_zeros() as usize
                }
            }
        )*
    };
}

radix_key_impl_int!(u8, u16, u32, u64, u128);

/// Marker trait for types that can be used as values in IndexedRadixHeap (=> have to be usable for
/// indexing)
pub trait RadixValue: FromPrimitive + ToPrimitive + Default + Copy + Ord {}
impl<T: FromPrimitive + ToPrimitive + Default + Copy + Ord> RadixValue for T {}

/// Stores all key-value-pairs of the same similarity
type Bucket<K, V> = Vec<(K, V)>;

/// # IndexedRadixHeap: A monotone Radix-MinHeap
///
/// Allows fast insertions/deletions/queries into elements sorted by associated RadixKey-type.
/// Elements have to be convertible to a usize smaller than a given value to allow for fast
/// existence queries.
///
/// The heap is monotone: every key pushed must not be smaller than the key of the element
/// popped last. Dijkstra's algorithm with non-negative weights satisfies this.
///
/// ### IMPORTANT
/// NUM_BUCKETS must be equal to K::NUM_BITS + 1
#[derive(Debug)]
pub struct IndexedRadixHeap<K: RadixKey, V: RadixValue, const NUM_BUCKETS: usize> {
    /// Number of elements in the heap
    len: usize,
    /// Current top element (last element removed)
    top: K,
    /// All buckets
    buckets: [Bucket<K, V>; NUM_BUCKETS],
    /// A pointer for each element to where it is in the heap
    pointer: Vec<(u8, V)>,
}

/// A heap with tentative distances as keys and nodes as values
pub type DistanceHeap = IndexedRadixHeap<Weight, Node, 65>;

impl<K: RadixKey, V: RadixValue, const NUM_BUCKETS: usize> IndexedRadixHeap<K, V, NUM_BUCKETS> {
    /// Creates a new heap with a given top element and a maximum number of elements
    pub fn new(n: usize, top: K) -> Self {
        debug_assert_eq!(NUM_BUCKETS, K::NUM_BITS + 1);
        Self {
            len: 0,
            top,
            buckets: array_init::array_init(|_| Vec::new()),
            pointer: vec![(u8::MAX, V::default()); n],
        }
    }

    /// Pushes an element on the heap; does nothing if `value` is already contained
    pub fn push(&mut self, key: K, value: V) {
        if self.contains(value) {
            return;
        }

        debug_assert!(key >= self.top);
        let bucket = key.radix_distance(&self.top);
        self.buckets[bucket].push((key, value));
        self.pointer[value.to_usize().unwrap()] = (
            bucket as u8,
            V::from_usize(self.buckets[bucket].len() - 1).unwrap(),
        );
        self.len += 1;
    }

    /// Pushes `value` with `key`, or lowers the key of `value` if it is already contained
    /// with a larger key
    pub fn push_or_decrease(&mut self, key: K, value: V) {
        match self.key_of(value) {
            Some(old) if old <= key => {}
            Some(_) => {
                self.remove(value);
                self.push(key, value);
            }
            None => self.push(key, value),
        }
    }

    /// Returns true if `value` is currently stored in the heap
    pub fn contains(&self, value: V) -> bool {
        self.pointer
            .get(value.to_usize().unwrap())
            .is_some_and(|&(bucket, _)| bucket != u8::MAX)
    }

    /// Returns the key associated with `value` if it is contained
    pub fn key_of(&self, value: V) -> Option<K> {
        let (bucket, position) = *self.pointer.get(value.to_usize().unwrap())?;
        if bucket == u8::MAX {
            return None;
        }
        Some(self.buckets[bucket as usize][position.to_usize().unwrap()].0)
    }

    /// Removes a specific element from the heap
    pub fn remove(&mut self, value: V) -> Option<K> {
        let value = value.to_usize().unwrap();
        if value >= self.pointer.len() {
            return None;
        }

        let (bucket, position) = self.pointer[value];
        if bucket == u8::MAX {
            return None;
        }

        let bucket = bucket as usize;
        let pos_usize = position.to_usize().unwrap();

        let res = self.buckets[bucket].swap_remove(pos_usize);
        if self.buckets[bucket].len() > pos_usize {
            self.pointer[self.buckets[bucket][pos_usize].1.to_usize().unwrap()].1 = position;
        }
        self.len -= 1;

        self.pointer[value].0 = u8::MAX;

        Some(res.0)
    }

    /// Updates the heap to find the new smallest element and re-order buckets accordingly
    fn update(&mut self) {
        let (buckets, repush) = match self.buckets.iter().position(|bucket| !bucket.is_empty()) {
            None | Some(0) => return,
            Some(index) => {
                let (buckets, rest) = self.buckets.split_at_mut(index);
                (buckets, &mut rest[0])
            }
        };

        self.top = repush.iter().map(|&(k, _)| k).min().unwrap();

        repush.drain(..).for_each(|(key, value)| {
            let bucket = key.radix_distance(&self.top);
            buckets[bucket].push((key, value));
            self.pointer[value.to_usize().unwrap()] = (
                bucket as u8,
                V::from_usize(buckets[bucket].len() - 1).unwrap(),
            );
        });
    }

    /// Pops the smallest element from the heap. All elements in the first bucket share the
    /// same key, among them the smallest value is returned.
    ///
    /// Returns None if no element is left in the heap
    pub fn pop(&mut self) -> Option<(K, V)> {
        if self.buckets[0].is_empty() {
            self.update();
        }

        let pos = self.buckets[0]
            .iter()
            .enumerate()
            .min_by_key(|(_, (_, v))| *v)
            .map(|(pos, _)| pos)?;

        let (key, val) = self.buckets[0].swap_remove(pos);
        if self.buckets[0].len() > pos {
            self.pointer[self.buckets[0][pos].1.to_usize().unwrap()].1 =
                V::from_usize(pos).unwrap();
        }

        self.top = key;
        self.len -= 1;
        self.pointer[val.to_usize().unwrap()].0 = u8::MAX;

        Some((key, val))
    }

    /// Length of the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the heap empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_heap() {
        let mut heap = DistanceHeap::new(6, 0);
        heap.push(3, 0);
        heap.push(2, 1);
        heap.push(6, 2);
        heap.push(2, 3);
        heap.push(1, 4);
        heap.push(6, 5);

        assert_eq!(heap.len(), 6);

        assert_eq!(heap.pop(), Some((1, 4)));
        assert_eq!(heap.pop(), Some((2, 1)));
        assert_eq!(heap.pop(), Some((2, 3)));
        assert_eq!(heap.pop(), Some((3, 0)));
        assert_eq!(heap.pop(), Some((6, 2)));
        assert_eq!(heap.pop(), Some((6, 5)));
        assert_eq!(heap.pop(), None);

        assert!(heap.is_empty());

        heap.push(7, 1);
        heap.push(7, 2);
        heap.push(9, 3);

        heap.pop();
        assert_eq!(heap.remove(2), Some(7));
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.remove(8), None);
    }

    #[test]
    fn decrease_key() {
        let mut heap = DistanceHeap::new(4, 0);
        heap.push(10, 0);
        heap.push(8, 1);

        heap.push_or_decrease(12, 0);
        assert_eq!(heap.key_of(0), Some(10));

        heap.push_or_decrease(5, 0);
        assert_eq!(heap.key_of(0), Some(5));
        assert_eq!(heap.len(), 2);

        heap.push_or_decrease(9, 3);
        assert!(heap.contains(3));

        assert_eq!(heap.pop(), Some((5, 0)));
        assert_eq!(heap.pop(), Some((8, 1)));
        assert_eq!(heap.pop(), Some((9, 3)));
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.key_of(0), None);
    }

    #[test]
    fn large_keys() {
        let mut heap = DistanceHeap::new(3, 0);
        heap.push(u64::MAX - 1, 0);
        heap.push(1 << 40, 1);
        heap.push(1 << 40, 2);

        assert_eq!(heap.pop(), Some((1 << 40, 1)));
        assert_eq!(heap.pop(), Some((1 << 40, 2)));
        assert_eq!(heap.pop(), Some((u64::MAX - 1, 0)));
    }
}
