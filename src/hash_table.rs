//! HashTable: separate chaining over a growable array of buckets.

use crate::error::TableError;
use crate::hasher::{BucketHasher, ModuloHasher};
use core::fmt;
use hashbrown::HashSet;
use log::{debug, trace, warn};

/// Factor applied to the bucket count on every resize.
pub const GROWTH_COEFFICIENT: usize = 2;
pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;
/// Most times `GROWTH_COEFFICIENT` is applied within one resize.
pub const MAX_GROWTH_STEPS: u32 = 8;

#[derive(Debug, Clone)]
struct Entry {
    key: i32,
    value: String,
}

/// Chain of entries sharing a bucket index; scanned linearly.
type Bucket = Vec<Entry>;

#[derive(Clone)]
pub struct HashTable<H = ModuloHasher> {
    hasher: H,
    buckets: Vec<Bucket>,
    num_keys: usize,
    load_factor: f64,
}

#[inline]
fn slot<H: BucketHasher>(hasher: &H, key: i32, buckets: usize) -> usize {
    let i = hasher.bucket(key, buckets);
    debug_assert!(i < buckets, "hasher returned {i} for {buckets} buckets");
    i % buckets
}

impl HashTable {
    /// Build a table with `capacity` empty buckets using `ModuloHasher`.
    ///
    /// Fails when `capacity == 0` or `load_factor` is not in `(0, 1]`.
    pub fn new(capacity: usize, load_factor: f64) -> Result<Self, TableError> {
        Self::with_hasher(capacity, load_factor, ModuloHasher)
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, ModuloHasher)
    }
}

fn empty_buckets(n: usize) -> Vec<Bucket> {
    (0..n).map(|_| Bucket::new()).collect()
}

fn try_empty_buckets(n: usize) -> Option<Vec<Bucket>> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(n).ok()?;
    buckets.resize_with(n, Bucket::new);
    Some(buckets)
}

impl<H: BucketHasher> HashTable<H> {
    pub fn with_hasher(capacity: usize, load_factor: f64, hasher: H) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity { capacity });
        }
        // Written as a negated range check so NaN is rejected too.
        if !(load_factor > 0.0 && load_factor <= 1.0) {
            return Err(TableError::InvalidLoadFactor { load_factor });
        }
        Ok(Self::from_parts(capacity, load_factor, hasher))
    }

    /// Arguments must already satisfy the construction checks.
    fn from_parts(capacity: usize, load_factor: f64, hasher: H) -> Self {
        trace!("hash table created: capacity={capacity} load_factor={load_factor}");
        Self {
            hasher,
            buckets: empty_buckets(capacity),
            num_keys: 0,
            load_factor,
        }
    }

    fn index(&self, key: i32) -> usize {
        slot(&self.hasher, key, self.buckets.len())
    }

    pub fn search(&self, key: i32) -> Option<&str> {
        self.buckets[self.index(key)]
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.search(key).is_some()
    }

    /// Insert `key -> value`, overwriting the value in place when the key is
    /// already present. A new key may trigger a full rehash before returning.
    pub fn put(&mut self, key: i32, value: impl Into<String>) {
        let idx = self.index(key);
        let bucket = &mut self.buckets[idx];
        if let Some(entry) = bucket.iter_mut().find(|e| e.key == key) {
            entry.value = value.into();
            return;
        }
        bucket.push(Entry {
            key,
            value: value.into(),
        });
        self.num_keys += 1;

        if self.at_threshold(self.buckets.len()) {
            self.grow();
        }
    }

    /// Remove `key`, handing back its value. Capacity is left untouched.
    pub fn remove(&mut self, key: i32) -> Option<String> {
        let idx = self.index(key);
        let bucket = &mut self.buckets[idx];
        let pos = bucket.iter().position(|e| e.key == key)?;
        let entry = bucket.remove(pos);
        self.num_keys -= 1;
        Some(entry.value)
    }

    /// Drop every entry; the bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.num_keys = 0;
    }

    fn at_threshold(&self, buckets: usize) -> bool {
        self.num_keys as f64 / buckets as f64 >= self.load_factor
    }

    /// Multiply capacity by `GROWTH_COEFFICIENT` until the table is below its
    /// load factor, at most `MAX_GROWTH_STEPS` times, then rebuild once.
    /// Falls back to a single step if the larger array cannot be reserved.
    fn grow(&mut self) {
        let old = self.buckets.len();
        let single = old.saturating_mul(GROWTH_COEFFICIENT);
        let mut target = single;
        let mut steps = 1;
        while steps < MAX_GROWTH_STEPS && self.at_threshold(target) {
            target = target.saturating_mul(GROWTH_COEFFICIENT);
            steps += 1;
        }
        let fresh = match try_empty_buckets(target) {
            Some(fresh) => fresh,
            None => {
                warn!("hash table could not reserve {target} buckets, growing to {single}");
                empty_buckets(single)
            }
        };
        let new = fresh.len();
        self.rehash(fresh);
        debug!(
            "hash table resized: {old} -> {new} buckets, {} keys",
            self.num_keys
        );
    }

    /// Relocate every entry into `fresh`, then swap it in. The live array is
    /// never rewritten in place.
    fn rehash(&mut self, mut fresh: Vec<Bucket>) {
        let buckets = fresh.len();
        for entry in core::mem::take(&mut self.buckets).into_iter().flatten() {
            let i = slot(&self.hasher, entry.key, buckets);
            fresh[i].push(entry);
        }
        self.buckets = fresh;
    }
}

impl<H> HashTable<H> {
    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    pub fn len(&self) -> usize {
        self.num_keys
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    pub fn keys(&self) -> HashSet<i32> {
        let mut keys = HashSet::with_capacity(self.num_keys);
        keys.extend(self.iter().map(|(k, _)| k));
        keys
    }

    /// All values in bucket order, then chain order within a bucket.
    pub fn values(&self) -> Vec<&str> {
        self.iter().map(|(_, v)| v).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .map(|e| (e.key, e.value.as_str()))
    }
}

impl<H> fmt::Debug for HashTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
impl<H: BucketHasher> HashTable<H> {
    /// Bucket currently holding `key`, found by scanning every chain.
    pub(crate) fn locate(&self, key: i32) -> Option<usize> {
        self.buckets
            .iter()
            .position(|b| b.iter().any(|e| e.key == key))
    }

    pub(crate) fn hasher_index(&self, key: i32) -> usize {
        self.index(key)
    }

    /// Panics if any structural invariant is broken.
    pub(crate) fn assert_consistent(&self) {
        assert!(!self.buckets.is_empty());
        let stored: usize = self.buckets.iter().map(Vec::len).sum();
        assert_eq!(stored, self.num_keys, "size must match stored entries");
        for (i, bucket) in self.buckets.iter().enumerate() {
            for e in bucket {
                assert_eq!(self.index(e.key), i, "key {} in wrong bucket", e.key);
            }
        }
        assert_eq!(self.keys().len(), self.num_keys, "keys must be unique");
    }
}
