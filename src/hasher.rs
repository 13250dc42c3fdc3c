//! Bucket hash functions: map an integer key onto `[0, buckets)`.

/// Hash function consumed by `HashTable`.
///
/// Implementations must be deterministic and side-effect free: the table
/// relies on `bucket(k, n)` returning the same index every time it is asked,
/// both for lookups and when relocating entries during a resize. For any
/// `buckets > 0` the result must lie in `[0, buckets)`.
pub trait BucketHasher {
    fn bucket(&self, key: i32, buckets: usize) -> usize;
}

/// `|key| mod buckets`. Negative keys fold onto the same buckets as their
/// absolute values; `i32::MIN` is handled without overflow.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuloHasher;

impl BucketHasher for ModuloHasher {
    #[inline]
    fn bucket(&self, key: i32, buckets: usize) -> usize {
        key.unsigned_abs() as usize % buckets
    }
}

impl<F> BucketHasher for F
where
    F: Fn(i32, usize) -> usize,
{
    #[inline]
    fn bucket(&self, key: i32, buckets: usize) -> usize {
        self(key, buckets)
    }
}
