//! chain-table: a separate-chaining hash table mapping `i32` keys to
//! `String` values, growing by a fixed factor once occupancy reaches a
//! configured load factor.
//!
//! Internal Design:
//!
//! Summary
//! - `HashTable<H>` owns a `Vec` of buckets; each bucket is a `Vec` of
//!   key/value entries scanned linearly. There is no nested map: lookup,
//!   relocation and growth are all explicit.
//! - `BucketHasher` is the hash-function seam: `(key, bucket_count)` to an
//!   index in `[0, bucket_count)`. `ModuloHasher` is the default; any
//!   `Fn(i32, usize) -> usize` also qualifies.
//!
//! Constraints
//! - Single-threaded and synchronous; no interior mutability, so `&mut self`
//!   already serializes every mutation.
//! - `capacity >= 1` and `0 < load_factor <= 1`, checked once at
//!   construction. Every other operation is infallible.
//! - Each key lives in exactly one bucket: the one its hasher selects for
//!   the current capacity.
//! - After `put` returns, `len / capacity < load_factor` whenever the load
//!   factor is above `GROWTH_COEFFICIENT ^ -MAX_GROWTH_STEPS` (1/256).
//!
//! Growth
//! - Only a `put` that adds a new key can grow the table. Overwrites leave
//!   both size and capacity alone.
//! - Capacity is multiplied by `GROWTH_COEFFICIENT` until the ratio falls
//!   below the threshold, at most `MAX_GROWTH_STEPS` times per resize.
//!   All entries are then moved into a freshly built bucket array which
//!   replaces the old one in a single assignment. If that array cannot be
//!   reserved, the table grows by one step instead.
//! - Removal never shrinks the table.
//!
//! Notes and non-goals
//! - Keys and values are fixed to `i32` and `String`; no generic map API.
//! - No persistence and no concurrent access.
//! - The library logs through the `log` facade (resize at `debug`,
//!   construction at `trace`) and never installs a logger itself.

mod error;
mod hash_table;
mod hash_table_proptest;
mod hasher;

// Public surface
pub use error::TableError;
pub use hash_table::{
    HashTable, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, GROWTH_COEFFICIENT, MAX_GROWTH_STEPS,
};
pub use hasher::{BucketHasher, ModuloHasher};
