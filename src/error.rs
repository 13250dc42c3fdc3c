//! Construction errors.

use thiserror::Error;

/// Rejected table configuration. Both variants are invalid-argument
/// conditions; no table is built when one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TableError {
    #[error("hash table capacity must be greater than zero, got {capacity}")]
    InvalidCapacity { capacity: usize },
    #[error("hash table load factor must be in range (0, 1], got {load_factor}")]
    InvalidLoadFactor { load_factor: f64 },
}

impl TableError {
    /// Every `TableError` is an invalid-argument condition: construction is
    /// the only fallible operation.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::TableError;

    #[test]
    fn messages_name_the_offending_value() {
        let e = TableError::InvalidCapacity { capacity: 0 };
        assert_eq!(
            e.to_string(),
            "hash table capacity must be greater than zero, got 0"
        );
        let e = TableError::InvalidLoadFactor { load_factor: 1.5 };
        assert!(e.to_string().ends_with("got 1.5"));
    }

    #[test]
    fn every_variant_is_invalid_argument() {
        assert!(TableError::InvalidCapacity { capacity: 0 }.is_invalid_argument());
        assert!(TableError::InvalidLoadFactor { load_factor: 0.0 }.is_invalid_argument());
    }
}
