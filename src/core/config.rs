//! Board configuration.
//!
//! Callers configure a board at construction time with a `BoardConfig`.
//! The only rule-relevant parameter is the size; `scan_order` controls the
//! order in which possible moves are enumerated.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Smallest playable board (4x4).
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest playable board (12x12).
pub const MAX_BOARD_SIZE: usize = 12;

/// Standard Othello board (8x8).
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Order in which empty cells are visited when enumerating possible moves.
///
/// Only the order of the returned positions changes, never membership.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanOrder {
    /// Rows outer, columns inner: positions come out ascending.
    #[default]
    RowMajor,
    /// Columns outer, rows inner.
    ColumnMajor,
}

/// Board construction parameters.
///
/// ```
/// use reversi_engine::core::{BoardConfig, ScanOrder};
///
/// let config = BoardConfig::new(10).with_scan_order(ScanOrder::ColumnMajor);
/// assert!(config.validate().is_ok());
/// assert!(BoardConfig::new(7).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows and columns. Even, within `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]`.
    pub size: usize,

    /// Enumeration order for possible moves.
    pub scan_order: ScanOrder,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            scan_order: ScanOrder::default(),
        }
    }
}

impl BoardConfig {
    /// Create a config for a `size x size` board with default scan order.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the possible-move enumeration order.
    #[must_use]
    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Check the size constraints.
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_size(self.size)
    }
}

/// Check that `size` is even and within `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]`.
pub fn validate_size(size: usize) -> Result<(), EngineError> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) || size % 2 != 0 {
        return Err(EngineError::InvalidSize { size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.size, 8);
        assert_eq!(config.scan_order, ScanOrder::RowMajor);
        assert_eq!(config.cell_count(), 64);
    }

    #[test]
    fn test_valid_sizes() {
        for size in [4, 6, 8, 10, 12] {
            assert!(validate_size(size).is_ok(), "size {size} should be valid");
        }
    }

    #[test]
    fn test_invalid_sizes() {
        for size in [0, 1, 2, 3, 5, 7, 9, 11, 13, 14, 100] {
            assert_eq!(
                validate_size(size),
                Err(EngineError::InvalidSize { size }),
                "size {size} should be rejected"
            );
        }
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new(6).with_scan_order(ScanOrder::ColumnMajor);
        assert_eq!(config.size, 6);
        assert_eq!(config.scan_order, ScanOrder::ColumnMajor);
    }

    #[test]
    fn test_config_serialization() {
        let config = BoardConfig::new(12).with_scan_order(ScanOrder::ColumnMajor);
        let json = serde_json::to_string(&config).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
