// Chunk: docs/chunks/buffer_config - Serializable buffer configuration

//! Construction-time settings for a [`TextBuffer`](crate::TextBuffer).
//!
//! The struct derives serde so a host application can embed it in its own
//! configuration file; every field has a default, so partial documents
//! deserialize.

use serde::{Deserialize, Serialize};

use crate::gap_buffer::DEFAULT_PREFERRED_GAP;
use crate::navigator::MAX_EXP_CHAR_LEN;

/// Default hardware tab distance in columns.
pub const DEFAULT_TAB_DISTANCE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Bytes to reserve up front when the expected document size is known.
    pub requested_size: usize,
    /// Spare gap left after each reallocation. Raise it only when large,
    /// frequent edits are expected.
    pub preferred_gap_size: usize,
    /// Columns between tab stops.
    pub tab_distance: usize,
    /// Whether edits are recorded for undo. Buffers holding style data
    /// rather than user text turn this off.
    pub undo_enabled: bool,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            requested_size: 0,
            preferred_gap_size: DEFAULT_PREFERRED_GAP,
            tab_distance: DEFAULT_TAB_DISTANCE,
            undo_enabled: true,
        }
    }
}

impl BufferConfig {
    /// Returns a copy with out-of-range values replaced: a zero gap falls
    /// back to the default and the tab distance is clamped to
    /// `1..=MAX_EXP_CHAR_LEN`.
    pub fn validated(mut self) -> Self {
        if self.preferred_gap_size == 0 {
            self.preferred_gap_size = DEFAULT_PREFERRED_GAP;
        }
        self.tab_distance = self.tab_distance.clamp(1, MAX_EXP_CHAR_LEN);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BufferConfig::default();
        assert_eq!(config.preferred_gap_size, 1024);
        assert_eq!(config.tab_distance, 8);
        assert!(config.undo_enabled);
    }

    #[test]
    fn validated_fixes_out_of_range_values() {
        let config = BufferConfig {
            preferred_gap_size: 0,
            tab_distance: 0,
            ..BufferConfig::default()
        }
        .validated();
        assert_eq!(config.preferred_gap_size, DEFAULT_PREFERRED_GAP);
        assert_eq!(config.tab_distance, 1);

        let wide = BufferConfig {
            tab_distance: 64,
            ..BufferConfig::default()
        }
        .validated();
        assert_eq!(wide.tab_distance, MAX_EXP_CHAR_LEN);
    }
}
