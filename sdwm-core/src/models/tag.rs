//! Tag bitmasks.
use serde::{Deserialize, Serialize};

/// Bit `i` set means "visible under tag `i`".
pub type TagMask = u32;

/// Upper bound on the number of tags a mask can represent.
pub const MAX_TAGS: usize = 31;

/// The configured set of tags.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tags {
    count: usize,
}

impl Tags {
    /// Creates the tag set, clamping `count` into `1..=MAX_TAGS`.
    #[must_use]
    pub fn new(count: usize) -> Self {
        let clamped = count.clamp(1, MAX_TAGS);
        if clamped != count {
            tracing::warn!("Tag count {} is out of range, using {}", count, clamped);
        }
        Self { count: clamped }
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Mask with every configured tag set.
    #[must_use]
    pub const fn mask(&self) -> TagMask {
        (1 << self.count) - 1
    }

    /// Drops the bits beyond the configured tag count.
    #[must_use]
    pub const fn clean(&self, mask: TagMask) -> TagMask {
        mask & self.mask()
    }
}

impl Default for Tags {
    fn default() -> Self {
        Self::new(9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_covers_configured_tags() {
        assert_eq!(Tags::new(9).mask(), 0b1_1111_1111);
        assert_eq!(Tags::new(31).mask(), 0x7fff_ffff);
    }

    #[test]
    fn out_of_range_counts_are_clamped() {
        assert_eq!(Tags::new(0).count(), 1);
        assert_eq!(Tags::new(64).count(), MAX_TAGS);
    }

    #[test]
    fn clean_drops_bits_beyond_tag_count() {
        let tags = Tags::new(3);
        assert_eq!(tags.clean(!0), 0b111);
        assert_eq!(tags.clean(0b1010), 0b010);
    }
}
