//! Layout policies a monitor can arrange its windows with.
use crate::models::Xyhw;
use serde::{Deserialize, Serialize};

mod monocle;
mod tile;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Tile,
    Monocle,
    /// No automatic placement, windows keep the geometry they are given.
    Floating,
}

impl Layout {
    /// Returns true for the layout that never moves windows on its own.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Floating)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Tile => "[]=",
            Self::Monocle => "[M]",
            Self::Floating => "><>",
        }
    }

    /// Computes one outer rectangle per tiled window, in insertion order.
    ///
    /// Returns `None` for the floating layout.
    #[must_use]
    pub fn update(
        self,
        work: &Xyhw,
        master_fraction: f32,
        master_count: i32,
        count: usize,
    ) -> Option<Vec<Xyhw>> {
        match self {
            Self::Tile => Some(tile::update(work, master_fraction, master_count, count)),
            Self::Monocle => Some(monocle::update(work, count)),
            Self::Floating => None,
        }
    }
}
