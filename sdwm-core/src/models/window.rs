//! Window Information
#![allow(clippy::module_name_repetitions)]

use std::cmp;
use std::fmt::Debug;

use crate::models::TagMask;
use crate::models::Xyhw;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Default + Send + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Using generics here with serde derive macros causes some wierd behaviour with the compiler, so
/// as suggested by [this `serde` issue][serde-issue], just adding `#[serde(bound = "")]`
/// everywhere the generic is declared fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// How a requested geometry is kept on screen before it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampMode {
    /// The pointer is dragging the window. It may leave its monitor but must stay reachable
    /// inside the whole screen.
    Interactive,
    /// Placement by a layout or a command. The window may not start past, or end before, the
    /// work area of its monitor.
    Layout,
}

/// Store Window information.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Window<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    #[serde(bound = "")]
    pub transient: Option<WindowHandle<H>>,
    /// Inner geometry, the border is drawn around it.
    pub geometry: Xyhw,
    /// Geometry before the last resize.
    pub old_geometry: Xyhw,
    pub border: i32,
    /// Border the window had before we managed it, or before it went fullscreen.
    pub old_border: i32,
    pub tags: TagMask,
    pub floating: bool,
    /// Floating state to return to when leaving fullscreen.
    pub old_floating: bool,
    pub fullscreen: bool,
}

impl<H: Handle> Window<H> {
    #[must_use]
    pub fn new(handle: WindowHandle<H>, geometry: Xyhw, border: i32) -> Self {
        Self {
            handle,
            transient: None,
            geometry,
            old_geometry: geometry,
            border,
            old_border: border,
            tags: 0,
            floating: false,
            old_floating: false,
            fullscreen: false,
        }
    }

    /// Width including the border on both sides.
    #[must_use]
    pub const fn outer_width(&self) -> i32 {
        self.geometry.w() + 2 * self.border
    }

    /// Height including the border on both sides.
    #[must_use]
    pub const fn outer_height(&self) -> i32 {
        self.geometry.h() + 2 * self.border
    }

    #[must_use]
    pub const fn has_tag(&self, mask: TagMask) -> bool {
        self.tags & mask != 0
    }

    /// Clamps `geometry` for this window. `screen` is the whole virtual screen and `work` the
    /// work area of the window's monitor.
    ///
    /// Returns whether the clamped geometry differs from the current one.
    pub fn apply_size_hints(
        &self,
        geometry: &mut Xyhw,
        mode: ClampMode,
        screen: &Xyhw,
        work: &Xyhw,
    ) -> bool {
        geometry.set_w(cmp::max(1, geometry.w()));
        geometry.set_h(cmp::max(1, geometry.h()));
        match mode {
            ClampMode::Interactive => {
                if geometry.x() > screen.w() {
                    geometry.set_x(screen.w() - self.outer_width());
                }
                if geometry.y() > screen.h() {
                    geometry.set_y(screen.h() - self.outer_height());
                }
                if geometry.x() + geometry.w() + 2 * self.border < 0 {
                    geometry.set_x(0);
                }
                if geometry.y() + geometry.h() + 2 * self.border < 0 {
                    geometry.set_y(0);
                }
            }
            ClampMode::Layout => {
                if geometry.x() >= work.right() {
                    geometry.set_x(work.right() - self.outer_width());
                }
                if geometry.y() >= work.bottom() {
                    geometry.set_y(work.bottom() - self.outer_height());
                }
                if geometry.x() + geometry.w() + 2 * self.border <= work.x() {
                    geometry.set_x(work.x());
                }
                if geometry.y() + geometry.h() + 2 * self.border <= work.y() {
                    geometry.set_y(work.y());
                }
            }
        }
        *geometry != self.geometry
    }
}
