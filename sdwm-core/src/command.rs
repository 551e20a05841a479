use crate::layouts::Layout;
use crate::models::TagMask;
use serde::{Deserialize, Serialize};

/// Actions a key or mouse binding can trigger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Command {
    /// Focus the next (positive) or previous (negative) visible window.
    FocusStack(i32),
    /// Change the number of windows in the master area.
    IncMaster(i32),
    /// Values below 1.0 change the master fraction by that amount, larger values set it to
    /// `value - 1.0`.
    SetMasterFactor(f32),
    /// Move the selected window into the master area.
    Zoom,
    View(TagMask),
    ToggleView(TagMask),
    Tag(TagMask),
    ToggleTag(TagMask),
    KillClient,
    /// `None` toggles between the two layout slots.
    SetLayout(Option<Layout>),
    ToggleFloating,
    ToggleFullscreen,
    FocusMonitor(i32),
    TagMonitor(i32),
    MoveMouse,
    ResizeMouse,
    Quit,
}
