use std::fmt::Debug;

use crate::models::WindowHandle;
use serde::{Deserialize, Serialize};

use super::window::Handle;

/// What the pointer is currently doing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode<H: Handle> {
    #[serde(bound = "")]
    ResizingWindow(WindowHandle<H>),
    #[serde(bound = "")]
    MovingWindow(WindowHandle<H>),
    #[default]
    Normal,
}
