use super::{Handle, WindowHandle};
use serde::{Deserialize, Serialize};

/// A client asking to change the geometry or stacking of one of its windows. Fields the client
/// did not ask to change are `None`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConfigureRequest<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
    pub border: Option<i32>,
    #[serde(bound = "")]
    pub sibling: Option<WindowHandle<H>>,
    /// Backend specific stacking mode, passed through untouched.
    pub stack_mode: Option<i32>,
}

impl<H: Handle> ConfigureRequest<H> {
    #[must_use]
    pub const fn new(handle: WindowHandle<H>) -> Self {
        Self {
            handle,
            x: None,
            y: None,
            w: None,
            h: None,
            border: None,
            sibling: None,
            stack_mode: None,
        }
    }
}
