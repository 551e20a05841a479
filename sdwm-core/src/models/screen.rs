use super::{Handle, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// A physical output as reported by the display server.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Screen<H: Handle> {
    #[serde(bound = "")]
    pub root: WindowHandle<H>,
    pub output: String,
    pub bbox: BBox,
}

/// Screen Bounding Box
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl<H: Handle> Screen<H> {
    #[must_use]
    pub fn new(bbox: BBox, output: String) -> Self {
        Self {
            root: WindowHandle(H::default()),
            output,
            bbox,
        }
    }
}

impl From<BBox> for Xyhw {
    fn from(bbox: BBox) -> Self {
        Xyhw::new(bbox.x, bbox.y, bbox.width, bbox.height)
    }
}
