use sdwm_core::models::{Handle, Mode};
use std::os::raw::{c_uint, c_ulong};
use x11_dl::xlib;

/// The font cursors shown on the root and while dragging.
#[derive(Clone, Debug)]
pub struct XCursor {
    pub normal: c_ulong,
    pub resize: c_ulong,
    pub move_: c_ulong,
}

// pointer def can be found at https://tronche.com/gui/x/xlib/appendix/b/
const LEFT_PTR: c_uint = 68;
const SIZING: c_uint = 120;
const FLEUR: c_uint = 52;

impl XCursor {
    // `XCreateFontCursor`: https://tronche.com/gui/x/xlib/pixmap-and-cursor/XCreateFontCursor.html
    pub fn new(xlib: &xlib::Xlib, dpy: *mut xlib::Display) -> Self {
        unsafe {
            Self {
                normal: (xlib.XCreateFontCursor)(dpy, LEFT_PTR),
                resize: (xlib.XCreateFontCursor)(dpy, SIZING),
                move_: (xlib.XCreateFontCursor)(dpy, FLEUR),
            }
        }
    }

    /// The cursor to show while the pointer is in `mode`.
    pub const fn for_mode<H: Handle>(&self, mode: &Mode<H>) -> c_ulong {
        match mode {
            Mode::ResizingWindow(_) => self.resize,
            Mode::MovingWindow(_) => self.move_,
            Mode::Normal => self.normal,
        }
    }

    // `XFreeCursor`: https://tronche.com/gui/x/xlib/pixmap-and-cursor/XFreeCursor.html
    pub fn free(&self, xlib: &xlib::Xlib, dpy: *mut xlib::Display) {
        unsafe {
            (xlib.XFreeCursor)(dpy, self.normal);
            (xlib.XFreeCursor)(dpy, self.resize);
            (xlib.XFreeCursor)(dpy, self.move_);
        }
    }
}
