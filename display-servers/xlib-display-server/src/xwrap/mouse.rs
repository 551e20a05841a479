//! Xlib calls related to a mouse.
use super::{BUTTONMASK, MOUSEMASK};
use crate::{XWrap, XlibWindowHandle};
use sdwm_core::models::Mode;
use std::os::raw::c_int;
use x11_dl::xlib;

impl XWrap {
    /// Grabs the mouse clicks of a window. An unfocused window grabs every button so the click
    /// that focuses it can be replayed afterwards.
    // `XGrabButton`: https://tronche.com/gui/x/xlib/input/XGrabButton.html
    pub fn grab_mouse_clicks(&mut self, handle: xlib::Window, is_focused: bool) {
        self.update_numlock_mask();
        self.ungrab_buttons(handle);
        if !is_focused {
            unsafe {
                (self.xlib.XGrabButton)(
                    self.display,
                    xlib::AnyButton as u32,
                    xlib::AnyModifier,
                    handle,
                    xlib::False,
                    BUTTONMASK as u32,
                    xlib::GrabModeSync,
                    xlib::GrabModeSync,
                    0,
                    0,
                );
            }
        }
        for (modifier, button) in &self.buttons {
            self.grab_buttons(handle, button.number(), u32::from(modifier.bits()));
        }
    }

    /// Grabs the button with the modifier for a window, with and without the lock modifiers.
    pub fn grab_buttons(&self, window: xlib::Window, button: u32, modifiers: u32) {
        for m in self.lock_variants(modifiers) {
            unsafe {
                (self.xlib.XGrabButton)(
                    self.display,
                    button,
                    m,
                    window,
                    xlib::False,
                    BUTTONMASK as u32,
                    xlib::GrabModeAsync,
                    xlib::GrabModeSync,
                    0,
                    0,
                );
            }
        }
    }

    /// Cleans all currently grabbed buttons of a window.
    // `XUngrabButton`: https://tronche.com/gui/x/xlib/input/XUngrabButton.html
    pub fn ungrab_buttons(&self, handle: xlib::Window) {
        unsafe {
            (self.xlib.XUngrabButton)(
                self.display,
                xlib::AnyButton as u32,
                xlib::AnyModifier,
                handle,
            );
        }
    }

    /// Grabs the cursor and shows the cursor of `mode`. Returns false if the grab failed.
    // `XGrabPointer`: https://tronche.com/gui/x/xlib/input/XGrabPointer.html
    pub fn grab_pointer(&self, mode: &Mode<XlibWindowHandle>) -> bool {
        let status = unsafe {
            (self.xlib.XGrabPointer)(
                self.display,
                self.root,
                xlib::False,
                MOUSEMASK as u32,
                xlib::GrabModeAsync,
                xlib::GrabModeAsync,
                0,
                self.cursors.for_mode(mode),
                xlib::CurrentTime,
            )
        };
        status == xlib::GrabSuccess
    }

    /// Ungrab the cursor.
    // `XUngrabPointer`: https://tronche.com/gui/x/xlib/input/XUngrabPointer.html
    pub fn ungrab_pointer(&self) {
        unsafe {
            (self.xlib.XUngrabPointer)(self.display, xlib::CurrentTime);
        }
    }

    /// Move the cursor to a point relative to a window.
    // `XWarpPointer`: https://tronche.com/gui/x/xlib/input/XWarpPointer.html
    pub fn move_cursor_to_point(&self, window: xlib::Window, point: (i32, i32)) {
        let none: c_int = 0;
        unsafe {
            (self.xlib.XWarpPointer)(
                self.display,
                0,
                window,
                none,
                none,
                0,
                0,
                point.0,
                point.1,
            );
        }
    }

    /// Lets the click that was frozen by the grab of an unfocused window through to it.
    // `XAllowEvents`: https://linux.die.net/man/3/xallowevents
    pub fn replay_click(&self) {
        unsafe { (self.xlib.XAllowEvents)(self.display, xlib::ReplayPointer, xlib::CurrentTime) };
    }
}
