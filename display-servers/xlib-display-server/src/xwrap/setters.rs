//! `XWrap` setters.
use crate::XWrap;
use std::os::raw::c_ulong;
use x11_dl::xlib;

impl XWrap {
    /// Sets the border color of a window.
    // `XSetWindowBorder`: https://tronche.com/gui/x/xlib/window/XSetWindowBorder.html
    pub fn set_window_border_color(&self, window: xlib::Window, color: c_ulong) {
        unsafe {
            (self.xlib.XSetWindowBorder)(self.display, window, color);
        }
    }

    /// Applies the fields of `changes` selected by `unlock` to a window.
    // `XConfigureWindow`: https://tronche.com/gui/x/xlib/window/XConfigureWindow.html
    pub fn set_window_config(
        &self,
        window: xlib::Window,
        mut changes: xlib::XWindowChanges,
        unlock: u32,
    ) {
        unsafe { (self.xlib.XConfigureWindow)(self.display, window, unlock, &mut changes) };
    }

    /// Sets the border width of a window.
    pub fn set_window_border_width(&self, window: xlib::Window, border_width: i32) {
        let mut changes: xlib::XWindowChanges = unsafe { std::mem::zeroed() };
        changes.border_width = border_width;
        self.set_window_config(window, changes, u32::from(xlib::CWBorderWidth));
    }

    /// Gives input focus to a window. Focus reverts to the pointer root when it goes away.
    // `XSetInputFocus`: https://tronche.com/gui/x/xlib/input/XSetInputFocus.html
    pub fn set_input_focus(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XSetInputFocus)(
                self.display,
                window,
                xlib::RevertToPointerRoot,
                xlib::CurrentTime,
            );
        }
    }
}
