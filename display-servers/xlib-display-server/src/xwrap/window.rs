//! Xlib calls related to a window.
use super::{CLIENT_EVENT_MASK, on_error_from_xlib, on_error_from_xlib_dummy};
use crate::{XWrap, XlibWindowHandle};
use sdwm_core::models::{ConfigureRequest, Window, WindowHandle, Xyhw};
use std::os::raw::c_long;
use x11_dl::xlib;

impl XWrap {
    /// Builds the window we are asked to manage. Returns `None` for override redirect windows
    /// and windows that are already gone.
    #[must_use]
    pub fn setup_window(&self, window: xlib::Window) -> Option<Window<XlibWindowHandle>> {
        let attrs = match self.get_window_attrs(window) {
            Ok(attrs) if attrs.override_redirect == 0 => attrs,
            _ => return None,
        };
        let handle = WindowHandle(XlibWindowHandle(window));
        let geometry = Xyhw::new(attrs.x, attrs.y, attrs.width, attrs.height);
        let mut w = Window::new(handle, geometry, attrs.border_width);
        w.transient = self
            .get_transient_for(window)
            .map(|trans| WindowHandle(XlibWindowHandle(trans)));
        Some(w)
    }

    /// Applies our border to a window we started managing and listens to its events.
    pub fn setup_managed_window(&self, window: xlib::Window, border_width: i32) {
        self.set_window_border_width(window, border_width);
        self.set_window_border_color(window, self.colors.normal);
        self.subscribe_to_event(window, CLIENT_EVENT_MASK);
    }

    /// Hands a window that still exists back as we found it.
    // `XGrabServer`: https://tronche.com/gui/x/xlib/window-and-session-manager/XGrabServer.html
    // `XUngrabServer`: https://tronche.com/gui/x/xlib/window-and-session-manager/XUngrabServer.html
    pub fn teardown_managed_window(&self, window: xlib::Window, border_width: i32) {
        unsafe {
            (self.xlib.XGrabServer)(self.display);
            (self.xlib.XSetErrorHandler)(Some(on_error_from_xlib_dummy));
        }
        self.subscribe_to_event(window, xlib::NoEventMask);
        self.set_window_border_width(window, border_width);
        self.ungrab_buttons(window);
        self.sync();
        unsafe {
            (self.xlib.XSetErrorHandler)(Some(on_error_from_xlib));
            (self.xlib.XUngrabServer)(self.display);
        }
    }

    /// Moves, resizes and sets the border of a window, then tells the client.
    pub fn configure_window(&self, window: xlib::Window, geometry: &Xyhw, border_width: i32) {
        let changes = xlib::XWindowChanges {
            x: geometry.x(),
            y: geometry.y(),
            width: geometry.w(),
            height: geometry.h(),
            border_width,
            sibling: 0,
            stack_mode: 0,
        };
        let unlock = xlib::CWX | xlib::CWY | xlib::CWWidth | xlib::CWHeight | xlib::CWBorderWidth;
        self.set_window_config(window, changes, u32::from(unlock));
        self.send_configure_notify(window, geometry, border_width);
        self.sync();
    }

    /// Send a synthetic `XConfigureEvent` for a window to X.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    pub fn send_configure_notify(&self, window: xlib::Window, geometry: &Xyhw, border_width: i32) {
        let mut configure_event: xlib::XConfigureEvent = unsafe { std::mem::zeroed() };
        configure_event.type_ = xlib::ConfigureNotify;
        configure_event.display = self.display;
        configure_event.event = window;
        configure_event.window = window;
        configure_event.x = geometry.x();
        configure_event.y = geometry.y();
        configure_event.width = geometry.w();
        configure_event.height = geometry.h();
        configure_event.border_width = border_width;
        configure_event.above = 0;
        configure_event.override_redirect = xlib::False;
        let mut event: xlib::XEvent = configure_event.into();
        unsafe {
            (self.xlib.XSendEvent)(
                self.display,
                window,
                xlib::False,
                xlib::StructureNotifyMask,
                &mut event,
            );
        }
    }

    /// Applies a configure request of a window we do not manage as it was asked.
    pub fn forward_configure(&self, request: &ConfigureRequest<XlibWindowHandle>) {
        let WindowHandle(XlibWindowHandle(window)) = request.handle;
        let mut unlock: u16 = 0;
        let mut changes: xlib::XWindowChanges = unsafe { std::mem::zeroed() };
        if let Some(x) = request.x {
            changes.x = x;
            unlock |= xlib::CWX;
        }
        if let Some(y) = request.y {
            changes.y = y;
            unlock |= xlib::CWY;
        }
        if let Some(w) = request.w {
            changes.width = w;
            unlock |= xlib::CWWidth;
        }
        if let Some(h) = request.h {
            changes.height = h;
            unlock |= xlib::CWHeight;
        }
        if let Some(border) = request.border {
            changes.border_width = border;
            unlock |= xlib::CWBorderWidth;
        }
        if let Some(WindowHandle(XlibWindowHandle(sibling))) = request.sibling {
            changes.sibling = sibling;
            unlock |= xlib::CWSibling;
        }
        if let Some(stack_mode) = request.stack_mode {
            changes.stack_mode = stack_mode;
            unlock |= xlib::CWStackMode;
        }
        self.set_window_config(window, changes, u32::from(unlock));
        self.sync();
    }

    // `XMoveWindow`: https://tronche.com/gui/x/xlib/window/XMoveWindow.html
    pub fn move_window(&self, window: xlib::Window, x: i32, y: i32) {
        unsafe {
            (self.xlib.XMoveWindow)(self.display, window, x, y);
        }
    }

    // `XMoveResizeWindow`: https://tronche.com/gui/x/xlib/window/XMoveResizeWindow.html
    pub fn move_resize_window(&self, window: xlib::Window, geometry: &Xyhw) {
        unsafe {
            (self.xlib.XMoveResizeWindow)(
                self.display,
                window,
                geometry.x(),
                geometry.y(),
                geometry.w().max(1) as u32,
                geometry.h().max(1) as u32,
            );
        }
    }

    /// Raise a window.
    // `XRaiseWindow`: https://tronche.com/gui/x/xlib/window/XRaiseWindow.html
    pub fn move_to_top(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XRaiseWindow)(self.display, window);
        }
    }

    /// Places a window directly below its sibling.
    pub fn stack_below(&self, window: xlib::Window, sibling: xlib::Window) {
        let mut changes: xlib::XWindowChanges = unsafe { std::mem::zeroed() };
        changes.sibling = sibling;
        changes.stack_mode = xlib::Below;
        let unlock = xlib::CWSibling | xlib::CWStackMode;
        self.set_window_config(window, changes, u32::from(unlock));
    }

    // `XMapWindow`: https://tronche.com/gui/x/xlib/window/XMapWindow.html
    pub fn map_window(&self, window: xlib::Window) {
        unsafe { (self.xlib.XMapWindow)(self.display, window) };
    }

    /// Kills the client owning a window, along with all its resources.
    // `XSetCloseDownMode`: https://tronche.com/gui/x/xlib/display/XSetCloseDownMode.html
    // `XKillClient`: https://tronche.com/gui/x/xlib/window-and-session-manager/XKillClient.html
    pub fn kill_window(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XGrabServer)(self.display);
            (self.xlib.XSetErrorHandler)(Some(on_error_from_xlib_dummy));
            (self.xlib.XSetCloseDownMode)(self.display, xlib::DestroyAll);
            (self.xlib.XKillClient)(self.display, window);
            self.sync();
            (self.xlib.XSetErrorHandler)(Some(on_error_from_xlib));
            (self.xlib.XUngrabServer)(self.display);
        }
    }

    /// Discards the pointer-enter events already queued.
    // `XCheckMaskEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XCheckMaskEvent.html
    pub fn drain_enter_events(&self) {
        self.sync();
        let mut event: xlib::XEvent = unsafe { std::mem::zeroed() };
        let mask: c_long = xlib::EnterWindowMask;
        while unsafe { (self.xlib.XCheckMaskEvent)(self.display, mask, &mut event) } != 0 {}
    }
}
