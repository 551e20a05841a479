//! A wrapper around calls to xlib and X related functions.
// We allow this so that extern "C" functions are not flagged as confusing. The current placement
// allows for easy reading.
#![allow(clippy::items_after_statements)]
// We allow this because _y_ and _x_ are intentionally similar. Changing it makes the code noisy.
#![allow(clippy::similar_names)]
use super::xcursor::XCursor;
use sdwm_core::config::{ClickTarget, Config};
use sdwm_core::utils::modmask_lookup::{Button, ModMask};
use sdwm_core::utils::xkeysym_lookup::XKeysym;
use sdwm_core::SdwmError;
use std::ffi::CString;
use std::os::raw::{c_int, c_long, c_uint, c_ulong};
use std::ptr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use x11_dl::xinerama;
use x11_dl::xlib;

mod getters;
mod keyboard;
mod mouse;
mod setters;
mod window;

type WindowStateConst = c_long;
pub const ICONIC_STATE: WindowStateConst = 3;

pub const ROOT_EVENT_MASK: c_long = xlib::SubstructureRedirectMask
    | xlib::SubstructureNotifyMask
    | xlib::ButtonPressMask
    | xlib::PointerMotionMask
    | xlib::EnterWindowMask
    | xlib::LeaveWindowMask
    | xlib::StructureNotifyMask
    | xlib::PropertyChangeMask;

pub const CLIENT_EVENT_MASK: c_long = xlib::EnterWindowMask
    | xlib::FocusChangeMask
    | xlib::PropertyChangeMask
    | xlib::StructureNotifyMask;

const BUTTONMASK: c_long = xlib::ButtonPressMask | xlib::ButtonReleaseMask;
const MOUSEMASK: c_long = BUTTONMASK | xlib::PointerMotionMask;

const X_CONFIGUREWINDOW: u8 = 12;
const X_GRABBUTTON: u8 = 28;
const X_GRABKEY: u8 = 33;
const X_SETINPUTFOCUS: u8 = 42;
const X_COPYAREA: u8 = 62;
const X_POLYSEGMENT: u8 = 66;
const X_POLYFILLRECTANGLE: u8 = 70;
const X_POLYTEXT8: u8 = 74;

/// Set by the startup error handler when selecting substructure redirect on the root fails.
static ANOTHER_WM: AtomicBool = AtomicBool::new(false);
/// The handler Xlib had installed before ours, fatal errors are passed on to it.
static DEFAULT_ERROR_HANDLER: OnceLock<ErrorHandler> = OnceLock::new();

type ErrorHandler =
    Option<unsafe extern "C" fn(*mut xlib::Display, *mut xlib::XErrorEvent) -> c_int>;

/// Ignores errors caused by windows that went away before we got to them. Anything else is
/// handed to the default Xlib handler, which may exit.
pub extern "C" fn on_error_from_xlib(
    display: *mut xlib::Display,
    er: *mut xlib::XErrorEvent,
) -> c_int {
    let err = unsafe { *er };
    let ec = err.error_code;
    let rc = err.request_code;
    let ba = ec == xlib::BadAccess;
    let bd = ec == xlib::BadDrawable;
    let bm = ec == xlib::BadMatch;

    if ec == xlib::BadWindow
        || (rc == X_CONFIGUREWINDOW && bm)
        || (rc == X_GRABBUTTON && ba)
        || (rc == X_GRABKEY && ba)
        || (rc == X_SETINPUTFOCUS && bm)
        || (rc == X_COPYAREA && bd)
        || (rc == X_POLYSEGMENT && bd)
        || (rc == X_POLYFILLRECTANGLE && bd)
        || (rc == X_POLYTEXT8 && bd)
    {
        return 0;
    }
    tracing::error!("Fatal X error, request code={}, error code={}", rc, ec);
    match DEFAULT_ERROR_HANDLER.get() {
        Some(Some(handler)) => unsafe { handler(display, er) },
        _ => 0,
    }
}

pub extern "C" fn on_error_from_xlib_dummy(
    _: *mut xlib::Display,
    _: *mut xlib::XErrorEvent,
) -> c_int {
    0
}

extern "C" fn on_startup_error(_: *mut xlib::Display, _: *mut xlib::XErrorEvent) -> c_int {
    ANOTHER_WM.store(true, Ordering::SeqCst);
    -1
}

/// The two border colors, as allocated pixels.
pub struct Colors {
    pub normal: c_ulong,
    pub selected: c_ulong,
}

#[derive(Debug, Clone)]
pub enum XlibError {
    FailedStatus,
    RootWindowNotFound,
}

/// Contains Xserver information and origins.
pub struct XWrap {
    xlib: xlib::Xlib,
    xinerama: Option<xinerama::Xlib>,
    display: *mut xlib::Display,
    screen: c_int,
    root: xlib::Window,
    wm_state: xlib::Atom,
    cursors: XCursor,
    pub colors: Colors,
    pub numlock_mask: c_uint,
    keys: Vec<(ModMask, XKeysym)>,
    buttons: Vec<(ModMask, Button)>,
}

impl XWrap {
    /// Opens the display and becomes its window manager.
    ///
    /// # Errors
    ///
    /// Will error if the display cannot be opened, another window manager already selected
    /// substructure redirection on the root, or a border color cannot be allocated.
    // `XOpenDisplay`: https://tronche.com/gui/x/xlib/display/opening.html
    // `XDefaultRootWindow`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultRootWindow
    // `XSetErrorHandler`: https://tronche.com/gui/x/xlib/event-handling/protocol-errors/XSetErrorHandler.html
    // `XSelectInput`: https://tronche.com/gui/x/xlib/event-handling/XSelectInput.html
    pub fn new(config: &impl Config) -> Result<Self, SdwmError> {
        let xlib = xlib::Xlib::open().map_err(|err| {
            tracing::error!("Unable to load Xlib: {}", err);
            SdwmError::CannotOpenDisplay
        })?;
        let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
        if display.is_null() {
            return Err(SdwmError::CannotOpenDisplay);
        }
        let xinerama = xinerama::Xlib::open().ok();
        let screen = unsafe { (xlib.XDefaultScreen)(display) };
        let root = unsafe { (xlib.XRootWindow)(display, screen) };

        // Only one client may select substructure redirection on the root.
        ANOTHER_WM.store(false, Ordering::SeqCst);
        unsafe {
            let default = (xlib.XSetErrorHandler)(Some(on_startup_error));
            DEFAULT_ERROR_HANDLER.get_or_init(|| default);
            (xlib.XSelectInput)(display, root, xlib::SubstructureRedirectMask);
            (xlib.XSync)(display, xlib::False);
            (xlib.XSetErrorHandler)(Some(on_error_from_xlib));
            (xlib.XSync)(display, xlib::False);
        }
        if ANOTHER_WM.load(Ordering::SeqCst) {
            unsafe { (xlib.XCloseDisplay)(display) };
            return Err(SdwmError::AnotherWindowManager);
        }

        let name = CString::new("WM_STATE").unwrap_or_default();
        let wm_state = unsafe { (xlib.XInternAtom)(display, name.as_ptr(), xlib::False) };
        let cursors = XCursor::new(&xlib, display);

        let mut xw = Self {
            xlib,
            xinerama,
            display,
            screen,
            root,
            wm_state,
            cursors,
            colors: Colors {
                normal: 0,
                selected: 0,
            },
            numlock_mask: 0,
            keys: config
                .key_bindings()
                .iter()
                .map(|k| (k.modifier, k.key))
                .collect(),
            buttons: config
                .mouse_bindings()
                .iter()
                .filter(|b| b.click == ClickTarget::ClientWindow)
                .map(|b| (b.modifier, b.button))
                .collect(),
        };
        if let Err(err) = xw.load_colors(config) {
            xw.close();
            return Err(err);
        }
        Ok(xw)
    }

    /// Selects the root events, sets the root cursor and grabs the key bindings.
    // `XChangeWindowAttributes`: https://tronche.com/gui/x/xlib/window/XChangeWindowAttributes.html
    pub fn init(&mut self) {
        let mut attrs: xlib::XSetWindowAttributes = unsafe { std::mem::zeroed() };
        attrs.cursor = self.cursors.normal;
        attrs.event_mask = ROOT_EVENT_MASK;
        unsafe {
            (self.xlib.XChangeWindowAttributes)(
                self.display,
                self.root,
                xlib::CWEventMask | xlib::CWCursor,
                &mut attrs,
            );
        }
        self.subscribe_to_event(self.root, ROOT_EVENT_MASK);
        self.grab_keys();
        self.sync();
    }

    /// Allocates the configured border colors.
    fn load_colors(&mut self, config: &impl Config) -> Result<(), SdwmError> {
        self.colors = Colors {
            normal: self.get_color(&config.normal_border_color())?,
            selected: self.get_color(&config.selected_border_color())?,
        };
        Ok(())
    }

    /// Drops the key grabs, frees the cursors, hands input focus back to the pointer root and
    /// closes the display.
    // `XCloseDisplay`: https://tronche.com/gui/x/xlib/display/XCloseDisplay.html
    pub fn close(&mut self) {
        if self.display.is_null() {
            return;
        }
        self.ungrab_keys();
        self.cursors.free(&self.xlib, self.display);
        self.sync();
        unsafe {
            (self.xlib.XSetInputFocus)(
                self.display,
                xlib::PointerRoot as xlib::Window,
                xlib::RevertToPointerRoot,
                xlib::CurrentTime,
            );
            (self.xlib.XCloseDisplay)(self.display);
        }
        self.display = ptr::null_mut();
    }

    /// Flush and sync the xserver.
    // `XSync`: https://tronche.com/gui/x/xlib/event-handling/XSync.html
    pub fn sync(&self) {
        unsafe { (self.xlib.XSync)(self.display, xlib::False) };
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) {
        unsafe { (self.xlib.XFlush)(self.display) };
    }

    /// Subscribe to an event of a window.
    // `XSelectInput`: https://tronche.com/gui/x/xlib/event-handling/XSelectInput.html
    pub fn subscribe_to_event(&self, window: xlib::Window, mask: c_long) {
        unsafe { (self.xlib.XSelectInput)(self.display, window, mask) };
    }
}
