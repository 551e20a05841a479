use super::models::{ConfigureRequest, Handle, Window, WindowHandle};
use super::utils::modmask_lookup::{Button, ModMask};
use super::utils::xkeysym_lookup::XKeysym;

/// Notifications from the display server.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone)]
pub enum DisplayEvent<H: Handle> {
    /// A top level window asks to be mapped. Override redirect windows never get here.
    WindowCreate(Window<H>),
    WindowDestroy(WindowHandle<H>),
    /// A window unmapped itself.
    WindowUnmap(WindowHandle<H>),
    ConfigureRequest(ConfigureRequest<H>),
    /// The root window changed size.
    ScreenResize(i32, i32),
    /// The pointer entered a window, with the pointer's root coordinates.
    PointerEnter(WindowHandle<H>, i32, i32),
    /// A window received input focus.
    FocusIn(WindowHandle<H>),
    /// Pointer motion with root coordinates and the server time in milliseconds.
    Motion(WindowHandle<H>, i32, i32, u64),
    MouseCombo(ModMask, Button, WindowHandle<H>, i32, i32),
    ButtonRelease,
    KeyCombo(ModMask, XKeysym),
    KeyboardMappingChanged,
    /// Part of a window needs redrawing.
    Expose(WindowHandle<H>),
}
