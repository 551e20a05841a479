use crate::models::ConfigureRequest;
use crate::models::Handle;
use crate::models::WindowHandle;
use crate::models::Xyhw;
use serde::{Deserialize, Serialize};

/// Which of the two configured border colors to paint.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderColor {
    Normal,
    Selected,
}

/// These are responses from the Window manager.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// We started managing a window: set its border width and normal color and listen to its
    /// events.
    #[serde(bound = "")]
    AddedWindow(WindowHandle<H>, i32),

    /// Makes a managed window visible.
    #[serde(bound = "")]
    MapWindow(WindowHandle<H>),

    /// Applies position, size and border width to a window.
    #[serde(bound = "")]
    ConfigureWindow(WindowHandle<H>, Xyhw, i32),

    /// Tells a client the geometry and border width its window actually has.
    #[serde(bound = "")]
    NotifyGeometry(WindowHandle<H>, Xyhw, i32),

    /// Moves a window without touching its size.
    #[serde(bound = "")]
    MoveWindow(WindowHandle<H>, i32, i32),

    /// Moves and resizes a window on behalf of its client.
    #[serde(bound = "")]
    MoveResizeWindow(WindowHandle<H>, Xyhw),

    /// Raises a given window.
    #[serde(bound = "")]
    MoveToTop(WindowHandle<H>),

    /// Places the first window directly below the second one.
    #[serde(bound = "")]
    StackBelow(WindowHandle<H>, WindowHandle<H>),

    #[serde(bound = "")]
    SetBorderColor(WindowHandle<H>, BorderColor),

    /// Gives input focus to a window, or to the root when `None`.
    #[serde(bound = "")]
    SetInputFocus(Option<WindowHandle<H>>),

    /// Sets up the button grabs of a window. Unfocused windows grab every button so a click
    /// can focus them.
    #[serde(bound = "")]
    GrabButtons(WindowHandle<H>, bool),

    /// Lets a click that focused a window through to the client.
    ReplayClick,

    /// Forcibly disconnects the client owning a window.
    #[serde(bound = "")]
    KillWindow(WindowHandle<H>),

    /// We stopped managing a window that still exists: restore the given border width and drop
    /// our grabs.
    #[serde(bound = "")]
    ReleaseWindow(WindowHandle<H>, i32),

    /// Applies a configure request of a window we do not manage, as is.
    #[serde(bound = "")]
    ForwardConfigure(ConfigureRequest<H>),

    /// Moves the pointer to a position relative to a window.
    #[serde(bound = "")]
    WarpPointer(WindowHandle<H>, i32, i32),

    /// Discards pending pointer-enter events so a restack does not move focus.
    DrainEnterEvents,

    /// Re-grabs every key binding on the root.
    ReloadKeyGrabs,
}
