use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::Handle;
use crate::models::Mode;
use crate::models::Screen;
use crate::models::WindowHandle;
use crate::DisplayEvent;

#[cfg(test)]
mod mock_display_server;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The windowing system the manager runs on.
pub trait DisplayServer<H: Handle> {
    /// Connects to the display and becomes its window manager.
    ///
    /// # Errors
    ///
    /// Will error if the display cannot be opened, another window manager is running, or the
    /// configured colors cannot be allocated.
    fn new(config: &impl Config) -> Result<Self>
    where
        Self: Sized;

    fn root(&self) -> WindowHandle<H>;

    /// Blocks until the next event arrives. Returns `None` once the connection is gone.
    fn next_event(&mut self) -> Option<DisplayEvent<H>>;

    /// Blocks until the next pointer, expose or substructure redirect event. Used while the
    /// pointer is grabbed for a move or resize.
    fn next_drag_event(&mut self) -> Option<DisplayEvent<H>>;

    fn execute_action(&mut self, act: DisplayAction<H>);

    /// The physical outputs, possibly with duplicated geometries.
    fn screens(&self) -> Vec<Screen<H>>;

    /// Width and height of the whole virtual screen.
    fn screen_size(&self) -> (i32, i32);

    /// Pointer position in root coordinates.
    fn cursor_point(&self) -> Option<(i32, i32)>;

    /// Grabs the pointer with the cursor matching `mode`. Returns false if the grab failed.
    fn grab_pointer(&mut self, mode: Mode<H>) -> bool;

    fn ungrab_pointer(&mut self);

    fn flush(&self);

    /// Releases every resource held on the display.
    fn cleanup(&mut self) {}
}
