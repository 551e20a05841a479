#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;

/// Motion events closer together than this many milliseconds are dropped.
const MOTION_INTERVAL: u64 = 1000 / 60;

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Restacks the selected window and grabs the pointer for a drag. Returns the window and
    /// its geometry when the drag can start.
    pub(crate) fn start_drag(
        &mut self,
        mode: fn(WindowHandle<H>) -> Mode<H>,
    ) -> Option<(WindowHandle<H>, Xyhw)> {
        let handle = self.state.selected_window()?;
        let window = self.state.window(handle)?;
        if window.fullscreen {
            return None;
        }
        let origin = window.geometry;
        self.state.restack(self.state.selected_monitor);
        self.flush_actions();
        if !self.display_server.grab_pointer(mode(handle)) {
            tracing::warn!("Could not grab the pointer");
            return None;
        }
        Some((handle, origin))
    }

    /// Feeds pointer motion to `on_motion` until a button is released. Configure requests,
    /// exposures and map requests keep being handled meanwhile.
    pub(crate) fn drag_loop(&mut self, mode: Mode<H>, mut on_motion: impl FnMut(&mut Self, i32, i32)) {
        self.state.mode = mode;
        let mut last_motion = 0;
        while let Some(event) = self.display_server.next_drag_event() {
            match event {
                DisplayEvent::ConfigureRequest(_)
                | DisplayEvent::Expose(_)
                | DisplayEvent::WindowCreate(_) => self.display_event_handler(event),
                DisplayEvent::Motion(_, x, y, time) => {
                    if time.wrapping_sub(last_motion) <= MOTION_INTERVAL {
                        continue;
                    }
                    last_motion = time;
                    on_motion(self, x, y);
                }
                DisplayEvent::ButtonRelease => break,
                _ => {}
            }
            self.flush_actions();
        }
    }

    /// Releases the pointer and moves the window to the monitor it ended up on.
    pub(crate) fn finish_drag(&mut self, handle: WindowHandle<H>) {
        self.flush_actions();
        self.display_server.ungrab_pointer();
        self.state.actions.push_back(DisplayAction::DrainEnterEvents);
        self.state.mode = Mode::Normal;
        if let Some(geometry) = self.state.window(handle).map(|w| w.geometry) {
            let target = self.state.rect_to_monitor(&geometry);
            if target != self.state.selected_monitor {
                self.state.send_to_monitor(handle, target);
                self.state.selected_monitor = target;
                self.state.focus(None);
            }
        }
        self.flush_actions();
    }
}
