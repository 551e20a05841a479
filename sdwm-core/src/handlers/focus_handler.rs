#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::{BorderColor, DisplayAction};
use crate::models::Monitor;
use crate::state::State;

impl<H: Handle> State<H> {
    /// Selects a window, or the topmost visible window of the selected monitor when `handle` is
    /// `None` or hidden. Input focus goes to the root when nothing can be selected.
    pub fn focus(&mut self, handle: Option<WindowHandle<H>>) {
        let handle = handle
            .filter(|h| self.is_visible(*h))
            .or_else(|| self.current_monitor().and_then(Monitor::first_visible));
        if let Some(previous) = self.selected_window() {
            if Some(previous) != handle {
                self.unfocus(previous, false);
            }
        }
        match handle {
            Some(h) => {
                if let Some(index) = self.monitor_of(h) {
                    if index != self.selected_monitor {
                        tracing::debug!("Focus moves to monitor {}", index);
                        self.selected_monitor = index;
                    }
                    let monitor = &mut self.monitors[index];
                    monitor.detach_stack(h);
                    monitor.attach_stack(h);
                }
                self.actions.push_back(DisplayAction::GrabButtons(h, true));
                self.actions
                    .push_back(DisplayAction::SetBorderColor(h, BorderColor::Selected));
                self.actions.push_back(DisplayAction::SetInputFocus(Some(h)));
            }
            None => self.actions.push_back(DisplayAction::SetInputFocus(None)),
        }
        if let Some(monitor) = self.current_monitor_mut() {
            monitor.selected = handle;
        }
    }

    /// Paints a window as not selected. `set_focus` also hands input focus to the root.
    pub fn unfocus(&mut self, handle: WindowHandle<H>, set_focus: bool) {
        self.actions
            .push_back(DisplayAction::GrabButtons(handle, false));
        self.actions
            .push_back(DisplayAction::SetBorderColor(handle, BorderColor::Normal));
        if set_focus {
            self.actions.push_back(DisplayAction::SetInputFocus(None));
        }
    }

    /// Focus follows the pointer into windows and across monitors.
    pub fn pointer_enter_handler(&mut self, handle: WindowHandle<H>, x: i32, y: i32) {
        let client = self.is_managed(handle).then_some(handle);
        let index = self.window_to_monitor(handle, x, y);
        if index != self.selected_monitor {
            if let Some(selected) = self.selected_window() {
                self.unfocus(selected, true);
            }
            self.selected_monitor = index;
        } else if client.is_none() || client == self.selected_window() {
            return;
        }
        self.focus(client);
    }

    /// Another window grabbed input focus: give it back to the selection.
    pub fn focus_in_handler(&mut self, handle: WindowHandle<H>) {
        if let Some(selected) = self.selected_window() {
            if selected != handle {
                self.actions
                    .push_back(DisplayAction::SetInputFocus(Some(selected)));
            }
        }
    }

    /// Pointer motion over the root moves the selection to the monitor under the pointer.
    pub fn motion_handler(&mut self, handle: WindowHandle<H>, x: i32, y: i32) {
        if handle != self.root {
            return;
        }
        let index = self.rect_to_monitor(&Xyhw::new(x, y, 1, 1));
        if self.motion_monitor.is_some_and(|last| last != index) {
            if let Some(selected) = self.selected_window() {
                self.unfocus(selected, true);
            }
            self.selected_monitor = index;
            self.focus(None);
        }
        self.motion_monitor = Some(index);
    }

    /// Focuses the next (positive) or previous visible window of the selected monitor,
    /// wrapping around.
    pub fn focus_stack(&mut self, direction: i32) -> Option<()> {
        let monitor = self.current_monitor()?;
        let selected = monitor.selected_window()?;
        if selected.fullscreen && self.lock_fullscreen {
            return None;
        }
        let clients = monitor.clients();
        let index = clients.iter().position(|w| w.handle == selected.handle)?;
        let next = if direction > 0 {
            clients[index + 1..]
                .iter()
                .chain(clients[..index].iter())
                .find(|w| monitor.is_visible(w))
        } else {
            clients[..index]
                .iter()
                .rev()
                .chain(clients[index..].iter().rev())
                .find(|w| monitor.is_visible(w))
        }?
        .handle;
        self.focus(Some(next));
        self.restack(self.selected_monitor);
        Some(())
    }
}
