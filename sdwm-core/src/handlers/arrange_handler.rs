#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::state::State;

impl<H: Handle> State<H> {
    /// Shows, lays out and restacks one monitor, or every monitor for `None`.
    pub fn arrange(&mut self, monitor: Option<usize>) {
        match monitor {
            Some(index) => {
                self.show_hide(index);
                self.arrange_monitor(index);
                self.restack(index);
            }
            None => {
                for index in 0..self.monitors.len() {
                    self.show_hide(index);
                }
                for index in 0..self.monitors.len() {
                    self.arrange_monitor(index);
                    self.restack(index);
                }
            }
        }
    }

    /// Moves visible windows to their geometry, in stacking order, then parks hidden windows
    /// left of the screen, in reverse stacking order.
    fn show_hide(&mut self, index: usize) {
        let Some(monitor) = self.monitors.get(index) else {
            return;
        };
        let floating_layout = monitor.layout().is_floating();
        let mut shown = vec![];
        let mut hidden = vec![];
        for window in monitor.stack().iter().filter_map(|h| monitor.window(*h)) {
            if monitor.is_visible(window) {
                let place = (floating_layout || window.floating) && !window.fullscreen;
                shown.push((window.handle, window.geometry, place));
            } else {
                hidden.push((window.handle, -2 * window.outer_width(), window.geometry.y()));
            }
        }

        for (handle, geometry, place) in shown {
            self.actions.push_back(DisplayAction::MoveWindow(
                handle,
                geometry.x(),
                geometry.y(),
            ));
            if place {
                self.resize(handle, geometry, ClampMode::Layout);
            }
        }
        for (handle, x, y) in hidden.into_iter().rev() {
            self.actions
                .push_back(DisplayAction::MoveWindow(handle, x, y));
        }
    }

    /// Applies the monitor's layout to its visible tiled windows.
    fn arrange_monitor(&mut self, index: usize) {
        let Some(monitor) = self.monitors.get(index) else {
            return;
        };
        let tiled: Vec<(WindowHandle<H>, i32)> =
            monitor.tiled().map(|w| (w.handle, w.border)).collect();
        let Some(slots) = monitor.layout().update(
            &monitor.work,
            monitor.master_fraction,
            monitor.master_count,
            tiled.len(),
        ) else {
            return;
        };
        for ((handle, border), slot) in tiled.into_iter().zip(slots) {
            let geometry = Xyhw::new(
                slot.x(),
                slot.y(),
                slot.w() - 2 * border,
                slot.h() - 2 * border,
            );
            self.resize(handle, geometry, ClampMode::Layout);
        }
    }

    /// Raises the selected window when it floats and chains the tiled windows below each other
    /// in stacking order.
    pub fn restack(&mut self, index: usize) {
        let Some(monitor) = self.monitors.get(index) else {
            return;
        };
        let Some(selected) = monitor.selected_window() else {
            return;
        };
        let floating_layout = monitor.layout().is_floating();
        if selected.floating || floating_layout {
            self.actions
                .push_back(DisplayAction::MoveToTop(selected.handle));
        }
        if !floating_layout {
            let Some((&top, rest)) = monitor.stack().split_first() else {
                return;
            };
            let mut sibling = top;
            for window in rest
                .iter()
                .filter_map(|h| monitor.window(*h))
                .filter(|w| !w.floating && monitor.is_visible(w))
            {
                self.actions
                    .push_back(DisplayAction::StackBelow(window.handle, sibling));
                sibling = window.handle;
            }
        }
        self.actions.push_back(DisplayAction::DrainEnterEvents);
    }
}
