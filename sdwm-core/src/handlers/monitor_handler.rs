#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_servers::DisplayServer;
use crate::models::{Screen, WindowHandle};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Reconciles the monitors with the outputs the display server reports. Monitors are added
    /// for new outputs. Windows of vanished outputs move to the first monitor.
    ///
    /// Returns true if any monitor geometry changed.
    pub fn update_geometry(&mut self, screens: &[Screen<H>], pointer: Option<(i32, i32)>) -> bool {
        let mut unique: Vec<Xyhw> = vec![];
        for screen in screens {
            let rect = Xyhw::from(screen.bbox);
            if !unique.contains(&rect) {
                unique.push(rect);
            }
        }
        if unique.is_empty() {
            unique.push(Xyhw::new(0, 0, self.screen.w(), self.screen.h()));
        }

        let mut dirty = false;
        while self.monitors.len() < unique.len() {
            let monitor = self.create_monitor();
            self.monitors.push(monitor);
        }
        for (monitor, rect) in self.monitors.iter_mut().zip(unique.iter()) {
            if monitor.outer != *rect {
                tracing::debug!("Monitor {} is now {:?}", monitor.id, rect);
                dirty = true;
                monitor.outer = *rect;
                monitor.work = *rect;
            }
        }
        while self.monitors.len() > unique.len() {
            let Some(mut removed) = self.monitors.pop() else {
                break;
            };
            tracing::debug!("Monitor {} is gone", removed.id);
            dirty = true;
            let target = &mut self.monitors[0];
            for mut window in removed.take_clients() {
                let handle = window.handle;
                window.tags = target.active_tags();
                target.attach(window);
                target.attach_stack(handle);
            }
            if self.selected_monitor >= self.monitors.len() {
                self.selected_monitor = 0;
            }
            self.motion_monitor = None;
        }

        if dirty {
            self.selected_monitor = 0;
            if let Some((x, y)) = pointer {
                self.selected_monitor = self.rect_to_monitor(&Xyhw::new(x, y, 1, 1));
            }
        }
        dirty
    }

    /// Moves a window to another monitor, where it takes that monitor's active tags.
    pub fn send_to_monitor(&mut self, handle: WindowHandle<H>, target: usize) {
        let Some(source) = self.monitor_of(handle) else {
            return;
        };
        if source == target || target >= self.monitors.len() {
            return;
        }
        self.unfocus(handle, false);
        let monitor = &mut self.monitors[source];
        let Some(mut window) = monitor.detach(handle) else {
            return;
        };
        monitor.detach_stack(handle);
        tracing::debug!("Sending {:?} to monitor {}", handle, target);
        let monitor = &mut self.monitors[target];
        window.tags = monitor.active_tags();
        monitor.attach(window);
        monitor.attach_stack(handle);
        self.focus(None);
        self.arrange(None);
    }
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// The root window changed size.
    pub fn screen_resize_handler(&mut self, width: i32, height: i32) {
        let dirty = self.state.screen.w() != width || self.state.screen.h() != height;
        self.state.screen = Xyhw::new(0, 0, width, height);
        if self.update_geometry() || dirty {
            let state = &mut self.state;
            let fullscreen: Vec<(WindowHandle<H>, Xyhw)> = state
                .monitors
                .iter()
                .flat_map(|m| {
                    m.clients()
                        .iter()
                        .filter(|w| w.fullscreen)
                        .map(|w| (w.handle, m.outer))
                })
                .collect();
            for (handle, outer) in fullscreen {
                state.resize_client(handle, outer);
            }
            state.focus(None);
            state.arrange(None);
        }
    }
}
