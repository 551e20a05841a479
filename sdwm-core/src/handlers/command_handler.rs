#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::layouts::Layout;
use crate::models::TagMask;
use crate::state::State;
use std::cmp;

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Processes a command and invokes the associated function.
    pub fn command_handler(&mut self, command: &Command) {
        tracing::trace!("Command: {:?}", command);
        let done = match command {
            Command::MoveMouse => self.move_mouse(),
            Command::ResizeMouse => self.resize_mouse(),
            _ => process_internal(&mut self.state, command),
        };
        if done.is_none() {
            tracing::debug!("Command {:?} had nothing to act on", command);
        }
    }
}

fn process_internal<H: Handle>(state: &mut State<H>, command: &Command) -> Option<()> {
    match command {
        Command::FocusStack(direction) => state.focus_stack(*direction),
        Command::IncMaster(delta) => inc_master(state, *delta),
        Command::SetMasterFactor(value) => set_master_factor(state, *value),
        Command::Zoom => zoom(state),
        Command::View(mask) => view(state, *mask),
        Command::ToggleView(mask) => toggle_view(state, *mask),
        Command::Tag(mask) => tag(state, *mask),
        Command::ToggleTag(mask) => toggle_tag(state, *mask),
        Command::KillClient => {
            let handle = state.selected_window()?;
            state.actions.push_back(DisplayAction::KillWindow(handle));
            Some(())
        }
        Command::SetLayout(layout) => set_layout(state, *layout),
        Command::ToggleFloating => {
            let handle = state.selected_window()?;
            state.toggle_floating(handle)
        }
        Command::ToggleFullscreen => toggle_fullscreen(state),
        Command::FocusMonitor(direction) => focus_monitor(state, *direction),
        Command::TagMonitor(direction) => {
            let handle = state.selected_window()?;
            if state.monitors.len() < 2 {
                return None;
            }
            let target = state.dir_to_monitor(*direction);
            state.send_to_monitor(handle, target);
            Some(())
        }
        Command::Quit => {
            tracing::info!("Quitting");
            state.running = false;
            Some(())
        }
        Command::MoveMouse | Command::ResizeMouse => None,
    }
}

fn inc_master<H: Handle>(state: &mut State<H>, delta: i32) -> Option<()> {
    let monitor = state.current_monitor_mut()?;
    monitor.master_count = cmp::max(monitor.master_count + delta, 0);
    state.arrange(Some(state.selected_monitor));
    Some(())
}

/// Values below 1.0 are added to the current fraction, larger ones set it to `value - 1.0`.
fn set_master_factor<H: Handle>(state: &mut State<H>, value: f32) -> Option<()> {
    let monitor = state.current_monitor_mut()?;
    if monitor.layout().is_floating() {
        return None;
    }
    let fraction = if value < 1.0 {
        value + monitor.master_fraction
    } else {
        value - 1.0
    };
    if !(0.05..=0.95).contains(&fraction) {
        return None;
    }
    monitor.master_fraction = fraction;
    state.arrange(Some(state.selected_monitor));
    Some(())
}

/// Moves the selected window to the master area, or swaps in the next tiled window when it
/// already is the master.
fn zoom<H: Handle>(state: &mut State<H>) -> Option<()> {
    let index = state.selected_monitor;
    let monitor = state.monitors.get(index)?;
    let selected = monitor.selected_window()?;
    if monitor.layout().is_floating() || selected.floating {
        return None;
    }
    let tiled: Vec<_> = monitor.tiled().map(|w| w.handle).take(2).collect();
    let mut handle = selected.handle;
    if tiled.first() == Some(&handle) {
        handle = *tiled.get(1)?;
    }
    state.monitors[index].pop(handle);
    state.focus(Some(handle));
    state.arrange(Some(index));
    Some(())
}

fn view<H: Handle>(state: &mut State<H>, mask: TagMask) -> Option<()> {
    let mask = state.tags.clean(mask);
    let monitor = state.current_monitor_mut()?;
    if mask == monitor.active_tags() {
        return None;
    }
    monitor.toggle_tagset();
    if mask != 0 {
        monitor.set_active_tags(mask);
    }
    state.focus(None);
    state.arrange(Some(state.selected_monitor));
    Some(())
}

fn toggle_view<H: Handle>(state: &mut State<H>, mask: TagMask) -> Option<()> {
    let mask = state.tags.clean(mask);
    let monitor = state.current_monitor_mut()?;
    let tags = monitor.active_tags() ^ mask;
    if tags == 0 {
        return None;
    }
    monitor.set_active_tags(tags);
    state.focus(None);
    state.arrange(Some(state.selected_monitor));
    Some(())
}

fn tag<H: Handle>(state: &mut State<H>, mask: TagMask) -> Option<()> {
    let mask = state.tags.clean(mask);
    let handle = state.selected_window()?;
    if mask == 0 {
        return None;
    }
    state.window_mut(handle)?.tags = mask;
    state.focus(None);
    state.arrange(Some(state.selected_monitor));
    Some(())
}

fn toggle_tag<H: Handle>(state: &mut State<H>, mask: TagMask) -> Option<()> {
    let mask = state.tags.clean(mask);
    let handle = state.selected_window()?;
    let window = state.window_mut(handle)?;
    let tags = window.tags ^ mask;
    if tags == 0 {
        return None;
    }
    window.tags = tags;
    state.focus(None);
    state.arrange(Some(state.selected_monitor));
    Some(())
}

/// `None` switches to the other layout slot. A layout different from the active one is put
/// into the other slot, which becomes active.
fn set_layout<H: Handle>(state: &mut State<H>, layout: Option<Layout>) -> Option<()> {
    let monitor = state.current_monitor_mut()?;
    if layout.is_none_or(|l| l != monitor.layout()) {
        monitor.toggle_layout();
    }
    if let Some(layout) = layout {
        monitor.set_layout(layout);
    }
    tracing::debug!("Layout is now {}", monitor.layout().symbol());
    if monitor.selected.is_some() {
        state.arrange(Some(state.selected_monitor));
    }
    Some(())
}

fn toggle_fullscreen<H: Handle>(state: &mut State<H>) -> Option<()> {
    let handle = state.selected_window()?;
    let index = state.monitor_of(handle)?;
    let outer = state.monitors[index].outer;
    let window = state.window_mut(handle)?;
    if window.fullscreen {
        window.fullscreen = false;
        window.floating = window.old_floating;
        window.border = window.old_border;
        let restored = window.old_geometry;
        state.resize_client(handle, restored);
        state.arrange(Some(index));
    } else {
        window.fullscreen = true;
        window.old_floating = window.floating;
        window.old_border = window.border;
        window.border = 0;
        window.floating = true;
        state.resize_client(handle, outer);
        state.actions.push_back(DisplayAction::MoveToTop(handle));
    }
    Some(())
}

fn focus_monitor<H: Handle>(state: &mut State<H>, direction: i32) -> Option<()> {
    if state.monitors.len() < 2 {
        return None;
    }
    let target = state.dir_to_monitor(direction);
    if target == state.selected_monitor {
        return None;
    }
    if let Some(selected) = state.selected_window() {
        state.unfocus(selected, false);
    }
    state.selected_monitor = target;
    state.focus(None);
    Some(())
}

impl<H: Handle> State<H> {
    /// Flips a window between floating and tiled. Fullscreen windows stay as they are.
    pub fn toggle_floating(&mut self, handle: WindowHandle<H>) -> Option<()> {
        let index = self.monitor_of(handle)?;
        let window = self.window_mut(handle)?;
        if window.fullscreen {
            return None;
        }
        window.floating = !window.floating;
        if window.floating {
            let saved = window.old_geometry;
            self.resize(handle, saved, ClampMode::Layout);
        }
        self.arrange(Some(index));
        Some(())
    }
}
