// allow casting types
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod event_translate;
mod xcursor;
mod xwrap;

use serde::{Deserialize, Serialize};
pub use xwrap::XWrap;

use self::xwrap::ICONIC_STATE;
use event_translate::XEvent;
use sdwm_core::config::Config;
use sdwm_core::models::{ConfigureRequest, Handle, Mode, Screen, WindowHandle};
use sdwm_core::{BorderColor, DisplayAction, DisplayEvent, DisplayServer, Result};
use std::collections::VecDeque;

use x11_dl::xlib;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XlibWindowHandle(xlib::Window);
impl Handle for XlibWindowHandle {}

pub struct XlibDisplayServer {
    xw: XWrap,
    initial_events: VecDeque<DisplayEvent<XlibWindowHandle>>,
}

impl DisplayServer<XlibWindowHandle> for XlibDisplayServer {
    fn new(config: &impl Config) -> Result<Self> {
        let mut wrap = XWrap::new(config)?;

        wrap.init(); // setup events masks

        let mut instance = Self {
            xw: wrap,
            initial_events: VecDeque::new(),
        };
        instance.initial_events = instance.find_all_windows();
        Ok(instance)
    }

    fn root(&self) -> WindowHandle<XlibWindowHandle> {
        self.xw.get_default_root_handle()
    }

    fn next_event(&mut self) -> Option<DisplayEvent<XlibWindowHandle>> {
        if let Some(event) = self.initial_events.pop_front() {
            return Some(event);
        }
        loop {
            let xlib_event = self.xw.get_next_event()?;
            let event: Option<DisplayEvent<XlibWindowHandle>> = XEvent(&self.xw, xlib_event).into();
            if let Some(e) = event {
                tracing::trace!("DisplayEvent: {:?}", e);
                return Some(e);
            }
        }
    }

    fn next_drag_event(&mut self) -> Option<DisplayEvent<XlibWindowHandle>> {
        loop {
            let xlib_event = self.xw.get_mask_event();
            let event: Option<DisplayEvent<XlibWindowHandle>> = XEvent(&self.xw, xlib_event).into();
            if let Some(e) = event {
                tracing::trace!("DisplayEvent: {:?}", e);
                return Some(e);
            }
        }
    }

    fn execute_action(&mut self, act: DisplayAction<XlibWindowHandle>) {
        let xw = &mut self.xw;
        match act {
            DisplayAction::AddedWindow(h, border) => xw.setup_managed_window(h.0.0, border),
            DisplayAction::MapWindow(h) => xw.map_window(h.0.0),
            DisplayAction::ConfigureWindow(h, geometry, border) => {
                xw.configure_window(h.0.0, &geometry, border);
            }
            DisplayAction::NotifyGeometry(h, geometry, border) => {
                xw.send_configure_notify(h.0.0, &geometry, border);
            }
            DisplayAction::MoveWindow(h, x, y) => xw.move_window(h.0.0, x, y),
            DisplayAction::MoveResizeWindow(h, geometry) => xw.move_resize_window(h.0.0, &geometry),
            DisplayAction::MoveToTop(h) => xw.move_to_top(h.0.0),
            DisplayAction::StackBelow(h, sibling) => xw.stack_below(h.0.0, sibling.0.0),
            DisplayAction::SetBorderColor(h, color) => from_set_border_color(xw, h, color),
            DisplayAction::SetInputFocus(h) => from_set_input_focus(xw, h),
            DisplayAction::GrabButtons(h, focused) => xw.grab_mouse_clicks(h.0.0, focused),
            DisplayAction::ReplayClick => xw.replay_click(),
            DisplayAction::KillWindow(h) => xw.kill_window(h.0.0),
            DisplayAction::ReleaseWindow(h, border) => xw.teardown_managed_window(h.0.0, border),
            DisplayAction::ForwardConfigure(request) => from_forward_configure(xw, &request),
            DisplayAction::WarpPointer(h, x, y) => xw.move_cursor_to_point(h.0.0, (x, y)),
            DisplayAction::DrainEnterEvents => xw.drain_enter_events(),
            DisplayAction::ReloadKeyGrabs => xw.grab_keys(),
        }
    }

    fn screens(&self) -> Vec<Screen<XlibWindowHandle>> {
        self.xw.get_screens()
    }

    fn screen_size(&self) -> (i32, i32) {
        self.xw.get_screen_size()
    }

    fn cursor_point(&self) -> Option<(i32, i32)> {
        self.xw.get_cursor_point().ok()
    }

    fn grab_pointer(&mut self, mode: Mode<XlibWindowHandle>) -> bool {
        self.xw.grab_pointer(&mode)
    }

    fn ungrab_pointer(&mut self) {
        self.xw.ungrab_pointer();
    }

    fn flush(&self) {
        self.xw.flush();
    }

    fn cleanup(&mut self) {
        self.xw.close();
    }
}

impl XlibDisplayServer {
    /// Map requests for the windows that were already there, parents before their transients.
    fn find_all_windows(&self) -> VecDeque<DisplayEvent<XlibWindowHandle>> {
        let handles = match self.xw.get_all_windows() {
            Ok(handles) => handles,
            Err(err) => {
                tracing::error!("Unable to list the existing windows: {:?}", err);
                return VecDeque::new();
            }
        };
        let (transients, normal): (Vec<_>, Vec<_>) = handles
            .into_iter()
            .filter(|&handle| {
                let Ok(attrs) = self.xw.get_window_attrs(handle) else {
                    return false;
                };
                attrs.map_state == xlib::IsViewable
                    || self.xw.get_wm_state(handle) == Some(ICONIC_STATE)
            })
            .filter_map(|handle| self.xw.setup_window(handle))
            .partition(|window| window.transient.is_some());
        normal
            .into_iter()
            .chain(transients)
            .map(DisplayEvent::WindowCreate)
            .collect()
    }
}

// Display actions.
fn from_set_border_color(
    xw: &XWrap,
    handle: WindowHandle<XlibWindowHandle>,
    color: BorderColor,
) {
    let pixel = match color {
        BorderColor::Normal => xw.colors.normal,
        BorderColor::Selected => xw.colors.selected,
    };
    xw.set_window_border_color(handle.0.0, pixel);
}

fn from_set_input_focus(xw: &XWrap, handle: Option<WindowHandle<XlibWindowHandle>>) {
    let window = handle.map_or_else(|| xw.get_default_root(), |h| h.0.0);
    xw.set_input_focus(window);
}

fn from_forward_configure(xw: &XWrap, request: &ConfigureRequest<XlibWindowHandle>) {
    tracing::trace!("Forwarding {:?}", request);
    xw.forward_configure(request);
}
