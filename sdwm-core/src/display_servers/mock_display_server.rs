use super::Config;
use super::DisplayAction;
use super::DisplayEvent;
use super::DisplayServer;
use super::Result;
use crate::models::{BBox, Handle, Mode, Screen, WindowHandle};
use std::collections::VecDeque;

/// Scripted display server: events are popped from `events`, executed actions are recorded.
#[derive(Clone, Debug)]
pub struct MockDisplayServer<H: Handle> {
    pub screens: Vec<Screen<H>>,
    pub screen_size: (i32, i32),
    pub events: VecDeque<DisplayEvent<H>>,
    pub actions: Vec<DisplayAction<H>>,
    pub pointer: Option<(i32, i32)>,
    pub grab_succeeds: bool,
    pub grabbed: Option<Mode<H>>,
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Result<Self> {
        let bbox = BBox {
            x: 0,
            y: 0,
            width: 1920,
            height: 1080,
        };
        Ok(Self {
            screens: vec![Screen::new(bbox, "mock".to_owned())],
            screen_size: (1920, 1080),
            events: VecDeque::new(),
            actions: vec![],
            pointer: Some((0, 0)),
            grab_succeeds: true,
            grabbed: None,
        })
    }

    fn root(&self) -> WindowHandle<H> {
        WindowHandle(H::default())
    }

    fn next_event(&mut self) -> Option<DisplayEvent<H>> {
        self.events.pop_front()
    }

    fn next_drag_event(&mut self) -> Option<DisplayEvent<H>> {
        self.events.pop_front()
    }

    fn execute_action(&mut self, act: DisplayAction<H>) {
        self.actions.push(act);
    }

    fn screens(&self) -> Vec<Screen<H>> {
        self.screens.clone()
    }

    fn screen_size(&self) -> (i32, i32) {
        self.screen_size
    }

    fn cursor_point(&self) -> Option<(i32, i32)> {
        self.pointer
    }

    fn grab_pointer(&mut self, mode: Mode<H>) -> bool {
        if self.grab_succeeds {
            self.grabbed = Some(mode);
        }
        self.grab_succeeds
    }

    fn ungrab_pointer(&mut self) {
        self.grabbed = None;
    }

    fn flush(&self) {}
}
