//! What the core needs from the user's configuration.
use crate::command::Command;
use crate::layouts::Layout;
use crate::utils::modmask_lookup::{Button, ModMask};
use crate::utils::xkeysym_lookup::XKeysym;
use serde::{Deserialize, Serialize};

/// A key combination bound to a command.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Keybind {
    pub modifier: ModMask,
    pub key: XKeysym,
    pub command: Command,
}

/// Where a mouse binding applies.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    RootWindow,
    ClientWindow,
}

/// A mouse button combination bound to a command.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mousebind {
    pub click: ClickTarget,
    pub modifier: ModMask,
    pub button: Button,
    pub command: Command,
}

/// Read once at startup, never changes during a session.
pub trait Config {
    fn key_bindings(&self) -> Vec<Keybind>;

    fn mouse_bindings(&self) -> Vec<Mousebind>;

    /// Number of tags, at most `models::MAX_TAGS`.
    fn tag_count(&self) -> usize;

    fn master_fraction(&self) -> f32;

    fn master_count(&self) -> i32;

    fn border_width(&self) -> i32;

    /// Distance in pixels at which a dragged window snaps to a monitor edge.
    fn snap(&self) -> i32;

    fn normal_border_color(&self) -> String;

    fn selected_border_color(&self) -> String;

    /// The first layout fills a new monitor's first slot, the last one its second slot.
    fn layouts(&self) -> Vec<Layout>;

    /// Keep focus on a fullscreen window when cycling through windows.
    fn lock_fullscreen(&self) -> bool;
}

#[cfg(test)]
pub(crate) use tests::TestConfig;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    pub struct TestConfig {
        pub tags: usize,
        pub key_bindings: Vec<Keybind>,
        pub mouse_bindings: Vec<Mousebind>,
        pub master_fraction: f32,
        pub master_count: i32,
        pub border_width: i32,
        pub snap: i32,
        pub layouts: Vec<Layout>,
        pub lock_fullscreen: bool,
    }

    impl TestConfig {
        pub fn new(tags: usize) -> Self {
            Self {
                tags,
                key_bindings: vec![],
                mouse_bindings: vec![
                    Mousebind {
                        click: ClickTarget::ClientWindow,
                        modifier: ModMask::Alt,
                        button: Button::Button1,
                        command: Command::MoveMouse,
                    },
                    Mousebind {
                        click: ClickTarget::ClientWindow,
                        modifier: ModMask::Alt,
                        button: Button::Button2,
                        command: Command::ToggleFloating,
                    },
                    Mousebind {
                        click: ClickTarget::ClientWindow,
                        modifier: ModMask::Alt,
                        button: Button::Button3,
                        command: Command::ResizeMouse,
                    },
                ],
                master_fraction: 0.55,
                master_count: 1,
                border_width: 1,
                snap: 32,
                layouts: vec![Layout::Tile, Layout::Monocle, Layout::Floating],
                lock_fullscreen: true,
            }
        }
    }

    impl Config for TestConfig {
        fn key_bindings(&self) -> Vec<Keybind> {
            self.key_bindings.clone()
        }
        fn mouse_bindings(&self) -> Vec<Mousebind> {
            self.mouse_bindings.clone()
        }
        fn tag_count(&self) -> usize {
            self.tags
        }
        fn master_fraction(&self) -> f32 {
            self.master_fraction
        }
        fn master_count(&self) -> i32 {
            self.master_count
        }
        fn border_width(&self) -> i32 {
            self.border_width
        }
        fn snap(&self) -> i32 {
            self.snap
        }
        fn normal_border_color(&self) -> String {
            "#444444".to_owned()
        }
        fn selected_border_color(&self) -> String {
            "#009900".to_owned()
        }
        fn layouts(&self) -> Vec<Layout> {
            self.layouts.clone()
        }
        fn lock_fullscreen(&self) -> bool {
            self.lock_fullscreen
        }
    }
}
