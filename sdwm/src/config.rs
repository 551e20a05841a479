mod default;
mod keybind;

pub use keybind::{Keybind, Modifier, Mousebind};

use crate::utils::file_handler;
use sdwm_core::layouts::Layout;
use sdwm_core::models::MAX_TAGS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The user configuration, read from `$XDG_CONFIG_HOME/sdwm/config.ron`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// What `"modkey"` stands for in the bindings.
    pub modkey: String,
    pub tags: usize,
    pub border_width: i32,
    pub snap: i32,
    pub normal_border_color: String,
    pub selected_border_color: String,
    pub master_fraction: f32,
    pub master_count: i32,
    pub lock_fullscreen: bool,
    pub layouts: Vec<Layout>,
    pub keybind: Vec<Keybind>,
    pub mousebind: Vec<Mousebind>,
}

/// Loads the config file, falling back to the defaults when it cannot be read.
#[must_use]
pub fn load() -> Config {
    match file_handler::config_file_path() {
        Ok(path) => load_from_path(&path),
        Err(err) => {
            eprintln!("sdwm: ERROR LOADING CONFIG: {err:?}");
            Config::default()
        }
    }
}

/// Same as [`load`] for a config file at `path`.
pub(crate) fn load_from_path(path: &Path) -> Config {
    file_handler::load_or_create(path)
        .map_err(|err| eprintln!("sdwm: ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

impl sdwm_core::Config for Config {
    fn key_bindings(&self) -> Vec<sdwm_core::config::Keybind> {
        self.keybind
            .iter()
            .filter_map(|keybind| keybind.try_convert_to_core_keybind(&self.modkey))
            .collect()
    }

    fn mouse_bindings(&self) -> Vec<sdwm_core::config::Mousebind> {
        self.mousebind
            .iter()
            .filter_map(|mousebind| mousebind.try_convert_to_core_mousebind(&self.modkey))
            .collect()
    }

    fn tag_count(&self) -> usize {
        self.tags.clamp(1, MAX_TAGS)
    }

    fn master_fraction(&self) -> f32 {
        self.master_fraction.clamp(0.05, 0.95)
    }

    fn master_count(&self) -> i32 {
        self.master_count.max(0)
    }

    fn border_width(&self) -> i32 {
        self.border_width.max(0)
    }

    fn snap(&self) -> i32 {
        self.snap
    }

    fn normal_border_color(&self) -> String {
        self.normal_border_color.clone()
    }

    fn selected_border_color(&self) -> String {
        self.selected_border_color.clone()
    }

    fn layouts(&self) -> Vec<Layout> {
        if self.layouts.is_empty() {
            tracing::warn!("No layouts configured, using the default ones");
            return Self::default().layouts;
        }
        self.layouts.clone()
    }

    fn lock_fullscreen(&self) -> bool {
        self.lock_fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdwm_core::Command;
    use sdwm_core::Config as _;
    use sdwm_core::config::ClickTarget;
    use sdwm_core::utils::modmask_lookup::{Button, ModMask};
    use sdwm_core::utils::xkeysym_lookup::into_keysym;

    #[test]
    fn default_bindings_all_resolve() {
        let config = Config::default();
        assert_eq!(config.key_bindings().len(), config.keybind.len());
        assert_eq!(config.mouse_bindings().len(), config.mousebind.len());
    }

    #[test]
    fn default_tag_bindings_cover_every_tag() {
        let config = Config::default();
        let bindings = config.key_bindings();
        for tag in 0..9u32 {
            let key = into_keysym(&(tag + 1).to_string()).unwrap();
            let mask = 1 << tag;
            let expected = [
                (ModMask::Alt, Command::View(mask)),
                (ModMask::Alt | ModMask::Control, Command::ToggleView(mask)),
                (ModMask::Alt | ModMask::Shift, Command::Tag(mask)),
                (
                    ModMask::Alt | ModMask::Control | ModMask::Shift,
                    Command::ToggleTag(mask),
                ),
            ];
            for (modifier, command) in expected {
                assert!(
                    bindings
                        .iter()
                        .any(|b| b.key == key && b.modifier == modifier && b.command == command),
                    "missing {command:?}"
                );
            }
        }
    }

    #[test]
    fn default_mouse_bindings_target_clients() {
        let bindings = Config::default().mouse_bindings();
        let moves = bindings
            .iter()
            .find(|b| b.command == Command::MoveMouse)
            .unwrap();
        assert_eq!(moves.click, ClickTarget::ClientWindow);
        assert_eq!(moves.button, Button::Button1);
        assert_eq!(moves.modifier, ModMask::Alt);
    }

    #[test]
    fn changing_modkey_changes_every_binding() {
        let config = Config {
            modkey: "Mod4".to_owned(),
            ..Config::default()
        };
        assert!(
            config
                .key_bindings()
                .iter()
                .all(|b| b.modifier.contains(ModMask::Super) && !b.modifier.contains(ModMask::Alt))
        );
    }

    #[test]
    fn out_of_range_values_are_bounded() {
        let config = Config {
            tags: 64,
            master_fraction: 2.0,
            master_count: -3,
            layouts: vec![],
            ..Config::default()
        };
        assert_eq!(config.tag_count(), MAX_TAGS);
        assert!((config.master_fraction() - 0.95).abs() < f32::EPSILON);
        assert_eq!(config.master_count(), 0);
        assert_eq!(config.layouts(), Config::default().layouts);
    }
}
