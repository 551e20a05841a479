use sdwm_core::config::ClickTarget;
use sdwm_core::utils::modmask_lookup::{self, Button, ModMask};
use sdwm_core::utils::xkeysym_lookup;
use sdwm_core::Command;
use serde::{Deserialize, Serialize};

/// A key binding as written in the config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Keybind {
    pub command: Command,
    pub modifier: Option<Modifier>,
    pub key: String,
}

/// A mouse binding as written in the config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mousebind {
    pub click: ClickTarget,
    pub command: Command,
    pub modifier: Option<Modifier>,
    pub button: String,
}

impl Keybind {
    /// Resolves the key name and the modifiers, `"modkey"` standing for `modkey`.
    pub fn try_convert_to_core_keybind(&self, modkey: &str) -> Option<sdwm_core::config::Keybind> {
        let Some(key) = xkeysym_lookup::into_keysym(&self.key) else {
            tracing::warn!("Unknown key `{}` in the binding for {:?}", self.key, self.command);
            return None;
        };
        Some(sdwm_core::config::Keybind {
            modifier: resolve_modifier(self.modifier.as_ref(), modkey),
            key,
            command: self.command.clone(),
        })
    }
}

impl Mousebind {
    pub fn try_convert_to_core_mousebind(
        &self,
        modkey: &str,
    ) -> Option<sdwm_core::config::Mousebind> {
        let button = modmask_lookup::into_button(&self.button);
        if button == Button::Zero {
            tracing::warn!("Unknown button `{}` in the binding for {:?}", self.button, self.command);
            return None;
        }
        Some(sdwm_core::config::Mousebind {
            click: self.click,
            modifier: resolve_modifier(self.modifier.as_ref(), modkey),
            button,
            command: self.command.clone(),
        })
    }
}

fn resolve_modifier(modifier: Option<&Modifier>, modkey: &str) -> ModMask {
    let names: Vec<String> = modifier
        .into_iter()
        .flatten()
        .map(|m| if m == "modkey" { modkey.to_owned() } else { m })
        .collect();
    modmask_lookup::into_modmask(&names)
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl Modifier {
    pub fn is_empty(&self) -> bool {
        match self {
            Modifier::Single(single) => single.is_empty(),
            Modifier::List(list) => list.is_empty(),
        }
    }
}

impl From<Modifier> for Vec<String> {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Single(modifier) => vec![modifier],
            Modifier::List(modifiers) => modifiers,
        }
    }
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self.clone()).into_iter()
    }
}

impl From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XK_J: u32 = 0x006a;
    const XK_RETURN: u32 = 0xff0d;

    #[test]
    fn modkey_is_replaced_by_the_configured_modifier() {
        let keybind = Keybind {
            command: Command::FocusStack(1),
            modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
            key: "j".to_owned(),
        };
        let core = keybind.try_convert_to_core_keybind("Mod4").unwrap();
        assert_eq!(core.modifier, ModMask::Super | ModMask::Shift);
        assert_eq!(core.key, XK_J);
        assert_eq!(core.command, Command::FocusStack(1));
    }

    #[test]
    fn single_modifier_and_no_modifier_resolve() {
        let single = Keybind {
            command: Command::Zoom,
            modifier: Some("Control".into()),
            key: "Return".to_owned(),
        };
        let core = single.try_convert_to_core_keybind("Mod1").unwrap();
        assert_eq!(core.modifier, ModMask::Control);
        assert_eq!(core.key, XK_RETURN);

        let bare = Keybind {
            modifier: None,
            ..single
        };
        let core = bare.try_convert_to_core_keybind("Mod1").unwrap();
        assert_eq!(core.modifier, ModMask::Zero);
    }

    #[test]
    fn unknown_names_are_skipped() {
        let keybind = Keybind {
            command: Command::Quit,
            modifier: Some("modkey".into()),
            key: "NotAKey".to_owned(),
        };
        assert!(keybind.try_convert_to_core_keybind("Mod1").is_none());

        let mousebind = Mousebind {
            click: ClickTarget::ClientWindow,
            command: Command::MoveMouse,
            modifier: Some("modkey".into()),
            button: "Button9".to_owned(),
        };
        assert!(mousebind.try_convert_to_core_mousebind("Mod1").is_none());
    }

    #[test]
    fn mousebind_resolves_button() {
        let mousebind = Mousebind {
            click: ClickTarget::ClientWindow,
            command: Command::ResizeMouse,
            modifier: Some("modkey".into()),
            button: "Button3".to_owned(),
        };
        let core = mousebind.try_convert_to_core_mousebind("Mod1").unwrap();
        assert_eq!(core.button, Button::Button3);
        assert_eq!(core.modifier, ModMask::Alt);
        assert_eq!(core.click, ClickTarget::ClientWindow);
    }

    #[test]
    fn modifier_display_joins_with_plus() {
        let modifier: Modifier = vec!["Mod1".to_owned(), "Shift".to_owned()].into();
        assert_eq!(modifier.to_string(), "Mod1+Shift");
        assert!(!modifier.is_empty());
        assert!(Modifier::from("").is_empty());
    }
}
