use super::{Config, Keybind, Modifier, Mousebind};
use sdwm_core::Command;
use sdwm_core::config::ClickTarget;
use sdwm_core::layouts::Layout;

const TAGS_NUM: usize = 9;

fn modkey() -> Option<Modifier> {
    Some("modkey".into())
}

fn modkey_and(other: &[&str]) -> Option<Modifier> {
    let mut list = vec!["modkey".to_owned()];
    list.extend(other.iter().map(|&m| m.to_owned()));
    Some(list.into())
}

fn bind(modifier: Option<Modifier>, key: &str, command: Command) -> Keybind {
    Keybind {
        command,
        modifier,
        key: key.to_owned(),
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut keybind = vec![
            // Mod + j/k => focus the next/previous window
            bind(modkey(), "j", Command::FocusStack(1)),
            bind(modkey(), "k", Command::FocusStack(-1)),
            // Mod + i/d => more/fewer windows in the master area
            bind(modkey(), "i", Command::IncMaster(1)),
            bind(modkey(), "d", Command::IncMaster(-1)),
            // Mod + h/l => shrink/grow the master area
            bind(modkey(), "h", Command::SetMasterFactor(-0.05)),
            bind(modkey(), "l", Command::SetMasterFactor(0.05)),
            bind(modkey(), "Return", Command::Zoom),
            // Mod + Tab => back to the previous tag set
            bind(modkey(), "Tab", Command::View(0)),
            bind(modkey_and(&["Shift"]), "c", Command::KillClient),
            bind(modkey(), "t", Command::SetLayout(Some(Layout::Tile))),
            bind(modkey(), "m", Command::SetLayout(Some(Layout::Monocle))),
            bind(modkey(), "f", Command::SetLayout(Some(Layout::Floating))),
            // Mod + space => swap the two layout slots
            bind(modkey(), "space", Command::SetLayout(None)),
            bind(modkey_and(&["Shift"]), "space", Command::ToggleFloating),
            bind(modkey_and(&["Shift"]), "f", Command::ToggleFullscreen),
            // Mod + 0 => every tag, Mod + Shift + 0 => window on every tag
            bind(modkey(), "0", Command::View(!0)),
            bind(modkey_and(&["Shift"]), "0", Command::Tag(!0)),
            bind(modkey(), "comma", Command::FocusMonitor(-1)),
            bind(modkey(), "period", Command::FocusMonitor(1)),
            bind(modkey_and(&["Shift"]), "comma", Command::TagMonitor(-1)),
            bind(modkey_and(&["Shift"]), "period", Command::TagMonitor(1)),
            bind(modkey_and(&["Shift"]), "q", Command::Quit),
        ];

        // Mod + [1..9] => view, with Control toggle view, with Shift tag, with both toggle tag
        for i in 0..TAGS_NUM {
            let key = (i + 1).to_string();
            let mask = 1 << i;
            keybind.push(bind(modkey(), &key, Command::View(mask)));
            keybind.push(bind(
                modkey_and(&["Control"]),
                &key,
                Command::ToggleView(mask),
            ));
            keybind.push(bind(modkey_and(&["Shift"]), &key, Command::Tag(mask)));
            keybind.push(bind(
                modkey_and(&["Control", "Shift"]),
                &key,
                Command::ToggleTag(mask),
            ));
        }

        let mousebind = [
            ("Button1", Command::MoveMouse),
            ("Button2", Command::ToggleFloating),
            ("Button3", Command::ResizeMouse),
        ]
        .into_iter()
        .map(|(button, command)| Mousebind {
            click: ClickTarget::ClientWindow,
            command,
            modifier: modkey(),
            button: button.to_owned(),
        })
        .collect();

        Self {
            modkey: "Mod1".to_owned(),
            tags: TAGS_NUM,
            border_width: 1,
            snap: 32,
            normal_border_color: "#444444".to_owned(),
            selected_border_color: "#009900".to_owned(),
            master_fraction: 0.55,
            master_count: 1,
            lock_fullscreen: true,
            layouts: vec![Layout::Tile, Layout::Monocle, Layout::Floating],
            keybind,
            mousebind,
        }
    }
}
