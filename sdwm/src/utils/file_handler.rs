use crate::Config;
use anyhow::Result;
use ron::{
    Options,
    extensions::Extensions,
    ser::{PrettyConfig, to_string_pretty},
};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = r"// sdwm configuration
//
// Every field is optional, missing ones take their default value.
// In bindings, `modkey` stands for the modifier set in `modkey`.

";

/// Where the config file lives, `$XDG_CONFIG_HOME/sdwm/config.ron`.
///
/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist or if user doesn't have
/// permissions to create the sdwm config directory.
pub(crate) fn config_file_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("sdwm")?;
    Ok(path.place_config_file("config.ron")?)
}

/// Reads the config at `path`, writing the default config there first if there is none.
///
/// # Errors
///
/// Errors if the file cannot be read or written, or if it is not valid RON.
pub(crate) fn load_or_create(path: &Path) -> Result<Config> {
    tracing::debug!("Loading config file");
    if path.exists() {
        tracing::debug!("Config file '{}' found.", path.to_string_lossy());
        let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        let contents = fs::read_to_string(path)?;
        let config = ron.from_str(&contents)?;
        Ok(config)
    } else {
        tracing::debug!("Config file not found. Writing the default config.");
        let config = Config::default();
        write_to_file(path, &config)?;
        Ok(config)
    }
}

/// Writes `config` to `path` as pretty RON, preceded by a comment header.
///
/// # Errors
///
/// Errors if the file cannot be created or written.
pub fn write_to_file(path: &Path, config: &Config) -> Result<()> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(2)
        .extensions(Extensions::IMPLICIT_SOME);
    let ron = to_string_pretty(config, ron_pretty_conf)?;
    let mut file = File::create(path)?;
    file.write_all(COMMENT_HEADER.as_bytes())?;
    file.write_all(ron.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdwm_core::Command;
    use sdwm_core::layouts::Layout;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");

        let config = load_or_create(&path).unwrap();

        assert_eq!(config, Config::default());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(COMMENT_HEADER));
        assert!(written.contains("implicit_some"));
    }

    #[test]
    fn written_config_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        let mut config = Config::default();
        config.modkey = "Mod4".to_owned();
        config.border_width = 3;
        config.layouts = vec![Layout::Monocle, Layout::Tile];

        write_to_file(&path, &config).unwrap();

        assert_eq!(load_or_create(&path).unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(
            &path,
            r#"#![enable(implicit_some)]
(
    snap: 10,
    keybind: [
        (command: Quit, modifier: ["modkey", "Shift"], key: "x"),
        (command: SetLayout(Tile), modifier: "modkey", key: "t"),
    ],
)"#,
        )
        .unwrap();

        let config = load_or_create(&path).unwrap();

        assert_eq!(config.snap, 10);
        assert_eq!(config.border_width, Config::default().border_width);
        assert_eq!(config.keybind.len(), 2);
        assert_eq!(config.keybind[0].command, Command::Quit);
        assert_eq!(config.keybind[1].command, Command::SetLayout(Some(Layout::Tile)));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "( snap: \"wide\" ").unwrap();

        assert!(load_or_create(&path).is_err());
        assert_eq!(crate::config::load_from_path(&path), Config::default());
    }
}
