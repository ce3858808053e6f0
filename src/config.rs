use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Key that must be held for application shortcuts.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKey {
    #[value(name = "ctrl")]
    Control,
    #[value(name = "super", alias = "cmd")]
    Super,
}

impl ModifierKey {
    /// The platform's usual shortcut modifier.
    pub const fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::Super
        } else {
            Self::Control
        }
    }

    /// The modifier shortcuts can actually use.
    ///
    /// Terminals only report Super once keyboard enhancement is on, so
    /// without it shortcuts fall back to Ctrl.
    #[must_use]
    pub const fn usable(self, reports_super: bool) -> Self {
        match self {
            Self::Super if !reports_super => Self::Control,
            other => other,
        }
    }

    /// How a shortcut with `key` is spelled in help text.
    pub fn shortcut(self, key: char) -> String {
        match self {
            Self::Control => format!("Ctrl+{key}"),
            Self::Super => format!("⌘{key}"),
        }
    }

    const fn flag_value(self) -> &'static str {
        match self {
            Self::Control => "ctrl",
            Self::Super => "super",
        }
    }
}

impl Default for ModifierKey {
    fn default() -> Self {
        Self::detect()
    }
}

/// Flags that may come from the command line or a config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub modifier: Option<ModifierKey>,
    pub max_notes: Option<usize>,
    pub max_note_bytes: Option<usize>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; values in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            modifier: other.modifier.or(self.modifier),
            max_notes: other.max_notes.or(self.max_notes),
            max_note_bytes: other.max_note_bytes.or(self.max_note_bytes),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("mdnotes").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("mdnotes")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("mdnotes").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("mdnotes").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".mdnotesrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# mdnotes defaults (saved with --save)".to_string()];
    if let Some(modifier) = flags.modifier {
        lines.push(format!("--modifier {}", modifier.flag_value()));
    }
    if let Some(max) = flags.max_notes {
        lines.push(format!("--max-notes {max}"));
    }
    if let Some(max) = flags.max_note_bytes {
        lines.push(format!("--max-note-bytes {max}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of a token list, ignoring everything else.
///
/// Both `--flag value` and `--flag=value` are accepted. Values that do not
/// parse are dropped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        let takes_value = matches!(
            name,
            "--modifier" | "--max-notes" | "--max-note-bytes" | "--log-file"
        );
        let value = match inline {
            Some(value) => Some(value),
            None if takes_value => {
                i += 1;
                tokens.get(i).map(String::as_str)
            }
            None => None,
        };
        if let Some(value) = value {
            match name {
                "--modifier" => flags.modifier = parse_modifier(value),
                "--max-notes" => flags.max_notes = value.parse().ok(),
                "--max-note-bytes" => flags.max_note_bytes = value.parse().ok(),
                "--log-file" => flags.log_file = Some(PathBuf::from(value)),
                _ => {}
            }
        }
        i += 1;
    }
    flags
}

fn parse_modifier(s: &str) -> Option<ModifierKey> {
    match s {
        "ctrl" => Some(ModifierKey::Control),
        "super" | "cmd" => Some(ModifierKey::Super),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = tokens(&[
            "mdnotes",
            "--modifier",
            "super",
            "--max-notes=20",
            "--log-file",
            "notes.log",
            "--save",
            "my-vault",
        ]);
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.modifier, Some(ModifierKey::Super));
        assert_eq!(flags.max_notes, Some(20));
        assert_eq!(flags.max_note_bytes, None);
        assert_eq!(flags.log_file, Some(PathBuf::from("notes.log")));
    }

    #[test]
    fn test_parse_flag_tokens_drops_bad_values() {
        let flags = parse_flag_tokens(&tokens(&["--modifier=hyper", "--max-notes", "lots"]));
        assert_eq!(flags, ConfigFlags::default());
    }

    #[test]
    fn test_config_union_prefers_other() {
        let file = ConfigFlags {
            modifier: Some(ModifierKey::Control),
            max_notes: Some(10),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            modifier: Some(ModifierKey::Super),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert_eq!(merged.modifier, Some(ModifierKey::Super));
        assert_eq!(merged.max_notes, Some(10));
    }

    #[test]
    fn test_super_falls_back_to_ctrl_without_enhancement() {
        assert_eq!(ModifierKey::Super.usable(false), ModifierKey::Control);
        assert_eq!(ModifierKey::Super.usable(true), ModifierKey::Super);
        assert_eq!(ModifierKey::Control.usable(false), ModifierKey::Control);
        assert_eq!(ModifierKey::Control.usable(true), ModifierKey::Control);
    }

    #[test]
    fn test_shortcut_spelling() {
        assert_eq!(ModifierKey::Control.shortcut('S'), "Ctrl+S");
        assert_eq!(ModifierKey::Super.shortcut('Q'), "⌘Q");
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            modifier: Some(ModifierKey::Control),
            max_notes: Some(50),
            max_note_bytes: Some(4096),
            log_file: Some(PathBuf::from("mdnotes.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        assert_eq!(load_config_flags(&path).unwrap(), flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(load_config_flags(&path).unwrap(), ConfigFlags::default());
    }
}
