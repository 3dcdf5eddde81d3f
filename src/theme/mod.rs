//! Theme handling for the portfolio shell.
//!
//! The shell knows three themes: `dark`, `light` and `system`. The active
//! theme is persisted inside the config file so it survives restarts, and
//! theme switches performed by the `mode` command are announced on a
//! [`ThemeBus`] so that the REPL (prompt, highlighter) and the persistence
//! layer can react independently of the command layer.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Mutex, RwLock};

use nu_ansi_term::{Color, Style};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, value};

use crate::error::{Result, ThemeError};

/// User-selectable theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    /// Follow the terminal's color preference at application time.
    System,
}

/// A theme with `system` already resolved against the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Dark,
    Light,
}

impl Theme {
    /// All accepted theme names, in the order the `mode` command cycles them.
    pub const NAMES: [&'static str; 3] = ["dark", "light", "system"];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::System => "system",
        }
    }

    /// Resolve `system` against the terminal environment.
    pub fn resolve(&self) -> ResolvedTheme {
        match self {
            Theme::Dark => ResolvedTheme::Dark,
            Theme::Light => ResolvedTheme::Light,
            Theme::System => system_preference(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            "system" => Ok(Theme::System),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

/// Guess the terminal's background preference.
///
/// Checks `COLORFGBG` (set by several terminal emulators to
/// `"<fg>;<bg>"`); a background color index of 0..=6 or 8 means a dark
/// background. Terminals that don't set it get `dark`, which is the safer
/// default for ANSI palettes.
fn system_preference() -> ResolvedTheme {
    if let Ok(colorfgbg) = std::env::var("COLORFGBG")
        && let Some(bg) = colorfgbg.rsplit(';').next()
        && let Ok(index) = bg.trim().parse::<u8>()
    {
        return if index <= 6 || index == 8 {
            ResolvedTheme::Dark
        } else {
            ResolvedTheme::Light
        };
    }

    ResolvedTheme::Dark
}

/// Styles derived from the active theme, consumed by the prompt,
/// highlighter and banner.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Prompt text (`guest@icepuma.dev`).
    pub prompt: Style,
    /// A command word that matches a registered command.
    pub command_ok: Style,
    /// A command word that matches nothing.
    pub command_err: Style,
    /// Ghost-text hint after the cursor.
    pub hint: Style,
    /// Headers and labels in rendered output.
    pub accent: Style,
}

impl Palette {
    /// Build the palette for a theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme.resolve() {
            ResolvedTheme::Dark => Self {
                prompt: Style::new().bold().fg(Color::LightGreen),
                command_ok: Style::new().fg(Color::LightGreen),
                command_err: Style::new().fg(Color::LightRed),
                hint: Style::new().italic().fg(Color::DarkGray),
                accent: Style::new().bold().fg(Color::LightBlue),
            },
            ResolvedTheme::Light => Self {
                prompt: Style::new().bold().fg(Color::Green),
                command_ok: Style::new().fg(Color::Green),
                command_err: Style::new().fg(Color::Red),
                hint: Style::new().italic().fg(Color::DarkGray),
                accent: Style::new().bold().fg(Color::Blue),
            },
        }
    }
}

/// Persistence contract for the active theme.
///
/// `load` must fall back to (and persist) [`Theme::System`] when nothing
/// valid is stored, so a fresh profile always starts in `system` mode.
pub trait ThemeStore: Send + Sync {
    /// Read the persisted theme, persisting the `system` default if the
    /// stored value is absent or invalid.
    fn load(&self) -> Result<Theme>;

    /// Persist a theme and return it.
    fn set(&self, theme: Theme) -> Result<Theme>;
}

/// Theme store persisting into the `[theme]` table of the config file.
///
/// Edits the document in place with `toml_edit` so comments and formatting
/// in a hand-maintained config file survive theme switches.
pub struct FileThemeStore {
    /// Path of the TOML config file holding the `theme.current` key.
    path: PathBuf,
}

impl FileThemeStore {
    /// Create a store backed by the given config file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the raw persisted name, if any.
    fn read_raw(&self) -> Option<String> {
        let text = fs::read_to_string(&self.path).ok()?;
        let doc: DocumentMut = text.parse().ok()?;
        doc.get("theme")?
            .get("current")?
            .as_str()
            .map(str::to_string)
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Theme> {
        match self.read_raw().map(|raw| raw.parse::<Theme>()) {
            Some(Ok(theme)) => Ok(theme),
            // Absent or unparseable: fall back to `system` and persist it.
            _ => self.set(Theme::System),
        }
    }

    fn set(&self, theme: Theme) -> Result<Theme> {
        let mut doc: DocumentMut = match fs::read_to_string(&self.path) {
            Ok(text) => text
                .parse()
                .map_err(|e| ThemeError::PersistFailed(format!("{e}")))?,
            Err(_) => DocumentMut::new(),
        };

        doc["theme"]["current"] = value(theme.as_str());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ThemeError::PersistFailed(format!("{e}")))?;
        }
        fs::write(&self.path, doc.to_string())
            .map_err(|e| ThemeError::PersistFailed(format!("{e}")))?;

        Ok(theme)
    }
}

/// In-memory theme store for tests and `--eval` one-shots.
#[derive(Default)]
pub struct MemoryThemeStore {
    current: RwLock<Option<Theme>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Theme> {
        match *self.current.read().unwrap() {
            Some(theme) => Ok(theme),
            None => self.set(Theme::System),
        }
    }

    fn set(&self, theme: Theme) -> Result<Theme> {
        *self.current.write().unwrap() = Some(theme);
        Ok(theme)
    }
}

/// Broadcast channel for theme-change notifications.
///
/// The `mode` command broadcasts here; subscribers (persistence, prompt
/// palette) each hold their own receiver and drain it between events. The
/// event model is single-threaded, so delivery order equals broadcast
/// order.
#[derive(Default)]
pub struct ThemeBus {
    senders: Mutex<Vec<Sender<Theme>>>,
}

impl ThemeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener and return its receiving end.
    pub fn subscribe(&self) -> Receiver<Theme> {
        let (tx, rx) = channel();
        self.senders.lock().unwrap().push(tx);
        rx
    }

    /// Deliver a theme change to every live subscriber.
    ///
    /// Subscribers whose receiver has been dropped are pruned.
    pub fn broadcast(&self, theme: Theme) {
        let mut senders = self.senders.lock().unwrap();
        senders.retain(|tx| tx.send(theme).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_roundtrip() {
        for name in Theme::NAMES {
            let theme: Theme = name.parse().unwrap();
            assert_eq!(theme.as_str(), name);
        }
    }

    #[test]
    fn test_theme_parse_case_insensitive() {
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
    }

    #[test]
    fn test_theme_parse_unknown() {
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_memory_store_defaults_to_system() {
        let store = MemoryThemeStore::new();
        assert_eq!(store.load().unwrap(), Theme::System);
        // The default must have been persisted, not just returned.
        assert_eq!(store.load().unwrap(), Theme::System);
    }

    #[test]
    fn test_memory_store_set_then_load() {
        let store = MemoryThemeStore::new();
        store.set(Theme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let store = FileThemeStore::new(path.clone());

        // Nothing persisted yet: load writes the system default.
        assert_eq!(store.load().unwrap(), Theme::System);
        assert!(path.exists());

        store.set(Theme::Light).unwrap();
        assert_eq!(store.load().unwrap(), Theme::Light);
    }

    #[test]
    fn test_file_store_preserves_other_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# my settings\n[display]\ncolor_output = false\n").unwrap();

        let store = FileThemeStore::new(path.clone());
        store.set(Theme::Dark).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("# my settings"));
        assert!(text.contains("color_output = false"));
        assert!(text.contains("dark"));
    }

    #[test]
    fn test_file_store_invalid_value_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\ncurrent = \"sepia\"\n").unwrap();

        let store = FileThemeStore::new(path.clone());
        assert_eq!(store.load().unwrap(), Theme::System);

        // The fallback is persisted in place of the bad value.
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("system"));
    }

    #[test]
    fn test_bus_reaches_all_subscribers() {
        let bus = ThemeBus::new();
        let rx1 = bus.subscribe();
        let rx2 = bus.subscribe();

        bus.broadcast(Theme::Dark);

        assert_eq!(rx1.try_recv().unwrap(), Theme::Dark);
        assert_eq!(rx2.try_recv().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_bus_prunes_dropped_subscribers() {
        let bus = ThemeBus::new();
        let rx = bus.subscribe();
        drop(bus.subscribe());

        bus.broadcast(Theme::Light);
        bus.broadcast(Theme::Dark);

        assert_eq!(rx.try_recv().unwrap(), Theme::Light);
        assert_eq!(rx.try_recv().unwrap(), Theme::Dark);
    }
}
