//! Light/dark theme preference.
//!
//! The theme is a plain value handed to whatever renders output. [`ThemeStore`] is the
//! single owner of the preference: it loads it, persists changes to a small TOML
//! file and notifies subscribers through a `tokio::sync::watch` channel.
//!
//! A saved preference is read the way the site reads it: `"dark"` selects the dark
//! theme and any other saved value selects light. Only a missing or unparseable file
//! falls back to the system preference.

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};
use tokio::sync::watch;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeError::Unknown(s.to_string())),
        }
    }
}

/// Utility-class style tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub card_bg: &'static str,
    pub card_border: &'static str,
    pub secondary_bg: &'static str,
    pub btn_primary: &'static str,
    pub btn_hover: &'static str,
    pub highlight: &'static str,
}

impl Palette {
    pub const LIGHT: Self = Self {
        background: "bg-white",
        text: "text-gray-800",
        border: "border-gray-200",
        card_bg: "bg-white",
        card_border: "border-gray-200",
        secondary_bg: "bg-gray-50",
        btn_primary: "bg-indigo-600",
        btn_hover: "hover:bg-indigo-700",
        highlight: "bg-indigo-50 text-indigo-700",
    };

    pub const DARK: Self = Self {
        background: "bg-gray-900",
        text: "text-white",
        border: "border-gray-700",
        card_bg: "bg-gray-800",
        card_border: "border-gray-700",
        secondary_bg: "bg-gray-800",
        btn_primary: "bg-indigo-600",
        btn_hover: "hover:bg-indigo-700",
        highlight: "bg-gray-800 text-indigo-400",
    };

    /// Token names and values, in declaration order.
    pub const fn tokens(&self) -> [(&'static str, &'static str); 9] {
        [
            ("background", self.background),
            ("text", self.text),
            ("border", self.border),
            ("cardBg", self.card_bg),
            ("cardBorder", self.card_border),
            ("secondaryBg", self.secondary_bg),
            ("btnPrimary", self.btn_primary),
            ("btnHover", self.btn_hover),
            ("highlight", self.highlight),
        ]
    }
}

#[derive(Serialize)]
struct ThemeFile {
    theme: Theme,
}

/// On-disk form as read back; the value is kept raw so unknown names still count as saved.
#[derive(Deserialize)]
struct SavedPreference {
    theme: String,
}

impl SavedPreference {
    fn theme(&self) -> Theme {
        if self.theme.trim().eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Owner of the persisted theme preference.
#[derive(Debug)]
pub struct ThemeStore {
    path: PathBuf,
    sender: watch::Sender<Theme>,
    /// Serializes read-modify-write so the file and the channel never disagree.
    update_lock: Mutex<()>,
}

impl ThemeStore {
    /// Open the store backed by `path`.
    ///
    /// A saved preference wins; otherwise `prefer_dark` (the system setting) decides.
    /// An unreadable or unparseable file is ignored with a warning.
    pub fn open(path: impl Into<PathBuf>, prefer_dark: bool) -> Self {
        let path = path.into();
        let initial = read_preference(&path).unwrap_or(if prefer_dark {
            Theme::Dark
        } else {
            Theme::Light
        });

        tracing::debug!("Theme store at {} starts as {}", path.display(), initial);
        let (sender, _) = watch::channel(initial);
        Self {
            path,
            sender,
            update_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current(&self) -> Theme {
        *self.sender.borrow()
    }

    /// Receiver that observes every theme change.
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.sender.subscribe()
    }

    /// Persist `theme` and notify subscribers. Nothing is published if the write fails.
    pub fn set(&self, theme: Theme) -> Result<Theme, ThemeError> {
        self.update(|_| theme)
    }

    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        self.update(Theme::toggle)
    }

    fn update(&self, next: impl FnOnce(Theme) -> Theme) -> Result<Theme, ThemeError> {
        // The guarded value is (), so a panic in another holder leaves nothing inconsistent.
        let _guard = self
            .update_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let previous = self.current();
        let theme = next(previous);
        write_preference(&self.path, theme)?;
        self.sender.send_replace(theme);
        if previous != theme {
            tracing::info!("Theme changed from {} to {}", previous, theme);
        }
        Ok(theme)
    }
}

fn read_preference(path: &Path) -> Option<Theme> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("Failed to read theme preference {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str::<SavedPreference>(&contents) {
        Ok(saved) => Some(saved.theme()),
        Err(e) => {
            tracing::warn!("Ignoring malformed theme preference {}: {}", path.display(), e);
            None
        }
    }
}

fn write_preference(path: &Path, theme: Theme) -> Result<(), ThemeError> {
    let contents = toml::to_string(&ThemeFile { theme })?;
    let io_err = |source| ThemeError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, contents).map_err(io_err)
}
