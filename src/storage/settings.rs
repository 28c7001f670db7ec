use anyhow::Result;

use super::db::LocalStorage;
use crate::repositories::SettingRepository;

const THEME_KEY: &str = "theme";

/// Persisted theme flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl LocalStorage {
    pub async fn store_theme(&self, theme: ThemeMode) -> Result<()> {
        SettingRepository::set(&self.conn, THEME_KEY, theme.as_str()).await
    }

    /// The persisted theme, or `None` when the flag was never written.
    pub async fn load_theme(&self) -> Result<Option<ThemeMode>> {
        Ok(SettingRepository::get(&self.conn, THEME_KEY)
            .await?
            .as_deref()
            .and_then(ThemeMode::parse))
    }
}
