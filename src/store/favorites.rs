use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use directories::ProjectDirs;
use log::{info, warn};
use uuid::Uuid;

use super::ColorPalette;
use crate::color::Color;

/// Oldest favorites are evicted past this many.
pub const MAX_FAVORITES: usize = 20;

const FILE_NAME: &str = "favorites.json";

/// Saved palettes, newest first.
pub trait FavoritesStore {
    fn save(&mut self, colors: Vec<Color>, theme: Option<String>) -> Result<ColorPalette>;
    /// Returns whether an entry with `id` existed.
    fn remove(&mut self, id: &str) -> Result<bool>;
    fn clear(&mut self) -> Result<()>;
    fn list(&self) -> Result<Vec<ColorPalette>>;
}

/// Platform data directory for paletteer, or `./.paletteer` when the
/// platform has none.
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "paletteer")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".paletteer"))
}

/// Favorites kept as a JSON array in `<dir>/favorites.json`.
#[derive(Debug, Clone)]
pub struct JsonFavorites {
    path: PathBuf,
}

impl JsonFavorites {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<ColorPalette>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read {}", self.path.display()))
            }
        };
        match serde_json::from_str(&raw) {
            Ok(favorites) => Ok(favorites),
            Err(e) => {
                warn!(
                    "discarding unreadable favorites file {}: {e}",
                    self.path.display()
                );
                std::fs::remove_file(&self.path)
                    .with_context(|| format!("failed to remove {}", self.path.display()))?;
                Ok(Vec::new())
            }
        }
    }

    fn store(&self, favorites: &[ColorPalette]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create data directory: {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(favorites)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write favorites to {}", self.path.display()))
    }
}

impl FavoritesStore for JsonFavorites {
    fn save(&mut self, colors: Vec<Color>, theme: Option<String>) -> Result<ColorPalette> {
        let entry = ColorPalette {
            id: Uuid::new_v4().to_string(),
            colors,
            theme,
            created_at: Utc::now(),
            share_id: None,
            name: None,
        };
        let mut favorites = self.load()?;
        favorites.insert(0, entry.clone());
        favorites.truncate(MAX_FAVORITES);
        self.store(&favorites)?;
        info!("saved favorite {} ({} stored)", entry.id, favorites.len());
        Ok(entry)
    }

    fn remove(&mut self, id: &str) -> Result<bool> {
        let mut favorites = self.load()?;
        let before = favorites.len();
        favorites.retain(|f| f.id != id);
        if favorites.len() == before {
            return Ok(false);
        }
        self.store(&favorites)?;
        info!("removed favorite {id}");
        Ok(true)
    }

    fn clear(&mut self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                Err(e).with_context(|| format!("failed to remove {}", self.path.display()))
            }
            _ => Ok(()),
        }
    }

    fn list(&self) -> Result<Vec<ColorPalette>> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> JsonFavorites {
        let dir = std::env::temp_dir()
            .join("paletteer-favorites-test")
            .join(name);
        let _ = std::fs::remove_dir_all(&dir);
        JsonFavorites::new(&dir)
    }

    fn palette(seed: u8) -> Vec<Color> {
        (0..5).map(|i| Color::new(seed, i, 0)).collect()
    }

    #[test]
    fn missing_file_lists_empty() {
        let store = temp_store("missing");
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn newest_first() {
        let mut store = temp_store("order");
        store.save(palette(1), None).unwrap();
        store.save(palette(2), Some("ocean".into())).unwrap();

        let list = store.list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].colors, palette(2));
        assert_eq!(list[0].theme.as_deref(), Some("ocean"));
        assert_eq!(list[1].colors, palette(1));
    }

    #[test]
    fn capped_at_twenty_evicting_oldest() {
        let mut store = temp_store("cap");
        for seed in 0..25 {
            store.save(palette(seed), None).unwrap();
        }
        let list = store.list().unwrap();
        assert_eq!(list.len(), MAX_FAVORITES);
        assert_eq!(list[0].colors, palette(24));
        assert_eq!(list[MAX_FAVORITES - 1].colors, palette(5));
    }

    #[test]
    fn remove_by_id() {
        let mut store = temp_store("remove");
        let keep = store.save(palette(1), None).unwrap();
        let drop = store.save(palette(2), None).unwrap();

        assert!(store.remove(&drop.id).unwrap());
        assert!(!store.remove(&drop.id).unwrap());
        let list = store.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, keep.id);
    }

    #[test]
    fn clear_removes_everything() {
        let mut store = temp_store("clear");
        store.save(palette(1), None).unwrap();
        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_discarded() {
        let store = temp_store("corrupt");
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(store.list().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn file_uses_camel_case_hex_json() {
        let mut store = temp_store("format");
        store.save(vec![Color::new(255, 0, 0)], None).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"#FF0000\""));
        assert!(!raw.contains("\"theme\""));
    }
}
