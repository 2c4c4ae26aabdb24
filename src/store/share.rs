//! Short-link sharing of palettes.
//!
//! [`MemoryShareStore`] keeps everything in process memory: shared palettes
//! disappear when the store is dropped or the process exits.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::ColorPalette;
use crate::color::Color;

/// Shared palettes must have this many colors.
pub const SHARE_SIZE: RangeInclusive<usize> = 4..=6;

const SHARE_ID_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("a shared palette needs 4 to 6 colors, got {0}")]
    InvalidSize(usize),
    #[error("share store lock poisoned")]
    Poisoned,
}

/// Body of `POST /api/share-palette`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharePaletteRequest {
    pub colors: Vec<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Response to `POST /api/share-palette`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePaletteResponse {
    pub share_id: String,
    pub share_url: String,
    pub palette: ColorPalette,
}

/// Response to `GET /api/shared/:shareId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedPaletteResponse {
    pub palette: ColorPalette,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
}

pub trait ShareStore {
    fn create(
        &self,
        request: SharePaletteRequest,
        base_url: &str,
    ) -> Result<SharePaletteResponse, ShareError>;
    /// `None` for an unknown id.
    fn get(&self, share_id: &str) -> Result<Option<SharedPaletteResponse>, ShareError>;
    /// Bump the view counter, returning the new count.
    fn record_view(&self, share_id: &str) -> Result<Option<u64>, ShareError>;
}

#[derive(Debug, Clone)]
struct Entry {
    palette: ColorPalette,
    view_count: u64,
    created_at: DateTime<Utc>,
}

/// Volatile share map guarded by a mutex.
#[derive(Debug, Default)]
pub struct MemoryShareStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryShareStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, ShareError> {
        let entries = self.entries.lock().map_err(|_| ShareError::Poisoned)?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, ShareError> {
        Ok(self.len()? == 0)
    }
}

fn new_share_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(SHARE_ID_LEN)
        .map(char::from)
        .collect()
}

impl ShareStore for MemoryShareStore {
    fn create(
        &self,
        request: SharePaletteRequest,
        base_url: &str,
    ) -> Result<SharePaletteResponse, ShareError> {
        if !SHARE_SIZE.contains(&request.colors.len()) {
            return Err(ShareError::InvalidSize(request.colors.len()));
        }
        let mut entries = self.entries.lock().map_err(|_| ShareError::Poisoned)?;

        let mut rng = rand::thread_rng();
        let mut share_id = new_share_id(&mut rng);
        while entries.contains_key(&share_id) {
            debug!("share id collision on {share_id}, retrying");
            share_id = new_share_id(&mut rng);
        }

        let created_at = Utc::now();
        let palette = ColorPalette {
            id: Uuid::new_v4().to_string(),
            colors: request.colors,
            theme: request.theme,
            created_at,
            share_id: Some(share_id.clone()),
            name: request.name,
        };
        entries.insert(
            share_id.clone(),
            Entry {
                palette: palette.clone(),
                view_count: 0,
                created_at,
            },
        );
        info!("shared palette as {share_id}");

        Ok(SharePaletteResponse {
            share_url: format!("{}/shared/{share_id}", base_url.trim_end_matches('/')),
            share_id,
            palette,
        })
    }

    fn get(&self, share_id: &str) -> Result<Option<SharedPaletteResponse>, ShareError> {
        let entries = self.entries.lock().map_err(|_| ShareError::Poisoned)?;
        Ok(entries.get(share_id).map(|e| SharedPaletteResponse {
            palette: e.palette.clone(),
            view_count: e.view_count,
            created_at: e.created_at,
        }))
    }

    fn record_view(&self, share_id: &str) -> Result<Option<u64>, ShareError> {
        let mut entries = self.entries.lock().map_err(|_| ShareError::Poisoned)?;
        Ok(entries.get_mut(share_id).map(|e| {
            e.view_count += 1;
            e.view_count
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn request(n: u8) -> SharePaletteRequest {
        SharePaletteRequest {
            colors: (0..n).map(|i| Color::new(i, i, i)).collect(),
            theme: None,
            name: Some("test".into()),
        }
    }

    #[test]
    fn create_then_get() {
        let store = MemoryShareStore::new();
        let shared = store.create(request(5), "https://example.test/").unwrap();

        assert_eq!(shared.share_id.len(), SHARE_ID_LEN);
        assert!(shared.share_id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(
            shared.share_url,
            format!("https://example.test/shared/{}", shared.share_id)
        );
        assert_eq!(shared.palette.share_id.as_deref(), Some(shared.share_id.as_str()));

        let fetched = store.get(&shared.share_id).unwrap().unwrap();
        assert_eq!(fetched.palette, shared.palette);
        assert_eq!(fetched.view_count, 0);
    }

    #[test]
    fn size_is_validated() {
        let store = MemoryShareStore::new();
        assert_eq!(
            store.create(request(3), "").unwrap_err(),
            ShareError::InvalidSize(3)
        );
        assert_eq!(
            store.create(request(7), "").unwrap_err(),
            ShareError::InvalidSize(7)
        );
        assert!(store.create(request(4), "").is_ok());
        assert!(store.create(request(6), "").is_ok());
        assert_eq!(store.len(), Ok(2));
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let store = Arc::new(MemoryShareStore::new());
        let id = store.create(request(4), "").unwrap().share_id;
        let writer = Arc::clone(&store);
        let result = std::thread::spawn(move || {
            let _guard = writer.entries.lock().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(result.is_err());

        assert_eq!(store.len(), Err(ShareError::Poisoned));
        assert_eq!(store.is_empty(), Err(ShareError::Poisoned));
        assert_eq!(store.get(&id).unwrap_err(), ShareError::Poisoned);
        assert_eq!(store.record_view(&id).unwrap_err(), ShareError::Poisoned);
    }

    #[test]
    fn views_are_counted() {
        let store = MemoryShareStore::new();
        let id = store.create(request(4), "").unwrap().share_id;
        assert_eq!(store.record_view(&id).unwrap(), Some(1));
        assert_eq!(store.record_view(&id).unwrap(), Some(2));
        assert_eq!(store.get(&id).unwrap().unwrap().view_count, 2);
    }

    #[test]
    fn unknown_id_is_none() {
        let store = MemoryShareStore::new();
        assert!(store.get("missing").unwrap().is_none());
        assert_eq!(store.record_view("missing").unwrap(), None);
    }

    #[test]
    fn concurrent_views_are_not_lost() {
        let store = Arc::new(MemoryShareStore::new());
        let id = store.create(request(5), "").unwrap().share_id;
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let id = id.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        store.record_view(&id).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.get(&id).unwrap().unwrap().view_count, 800);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let store = MemoryShareStore::new();
        let shared = store.create(request(4), "").unwrap();
        let json = serde_json::to_value(&shared).unwrap();
        assert!(json.get("shareId").is_some());
        assert!(json.get("shareUrl").is_some());
        assert!(json["palette"].get("createdAt").is_some());

        let body: SharePaletteRequest =
            serde_json::from_str(r##"{"colors":["#FF0000","#00FF00","#0000FF","#FFFFFF"]}"##)
                .unwrap();
        assert_eq!(body.colors.len(), 4);
        assert!(body.theme.is_none());
    }
}
