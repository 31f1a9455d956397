//! Favorite locations.
//!
//! Stores keep a set of city names in first-insertion order. Names are
//! trimmed and compared ASCII case-insensitively.

use std::{ffi::OsString, fmt, io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::WeatherError;

#[async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn add(&self, city: &str) -> Result<(), WeatherError>;

    async fn list(&self) -> Result<Vec<String>, WeatherError>;
}

fn normalize(city: &str) -> Result<String, WeatherError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(WeatherError::InvalidInput("City is required".to_string()));
    }
    Ok(city.to_string())
}

fn insert_unique(cities: &mut Vec<String>, city: String) -> bool {
    if cities.iter().any(|c| c.eq_ignore_ascii_case(&city)) {
        return false;
    }
    cities.push(city);
    true
}

#[derive(Debug, Default)]
pub struct MemoryFavorites {
    cities: RwLock<Vec<String>>,
}

impl MemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavorites {
    async fn add(&self, city: &str) -> Result<(), WeatherError> {
        let city = normalize(city)?;
        insert_unique(&mut *self.cities.write().await, city);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, WeatherError> {
        Ok(self.cities.read().await.clone())
    }
}

/// Favorites persisted as a JSON array of names.
///
/// Each add writes the whole list to a sibling temp file and renames it over
/// the target, so readers see either the old list or the new one. Readers and
/// writers inside one process are ordered by `lock`.
#[derive(Debug)]
pub struct JsonFileFavorites {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileFavorites {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: RwLock::new(()) }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_all(&self) -> Result<Vec<String>, WeatherError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(WeatherError::StoreFailure(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            WeatherError::StoreFailure(format!("Failed to parse {}: {e}", self.path.display()))
        })
    }

    async fn write_all(&self, cities: &[String]) -> Result<(), WeatherError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| self.write_failure(e))?;
        }
        let json = serde_json::to_string_pretty(cities).map_err(|e| self.write_failure(e))?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, json).await.map_err(|e| self.write_failure(e))?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(self.write_failure(e));
        }
        Ok(())
    }

    fn write_failure(&self, e: impl fmt::Display) -> WeatherError {
        WeatherError::StoreFailure(format!("Failed to write {}: {e}", self.path.display()))
    }
}

#[async_trait]
impl FavoritesStore for JsonFileFavorites {
    async fn add(&self, city: &str) -> Result<(), WeatherError> {
        let city = normalize(city)?;
        let _guard = self.lock.write().await;

        let mut cities = self.read_all().await?;
        if insert_unique(&mut cities, city) {
            self.write_all(&cities).await?;
        } else {
            debug!(path = %self.path.display(), "favorite already present");
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, WeatherError> {
        let _guard = self.lock.read().await;
        self.read_all().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn memory_store_keeps_insertion_order_without_duplicates() {
        let store = MemoryFavorites::new();
        store.add("Mumbai").await.unwrap();
        store.add("  Pune ").await.unwrap();
        store.add("mumbai").await.unwrap();

        assert_eq!(store.list().await.unwrap(), vec!["Mumbai", "Pune"]);
    }

    #[tokio::test]
    async fn blank_city_is_rejected() {
        let store = MemoryFavorites::new();
        let err = store.add("   ").await.unwrap_err();
        assert!(matches!(err, WeatherError::InvalidInput(_)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileFavorites::new(dir.path().join("favorites.json"));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("favorites.json");

        let store = JsonFileFavorites::new(&path);
        store.add("Oslo").await.unwrap();
        store.add("Lima").await.unwrap();
        store.add("OSLO").await.unwrap();

        let reopened = JsonFileFavorites::new(&path);
        assert_eq!(reopened.list().await.unwrap(), vec!["Oslo", "Lima"]);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_store_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileFavorites::new(&path);
        assert!(matches!(store.list().await, Err(WeatherError::StoreFailure(_))));
        assert!(matches!(store.add("Rome").await, Err(WeatherError::StoreFailure(_))));
    }

    #[tokio::test]
    async fn file_store_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let store = JsonFileFavorites::new(&path);
        store.add("Oslo").await.unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("favorites.json.tmp").exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn file_store_reads_stay_consistent_during_adds() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonFileFavorites::new(dir.path().join("favorites.json")));

        let writer = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for i in 0..200 {
                    store.add(&format!("City {i}")).await.unwrap();
                }
            })
        };

        let mut last_len = 0;
        while !writer.is_finished() {
            let cities = store.list().await.unwrap();
            assert!(cities.len() >= last_len);
            last_len = cities.len();
        }
        writer.await.unwrap();

        let cities = store.list().await.unwrap();
        assert_eq!(cities.len(), 200);
        assert_eq!(cities[0], "City 0");
        assert_eq!(cities[199], "City 199");
    }
}
