#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use salat_times::domain::entities::{Location, LocationPatch, NewLocation};
use salat_times::domain::repositories::{LocationRepository, SettingsRepository, keys};
use salat_times::error::AppError;
use salat_times::state::AppState;

/// In-memory stand-in for the Postgres location repository.
pub struct InMemoryLocationRepository {
    rows: Mutex<Vec<Location>>,
    next_id: AtomicI64,
}

impl InMemoryLocationRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn create(&self, new_location: NewLocation) -> Result<Location, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|l| l.slug == new_location.slug) {
            return Err(AppError::conflict(
                "Location already exists",
                json!({ "slug": new_location.slug }),
            ));
        }

        let now = Utc::now();
        let location = Location {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            slug: new_location.slug,
            name: new_location.name,
            latitude: new_location.latitude,
            longitude: new_location.longitude,
            utc_offset: new_location.utc_offset,
            method: new_location.method,
            asr_school: new_location.asr_school,
            created_at: now,
            updated_at: now,
        };
        rows.push(location.clone());
        Ok(location)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Location>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|l| l.slug == slug).cloned())
    }

    async fn list(&self) -> Result<Vec<Location>, AppError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(rows)
    }

    async fn update(&self, slug: &str, patch: LocationPatch) -> Result<Option<Location>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(location) = rows.iter_mut().find(|l| l.slug == slug) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            location.name = name;
        }
        if let Some(latitude) = patch.latitude {
            location.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            location.longitude = longitude;
        }
        if let Some(utc_offset) = patch.utc_offset {
            location.utc_offset = utc_offset;
        }
        if let Some(method) = patch.method {
            location.method = method;
        }
        if let Some(asr_school) = patch.asr_school {
            location.asr_school = asr_school;
        }
        location.updated_at = Utc::now();

        Ok(Some(location.clone()))
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|l| l.slug != slug);
        Ok(rows.len() < before)
    }
}

/// In-memory stand-in for the Postgres settings repository.
pub struct InMemorySettingsRepository {
    values: Mutex<HashMap<String, String>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
        }
    }

    /// Seeds the same defaults the migrations insert.
    pub fn with_defaults() -> Self {
        let repo = Self::new();
        {
            let mut values = repo.values.lock().unwrap();
            values.insert(keys::DEFAULT_METHOD.to_string(), "MWL".to_string());
            values.insert(keys::DEFAULT_ASR_SCHOOL.to_string(), "Shafii".to_string());
        }
        repo
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Application state over in-memory repositories, seeded like a fresh install.
pub fn test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryLocationRepository::new()),
        Arc::new(InMemorySettingsRepository::with_defaults()),
    )
}

/// Adds the Samarinda preset used throughout the handler tests.
pub async fn seed_samarinda(state: &AppState) {
    state
        .location_service
        .create(NewLocation {
            slug: "samarinda".to_string(),
            name: "Samarinda".to_string(),
            latitude: -0.502106,
            longitude: 117.153709,
            utc_offset: 8.0,
            method: None,
            asr_school: None,
        })
        .await
        .unwrap();
}
