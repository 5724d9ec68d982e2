//! Typed access to the per-profile JSON blobs kept in a [`KeyValueStore`].
//!
//! Keys:
//! - `profiles`              → `[Profile]`
//! - `active_profile`        → profile id
//! - `records:{profile_id}`  → `[PunchRecord]`
//! - `settings:{profile_id}` → `UserSettings`

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::profile::Profile;
use crate::models::punch::PunchRecord;
use crate::models::settings::UserSettings;

const PROFILES_KEY: &str = "profiles";
const ACTIVE_PROFILE_KEY: &str = "active_profile";

pub fn records_key(profile_id: &str) -> String {
    format!("records:{profile_id}")
}

pub fn settings_key(profile_id: &str) -> String {
    format!("settings:{profile_id}")
}

pub struct ProfileStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Missing key → `T::default()`; malformed value → `AppError::Store`.
    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> AppResult<T> {
        match self.store.get(key)? {
            None | Some(Value::Null) => Ok(T::default()),
            Some(v) => serde_json::from_value(v).map_err(|e| AppError::Store {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let v = serde_json::to_value(value)?;
        self.store.set(key, &v)
    }

    pub fn profiles(&self) -> AppResult<Vec<Profile>> {
        self.load(PROFILES_KEY)
    }

    pub fn save_profiles(&mut self, profiles: &[Profile]) -> AppResult<()> {
        self.save(PROFILES_KEY, &profiles)
    }

    pub fn active_profile_id(&self) -> AppResult<Option<String>> {
        self.load(ACTIVE_PROFILE_KEY)
    }

    pub fn set_active_profile_id(&mut self, id: &str) -> AppResult<()> {
        self.save(ACTIVE_PROFILE_KEY, &id)
    }

    pub fn records(&self, profile_id: &str) -> AppResult<Vec<PunchRecord>> {
        self.load(&records_key(profile_id))
    }

    pub fn save_records(&mut self, profile_id: &str, records: &[PunchRecord]) -> AppResult<()> {
        self.save(&records_key(profile_id), &records)
    }

    pub fn clear_records(&mut self, profile_id: &str) -> AppResult<()> {
        self.store.remove(&records_key(profile_id))
    }

    pub fn settings(&self, profile_id: &str) -> AppResult<UserSettings> {
        self.load(&settings_key(profile_id))
    }

    pub fn save_settings(&mut self, profile_id: &str, settings: &UserSettings) -> AppResult<()> {
        self.save(&settings_key(profile_id), settings)
    }
}
