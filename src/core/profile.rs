//! Profile bookkeeping: the default profile, create, switch, list.

use tracing::info;

use crate::db::kv::KeyValueStore;
use crate::db::profile_store::ProfileStore;
use crate::errors::{AppError, AppResult};
use crate::models::profile::{Profile, slugify};

pub const DEFAULT_PROFILE_ID: &str = "default";

pub struct ProfileLogic;

impl ProfileLogic {
    /// The active profile. Creates and activates `default` on first use, and
    /// falls back to the first known profile if the active id is stale.
    pub fn active<S: KeyValueStore>(store: &mut ProfileStore<S>) -> AppResult<Profile> {
        let mut profiles = store.profiles()?;

        if profiles.is_empty() {
            let profile = Profile::new(DEFAULT_PROFILE_ID, "Default");
            profiles.push(profile.clone());
            store.save_profiles(&profiles)?;
            store.set_active_profile_id(&profile.id)?;
            info!("created default profile");
            return Ok(profile);
        }

        let active_id = store.active_profile_id()?;
        if let Some(p) = active_id
            .as_deref()
            .and_then(|id| profiles.iter().find(|p| p.id == id))
        {
            return Ok(p.clone());
        }

        let first = profiles[0].clone();
        store.set_active_profile_id(&first.id)?;
        Ok(first)
    }

    /// Creates a profile whose id is a unique slug of `name`.
    pub fn create<S: KeyValueStore>(store: &mut ProfileStore<S>, name: &str) -> AppResult<Profile> {
        // make sure `default` exists before adding the second profile
        Self::active(store)?;

        let base = slugify(name);
        if base.is_empty() {
            return Err(AppError::InvalidProfileName(name.to_string()));
        }

        let mut profiles = store.profiles()?;
        let mut id = base.clone();
        let mut n = 2;
        while profiles.iter().any(|p| p.id == id) {
            id = format!("{base}-{n}");
            n += 1;
        }

        let profile = Profile::new(id, name.trim());
        profiles.push(profile.clone());
        store.save_profiles(&profiles)?;

        info!(id = %profile.id, "profile created");
        Ok(profile)
    }

    /// Activates the profile matching `key` by id, or by name ignoring case.
    pub fn switch<S: KeyValueStore>(store: &mut ProfileStore<S>, key: &str) -> AppResult<Profile> {
        Self::active(store)?;
        let profiles = store.profiles()?;

        let found = profiles
            .iter()
            .find(|p| p.id == key)
            .or_else(|| profiles.iter().find(|p| p.name.eq_ignore_ascii_case(key.trim())))
            .cloned()
            .ok_or_else(|| AppError::ProfileNotFound(key.to_string()))?;

        store.set_active_profile_id(&found.id)?;
        Ok(found)
    }

    /// The profile a command works on: the one matching `requested` (id, or
    /// name ignoring case) without switching to it, or the active one.
    /// A lookup by key never writes to the store, except `default` on a
    /// store that has no profiles yet.
    pub fn resolve<S: KeyValueStore>(
        store: &mut ProfileStore<S>,
        requested: Option<&str>,
    ) -> AppResult<Profile> {
        let Some(key) = requested else {
            return Self::active(store);
        };

        let profiles = store.profiles()?;
        if profiles.is_empty() && key == DEFAULT_PROFILE_ID {
            return Self::active(store);
        }

        profiles
            .into_iter()
            .find(|p| p.id == key || p.name.eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| AppError::ProfileNotFound(key.to_string()))
    }

    /// All profiles plus the id of the active one.
    pub fn list<S: KeyValueStore>(store: &mut ProfileStore<S>) -> AppResult<(Vec<Profile>, String)> {
        let active = Self::active(store)?;
        Ok((store.profiles()?, active.id))
    }
}
