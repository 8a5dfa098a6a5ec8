//! Profile Store
//!
//! The single state cell read by the view. Every load is issued a sequence
//! token; a completed load is applied only while its token is the latest one,
//! so a slow request can never overwrite the result of a newer reload.

use crate::loader::LoadState;
use crate::ui::image::ProfileImage;

/// Sequence token identifying one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct ProfileStore {
    state: LoadState,
    /// Image element for the current profile, recreated on every applied load.
    image: Option<ProfileImage>,
    latest: u64,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// A fresh store is `Loading`: the first load is issued on mount.
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            image: None,
            latest: 0,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn image(&self) -> Option<&ProfileImage> {
        self.image.as_ref()
    }

    /// Enter `Loading` and issue the token for the new request.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest += 1;
        self.state = LoadState::Loading;
        self.image = None;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Apply a finished load. Returns `false` when the result is stale and was discarded.
    pub fn complete(&mut self, ticket: LoadTicket, state: LoadState) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.image = state
            .profile()
            .map(|profile| ProfileImage::new(&profile.image_url, &profile.name.first));
        self.state = state;
        true
    }

    /// Report that the current image failed to load. Returns `true` when the
    /// placeholder was substituted.
    pub fn image_failed(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.image
            .as_mut()
            .map(ProfileImage::on_load_error)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{EmployeeProfile, Location, PersonName};

    fn loaded(first: &str) -> LoadState {
        LoadState::Loaded {
            profile: EmployeeProfile {
                name: PersonName {
                    first: first.to_string(),
                    last: first.to_string(),
                },
                email: format!("{}@x.com", first.to_lowercase()),
                phone: "555-0000".to_string(),
                location: Location::new("Paris", "France"),
                image_url: format!("https://avatars.dicebear.com/api/initials/{}.svg", first),
            },
            using_fallback: false,
            warning: None,
        }
    }

    #[test]
    fn test_new_store_is_loading() {
        let store = ProfileStore::new();
        assert!(store.state().is_loading());
        assert!(store.image().is_none());
    }

    #[test]
    fn test_complete_applies_current_load() {
        let mut store = ProfileStore::new();
        let ticket = store.begin_load();

        assert!(store.complete(ticket, loaded("Ada")));
        assert_eq!(store.state(), &loaded("Ada"));
        assert_eq!(
            store.image().unwrap().src(),
            "https://avatars.dicebear.com/api/initials/Ada.svg"
        );
    }

    #[test]
    // The older request resolves last; its result must not replace the newer one.
    fn test_stale_result_is_discarded() {
        let mut store = ProfileStore::new();
        let first = store.begin_load();
        let second = store.begin_load();

        assert!(store.complete(second, loaded("Grace")));
        assert!(!store.complete(first, loaded("Ada")));
        assert_eq!(store.state(), &loaded("Grace"));
        assert!(second > first);
    }

    #[test]
    fn test_reload_returns_to_loading() {
        let mut store = ProfileStore::new();
        let ticket = store.begin_load();
        store.complete(ticket, loaded("Ada"));

        store.begin_load();
        assert!(store.state().is_loading());
        assert!(store.image().is_none());
    }

    #[test]
    fn test_image_failure_substitutes_placeholder_once() {
        let mut store = ProfileStore::new();
        let ticket = store.begin_load();
        store.complete(ticket, loaded("Zoe"));

        assert!(store.image_failed(ticket));
        assert_eq!(
            store.image().unwrap().src(),
            "https://via.placeholder.com/150?text=Zoe"
        );
        assert!(!store.image_failed(ticket));
        assert_eq!(
            store.image().unwrap().src(),
            "https://via.placeholder.com/150?text=Zoe"
        );
    }

    #[test]
    fn test_stale_image_failure_is_ignored() {
        let mut store = ProfileStore::new();
        let old = store.begin_load();
        store.complete(old, loaded("Ada"));
        let current = store.begin_load();
        store.complete(current, loaded("Zoe"));

        assert!(!store.image_failed(old));
        assert!(!store.image().unwrap().fallback_applied());
    }
}
