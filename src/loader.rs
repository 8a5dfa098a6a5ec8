//! Profile Loader
//!
//! Fetches directory records and reshapes one into an [`EmployeeProfile`],
//! degrading to the local sample dataset whenever the directory cannot be used.

use crate::consts::cli_consts::messages::FALLBACK_WARNING;
use crate::consts::cli_consts::SAMPLE_EMPLOYEES;
use crate::directory::Directory;
use crate::directory::error::DirectoryError;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::profile::{DirectoryUser, EmployeeProfile, Location, PersonName};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// What the view is showing: a load in flight, or a resolved profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded {
        profile: EmployeeProfile,
        /// The profile came from the local sample dataset.
        using_fallback: bool,
        /// User-visible explanation of why the fallback was used.
        warning: Option<String>,
    },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn profile(&self) -> Option<&EmployeeProfile> {
        match self {
            LoadState::Loading => None,
            LoadState::Loaded { profile, .. } => Some(profile),
        }
    }
}

type SharedRng = Arc<Mutex<Box<dyn RngCore + Send>>>;

/// Loads random employee profiles. Cheap to clone; clones share the directory
/// and the random source.
#[derive(Clone)]
pub struct ProfileLoader {
    directory: Arc<dyn Directory>,
    rng: SharedRng,
    error_classifier: ErrorClassifier,
    event_sender: Option<mpsc::Sender<Event>>,
}

impl ProfileLoader {
    /// Creates a loader drawing randomness from OS entropy.
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self::with_rng(directory, StdRng::from_entropy())
    }

    /// Creates a loader with an explicit random source, e.g. a seeded `StdRng`.
    pub fn with_rng<R>(directory: Arc<dyn Directory>, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            directory,
            rng: Arc::new(Mutex::new(Box::new(rng))),
            error_classifier: ErrorClassifier::new(),
            event_sender: None,
        }
    }

    /// Publish activity events on the given channel.
    pub fn with_events(mut self, event_sender: mpsc::Sender<Event>) -> Self {
        self.event_sender = Some(event_sender);
        self
    }

    /// Produces a profile from the directory, or from the sample dataset if
    /// the directory fails in any way. Never returns [`LoadState::Loading`].
    pub async fn load_random_profile(&self) -> LoadState {
        let remote = match self.directory.fetch_users().await {
            Ok(users) => self.select_remote(&users),
            Err(e) => Err(e),
        };

        match remote {
            Ok(profile) => {
                self.publish(Event::loader_with_level(
                    format!("Loaded {} from the directory", profile.name),
                    EventType::Success,
                    LogLevel::Info,
                ))
                .await;
                LoadState::Loaded {
                    profile,
                    using_fallback: false,
                    warning: None,
                }
            }
            Err(e) => {
                let log_level = self.error_classifier.classify_fetch_error(&e);
                self.publish(Event::loader_with_level(
                    if e.is_malformed_response() {
                        format!("Malformed directory response: {}", e)
                    } else {
                        format!("Directory API error: {}", e)
                    },
                    EventType::Error,
                    log_level,
                ))
                .await;

                let profile = self.sample_profile();
                self.publish(Event::loader_with_level(
                    format!("Showing sample profile {}", profile.name),
                    EventType::Fallback,
                    LogLevel::Info,
                ))
                .await;
                LoadState::Loaded {
                    profile,
                    using_fallback: true,
                    warning: Some(FALLBACK_WARNING.to_string()),
                }
            }
        }
    }

    /// Picks a record with a usable name and a predefined location, uniformly at random.
    fn select_remote(&self, users: &[DirectoryUser]) -> Result<EmployeeProfile, DirectoryError> {
        let candidates: Vec<&DirectoryUser> = users
            .iter()
            .filter(|user| PersonName::from_full_name(&user.name).is_some())
            .collect();

        let mut rng = self.lock_rng();
        let user = candidates
            .choose(&mut *rng)
            .ok_or(DirectoryError::EmptyDirectory)?;
        let locations: Vec<Location> = Location::predefined().collect();
        let location = locations
            .choose(&mut *rng)
            .cloned()
            .ok_or(DirectoryError::EmptyDirectory)?;

        EmployeeProfile::from_directory_user(user, location)
            .ok_or(DirectoryError::EmptyDirectory)
    }

    /// One of the fixed sample employees, uniformly at random.
    pub fn sample_profile(&self) -> EmployeeProfile {
        let mut rng = self.lock_rng();
        // Four entries divide 2^32 evenly, so the modulo is unbiased.
        let index = (rng.next_u32() as usize) % SAMPLE_EMPLOYEES.len();
        EmployeeProfile::from(&SAMPLE_EMPLOYEES[index])
    }

    fn lock_rng(&self) -> std::sync::MutexGuard<'_, Box<dyn RngCore + Send>> {
        // A panic while holding the lock cannot leave an RNG in an unusable state.
        self.rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn publish(&self, event: Event) {
        event.log();
        if let Some(sender) = &self.event_sender {
            let _ = sender.send(event).await;
        }
    }
}
