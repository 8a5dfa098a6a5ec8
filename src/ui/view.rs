//! Profile view model
//!
//! A pure projection of [`LoadState`] into what the screen shows. The TUI
//! renders it with ratatui; headless mode prints its `Display` form.

use crate::consts::cli_consts::messages::{LOADING, RELOAD_LABEL, SAMPLE_DATA_NOTICE};
use crate::loader::LoadState;
use crate::ui::image::ProfileImage;
use std::fmt::{Display, Formatter};

pub const TITLE: &str = "Employee Profile";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The loader's warning, shown as an error line.
    Warning(String),
    /// Reminder on the card that the profile is sample data.
    SampleData,
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Warning(text) => text,
            Notice::SampleData => SAMPLE_DATA_NOTICE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadControl {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub image_src: String,
    pub image_is_placeholder: bool,
    /// Alt text of the image, also the card heading.
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub loading_text: Option<&'static str>,
    pub warning: Option<Notice>,
    pub card: Option<ProfileCard>,
    pub sample_notice: Option<Notice>,
    pub reload: ReloadControl,
}

impl ProfileView {
    /// Project the current state. `image` overrides the profile's own URL once
    /// the image element has applied its placeholder.
    pub fn from_state(state: &LoadState, image: Option<&ProfileImage>) -> Self {
        match state {
            LoadState::Loading => Self {
                loading_text: Some(LOADING),
                warning: None,
                card: None,
                sample_notice: None,
                reload: ReloadControl {
                    label: LOADING,
                    enabled: false,
                },
            },
            LoadState::Loaded {
                profile,
                using_fallback,
                warning,
            } => {
                let (image_src, image_is_placeholder) = match image {
                    Some(image) => (image.src().to_string(), image.fallback_applied()),
                    None => (profile.image_url.clone(), false),
                };
                Self {
                    loading_text: None,
                    warning: warning.clone().map(Notice::Warning),
                    card: Some(ProfileCard {
                        image_src,
                        image_is_placeholder,
                        full_name: profile.name.to_string(),
                        email: profile.email.clone(),
                        phone: profile.phone.clone(),
                        location: profile.location.to_string(),
                    }),
                    sample_notice: using_fallback.then_some(Notice::SampleData),
                    reload: ReloadControl {
                        label: RELOAD_LABEL,
                        enabled: true,
                    },
                }
            }
        }
    }
}

impl Display for ProfileView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", TITLE)?;
        if let Some(loading) = self.loading_text {
            writeln!(f, "{}", loading)?;
        }
        if let Some(warning) = &self.warning {
            writeln!(f, "! {}", warning.text())?;
        }
        if let Some(card) = &self.card {
            let placeholder = if card.image_is_placeholder {
                " (placeholder)"
            } else {
                ""
            };
            writeln!(f, "Image: {}{}", card.image_src, placeholder)?;
            writeln!(f, "{}", card.full_name)?;
            writeln!(f, "Email: {}", card.email)?;
            writeln!(f, "Phone: {}", card.phone)?;
            writeln!(f, "Location: {}", card.location)?;
        }
        if let Some(notice) = &self.sample_notice {
            writeln!(f, "{}", notice.text())?;
        }
        let state = if self.reload.enabled { "" } else { " (disabled)" };
        write!(f, "[{}]{}", self.reload.label, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::messages::FALLBACK_WARNING;
    use crate::consts::cli_consts::SAMPLE_EMPLOYEES;
    use crate::profile::EmployeeProfile;

    fn fallback_state() -> LoadState {
        LoadState::Loaded {
            profile: EmployeeProfile::from(&SAMPLE_EMPLOYEES[1]),
            using_fallback: true,
            warning: Some(FALLBACK_WARNING.to_string()),
        }
    }

    #[test]
    fn test_loading_disables_reload() {
        let view = ProfileView::from_state(&LoadState::Loading, None);
        assert_eq!(view.loading_text, Some("Loading..."));
        assert!(view.card.is_none());
        assert!(!view.reload.enabled);
        assert_eq!(view.reload.label, "Loading...");
    }

    #[test]
    fn test_fallback_shows_both_notices() {
        let view = ProfileView::from_state(&fallback_state(), None);
        let card = view.card.as_ref().unwrap();

        assert_eq!(card.full_name, "Jane Smith");
        assert_eq!(card.location, "London, United Kingdom");
        assert_eq!(view.warning, Some(Notice::Warning(FALLBACK_WARNING.to_string())));
        assert_eq!(view.sample_notice, Some(Notice::SampleData));
        assert!(view.reload.enabled);
        assert_eq!(view.reload.label, "Get New Employee");
    }

    #[test]
    fn test_remote_profile_has_no_notices() {
        let state = LoadState::Loaded {
            profile: EmployeeProfile::from(&SAMPLE_EMPLOYEES[0]),
            using_fallback: false,
            warning: None,
        };
        let view = ProfileView::from_state(&state, None);
        assert!(view.warning.is_none());
        assert!(view.sample_notice.is_none());
    }

    #[test]
    fn test_image_element_overrides_profile_url() {
        let mut image = ProfileImage::new("https://broken.example/a.svg", "Jane");
        image.on_load_error();

        let view = ProfileView::from_state(&fallback_state(), Some(&image));
        let card = view.card.unwrap();
        assert_eq!(card.image_src, "https://via.placeholder.com/150?text=Jane");
        assert!(card.image_is_placeholder);
    }

    #[test]
    fn test_plain_text_rendering() {
        let text = ProfileView::from_state(&fallback_state(), None).to_string();
        assert!(text.starts_with("Employee Profile\n! JSONPlaceholder API is unavailable."));
        assert!(text.contains("Email: jane.smith@example.com\n"));
        assert!(text.contains("Phone: (555) 987-6543\n"));
        assert!(text.contains("Location: London, United Kingdom\n"));
        assert!(text.contains(SAMPLE_DATA_NOTICE));
        assert!(text.ends_with("[Get New Employee]"));

        let loading = ProfileView::from_state(&LoadState::Loading, None).to_string();
        assert_eq!(loading, "Employee Profile\nLoading...\n[Loading...] (disabled)");
    }
}
