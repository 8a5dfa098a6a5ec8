//! Image element state
//!
//! Mirrors a display surface's `<img>`: when the source fails to load it is
//! swapped for a placeholder, and the swap is disarmed after the first use so
//! a failing placeholder cannot trigger another replacement.

use crate::profile::placeholder_url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileImage {
    src: String,
    /// Text the placeholder is labelled with (the first name).
    placeholder_label: String,
    fallback_applied: bool,
}

impl ProfileImage {
    pub fn new(src: &str, placeholder_label: &str) -> Self {
        Self {
            src: src.to_string(),
            placeholder_label: placeholder_label.to_string(),
            fallback_applied: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn fallback_applied(&self) -> bool {
        self.fallback_applied
    }

    /// Handle a load failure of the current source. Returns `true` if the
    /// source was replaced.
    pub fn on_load_error(&mut self) -> bool {
        if self.fallback_applied {
            return false;
        }
        self.fallback_applied = true;
        self.src = placeholder_url(&self.placeholder_label);
        true
    }
}
