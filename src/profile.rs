//! Employee profile model
//!
//! The display-ready record shown by the viewer, the raw directory record it is
//! built from, and the URL helpers for avatars and placeholders.

use crate::consts::cli_consts::endpoints::{AVATAR_BASE_URL, PLACEHOLDER_BASE_URL};
use crate::consts::cli_consts::{LOCATIONS, SampleEmployee};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A user record as returned by the remote directory.
///
/// Only the fields the viewer needs are modelled; anything else in the payload
/// (address, company, website...) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    /// Splits a full name on whitespace. The second token becomes the last name,
    /// or the first token is reused when there is none.
    ///
    /// Returns `None` for names with no tokens, since both parts must be non-empty.
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let mut tokens = full_name.split_whitespace();
        let first = tokens.next()?;
        let last = tokens.next().unwrap_or(first);
        Some(Self {
            first: first.to_string(),
            last: last.to_string(),
        })
    }
}

impl Display for PersonName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

impl Location {
    pub fn new(city: &str, country: &str) -> Self {
        Self {
            city: city.to_string(),
            country: country.to_string(),
        }
    }

    /// All locations a remote user may be assigned.
    pub fn predefined() -> impl Iterator<Item = Location> {
        LOCATIONS
            .iter()
            .map(|(city, country)| Location::new(city, country))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// The display-ready employee record, independent of where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub name: PersonName,
    pub email: String,
    pub phone: String,
    pub location: Location,
    pub image_url: String,
}

impl EmployeeProfile {
    /// Reshapes a directory record into a profile at the given location.
    ///
    /// Returns `None` when the record carries no usable name.
    pub fn from_directory_user(user: &DirectoryUser, location: Location) -> Option<Self> {
        let name = PersonName::from_full_name(&user.name)?;
        let image_url = avatar_url(&name.first);
        Some(Self {
            name,
            email: user.email.clone(),
            phone: user.phone.clone(),
            location,
            image_url,
        })
    }
}

impl From<&SampleEmployee> for EmployeeProfile {
    fn from(sample: &SampleEmployee) -> Self {
        Self {
            name: PersonName {
                first: sample.first.to_string(),
                last: sample.last.to_string(),
            },
            email: sample.email.to_string(),
            phone: sample.phone.to_string(),
            location: Location::new(sample.city, sample.country),
            image_url: sample.image_url.to_string(),
        }
    }
}

/// Initials avatar for a first name.
pub fn avatar_url(first: &str) -> String {
    format!("{}{}.svg", AVATAR_BASE_URL, urlencoding::encode(first))
}

/// Placeholder image labelled with a display name.
pub fn placeholder_url(name: &str) -> String {
    format!("{}{}", PLACEHOLDER_BASE_URL, urlencoding::encode(name))
}
