//! Member entity - the authenticated participant identity shown next to messages

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Presentational profile attached to a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub image_url: Option<String>,
}

impl Profile {
    /// Create a new Profile
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: None,
        }
    }

    /// Profile with an avatar image
    pub fn with_image(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: Some(image_url.into()),
        }
    }
}

/// A chat participant as the client sees them.
///
/// The member's `id` is the acting-user key for reactions; the profile is
/// consumed by avatar and name rendering only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Snowflake,
    pub profile: Profile,
}

impl Member {
    /// Create a new Member
    pub fn new(id: Snowflake, profile: Profile) -> Self {
        Self { id, profile }
    }

    /// Display name for message headers
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.profile.name
    }

    /// Avatar image URL, if the member has one
    #[inline]
    pub fn avatar_url(&self) -> Option<&str> {
        self.profile.image_url.as_deref()
    }
}
