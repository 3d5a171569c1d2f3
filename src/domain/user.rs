use serde::{Deserialize, Serialize};

use super::settings::AccessibilitySettings;

pub type UserId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(flatten)]
    pub settings: AccessibilitySettings,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
            settings: AccessibilitySettings::default(),
        }
    }
}
