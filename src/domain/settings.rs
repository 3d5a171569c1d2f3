use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Per-user accessibility preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    /// Voice name, identifier, or a hint such as "female_standard"
    pub preferred_voice: String,
    /// 1-5
    pub text_size: u8,
    /// 1-5, 3 is normal speed
    pub reading_speed: u8,
    pub high_contrast: bool,
    pub color_theme: String,
    pub audio_descriptions: bool,
    pub keyboard_navigation: bool,
    /// 1-5, 5 is most permissive
    pub voice_sensitivity: u8,
    pub auto_advance: bool,
    pub notification_sounds: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            preferred_voice: "female_standard".to_string(),
            text_size: 3,
            reading_speed: 3,
            high_contrast: false,
            color_theme: "standard".to_string(),
            audio_descriptions: true,
            keyboard_navigation: true,
            voice_sensitivity: 3,
            auto_advance: false,
            notification_sounds: true,
        }
    }
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid data: {}", summary(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field: field.to_string(),
                message: message.into(),
            }],
        }
    }
}

/// Partial settings update; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub preferred_voice: Option<String>,
    pub text_size: Option<u8>,
    pub reading_speed: Option<u8>,
    pub high_contrast: Option<bool>,
    pub color_theme: Option<String>,
    pub audio_descriptions: Option<bool>,
    pub keyboard_navigation: Option<bool>,
    pub voice_sensitivity: Option<u8>,
    pub auto_advance: Option<bool>,
    pub notification_sounds: Option<bool>,
}

/// Collects every field error before giving up
struct Validator<'a> {
    body: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> Validator<'a> {
    fn fail(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    fn string(&mut self, field: &str) -> Option<String> {
        match self.body.get(field)? {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.fail(field, "must be a string");
                None
            }
        }
    }

    fn boolean(&mut self, field: &str) -> Option<bool> {
        match self.body.get(field)? {
            Value::Bool(b) => Some(*b),
            _ => {
                self.fail(field, "must be a boolean");
                None
            }
        }
    }

    fn level(&mut self, field: &str) -> Option<u8> {
        let value = self.body.get(field)?;
        let Some(n) = value.as_f64() else {
            self.fail(field, "must be a number");
            return None;
        };
        if n.fract() != 0.0 {
            self.fail(field, "must be an integer");
            return None;
        }
        if !(1.0..=5.0).contains(&n) {
            self.fail(field, "must be between 1 and 5");
            return None;
        }
        Some(n as u8)
    }
}

impl SettingsPatch {
    /// Validate a JSON object. Unknown fields are ignored; any invalid field
    /// rejects the whole patch.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let Some(body) = body.as_object() else {
            return Err(ValidationErrors::single("body", "must be a JSON object"));
        };

        let mut v = Validator {
            body,
            errors: Vec::new(),
        };
        let patch = Self {
            preferred_voice: v.string("preferredVoice"),
            text_size: v.level("textSize"),
            reading_speed: v.level("readingSpeed"),
            high_contrast: v.boolean("highContrast"),
            color_theme: v.string("colorTheme"),
            audio_descriptions: v.boolean("audioDescriptions"),
            keyboard_navigation: v.boolean("keyboardNavigation"),
            voice_sensitivity: v.level("voiceSensitivity"),
            auto_advance: v.boolean("autoAdvance"),
            notification_sounds: v.boolean("notificationSounds"),
        };

        if v.errors.is_empty() {
            Ok(patch)
        } else {
            Err(ValidationErrors { errors: v.errors })
        }
    }

    pub fn apply(self, settings: &mut AccessibilitySettings) {
        if let Some(v) = self.preferred_voice {
            settings.preferred_voice = v;
        }
        if let Some(v) = self.text_size {
            settings.text_size = v;
        }
        if let Some(v) = self.reading_speed {
            settings.reading_speed = v;
        }
        if let Some(v) = self.high_contrast {
            settings.high_contrast = v;
        }
        if let Some(v) = self.color_theme {
            settings.color_theme = v;
        }
        if let Some(v) = self.audio_descriptions {
            settings.audio_descriptions = v;
        }
        if let Some(v) = self.keyboard_navigation {
            settings.keyboard_navigation = v;
        }
        if let Some(v) = self.voice_sensitivity {
            settings.voice_sensitivity = v;
        }
        if let Some(v) = self.auto_advance {
            settings.auto_advance = v;
        }
        if let Some(v) = self.notification_sounds {
            settings.notification_sounds = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_patch_applies_only_given_fields() {
        let patch = SettingsPatch::from_json(&json!({
            "textSize": 5,
            "highContrast": true,
            "preferredVoice": "Samantha",
            "unknownField": 42
        }))
        .unwrap();

        let mut settings = AccessibilitySettings::default();
        patch.apply(&mut settings);
        assert_eq!(settings.text_size, 5);
        assert!(settings.high_contrast);
        assert_eq!(settings.preferred_voice, "Samantha");
        assert_eq!(settings.reading_speed, 3);
    }

    #[test]
    fn test_out_of_range_levels_rejected() {
        let err = SettingsPatch::from_json(&json!({ "textSize": 7 })).unwrap_err();
        assert_eq!(err.errors[0].field, "textSize");
        assert_eq!(err.errors[0].message, "must be between 1 and 5");

        assert!(SettingsPatch::from_json(&json!({ "voiceSensitivity": 0 })).is_err());
        assert!(SettingsPatch::from_json(&json!({ "readingSpeed": 2.5 })).is_err());
        assert!(SettingsPatch::from_json(&json!({ "readingSpeed": "3" })).is_err());
    }

    #[test]
    fn test_booleans_are_strict() {
        let err = SettingsPatch::from_json(&json!({ "highContrast": "true", "autoAdvance": 1 }))
            .unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["highContrast", "autoAdvance"]);
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert!(SettingsPatch::from_json(&json!([1, 2])).is_err());
        assert_eq!(
            SettingsPatch::from_json(&json!({})).unwrap(),
            SettingsPatch::default()
        );
    }

    #[test]
    fn test_settings_serialize_camel_case() {
        let value = serde_json::to_value(AccessibilitySettings::default()).unwrap();
        assert_eq!(value["voiceSensitivity"], 3);
        assert_eq!(value["preferredVoice"], "female_standard");
    }
}
