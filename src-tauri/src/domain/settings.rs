//! Application settings

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};

pub const MIN_AUTO_SAVE_SECS: u32 = 5;
pub const MAX_AUTO_SAVE_SECS: u32 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub auto_save_interval_secs: u32,
    pub new_list_default_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_save_interval_secs: 300,
            new_list_default_color: "#93C5FD".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> DomainResult<()> {
        if !(MIN_AUTO_SAVE_SECS..=MAX_AUTO_SAVE_SECS).contains(&self.auto_save_interval_secs) {
            return Err(DomainError::InvalidInput(format!(
                "Auto-save interval must be between {} and {} seconds",
                MIN_AUTO_SAVE_SECS, MAX_AUTO_SAVE_SECS
            )));
        }
        if !is_hex_color(&self.new_list_default_color) {
            return Err(DomainError::InvalidInput(format!(
                "'{}' is not a #RRGGBB colour",
                self.new_list_default_color
            )));
        }
        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let s = Settings::default();
        assert_eq!(s.auto_save_interval_secs, 300);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_rejects_short_interval_and_bad_colour() {
        let mut s = Settings::default();
        s.auto_save_interval_secs = 4;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.new_list_default_color = "93C5FD".into();
        assert!(s.validate().is_err());
        s.new_list_default_color = "#93C5FG".into();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_rejects_interval_above_one_day() {
        let mut s = Settings::default();
        s.auto_save_interval_secs = MAX_AUTO_SAVE_SECS;
        assert!(s.validate().is_ok());
        s.auto_save_interval_secs = MAX_AUTO_SAVE_SECS + 1;
        assert!(matches!(s.validate(), Err(DomainError::InvalidInput(_))));
        s.auto_save_interval_secs = u32::MAX;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"auto_save_interval_secs": 60}"#).unwrap();
        assert_eq!(s.auto_save_interval_secs, 60);
        assert_eq!(s.new_list_default_color, "#93C5FD");
    }
}
