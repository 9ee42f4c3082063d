//! Mail configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Mail configuration for the submission gateway
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Inbox that receives inquiries
    #[serde(default = "default_to_email")]
    pub to_email: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Prefix for outgoing subject lines
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

impl MailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate mail configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.to_email.contains('@') {
            return Err(ValidationError::InvalidToEmail);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            to_email: default_to_email(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            subject_prefix: default_subject_prefix(),
        }
    }
}

fn default_to_email() -> String {
    "inquiries@example.com".to_string()
}

fn default_from_email() -> String {
    "noreply@example.com".to_string()
}

fn default_from_name() -> String {
    "Contact Form".to_string()
}

fn default_subject_prefix() -> String {
    "[Contact]".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_config_defaults() {
        let config = MailConfig::default();
        assert_eq!(config.to_email, "inquiries@example.com");
        assert_eq!(config.from_email, "noreply@example.com");
        assert_eq!(config.from_name, "Contact Form");
        assert_eq!(config.subject_prefix, "[Contact]");
    }

    #[test]
    fn test_from_header() {
        let config = MailConfig {
            from_email: "support@example.com".to_string(),
            from_name: "Support Team".to_string(),
            ..Default::default()
        };
        assert_eq!(config.from_header(), "Support Team <support@example.com>");
    }

    #[test]
    fn test_validation_invalid_to_email() {
        let config = MailConfig {
            to_email: "not-an-address".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_from_email() {
        let config = MailConfig {
            from_email: "not-an-address".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(MailConfig::default().validate().is_ok());
    }
}
