//! # Form drafts and client-side validation
//!
//! [`TipDraft`] is the body of the share and update requests. Validation
//! only checks that the required fields are non-empty; it runs before any
//! request is made. [`SignInForm`] and [`RegistrationForm`] cover the
//! credential pages.

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, Tip, TipStatus};

/// Categories offered by the share and update forms.
pub const CATEGORIES: [&str; 10] = [
    "Plant Care",
    "Composting",
    "Vertical Gardening",
    "Hydroponics",
    "Organic Gardening",
    "Indoor Plants",
    "Sustainable Gardening",
    "Herb Gardening",
    "DIY Garden Projects",
    "Balcony Gardening",
];

/// Special characters accepted by the password rule.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("Please fill in all required fields")]
    MissingFields(Vec<&'static str>),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Password must be at least 8 characters with 1 uppercase, 1 lowercase, and a special character")]
    WeakPassword,
}

/// Body of `POST /share-tip` and `PUT /update-tip/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipDraft {
    pub title: String,
    pub plant_type: String,
    pub difficulty_level: Difficulty,
    pub description: String,
    pub image: String,
    pub category: String,
    pub status: TipStatus,
    pub user_email: String,
    pub user_name: String,
    pub total_liked: u64,
}

impl TipDraft {
    /// A blank draft attributed to the signed-in user.
    pub fn for_author(email: &str, name: &str) -> Self {
        Self {
            title: String::new(),
            plant_type: String::new(),
            difficulty_level: Difficulty::Easy,
            description: String::new(),
            image: String::new(),
            category: CATEGORIES[0].to_string(),
            status: TipStatus::Public,
            user_email: email.to_string(),
            user_name: name.to_string(),
            total_liked: 0,
        }
    }

    /// A draft pre-filled from an existing tip. Attribution and the like
    /// counter are carried over unchanged.
    pub fn from_tip(tip: &Tip) -> Self {
        Self {
            title: tip.title.clone(),
            plant_type: tip.plant_type.clone(),
            difficulty_level: match tip.difficulty_level {
                Difficulty::Unknown => Difficulty::default(),
                level => level,
            },
            description: tip.description.clone(),
            image: tip.image.clone(),
            category: tip.category.clone(),
            status: match tip.effective_status() {
                TipStatus::Unknown => TipStatus::Hidden,
                status => status,
            },
            user_email: tip.email().to_string(),
            user_name: tip.author().to_string(),
            total_liked: tip.total_liked,
        }
    }

    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("plantType", &self.plant_type),
            ("description", &self.description),
            ("image", &self.image),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DraftError::MissingFields(missing))
        }
    }
}

/// Email/password sign-in form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(CredentialsError::MissingFields);
        }
        Ok(())
    }
}

/// Account creation form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo_url: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.photo_url.trim().is_empty()
        {
            return Err(CredentialsError::MissingFields);
        }
        if !is_strong_password(&self.password) {
            return Err(CredentialsError::WeakPassword);
        }
        Ok(())
    }
}

/// At least 8 characters with a lowercase letter, an uppercase letter and one
/// of [`PASSWORD_SPECIALS`].
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> TipDraft {
        let mut draft = TipDraft::for_author("ana@example.com", "Ana");
        draft.title = "Mulch early".to_string();
        draft.plant_type = "Roses".to_string();
        draft.description = "Mulch before the first heat wave.".to_string();
        draft.image = "https://example.com/roses.jpg".to_string();
        draft
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = TipDraft::for_author("ana@example.com", "Ana");
        assert_eq!(draft.difficulty_level, Difficulty::Easy);
        assert_eq!(draft.category, "Plant Care");
        assert_eq!(draft.status, TipStatus::Public);
        assert_eq!(draft.total_liked, 0);
        assert_eq!(draft.user_email, "ana@example.com");
    }

    #[test]
    fn test_validate_complete_draft() {
        assert_eq!(complete_draft().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_blank_fields() {
        let mut draft = complete_draft();
        draft.description = String::new();
        draft.image = "   ".to_string();
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingFields(vec!["description", "image"]))
        );
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn test_image_format_is_not_checked() {
        let mut draft = complete_draft();
        draft.image = "not a url".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_wire_format() {
        let json = serde_json::to_value(complete_draft()).unwrap();
        assert_eq!(json["plantType"], "Roses");
        assert_eq!(json["difficultyLevel"], "Easy");
        assert_eq!(json["status"], "public");
        assert_eq!(json["userEmail"], "ana@example.com");
        assert_eq!(json["totalLiked"], 0);
    }

    #[test]
    fn test_draft_from_older_record() {
        let tip: Tip = serde_json::from_str(
            r#"{"id": 9, "title": "Compost", "authorName": "Ben", "authorEmail": "ben@example.com",
                "availability": "Hidden", "difficultyLevel": "Beginner", "totalLiked": 4}"#,
        )
        .unwrap();
        let draft = TipDraft::from_tip(&tip);
        assert_eq!(draft.status, TipStatus::Hidden);
        assert_eq!(draft.user_email, "ben@example.com");
        assert_eq!(draft.user_name, "Ben");
        assert_eq!(draft.difficulty_level, Difficulty::Easy);
        assert_eq!(draft.total_liked, 4);
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let form = SignInForm {
            email: "ana@example.com".to_string(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(CredentialsError::MissingFields));
    }

    #[test]
    fn test_registration_password_rule() {
        let mut form = RegistrationForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "password".to_string(),
            photo_url: "https://example.com/ana.png".to_string(),
        };
        assert_eq!(form.validate(), Err(CredentialsError::WeakPassword));

        form.password = "Passw0rd!".to_string();
        assert_eq!(form.validate(), Ok(()));

        form.photo_url = String::new();
        assert_eq!(form.validate(), Err(CredentialsError::MissingFields));
    }

    #[test]
    fn test_is_strong_password() {
        assert!(is_strong_password("Garden#Bed"));
        assert!(!is_strong_password("Gar#den"));
        assert!(!is_strong_password("garden#bed"));
        assert!(!is_strong_password("GARDEN#BED"));
        assert!(!is_strong_password("GardenBed1"));
    }
}
