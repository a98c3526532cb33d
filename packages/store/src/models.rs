//! # Domain models for tips and gardeners
//!
//! Defines the records the REST backend sends to the client. The backend owns
//! these records; the client only ever holds request-scoped copies.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Tip`] | A piece of gardening advice with its metadata, author attribution and like counter. |
//! | [`Gardener`] | A community-member profile shown on the home and explore pages. |
//! | [`RecordId`] | A backend identifier. Accepts numeric or string ids on the wire. |
//! | [`Difficulty`] / [`TipStatus`] / [`GardenerStatus`] | Closed enums used for filtering and forms. |
//! | [`Collection`] | A list payload that may arrive bare (`[...]`) or wrapped (`{"data": [...]}`). |
//! | [`OneOrMany`] | A payload that may be a single record or a list of records. |
//!
//! The wire format is camelCase. Some backend variants use different names for
//! the same field (`_id`, `authorName`, `authorEmail`, `userImage`,
//! `availability`, `experiences`); those are decoded into separate optional
//! fields and resolved by accessor methods, so a record that carries both
//! spellings still decodes. Enum values outside the known set decode as
//! `Unknown` instead of failing the whole collection.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a backend record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
            // MongoDB extended JSON: {"$oid": "..."}
            Oid {
                #[serde(rename = "$oid")]
                oid: String,
            },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => RecordId(s),
            Raw::Unsigned(n) => RecordId(n.to_string()),
            Raw::Signed(n) => RecordId(n.to_string()),
            Raw::Oid { oid } => RecordId(oid),
        })
    }
}

/// How hard a tip is to follow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    #[serde(alias = "easy")]
    Easy,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "hard")]
    Hard,
    /// A level outside the known three. Never matches a difficulty filter.
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        }
    }

    /// Parse a select-box value. The empty string means "no selection".
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a tip shows up in the public listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipStatus {
    #[default]
    #[serde(alias = "Public")]
    Public,
    #[serde(alias = "Hidden")]
    Hidden,
    /// Any other value. Kept out of the public listing.
    #[serde(other)]
    Unknown,
}

impl TipStatus {
    pub const ALL: [TipStatus; 2] = [TipStatus::Public, TipStatus::Hidden];

    pub fn as_str(&self) -> &'static str {
        match self {
            TipStatus::Public => "public",
            TipStatus::Hidden => "hidden",
            TipStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TipStatus::Public => "Public",
            TipStatus::Hidden => "Hidden",
            TipStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// A single piece of gardening advice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub plant_type: String,
    #[serde(default)]
    pub difficulty_level: Difficulty,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: TipStatus,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    /// Older records carry `authorName` instead of `userName`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_image: Option<String>,
    /// Status as written by the update form. Takes precedence over `status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<TipStatus>,
    #[serde(default)]
    pub total_liked: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Tip {
    /// Display name of the author, whichever field the backend filled in.
    pub fn author(&self) -> &str {
        if !self.user_name.is_empty() {
            return &self.user_name;
        }
        self.author_name.as_deref().unwrap_or_default()
    }

    /// Avatar of the author from `authorImage` or `userImage`.
    pub fn avatar(&self) -> Option<&str> {
        self.author_image
            .as_deref()
            .or(self.user_image.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Author email from `userEmail` or the older `authorEmail`.
    pub fn email(&self) -> &str {
        if !self.user_email.is_empty() {
            return &self.user_email;
        }
        self.author_email.as_deref().unwrap_or_default()
    }

    pub fn effective_status(&self) -> TipStatus {
        self.availability.unwrap_or(self.status)
    }

    pub fn is_public(&self) -> bool {
        self.effective_status() == TipStatus::Public
    }

    /// Whether `email` is the stored author email, under either spelling.
    /// UI convenience only; the backend is responsible for enforcing
    /// ownership.
    pub fn is_authored_by(&self, email: &str) -> bool {
        !email.is_empty()
            && [Some(self.user_email.as_str()), self.author_email.as_deref()]
                .into_iter()
                .flatten()
                .any(|stored| stored.eq_ignore_ascii_case(email))
    }

    /// Description split into paragraphs on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.description
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Availability of a gardener profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GardenerStatus {
    #[default]
    #[serde(alias = "Active")]
    Active,
    #[serde(alias = "Inactive")]
    Inactive,
    #[serde(other)]
    Unknown,
}

impl GardenerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GardenerStatus::Active => "Active",
            GardenerStatus::Inactive => "Inactive",
            GardenerStatus::Unknown => "Member",
        }
    }
}

/// A community member profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gardener {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiences: Option<String>,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: GardenerStatus,
    #[serde(default)]
    pub total_shared_tips: u32,
}

impl Gardener {
    /// Profile text, from `bio` or the older `experiences` field.
    pub fn about(&self) -> &str {
        if !self.bio.is_empty() {
            return &self.bio;
        }
        self.experiences.as_deref().unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.status == GardenerStatus::Active
    }
}

/// A list payload, bare or wrapped in `{"data": [...]}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Collection<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> Collection<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Collection::Bare(items) => items,
            Collection::Wrapped { data } => data,
        }
    }
}

/// A payload that is either one record or a list of them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Collection<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items.into_vec(),
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_accepts_numeric_and_mongo_ids() {
        let tip: Tip = serde_json::from_str(r#"{"id": 7, "title": "Mulch"}"#).unwrap();
        assert_eq!(tip.id, RecordId::from("7"));

        let tip: Tip =
            serde_json::from_str(r#"{"_id": "65f0a1", "title": "Mulch"}"#).unwrap();
        assert_eq!(tip.id.as_str(), "65f0a1");

        let tip: Tip =
            serde_json::from_str(r#"{"_id": {"$oid": "65f0a2"}, "title": "Mulch"}"#).unwrap();
        assert_eq!(tip.id.as_str(), "65f0a2");
    }

    #[test]
    fn test_tip_defaults_and_attribution() {
        let tip: Tip = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Growing Tomatoes",
                "plantType": "Tomatoes",
                "difficultyLevel": "Medium",
                "category": "Plant Care",
                "authorName": "Emily Turner",
                "userEmail": "emily@example.com",
                "status": "Hidden",
                "totalLiked": 245
            }"#,
        )
        .unwrap();

        assert_eq!(tip.difficulty_level, Difficulty::Medium);
        assert_eq!(tip.status, TipStatus::Hidden);
        assert!(!tip.is_public());
        assert_eq!(tip.author(), "Emily Turner");
        assert_eq!(tip.total_liked, 245);
        assert!(tip.is_authored_by("Emily@Example.com"));
        assert!(!tip.is_authored_by(""));
    }

    #[test]
    fn test_tip_missing_status_is_public() {
        let tip: Tip = serde_json::from_str(r#"{"id": "a", "title": "t"}"#).unwrap();
        assert!(tip.is_public());
        assert_eq!(tip.difficulty_level, Difficulty::Easy);
    }

    #[test]
    fn test_collection_bare_and_wrapped() {
        let bare: Collection<Gardener> =
            serde_json::from_str(r#"[{"id": 1, "name": "Ana"}]"#).unwrap();
        assert_eq!(bare.into_vec().len(), 1);

        let wrapped: Collection<Gardener> = serde_json::from_str(
            r#"{"data": [{"id": 1, "name": "Ana"}, {"id": 2, "name": "Ben"}]}"#,
        )
        .unwrap();
        let gardeners = wrapped.into_vec();
        assert_eq!(gardeners.len(), 2);
        assert_eq!(gardeners[1].name, "Ben");
    }

    #[test]
    fn test_one_or_many() {
        let one: OneOrMany<Tip> = serde_json::from_str(r#"{"id": 3, "title": "t"}"#).unwrap();
        assert_eq!(one.into_vec().len(), 1);

        let many: OneOrMany<Tip> =
            serde_json::from_str(r#"[{"id": 3, "title": "t"}, {"id": 4, "title": "u"}]"#)
                .unwrap();
        assert_eq!(many.into_vec().len(), 2);
    }

    #[test]
    fn test_gardener_about_and_status() {
        let g: Gardener = serde_json::from_str(
            r#"{"id": 1, "name": "Ana", "experiences": "Twenty years of roses", "status": "retired"}"#,
        )
        .unwrap();
        assert_eq!(g.about(), "Twenty years of roses");
        assert_eq!(g.status, GardenerStatus::Unknown);
        assert!(!g.is_active());
    }

    #[test]
    fn test_tip_alternate_field_names() {
        let tip: Tip = serde_json::from_str(
            r#"{"id": 1, "title": "t", "status": "public", "availability": "Hidden"}"#,
        )
        .unwrap();
        assert_eq!(tip.effective_status(), TipStatus::Hidden);
        assert!(!tip.is_public());

        let tip: Tip = serde_json::from_str(
            r#"{"id": 2, "title": "t", "authorEmail": "Ana@Example.com"}"#,
        )
        .unwrap();
        assert_eq!(tip.email(), "Ana@Example.com");
        assert!(tip.is_authored_by("ana@example.com"));

        let tip: Tip = serde_json::from_str(
            r#"{"id": 3, "title": "t", "userImage": "https://example.com/a.png"}"#,
        )
        .unwrap();
        assert_eq!(tip.avatar(), Some("https://example.com/a.png"));

        let tip: Tip = serde_json::from_str(
            r#"{"id": 4, "title": "t", "userEmail": "ana@example.com", "authorEmail": "ben@example.com",
                "authorImage": "https://example.com/a.png", "userImage": "https://example.com/b.png"}"#,
        )
        .unwrap();
        assert!(tip.is_authored_by("ana@example.com"));
        assert!(tip.is_authored_by("ben@example.com"));
        assert_eq!(tip.avatar(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_unknown_enum_values_keep_the_collection() {
        let tips: Collection<Tip> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "a"},
                {"id": 2, "title": "b", "difficultyLevel": "Beginner"},
                {"id": 3, "title": "c", "status": "private"}
            ]"#,
        )
        .unwrap();
        let tips = tips.into_vec();
        assert_eq!(tips.len(), 3);
        assert_eq!(tips[1].difficulty_level, Difficulty::Unknown);
        assert_eq!(tips[2].status, TipStatus::Unknown);
        assert!(!tips[2].is_public());
        assert_eq!(Difficulty::parse("Unknown"), None);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse(""), None);
        assert_eq!(TipStatus::parse("Hidden"), Some(TipStatus::Hidden));
    }

    #[test]
    fn test_paragraphs() {
        let tip: Tip = serde_json::from_str(
            r#"{"id": 1, "title": "t", "description": "First.\n\nSecond.\n\n\n\nThird."}"#,
        )
        .unwrap();
        let paragraphs: Vec<&str> = tip.paragraphs().collect();
        assert_eq!(paragraphs, vec!["First.", "Second.", "Third."]);
    }
}
