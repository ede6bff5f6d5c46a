//! Wire and domain types for members of the network.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Social platforms offered by the profile editor, in display order.
pub const SOCIAL_PLATFORMS: [&str; 3] = ["linkedin", "twitter", "website"];

const PLACEHOLDER_PROFESSION: &str = "Professional";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Accepted as a single string or a list, always written as a list.
    #[serde(default, deserialize_with = "one_or_many")]
    pub profession: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "unique_list")]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, alias = "cover_photo")]
    pub cover_photo: Option<String>,
    #[serde(default, alias = "social_links", deserialize_with = "nullable")]
    pub social_links: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "nullable")]
    pub rating: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub review_count: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub sessions_completed: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub is_verified: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub is_suspended: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// The stored avatar, or a generated initials image.
    pub fn avatar_or_placeholder(&self, size: u32) -> String {
        match self.avatar.as_deref().filter(|a| !a.is_empty()) {
            Some(avatar) => avatar.to_string(),
            None => format!(
                "https://ui-avatars.com/api/?name={}&background=2d5016&color=fff&size={size}",
                urlencoding::encode(&self.name)
            ),
        }
    }

    pub fn profession_label(&self) -> String {
        if self.profession.is_empty() {
            PLACEHOLDER_PROFESSION.to_string()
        } else {
            self.profession.join(", ")
        }
    }

    pub fn social_link(&self, platform: &str) -> Option<&str> {
        self.social_links
            .get(platform)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Blank URLs remove the link.
    pub fn set_social_link(&mut self, platform: &str, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            self.social_links.remove(platform);
        } else {
            self.social_links
                .insert(platform.to_string(), url.to_string());
        }
    }

    pub fn expertise_text(&self) -> String {
        self.expertise.join(", ")
    }

    pub fn set_expertise_text(&mut self, text: &str) {
        self.expertise = parse_list(text);
    }

    pub fn profession_text(&self) -> String {
        self.profession.join(", ")
    }

    pub fn set_profession_text(&mut self, text: &str) {
        self.profession = parse_list(text);
    }

    pub fn bio_or_placeholder(&self) -> &str {
        self.bio
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or("No bio available yet.")
    }
}

/// Splits comma separated input, trimming entries and dropping blanks and repeats.
pub fn parse_list(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in text.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !out.iter().any(|existing| existing == item) {
            out.push(item.to_string());
        }
    }
    out
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(one)) => parse_list(&one),
        Some(OneOrMany::Many(many)) => dedup(many),
    })
}

fn unique_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(dedup(
        Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default(),
    ))
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim();
        if !item.is_empty() && !out.iter().any(|existing| existing == item) {
            out.push(item.to_string());
        }
    }
    out
}

/// Partial profile update. `None` fields are left untouched on the server and are
/// not serialized at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<String>,
}

impl ProfileUpdate {
    /// Every field the profile editor owns. The avatar is only changed through its own upload.
    pub fn from_edited(edited: &UserRecord, cover_photo: Option<String>) -> Self {
        Self {
            name: Some(edited.name.clone()),
            profession: Some(edited.profession.clone()),
            bio: Some(edited.bio.clone().unwrap_or_default()),
            expertise: Some(edited.expertise.clone()),
            social_links: Some(edited.social_links.clone()),
            avatar: None,
            cover_photo: cover_photo.or_else(|| edited.cover_photo.clone()),
        }
    }

    pub fn avatar(url: impl Into<String>) -> Self {
        Self {
            avatar: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn cover_photo(url: impl Into<String>) -> Self {
        Self {
            cover_photo: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub sessions: u32,
    #[serde(default)]
    pub connections: u32,
    #[serde(default)]
    pub posts_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Session,
    Review,
    Booking,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", default)]
    pub kind: ActivityKind,
    #[serde(default)]
    pub message: String,
    /// Human readable relative time as sent by the server.
    #[serde(default)]
    pub time: String,
}
