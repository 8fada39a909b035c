//! Typed request and response payloads.
//!
//! One struct per endpoint payload, derived straight from the backend's JSON.
//! Required fields are plain types so a response missing one fails the decode
//! loudly instead of silently defaulting; fields the backend may omit or null
//! out are `Option` with `#[serde(default)]`. Timestamps stay ISO-8601 strings:
//! the client only renders them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Minimal record set right after login, before profile enrichment.
    pub fn minimal(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: String::new(),
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub cooking_goals: Option<String>,
    #[serde(default = "default_true")]
    pub profile_visibility: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content_description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub cooking_time: Option<String>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub media_links: Vec<String>,
    #[serde(default)]
    pub media_types: Vec<String>,
    // Older posts carry a single link/type pair instead of the lists.
    #[serde(default)]
    pub media_link: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
}

impl Post {
    /// Media (url, type) pairs, merging the legacy single-item fields in.
    pub fn media(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = self
            .media_links
            .iter()
            .cloned()
            .zip(self.media_types.iter().cloned())
            .collect();
        if let (Some(link), Some(kind)) = (&self.media_link, &self.media_type) {
            if !out.iter().any(|(url, _)| url == link) {
                out.push((link.clone(), kind.clone()));
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub comment_text: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meals: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillShare {
    pub id: String,
    pub user_id: String,
    pub meal_details: String,
    #[serde(default)]
    pub dietary_preferences: Option<String>,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub media_types: Vec<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub action_user_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub read: bool,
}

/// A media record stored separately from its post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(default)]
    pub id: Option<String>,
    pub post_id: String,
    pub url: String,
    #[serde(default)]
    pub media_type: Option<String>,
}

/// Friend list of one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConnection {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    #[serde(default)]
    pub friend_ids: Vec<String>,
}

/// Resource fingerprint: points at an internal post or an external URL,
/// annotated with free-form tags and a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub user_id: String,
    pub resource_id: String,
    pub resource_type: String,
    pub title: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub creator_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub member_ids: Vec<String>,
    #[serde(default)]
    pub admin_ids: Vec<String>,
    #[serde(default = "default_true", rename = "public")]
    pub is_public: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPost {
    pub id: String,
    pub group_id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Auth payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Login/registration response. Access token and user id are required — a
/// response missing either is a failed login, nothing gets persisted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user_id: String,
}

/// What the upload endpoint hands back for a stored file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: String,
    pub title: String,
    pub content_description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub cooking_time: String,
    pub difficulty_level: String,
    pub cuisine_type: String,
    pub media_links: Vec<String>,
    pub media_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: String,
    pub user_id: String,
    pub comment_text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLike {
    pub post_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub user_id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub source_id: String,
    pub source_type: String,
    pub action_user_id: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookmark {
    pub user_id: String,
    pub resource_id: String,
    pub resource_type: String,
    pub title: String,
    pub note: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    pub description: String,
    pub creator_id: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub rules: Vec<String>,
    #[serde(rename = "public")]
    pub is_public: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroupPost {
    pub group_id: String,
    pub user_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMealPlan {
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub meals: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkillShare {
    pub user_id: String,
    pub meal_details: String,
    pub dietary_preferences: String,
    pub media_urls: Vec<String>,
    pub media_types: Vec<String>,
    pub ingredients: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConnection {
    pub user_id: String,
    pub friend_id: String,
}

fn default_true() -> bool {
    true
}

/// Split a comma-separated tag line into trimmed, non-empty tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_requires_access_token_and_user_id() {
        let ok: Result<TokenResponse, _> =
            serde_json::from_str(r#"{"accessToken":"a","refreshToken":"r","userId":"u"}"#);
        assert!(ok.is_ok());

        let missing_token: Result<TokenResponse, _> =
            serde_json::from_str(r#"{"refreshToken":"r","userId":"u"}"#);
        assert!(missing_token.is_err());

        let missing_user: Result<TokenResponse, _> =
            serde_json::from_str(r#"{"accessToken":"a","refreshToken":"r"}"#);
        assert!(missing_user.is_err());
    }

    #[test]
    fn test_token_response_refresh_token_optional() {
        let resp: TokenResponse =
            serde_json::from_str(r#"{"accessToken":"a","userId":"u"}"#).unwrap();
        assert!(resp.refresh_token.is_none());
    }

    #[test]
    fn test_post_decode_fails_on_missing_title() {
        let raw = r#"{"id":"p1","userId":"u1"}"#;
        let post: Result<Post, _> = serde_json::from_str(raw);
        assert!(post.is_err());
    }

    #[test]
    fn test_post_media_merges_legacy_fields() {
        let raw = r#"{
            "id":"p1","userId":"u1","title":"Soup",
            "mediaLinks":["http://x/a.jpg"],"mediaTypes":["image/jpeg"],
            "mediaLink":"http://x/old.jpg","mediaType":"image/png"
        }"#;
        let post: Post = serde_json::from_str(raw).unwrap();
        let media = post.media();
        assert_eq!(media.len(), 2);
        assert_eq!(media[0].0, "http://x/a.jpg");
        assert_eq!(media[1].0, "http://x/old.jpg");
    }

    #[test]
    fn test_post_media_skips_duplicate_legacy_link() {
        let raw = r#"{
            "id":"p1","userId":"u1","title":"Soup",
            "mediaLinks":["http://x/a.jpg"],"mediaTypes":["image/jpeg"],
            "mediaLink":"http://x/a.jpg","mediaType":"image/jpeg"
        }"#;
        let post: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(post.media().len(), 1);
    }

    #[test]
    fn test_notification_defaults_unread() {
        let raw = r#"{"id":"n1","userId":"u1","message":"hi"}"#;
        let notif: Notification = serde_json::from_str(raw).unwrap();
        assert!(!notif.read);
        assert!(notif.kind.is_none());
    }

    #[test]
    fn test_parse_tags_splits_and_trims() {
        assert_eq!(
            parse_tags(" italian , quick,, dinner "),
            vec!["italian", "quick", "dinner"]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }
}
