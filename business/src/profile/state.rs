use std::sync::Arc;

use growthyari_states::State;

use crate::http::FilePart;
use crate::user::{Activity, DashboardStats, UserRecord};

/// Profile page state: the confirmed server copy of the member and the copy being edited.
///
/// `user` only changes when the server confirms a write. `edited` is a scratch copy owned
/// by the editor and is thrown away on cancel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub user: Option<UserRecord>,
    pub edited: Option<UserRecord>,
    pub editing: bool,
    /// Cover photo chosen in this session, sent with the next save.
    pub cover_photo: Option<String>,
    pub stats: DashboardStats,
    pub activities: Vec<Activity>,
}

impl State for ProfileState {}

impl ProfileState {
    pub fn with_user(user: UserRecord) -> Self {
        Self {
            edited: Some(user.clone()),
            user: Some(user),
            ..Self::default()
        }
    }

    /// Whether the page currently shows member `id`. Results for anyone else are stale.
    pub fn is_owned_by(&self, id: &str) -> bool {
        self.user.as_ref().is_some_and(|user| user.id == id)
    }

    pub fn begin_edit(&mut self) {
        self.edited = self.user.clone();
        self.editing = self.user.is_some();
    }

    /// Discards unsaved edits.
    pub fn cancel_edit(&mut self) {
        self.edited = self.user.clone();
        self.editing = false;
    }

    pub fn edited_mut(&mut self) -> Option<&mut UserRecord> {
        self.edited.as_mut()
    }

    pub fn has_changes(&self) -> bool {
        self.edited != self.user
    }

    /// The cover photo to display: the one picked this session, else the stored one.
    pub fn cover_photo(&self) -> Option<&str> {
        self.cover_photo
            .as_deref()
            .or_else(|| self.user.as_ref().and_then(|u| u.cover_photo.as_deref()))
            .filter(|url| !url.is_empty())
    }

    /// Applies a finished load. Returns `false` when the page no longer shows `user`.
    pub fn load_finished(
        &mut self,
        user: UserRecord,
        stats: Option<DashboardStats>,
        activities: Option<Vec<Activity>>,
    ) -> bool {
        if !self.is_owned_by(&user.id) {
            return false;
        }
        if let Some(stats) = stats {
            self.stats = stats;
        }
        if let Some(activities) = activities {
            self.activities = activities;
        }
        self.cover_photo = user.cover_photo.clone();
        self.replace_user(user)
    }

    /// Both copies become the server record of the member already shown.
    pub fn replace_user(&mut self, user: UserRecord) -> bool {
        if !self.is_owned_by(&user.id) {
            return false;
        }
        self.edited = Some(user.clone());
        self.user = Some(user);
        true
    }

    /// A profile save was confirmed.
    pub fn save_finished(&mut self, user: UserRecord) -> bool {
        if !self.replace_user(user) {
            return false;
        }
        self.editing = false;
        true
    }

    /// Keeps an uploaded cover for member `owner` until the next save.
    pub fn choose_cover(&mut self, owner: &str, url: String) -> bool {
        if !self.is_owned_by(owner) {
            return false;
        }
        self.cover_photo = Some(url);
        true
    }
}

/// A file picked by the member, waiting to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Arc<Vec<u8>>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes: Arc::new(bytes),
        }
    }

    pub fn into_part(self) -> FilePart {
        FilePart {
            field: "file".to_string(),
            file_name: self.file_name,
            mime: self.mime,
            bytes: self.bytes,
        }
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Files queued for the upload commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUploadInput {
    pub avatar: Option<FileUpload>,
    pub cover: Option<FileUpload>,
}

impl State for ProfileUploadInput {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> UserRecord {
        UserRecord {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cancel_discards_edits() {
        let mut state = ProfileState::with_user(ada());
        state.begin_edit();
        state.edited_mut().unwrap().name = "Grace".to_string();
        assert!(state.has_changes());

        state.cancel_edit();
        assert!(!state.editing);
        assert_eq!(state.edited, state.user);
    }

    #[test]
    fn test_begin_edit_without_user() {
        let mut state = ProfileState::default();
        state.begin_edit();
        assert!(!state.editing);
    }

    #[test]
    fn test_save_finished_replaces_both_copies() {
        let mut state = ProfileState::with_user(ada());
        state.begin_edit();
        state.edited_mut().unwrap().bio = Some("draft".to_string());

        let server = UserRecord {
            bio: Some("saved".to_string()),
            ..ada()
        };
        state.save_finished(server.clone());

        assert_eq!(state.user.as_ref(), Some(&server));
        assert_eq!(state.edited.as_ref(), Some(&server));
        assert!(!state.editing);
    }

    #[test]
    fn test_cover_photo_prefers_session_choice() {
        let mut state = ProfileState::with_user(UserRecord {
            cover_photo: Some("stored.png".to_string()),
            ..ada()
        });
        assert_eq!(state.cover_photo(), Some("stored.png"));

        state.cover_photo = Some("new.png".to_string());
        assert_eq!(state.cover_photo(), Some("new.png"));
    }

    #[test]
    fn test_load_keeps_previous_stats_when_missing() {
        let mut state = ProfileState {
            stats: DashboardStats {
                sessions: 3,
                ..Default::default()
            },
            ..ProfileState::with_user(ada())
        };
        assert!(state.load_finished(ada(), None, None));
        assert_eq!(state.stats.sessions, 3);
        assert!(state.user.is_some());
    }

    #[test]
    fn test_results_for_signed_out_page_are_dropped() {
        let mut state = ProfileState::default();
        let stats = DashboardStats {
            sessions: 9,
            ..Default::default()
        };

        assert!(!state.load_finished(ada(), Some(stats), None));
        assert!(!state.save_finished(ada()));
        assert!(!state.choose_cover("u1", "late.png".to_string()));
        assert_eq!(state, ProfileState::default());
    }

    #[test]
    fn test_results_for_other_member_are_dropped() {
        let mut state = ProfileState::with_user(ada());
        let grace = UserRecord {
            id: "u2".to_string(),
            name: "Grace".to_string(),
            ..Default::default()
        };

        assert!(!state.replace_user(grace));
        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Ada"));
    }

    #[test]
    fn test_file_upload_mime() {
        assert_eq!(FileUpload::new("me.PNG", vec![]).mime, "image/png");
        assert_eq!(FileUpload::new("cover.jpeg", vec![]).mime, "image/jpeg");
        assert_eq!(
            FileUpload::new("notes", vec![]).mime,
            "application/octet-stream"
        );

        let part = FileUpload::new("a.gif", vec![1]).into_part();
        assert_eq!(part.field, "file");
    }
}
