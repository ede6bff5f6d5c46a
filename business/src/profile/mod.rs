//! Profile page: loading, editing and the avatar/cover uploads.

mod state;

pub use state::{FileUpload, ProfileState, ProfileUploadInput};

use growthyari_states::{Command, CommandFuture, CommandSnapshot, Updater, ready};
use log::{info, warn};

use crate::Session;
use crate::action::{Action, action, begin, settle};
use crate::api::{self, ApiContext};
use crate::user::{ProfileUpdate, UserRecord};

action!(LoadProfileAction, (), "Failed to load profile data");
action!(SaveProfileAction, (), "Failed to update profile");
action!(
    /// Success carries the uploaded avatar URL.
    AvatarUploadAction,
    String,
    "Failed to upload avatar"
);
action!(
    /// Success carries the uploaded cover photo URL.
    CoverUploadAction,
    String,
    "Failed to upload cover photo"
);

const AVATAR_UPDATE_ERROR: &str = "Failed to update avatar";
const COVER_UPDATE_ERROR: &str = "Failed to update cover photo";

fn publish_user(updater: &Updater, user: UserRecord, finish_edit: bool) {
    let owner_copy = user.clone();
    updater.update::<ProfileState>(move |state| {
        let applied = if finish_edit {
            state.save_finished(user)
        } else {
            state.replace_user(user)
        };
        if !applied {
            info!("Dropped profile update for a member no longer shown");
        }
    });
    updater.update::<Session>(move |session| {
        session.replace_user(owner_copy);
    });
}

/// Fetches stats, recent activity and the current member.
///
/// Stats and activity are best effort. Only a failed member fetch fails the load.
#[derive(Default, Debug)]
pub struct LoadProfileCommand;

impl Command for LoadProfileCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        if !begin::<LoadProfileAction>(&snap, &updater) {
            return ready();
        }
        let api = ApiContext::from_snapshot(&snap);

        Box::pin(async move {
            let stats = api::dashboard_stats(&api)
                .await
                .inspect_err(|err| warn!("LoadProfileCommand: stats unavailable: {err}"))
                .ok();
            let activities = api::recent_activity(&api)
                .await
                .inspect_err(|err| warn!("LoadProfileCommand: activity unavailable: {err}"))
                .ok();

            match api::current_user(&api).await {
                Ok(user) => {
                    let owner_copy = user.clone();
                    updater.update::<ProfileState>(move |state| {
                        if !state.load_finished(user, stats, activities) {
                            info!("LoadProfileCommand: member signed out, result dropped");
                        }
                    });
                    updater.update::<Session>(move |session| {
                        session.replace_user(owner_copy);
                    });
                    settle::<LoadProfileAction>(&updater, Ok(()));
                }
                Err(err) => {
                    // Load failures always show the generic message.
                    warn!("LoadProfileCommand: current user unavailable: {err}");
                    settle::<LoadProfileAction>(
                        &updater,
                        Err(LoadProfileAction::FALLBACK_ERROR.to_string()),
                    );
                }
            }
        })
    }
}

/// Sends the editor's fields and, once confirmed, makes them canonical.
#[derive(Default, Debug)]
pub struct SaveProfileCommand;

impl Command for SaveProfileCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let state = snap.get_state::<ProfileState>();
        let Some(edited) = state.edited.as_ref() else {
            warn!("SaveProfileCommand: nothing to save");
            return ready();
        };
        let update = ProfileUpdate::from_edited(edited, state.cover_photo.clone());
        if !begin::<SaveProfileAction>(&snap, &updater) {
            return ready();
        }
        let api = ApiContext::from_snapshot(&snap);

        Box::pin(async move {
            match api::update_profile(&api, &update).await {
                Ok(user) => {
                    publish_user(&updater, user, true);
                    settle::<SaveProfileAction>(&updater, Ok(()));
                }
                Err(err) => settle::<SaveProfileAction>(
                    &updater,
                    Err(err.user_message(SaveProfileAction::FALLBACK_ERROR)),
                ),
            }
        })
    }
}

/// Uploads `ProfileUploadInput::avatar` and points the profile at it.
#[derive(Default, Debug)]
pub struct UploadAvatarCommand;

impl Command for UploadAvatarCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let Some(file) = snap.get_state::<ProfileUploadInput>().avatar else {
            warn!("UploadAvatarCommand: no file selected");
            return ready();
        };
        if !begin::<AvatarUploadAction>(&snap, &updater) {
            return ready();
        }
        updater.update::<ProfileUploadInput>(|input| input.avatar = None);
        let api = ApiContext::from_snapshot(&snap);

        Box::pin(async move {
            let url = match api::upload_file(&api, file.into_part()).await {
                Ok(url) => url,
                Err(err) => {
                    settle::<AvatarUploadAction>(
                        &updater,
                        Err(err.user_message(AvatarUploadAction::FALLBACK_ERROR)),
                    );
                    return;
                }
            };
            match api::update_profile(&api, &ProfileUpdate::avatar(url.clone())).await {
                Ok(user) => {
                    publish_user(&updater, user, false);
                    settle::<AvatarUploadAction>(&updater, Ok(url));
                }
                Err(err) => {
                    warn!("UploadAvatarCommand: profile update failed: {err}");
                    settle::<AvatarUploadAction>(&updater, Err(AVATAR_UPDATE_ERROR.to_string()));
                }
            }
        })
    }
}

/// Uploads `ProfileUploadInput::cover` and points the profile at it.
///
/// The uploaded URL is kept for the next save even if the follow-up update fails.
#[derive(Default, Debug)]
pub struct UploadCoverCommand;

impl Command for UploadCoverCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let Some(file) = snap.get_state::<ProfileUploadInput>().cover else {
            warn!("UploadCoverCommand: no file selected");
            return ready();
        };
        if !begin::<CoverUploadAction>(&snap, &updater) {
            return ready();
        }
        updater.update::<ProfileUploadInput>(|input| input.cover = None);
        let owner = snap
            .get_state::<ProfileState>()
            .user
            .as_ref()
            .map(|user| user.id.clone())
            .unwrap_or_default();
        let api = ApiContext::from_snapshot(&snap);

        Box::pin(async move {
            let url = match api::upload_file(&api, file.into_part()).await {
                Ok(url) => url,
                Err(err) => {
                    settle::<CoverUploadAction>(
                        &updater,
                        Err(err.user_message(CoverUploadAction::FALLBACK_ERROR)),
                    );
                    return;
                }
            };
            let chosen = url.clone();
            updater.update::<ProfileState>(move |state| {
                state.choose_cover(&owner, chosen);
            });

            match api::update_profile(&api, &ProfileUpdate::cover_photo(url.clone())).await {
                Ok(user) => {
                    publish_user(&updater, user, false);
                    settle::<CoverUploadAction>(&updater, Ok(url));
                }
                Err(err) => {
                    warn!("UploadCoverCommand: profile update failed: {err}");
                    settle::<CoverUploadAction>(&updater, Err(COVER_UPDATE_ERROR.to_string()));
                }
            }
        })
    }
}
