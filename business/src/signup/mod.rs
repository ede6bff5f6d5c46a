mod wizard;

pub use wizard::{
    COMMON_SKILLS, PROFESSIONS, SignupDraft, SignupError, SignupStep, SignupWizard,
};

use growthyari_states::{Command, CommandFuture, CommandSnapshot, Updater, ready};
use log::warn;

use crate::profile::ProfileState;
use crate::{Route, Session};
use crate::action::{Action, action, begin, settle};
use crate::api::{self, ApiContext};
use crate::user::UserRecord;

action!(
    /// Registration call. Success carries the newly created member.
    SignupAction,
    UserRecord,
    "Failed to create account"
);

/// Submits the wizard draft.
///
/// The draft is validated again here; an invalid draft records its error on the wizard
/// and no request is made.
#[derive(Default, Debug)]
pub struct SignupCommand;

impl Command for SignupCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let wizard = snap.get_state::<SignupWizard>();
        let request = match wizard.submission() {
            Ok(request) => request,
            Err(err) => {
                warn!("SignupCommand: draft rejected: {err}");
                updater.update::<SignupWizard>(move |w| w.error = Some(err));
                return ready();
            }
        };
        if !begin::<SignupAction>(&snap, &updater) {
            return ready();
        }
        let api = ApiContext::from_snapshot(&snap);

        Box::pin(async move {
            match api::signup(&api, &request).await {
                Ok(response) => {
                    let user = response.user.clone();
                    let profile_user = response.user.clone();
                    updater.update::<ProfileState>(move |profile| {
                        *profile = ProfileState::with_user(profile_user);
                    });
                    updater.update::<Route>(|route| *route = route.resolve(true));
                    updater.update::<Session>(move |session| {
                        session.establish(response.user, response.token)
                    });
                    updater.update::<SignupWizard>(SignupWizard::reset);
                    settle::<SignupAction>(&updater, Ok(user));
                }
                Err(err) => {
                    settle::<SignupAction>(
                        &updater,
                        Err(err.user_message(SignupAction::FALLBACK_ERROR)),
                    );
                }
            }
        })
    }
}
