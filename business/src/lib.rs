//! Client-side business layer of GrowthYari.
//!
//! Everything here is registered in a [`StateCtx`]: plain states hold form input and
//! server copies, [`VisibleUsersCompute`] derives the user table, and commands talk to the
//! backend and report back through the updater.

pub mod action;
pub mod admin;
pub mod api;
mod config;
pub mod http;
pub mod profile;
mod route;
mod session;
pub mod signup;
pub mod user;
pub mod users;

#[cfg(test)]
mod test_utils;

pub use action::{Action, AsyncResult};
pub use admin::{AdminNav, AdminView};
pub use config::{BusinessConfig, ConfigError};
pub use profile::{
    AvatarUploadAction, CoverUploadAction, FileUpload, LoadProfileAction, LoadProfileCommand,
    ProfileState, ProfileUploadInput, SaveProfileAction, SaveProfileCommand, UploadAvatarCommand,
    UploadCoverCommand,
};
pub use route::Route;
pub use session::Session;
pub use signup::{SignupAction, SignupCommand, SignupError, SignupStep, SignupWizard};
pub use user::{ProfileUpdate, UserRecord};
pub use users::{
    FetchUsersAction, ModerationAction, ModerationInput, ModerationKind, RefreshUsersCommand,
    StatusFilter, SuspendUserCommand, UserDirectory, UserFilter, UserStats, VerifyUserCommand,
    VisibleUsersCompute,
};

use growthyari_states::StateCtx;

/// A context with every state, compute and command of the client registered.
pub fn build_state_ctx(config: BusinessConfig) -> StateCtx {
    build_state_ctx_with_session(config, Session::default())
}

pub fn build_state_ctx_with_session(config: BusinessConfig, session: Session) -> StateCtx {
    let mut ctx = StateCtx::new();

    ctx.add_state(config);
    ctx.add_state(Route::default().resolve(session.is_signed_in()));

    let profile = session
        .user
        .clone()
        .map(ProfileState::with_user)
        .unwrap_or_default();
    ctx.add_state(session);

    ctx.add_state(SignupWizard::default());
    ctx.add_state(SignupAction::default());
    ctx.record_command(SignupCommand);

    ctx.add_state(profile);
    ctx.add_state(ProfileUploadInput::default());
    ctx.add_state(LoadProfileAction::default());
    ctx.add_state(SaveProfileAction::default());
    ctx.add_state(AvatarUploadAction::default());
    ctx.add_state(CoverUploadAction::default());
    ctx.record_command(LoadProfileCommand);
    ctx.record_command(SaveProfileCommand);
    ctx.record_command(UploadAvatarCommand);
    ctx.record_command(UploadCoverCommand);

    ctx.add_state(AdminNav::default());
    ctx.add_state(UserDirectory::default());
    ctx.add_state(UserFilter::default());
    ctx.add_state(FetchUsersAction::default());
    ctx.add_state(ModerationAction::default());
    ctx.add_state(ModerationInput::default());
    ctx.record_compute(VisibleUsersCompute::default());
    ctx.record_command(RefreshUsersCommand);
    ctx.record_command(VerifyUserCommand);
    ctx.record_command(SuspendUserCommand);

    ctx
}

/// Whether any remote call is still in flight.
pub fn has_pending_actions(ctx: &StateCtx) -> bool {
    fn pending<A: Action>(ctx: &StateCtx) -> bool {
        ctx.try_state::<A>().is_ok_and(A::is_pending)
    }

    pending::<SignupAction>(ctx)
        || pending::<LoadProfileAction>(ctx)
        || pending::<SaveProfileAction>(ctx)
        || pending::<AvatarUploadAction>(ctx)
        || pending::<CoverUploadAction>(ctx)
        || pending::<FetchUsersAction>(ctx)
        || pending::<ModerationAction>(ctx)
}

/// Drops the session and everything fetched for it.
pub fn sign_out(ctx: &mut StateCtx) {
    log::info!("Signing out");
    ctx.state_mut::<Session>().sign_out();
    *ctx.state_mut::<ProfileState>() = ProfileState::default();
    *ctx.state_mut::<UserDirectory>() = UserDirectory::default();
    *ctx.state_mut::<AdminNav>() = AdminNav::default();
    *ctx.state_mut::<Route>() = Route::Signup;
}
