//! Admin user management: the member directory, its filter and moderation.

mod filter;

pub use filter::{StatusFilter, UserFilter, VisibleUsersCompute, filter_users};

use growthyari_states::{Command, CommandFuture, CommandSnapshot, State, Updater, ready};
use log::{info, warn};

use crate::action::{Action, AsyncResult, action, begin, settle};
use crate::api::{self, ApiContext};
use crate::user::UserRecord;

/// Header cards of the user table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub verified: usize,
    pub unverified: usize,
    pub total_sessions: u64,
}

/// Every member known to the admin view, in server order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    pub users: Vec<UserRecord>,
    /// Id of the row whose details are open.
    pub selected: Option<String>,
}

impl State for UserDirectory {}

impl UserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            selected: None,
        }
    }

    pub fn replace_all(&mut self, users: Vec<UserRecord>) {
        if let Some(id) = &self.selected
            && !users.iter().any(|u| &u.id == id)
        {
            self.selected = None;
        }
        self.users = users;
    }

    /// Replaces the record with the same id. Returns whether it was found.
    pub fn replace_user(&mut self, user: UserRecord) -> bool {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&UserRecord> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    pub fn stats(&self) -> UserStats {
        let verified = self.users.iter().filter(|u| u.is_verified).count();
        UserStats {
            total: self.users.len(),
            verified,
            unverified: self.users.len() - verified,
            total_sessions: self
                .users
                .iter()
                .map(|u| u64::from(u.sessions_completed))
                .sum(),
        }
    }
}

action!(
    /// Loading the directory. Success carries the number of members received.
    FetchUsersAction,
    usize,
    "Failed to load users"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationKind {
    Verify,
    Suspend,
}

impl ModerationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Verify => "Verify User",
            Self::Suspend => "Suspend User",
        }
    }

    fn fallback_error(self) -> &'static str {
        match self {
            Self::Verify => "Failed to verify user",
            Self::Suspend => "Failed to suspend user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationTarget {
    pub kind: ModerationKind,
    pub user_id: String,
}

/// Verify/suspend calls. At most one is in flight at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModerationAction {
    pub result: AsyncResult<ModerationTarget>,
    /// The call currently or last issued.
    pub target: Option<ModerationTarget>,
}

impl State for ModerationAction {}

impl Action for ModerationAction {
    type Output = ModerationTarget;
    const NAME: &'static str = "ModerationAction";
    const FALLBACK_ERROR: &'static str = "Failed to update user";

    fn result(&self) -> &AsyncResult<ModerationTarget> {
        &self.result
    }

    fn result_mut(&mut self) -> &mut AsyncResult<ModerationTarget> {
        &mut self.result
    }
}

impl ModerationAction {
    pub fn is_in_flight_for(&self, user_id: &str) -> bool {
        self.result.is_pending() && self.target.as_ref().is_some_and(|t| t.user_id == user_id)
    }
}

/// Target of the next moderation command. Set by the UI before dispatching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModerationInput {
    pub user_id: Option<String>,
}

impl State for ModerationInput {}

/// Replaces the directory with the server list.
#[derive(Default, Debug)]
pub struct RefreshUsersCommand;

impl Command for RefreshUsersCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        if !begin::<FetchUsersAction>(&snap, &updater) {
            return ready();
        }
        let api = ApiContext::from_snapshot(&snap);

        Box::pin(async move {
            match api::list_users(&api).await {
                Ok(users) => {
                    let count = users.len();
                    updater.update::<UserDirectory>(move |dir| dir.replace_all(users));
                    settle::<FetchUsersAction>(&updater, Ok(count));
                }
                Err(err) => settle::<FetchUsersAction>(
                    &updater,
                    Err(err.user_message(FetchUsersAction::FALLBACK_ERROR)),
                ),
            }
        })
    }
}

fn moderate(kind: ModerationKind, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
    let Some(user_id) = snap.get_state::<ModerationInput>().user_id else {
        warn!("{kind:?}: no user selected");
        return ready();
    };
    if !begin::<ModerationAction>(&snap, &updater) {
        return ready();
    }
    let target = ModerationTarget { kind, user_id };
    let in_flight = target.clone();
    updater.update::<ModerationAction>(move |action| action.target = Some(in_flight));
    let api = ApiContext::from_snapshot(&snap);

    Box::pin(async move {
        let result = match kind {
            ModerationKind::Verify => api::verify_user(&api, &target.user_id).await,
            ModerationKind::Suspend => api::suspend_user(&api, &target.user_id).await,
        };
        match result {
            Ok(user) => {
                updater.update::<UserDirectory>(move |dir| {
                    if !dir.replace_user(user) {
                        info!("Moderated user is not in the directory");
                    }
                });
                settle::<ModerationAction>(&updater, Ok(target));
            }
            Err(err) => {
                settle::<ModerationAction>(&updater, Err(err.user_message(kind.fallback_error())))
            }
        }
    })
}

/// Marks `ModerationInput::user_id` as verified.
#[derive(Default, Debug)]
pub struct VerifyUserCommand;

impl Command for VerifyUserCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        moderate(ModerationKind::Verify, snap, updater)
    }
}

/// Suspends `ModerationInput::user_id`.
#[derive(Default, Debug)]
pub struct SuspendUserCommand;

impl Command for SuspendUserCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        moderate(ModerationKind::Suspend, snap, updater)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, verified: bool, sessions: u32) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            name: format!("User {id}"),
            is_verified: verified,
            sessions_completed: sessions,
            ..Default::default()
        }
    }

    #[test]
    fn test_stats() {
        let dir = UserDirectory::new(vec![user("1", true, 3), user("2", false, 4), user("3", true, 0)]);
        assert_eq!(
            dir.stats(),
            UserStats {
                total: 3,
                verified: 2,
                unverified: 1,
                total_sessions: 7,
            }
        );
        assert_eq!(UserDirectory::default().stats(), UserStats::default());
    }

    #[test]
    fn test_replace_user_touches_only_target() {
        let mut dir = UserDirectory::new(vec![user("1", false, 0), user("2", false, 0)]);
        assert!(dir.replace_user(user("2", true, 0)));
        assert!(!dir.users[0].is_verified);
        assert!(dir.users[1].is_verified);

        assert!(!dir.replace_user(user("9", true, 0)));
        assert_eq!(dir.users.len(), 2);
    }

    #[test]
    fn test_selection_follows_replacement() {
        let mut dir = UserDirectory::new(vec![user("1", false, 0)]);
        dir.select("1");
        dir.replace_user(user("1", true, 0));
        assert!(dir.selected().is_some_and(|u| u.is_verified));

        dir.replace_all(vec![user("2", false, 0)]);
        assert_eq!(dir.selected, None);
    }
}
