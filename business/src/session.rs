use growthyari_states::State;

use crate::user::UserRecord;

/// The signed-in member. Single owner of the canonical current user; other states
/// replace it through `Updater::update::<Session>` once the server confirms a write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
}

impl State for Session {}

impl Session {
    pub fn new(token: Option<String>, user: Option<UserRecord>) -> Self {
        Self { token, user }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Replaces the current user with a newer copy of the same member. The token is kept.
    ///
    /// Returns `false` and changes nothing when nobody is signed in or `user` is another
    /// member, so a response that lands after sign-out cannot sign anyone back in.
    pub fn replace_user(&mut self, user: UserRecord) -> bool {
        if !self.is_member(&user.id) {
            return false;
        }
        self.user = Some(user);
        true
    }

    pub fn is_member(&self, id: &str) -> bool {
        self.user.as_ref().is_some_and(|current| current.id == id)
    }

    /// Establishes a session after signup. A missing token keeps the previous one.
    pub fn establish(&mut self, user: UserRecord, token: Option<String>) {
        self.user = Some(user);
        if token.is_some() {
            self.token = token;
        }
    }

    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}
