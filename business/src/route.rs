//! Route state for page navigation.

use growthyari_states::State;

/// The page the client shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// Account creation, shown while nobody is signed in.
    #[default]
    Signup,
    Profile,
    Admin,
}

impl State for Route {}

impl Route {
    /// The route to show for the current session.
    ///
    /// Signed-out members always land on signup; a fresh sign-in moves off it to the profile.
    pub fn resolve(self, signed_in: bool) -> Self {
        match (self, signed_in) {
            (_, false) => Self::Signup,
            (Self::Signup, true) => Self::Profile,
            (route, true) => route,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Signup => "Sign Up",
            Self::Profile => "Profile",
            Self::Admin => "Admin",
        }
    }
}
