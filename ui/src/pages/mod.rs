//! Pages module for the application.
//!
//! This module contains the different pages that can be displayed based on the route:
//! - `signup_page`: account creation for signed-out visitors
//! - `profile_page`: the signed-in member's profile
//! - `admin_page`: the admin dashboard with its sidebar

mod admin_page;
mod profile_page;
mod signup_page;

pub use admin_page::admin_page;
pub use profile_page::profile_page;
pub use signup_page::signup_page;

use growthyari_states::State;

/// Pages that already issued their first fetch since sign-in.
///
/// Refreshing after that is explicit, so a dismissed failure does not reload on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitialLoads {
    pub profile: bool,
    pub users: bool,
}

impl State for InitialLoads {}
