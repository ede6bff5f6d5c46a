use std::any::TypeId;

use growthyari_states::{Compute, ComputeDeps, Dep, State, Updater};

use crate::user::UserRecord;
use crate::users::UserDirectory;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Verified,
    Unverified,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [Self::All, Self::Verified, Self::Unverified];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Users",
            Self::Verified => "Verified",
            Self::Unverified => "Unverified",
        }
    }

    pub fn matches(self, user: &UserRecord) -> bool {
        match self {
            Self::All => true,
            Self::Verified => user.is_verified,
            Self::Unverified => !user.is_verified,
        }
    }
}

/// Search box and status select of the user table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub query: String,
    pub status: StatusFilter,
}

impl State for UserFilter {}

impl UserFilter {
    pub fn new(query: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    /// Blank queries match everything. Otherwise a case-insensitive substring of the
    /// name, the email or any profession.
    pub fn matches_query(&self, user: &UserRecord) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        user.name.to_lowercase().contains(&query)
            || user.email.to_lowercase().contains(&query)
            || user
                .profession
                .iter()
                .any(|p| p.to_lowercase().contains(&query))
    }

    pub fn matches(&self, user: &UserRecord) -> bool {
        self.matches_query(user) && self.status.matches(user)
    }
}

/// Records visible under `filter`, in source order.
pub fn filter_users(users: &[UserRecord], filter: &UserFilter) -> Vec<UserRecord> {
    users.iter().filter(|u| filter.matches(u)).cloned().collect()
}

/// Rows of the user table, derived from [`UserDirectory`] and [`UserFilter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleUsersCompute {
    pub users: Vec<UserRecord>,
}

impl State for VisibleUsersCompute {}

impl Compute for VisibleUsersCompute {
    fn deps(&self) -> ComputeDeps {
        vec![TypeId::of::<UserDirectory>(), TypeId::of::<UserFilter>()]
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let directory = deps.get_state_ref::<UserDirectory>();
        let filter = deps.get_state_ref::<UserFilter>();
        updater.set(VisibleUsersCompute {
            users: filter_users(&directory.users, filter),
        });
    }
}
