mod admin_sidebar;
mod banner;
mod chips;
mod profile;
mod signup_form;
mod users;

pub use admin_sidebar::admin_sidebar;
pub use banner::{action_error_banner, error_banner};
pub use profile::{ProfileEditorText, profile_view, start_editing, stat_card};
pub use signup_form::signup_form;
pub use users::{RowAction, users_panel};
