use growthyari_business::{BusinessConfig, Session, build_state_ctx, build_state_ctx_with_session};
use growthyari_states::StateCtx;

use crate::pages::InitialLoads;
use crate::utils::file_picker::{FilePickerHandler, SystemFilePickerHandler};
use crate::widgets::ProfileEditorText;

/// The main application state.
///
/// Note: We manually implement Default because the file picker is a trait object.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Opens the avatar and cover photo dialogs.
    pub file_picker: Box<dyn FilePickerHandler>,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            log::warn!("Ignoring environment configuration: {err}");
            BusinessConfig::default()
        });
        log::info!("Using API at {}", config.api_url());

        Self::with_ctx(build_state_ctx(config))
    }
}

impl State {
    fn with_ctx(mut ctx: StateCtx) -> Self {
        register_ui_states(&mut ctx);
        Self {
            ctx,
            file_picker: Box::new(SystemFilePickerHandler),
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::with_ctx(build_state_ctx(BusinessConfig::new(base_url)))
    }

    /// A test state with `session` already signed in.
    pub fn test_signed_in(base_url: String, session: Session) -> Self {
        Self::with_ctx(build_state_ctx_with_session(
            BusinessConfig::new(base_url),
            session,
        ))
    }

    pub fn with_file_picker(mut self, picker: impl FilePickerHandler + 'static) -> Self {
        self.file_picker = Box::new(picker);
        self
    }
}

/// Registers the states owned by widgets and pages.
pub fn register_ui_states(ctx: &mut StateCtx) {
    ctx.add_state(InitialLoads::default());
    ctx.add_state(ProfileEditorText::default());
}
