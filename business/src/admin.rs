use growthyari_states::State;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminView {
    #[default]
    Overview,
    Users,
    Content,
    Sessions,
    Payments,
    Reports,
    Analytics,
    Settings,
}

impl AdminView {
    /// Sidebar order.
    pub const ALL: [AdminView; 8] = [
        Self::Overview,
        Self::Users,
        Self::Content,
        Self::Sessions,
        Self::Payments,
        Self::Reports,
        Self::Analytics,
        Self::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Users => "User Management",
            Self::Content => "Content Moderation",
            Self::Sessions => "Session Management",
            Self::Payments => "Payments",
            Self::Reports => "Reports & Issues",
            Self::Analytics => "Analytics",
            Self::Settings => "System Settings",
        }
    }

    /// Views that only show a placeholder for now.
    pub fn is_placeholder(self) -> bool {
        !matches!(self, Self::Overview | Self::Users)
    }
}

/// Which admin page is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminNav {
    pub current: AdminView,
}

impl State for AdminNav {}

impl AdminNav {
    /// Returns whether the view changed.
    pub fn navigate(&mut self, view: AdminView) -> bool {
        let changed = self.current != view;
        self.current = view;
        changed
    }
}
