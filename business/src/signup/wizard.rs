use growthyari_states::State;

use crate::api::SignupRequest;

/// Suggested professions shown as chips on the second step.
pub const PROFESSIONS: &[&str] = &[
    "Business Coach",
    "Tech Developer",
    "Designer",
    "Marketing",
    "Product Manager",
    "Consultant",
    "Entrepreneur",
    "Data Scientist",
    "Sales Expert",
];

/// Suggested skills shown as chips on the second step.
pub const COMMON_SKILLS: &[&str] = &[
    "Leadership",
    "Project Management",
    "Strategic Planning",
    "Data Analysis",
    "Digital Marketing",
    "Software Development",
    "UX/UI Design",
    "Sales",
    "Customer Success",
    "Product Management",
    "Business Development",
    "Financial Analysis",
    "Operations Management",
    "Team Building",
    "Communication",
    "Problem Solving",
    "Innovation",
    "Agile/Scrum",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupStep {
    #[default]
    Credentials,
    Professions,
}

impl SignupStep {
    pub const COUNT: usize = 2;

    /// 1-based, as shown to the user.
    pub fn number(self) -> usize {
        match self {
            Self::Credentials => 1,
            Self::Professions => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Credentials => "Basic Information",
            Self::Professions => "Profession & Skills",
        }
    }

    pub fn is_final(self) -> bool {
        self == Self::Professions
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please select at least one profession")]
    NoProfession,
    #[error("Finish the previous step first")]
    NotOnFinalStep,
}

/// What the member has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub professions: Vec<String>,
    pub skills: Vec<String>,
}

impl SignupDraft {
    fn check_credentials(&self) -> Result<(), SignupError> {
        let blank = [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|field| field.trim().is_empty());
        if blank {
            return Err(SignupError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Two-step signup form.
///
/// Step 1 collects credentials, step 2 professions and skills. Moving forward from step 1
/// and submitting from step 2 are both gated by validation; a rejected transition keeps the
/// step and records the message in `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupWizard {
    pub step: SignupStep,
    pub draft: SignupDraft,
    pub profession_input: String,
    pub skill_input: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub error: Option<SignupError>,
}

impl State for SignupWizard {}

impl SignupWizard {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.draft.password = password.into();
    }

    pub fn set_confirm_password(&mut self, password: impl Into<String>) {
        self.draft.confirm_password = password.into();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_confirm_visibility(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }

    /// Adds a profession and clears the free-text input. Blanks and repeats are ignored.
    pub fn add_profession(&mut self, profession: &str) {
        push_unique(&mut self.draft.professions, profession);
        self.profession_input.clear();
    }

    pub fn add_profession_from_input(&mut self) {
        let input = std::mem::take(&mut self.profession_input);
        self.add_profession(&input);
    }

    pub fn remove_profession(&mut self, profession: &str) {
        self.draft.professions.retain(|p| p != profession);
    }

    pub fn has_profession(&self, profession: &str) -> bool {
        self.draft.professions.iter().any(|p| p == profession)
    }

    /// Adds a skill and clears the free-text input. Blanks and repeats are ignored.
    pub fn add_skill(&mut self, skill: &str) {
        push_unique(&mut self.draft.skills, skill);
        self.skill_input.clear();
    }

    pub fn add_skill_from_input(&mut self) {
        let input = std::mem::take(&mut self.skill_input);
        self.add_skill(&input);
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.draft.skills.retain(|s| s != skill);
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.draft.skills.iter().any(|s| s == skill)
    }

    /// Moves to the next step if the current one is valid. On the last step this is a no-op.
    pub fn advance(&mut self) -> Result<SignupStep, SignupError> {
        if self.step == SignupStep::Credentials {
            if let Err(err) = self.draft.check_credentials() {
                self.error = Some(err.clone());
                return Err(err);
            }
            self.step = SignupStep::Professions;
        }
        self.error = None;
        Ok(self.step)
    }

    /// Goes back one step. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        match self.step {
            SignupStep::Credentials => false,
            SignupStep::Professions => {
                self.step = SignupStep::Credentials;
                self.error = None;
                true
            }
        }
    }

    /// Builds the registration request if the draft is complete.
    pub fn submission(&self) -> Result<SignupRequest, SignupError> {
        if !self.step.is_final() {
            return Err(SignupError::NotOnFinalStep);
        }
        self.draft.check_credentials()?;
        if self.draft.professions.is_empty() {
            return Err(SignupError::NoProfession);
        }
        Ok(SignupRequest {
            name: self.draft.name.trim().to_string(),
            email: self.draft.email.trim().to_string(),
            password: self.draft.password.clone(),
            profession: self.draft.professions.clone(),
            skills: self.draft.skills.clone(),
        })
    }

    /// Like [`submission`](Self::submission), recording a rejection in `error`.
    pub fn submit(&mut self) -> Result<SignupRequest, SignupError> {
        let result = self.submission();
        self.error = result.as_ref().err().cloned();
        result
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Discards the draft and returns to step 1.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn push_unique(items: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() && !items.iter().any(|existing| existing == value) {
        items.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, password: &str, confirm: &str) -> SignupWizard {
        let mut wizard = SignupWizard::default();
        wizard.set_name(name);
        wizard.set_email(email);
        wizard.set_password(password);
        wizard.set_confirm_password(confirm);
        wizard
    }

    #[test]
    fn test_valid_credentials_advance() {
        let mut wizard = filled("Ada", "a@b.com", "x", "x");
        assert_eq!(wizard.advance(), Ok(SignupStep::Professions));
        assert_eq!(wizard.step.number(), 2);
        assert_eq!(wizard.error, None);
    }

    #[test]
    fn test_mismatch_keeps_step_one() {
        let mut wizard = filled("Ada", "a@b.com", "x", "y");
        assert_eq!(wizard.advance(), Err(SignupError::PasswordMismatch));
        assert_eq!(wizard.step, SignupStep::Credentials);
        assert_eq!(
            wizard.error.as_ref().map(ToString::to_string).as_deref(),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_any_missing_field_blocks_advance() {
        let cases = [
            filled("", "a@b.com", "x", "x"),
            filled("Ada", "  ", "x", "x"),
            filled("Ada", "a@b.com", "", "x"),
            filled("Ada", "a@b.com", "x", ""),
        ];
        for mut wizard in cases {
            assert_eq!(wizard.advance(), Err(SignupError::MissingFields));
            assert_eq!(wizard.step, SignupStep::Credentials);
        }
    }

    #[test]
    fn test_missing_fields_reported_before_mismatch() {
        let mut wizard = filled("", "a@b.com", "x", "y");
        assert_eq!(wizard.advance(), Err(SignupError::MissingFields));
    }

    #[test]
    fn test_advance_on_last_step_is_noop() {
        let mut wizard = filled("Ada", "a@b.com", "x", "x");
        wizard.advance().unwrap();
        assert_eq!(wizard.advance(), Ok(SignupStep::Professions));
    }

    #[test]
    fn test_retreat() {
        let mut wizard = filled("Ada", "a@b.com", "x", "x");
        assert!(!wizard.retreat());

        wizard.advance().unwrap();
        assert!(wizard.retreat());
        assert_eq!(wizard.step, SignupStep::Credentials);
        assert_eq!(wizard.draft.name, "Ada");
    }

    #[test]
    fn test_submit_requires_profession() {
        let mut wizard = filled("Ada", "a@b.com", "x", "x");
        wizard.advance().unwrap();

        assert_eq!(wizard.submit(), Err(SignupError::NoProfession));
        assert_eq!(wizard.error, Some(SignupError::NoProfession));

        wizard.add_profession("Designer");
        let request = wizard.submit().unwrap();
        assert_eq!(request.profession, vec!["Designer"]);
        assert_eq!(wizard.error, None);
    }

    #[test]
    fn test_submit_only_on_final_step() {
        let mut wizard = filled("Ada", "a@b.com", "x", "x");
        wizard.add_profession("Designer");
        assert_eq!(wizard.submit(), Err(SignupError::NotOnFinalStep));
    }

    #[test]
    fn test_add_ignores_blank_and_duplicates_and_clears_input() {
        let mut wizard = SignupWizard::default();
        wizard.profession_input = "  Pilot ".to_string();
        wizard.add_profession_from_input();
        wizard.add_profession("Pilot");
        wizard.add_profession("   ");
        assert_eq!(wizard.draft.professions, vec!["Pilot"]);
        assert!(wizard.profession_input.is_empty());

        wizard.skill_input = "Rust".to_string();
        wizard.add_skill_from_input();
        wizard.add_skill("Rust");
        assert_eq!(wizard.draft.skills, vec!["Rust"]);
        assert!(wizard.skill_input.is_empty());

        wizard.remove_skill("Rust");
        assert!(!wizard.has_skill("Rust"));
    }

    #[test]
    fn test_reset_discards_draft() {
        let mut wizard = filled("Ada", "a@b.com", "x", "x");
        wizard.advance().unwrap();
        wizard.toggle_password_visibility();
        wizard.reset();
        assert_eq!(wizard, SignupWizard::default());
    }
}
