use crate::domain::auth::{LoginForm, PasswordField, SignupForm};
use crate::domain::panel::{Container, Panel, SelectorButton};
use crate::domain::password::ToggleControl;

pub const DEFAULT_HELPER_TEXT: &str =
    "Fill in every field and choose a password with at least 6 characters.";

#[derive(Debug, Clone, PartialEq)]
pub struct HelperMessage {
    pub text: String,
    pub visible: bool,
}

impl Default for HelperMessage {
    fn default() -> Self {
        Self {
            text: DEFAULT_HELPER_TEXT.to_string(),
            visible: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordSlot {
    Login,
    Signup,
}

/// Every element the controller drives.
///
/// Required elements are plain fields. The two toggle controls are optional:
/// a page without one simply has no reveal button for that field.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub login_button: SelectorButton,
    pub signup_button: SelectorButton,
    pub login_panel: Container,
    pub signup_panel: Container,
    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    pub signup_helper: HelperMessage,
    pub login_password_toggle: Option<ToggleControl>,
    pub signup_password_toggle: Option<ToggleControl>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            login_button: SelectorButton::default(),
            signup_button: SelectorButton::default(),
            login_panel: Container::default(),
            signup_panel: Container::default(),
            login_form: LoginForm::default(),
            signup_form: SignupForm::default(),
            signup_helper: HelperMessage::default(),
            login_password_toggle: Some(ToggleControl::default()),
            signup_password_toggle: Some(ToggleControl::default()),
        }
    }
}

impl Page {
    pub fn without_toggles() -> Self {
        Self {
            login_password_toggle: None,
            signup_password_toggle: None,
            ..Self::default()
        }
    }

    pub fn visible_panels(&self) -> Vec<Panel> {
        [
            (Panel::Login, self.login_panel.visible),
            (Panel::Signup, self.signup_panel.visible),
        ]
        .into_iter()
        .filter_map(|(panel, visible)| visible.then_some(panel))
        .collect()
    }

    pub fn selected_panels(&self) -> Vec<Panel> {
        [
            (Panel::Login, self.login_button.is_selected()),
            (Panel::Signup, self.signup_button.is_selected()),
        ]
        .into_iter()
        .filter_map(|(panel, selected)| selected.then_some(panel))
        .collect()
    }

    pub(crate) fn password_pair(
        &mut self,
        slot: PasswordSlot,
    ) -> (&mut PasswordField, Option<&mut ToggleControl>) {
        match slot {
            PasswordSlot::Login => (
                &mut self.login_form.password,
                self.login_password_toggle.as_mut(),
            ),
            PasswordSlot::Signup => (
                &mut self.signup_form.password,
                self.signup_password_toggle.as_mut(),
            ),
        }
    }

    pub fn has_toggle(&self, slot: PasswordSlot) -> bool {
        match slot {
            PasswordSlot::Login => self.login_password_toggle.is_some(),
            PasswordSlot::Signup => self.signup_password_toggle.is_some(),
        }
    }
}
