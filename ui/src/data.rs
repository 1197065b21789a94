use std::borrow::Cow;

use mental_auth::{Control, FormKind, Page, Panel, PasswordSlot};
use ratatui::layout::Position;
use ratatui::prelude::{Color, Span, Style};
use tui_input::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LoginEmail,
    LoginPassword,
    FirstName,
    LastName,
    SignupEmail,
    SignupPassword,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::LoginEmail,
        Field::LoginPassword,
        Field::FirstName,
        Field::LastName,
        Field::SignupEmail,
        Field::SignupPassword,
    ];

    pub fn form(self) -> FormKind {
        match self {
            Field::LoginEmail | Field::LoginPassword => FormKind::Login,
            _ => FormKind::Signup,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Field::LoginEmail | Field::SignupEmail => "Email",
            Field::LoginPassword | Field::SignupPassword => "Password",
            Field::FirstName => "First name",
            Field::LastName => "Last name",
        }
    }

    pub fn password_slot(self) -> Option<PasswordSlot> {
        match self {
            Field::LoginPassword => Some(PasswordSlot::Login),
            Field::SignupPassword => Some(PasswordSlot::Signup),
            _ => None,
        }
    }

    pub fn value(self, page: &Page) -> &str {
        match self {
            Field::LoginEmail => page.login_form.email.value(),
            Field::LoginPassword => page.login_form.password.value(),
            Field::FirstName => page.signup_form.first_name.value(),
            Field::LastName => page.signup_form.last_name.value(),
            Field::SignupEmail => page.signup_form.email.value(),
            Field::SignupPassword => page.signup_form.password.value(),
        }
    }

    pub fn write(self, page: &mut Page, value: &str) {
        match self {
            Field::LoginEmail => page.login_form.email.set_value(value),
            Field::LoginPassword => page.login_form.password.set_value(value),
            Field::FirstName => page.signup_form.first_name.set_value(value),
            Field::LastName => page.signup_form.last_name.set_value(value),
            Field::SignupEmail => page.signup_form.email.set_value(value),
            Field::SignupPassword => page.signup_form.password.set_value(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Control(Control),
    Submit(FormKind),
}

/// Tab order of the panel currently on screen. Reveal buttons only appear
/// when the page has them.
pub fn focus_ring(panel: Panel, page: &Page) -> Vec<Focus> {
    let mut ring = vec![
        Focus::Control(Control::LoginTab),
        Focus::Control(Control::SignupTab),
    ];
    match panel {
        Panel::Login => {
            ring.push(Focus::Field(Field::LoginEmail));
            ring.push(Focus::Field(Field::LoginPassword));
            if page.has_toggle(PasswordSlot::Login) {
                ring.push(Focus::Control(Control::LoginPasswordToggle));
            }
            ring.push(Focus::Submit(FormKind::Login));
            ring.push(Focus::Control(Control::ForgotPassword));
        }
        Panel::Signup => {
            ring.push(Focus::Field(Field::FirstName));
            ring.push(Focus::Field(Field::LastName));
            ring.push(Focus::Field(Field::SignupEmail));
            ring.push(Focus::Field(Field::SignupPassword));
            if page.has_toggle(PasswordSlot::Signup) {
                ring.push(Focus::Control(Control::SignupPasswordToggle));
            }
            ring.push(Focus::Submit(FormKind::Signup));
            ring.push(Focus::Control(Control::CancelSignup));
        }
    }
    ring
}

pub fn first_field(panel: Panel) -> Focus {
    match panel {
        Panel::Login => Focus::Field(Field::LoginEmail),
        Panel::Signup => Focus::Field(Field::FirstName),
    }
}

/// Editing buffers for every text field, mirrored into the page.
#[derive(Debug, Default)]
pub struct FieldInputs {
    login_email: Input,
    login_password: Input,
    first_name: Input,
    last_name: Input,
    signup_email: Input,
    signup_password: Input,
    pub(crate) cursor_position: Option<Position>,
}

impl FieldInputs {
    pub fn get(&self, field: Field) -> &Input {
        match field {
            Field::LoginEmail => &self.login_email,
            Field::LoginPassword => &self.login_password,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::SignupEmail => &self.signup_email,
            Field::SignupPassword => &self.signup_password,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut Input {
        match field {
            Field::LoginEmail => &mut self.login_email,
            Field::LoginPassword => &mut self.login_password,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::SignupEmail => &mut self.signup_email,
            Field::SignupPassword => &mut self.signup_password,
        }
    }

    /// Picks up values the controller changed, e.g. after a form reset.
    pub fn sync_from(&mut self, page: &Page) {
        for field in Field::ALL {
            let value = field.value(page);
            let input = self.get_mut(field);
            if input.value() != value {
                *input = Input::new(value.to_string());
            }
        }
    }
}

pub fn highlight<'a>(text: impl Into<Cow<'a, str>>, needed: bool) -> Span<'a> {
    if needed {
        Span::styled(text, Style::default().bg(Color::White).fg(Color::Black))
    } else {
        Span::styled(text, Style::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Panel::Login, 7)]
    #[case(Panel::Signup, 9)]
    fn test_ring_sizes(#[case] panel: Panel, #[case] expected: usize) {
        assert_eq!(focus_ring(panel, &Page::default()).len(), expected);
    }

    #[test]
    fn test_ring_skips_missing_toggles() {
        let ring = focus_ring(Panel::Login, &Page::without_toggles());
        assert!(!ring.contains(&Focus::Control(Control::LoginPasswordToggle)));
        assert!(ring.contains(&Focus::Control(Control::ForgotPassword)));
    }

    #[test]
    fn test_sync_from_page() {
        let mut page = Page::default();
        let mut inputs = FieldInputs::default();
        Field::SignupEmail.write(&mut page, "jane@doe.org");
        inputs.sync_from(&page);
        assert_eq!(inputs.get(Field::SignupEmail).value(), "jane@doe.org");

        page.signup_form.reset();
        inputs.sync_from(&page);
        assert_eq!(inputs.get(Field::SignupEmail).value(), "");
    }
}
