use crate::domain::page::PasswordSlot;
use crate::domain::panel::Panel;
use crate::service::controller::PageController;
use crate::service::notifier::Notifier;
use crate::service::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    LoginTab,
    SignupTab,
    LoginPasswordToggle,
    SignupPasswordToggle,
    CancelSignup,
    ForgotPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Click(Control),
    Submit(FormKind),
    KeyDown(Key),
}

/// Whether the controller consumed an event. A handled event must not get
/// the host's default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    Ignored,
}

impl<N: Notifier, S: Scheduler> PageController<N, S> {
    pub fn dispatch(&mut self, event: PageEvent) -> Dispatch {
        match event {
            PageEvent::Click(control) => {
                self.click(control);
                Dispatch::Handled
            }
            PageEvent::Submit(FormKind::Login) => {
                self.submit_login();
                Dispatch::Handled
            }
            PageEvent::Submit(FormKind::Signup) => {
                self.submit_signup();
                Dispatch::Handled
            }
            PageEvent::KeyDown(key) => self.handle_key(key),
        }
    }

    pub fn handle_key(&mut self, key: Key) -> Dispatch {
        match key {
            Key::ArrowLeft => self.activate(Panel::Login),
            Key::ArrowRight => self.activate(Panel::Signup),
            Key::Other => return Dispatch::Ignored,
        }
        Dispatch::Handled
    }

    fn click(&mut self, control: Control) {
        match control {
            Control::LoginTab => self.activate(Panel::Login),
            Control::SignupTab => self.activate(Panel::Signup),
            Control::LoginPasswordToggle => {
                self.toggle_password(PasswordSlot::Login);
            }
            Control::SignupPasswordToggle => {
                self.toggle_password(PasswordSlot::Signup);
            }
            Control::CancelSignup => self.cancel_signup(),
            Control::ForgotPassword => self.forgot_password(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::domain::page::Page;
    use crate::service::notifier::RecordingNotifier;
    use crate::service::scheduler::TimerQueue;
    use rstest::rstest;

    fn controller() -> PageController<RecordingNotifier, TimerQueue> {
        PageController::new(
            Page::default(),
            PageConfig::default(),
            RecordingNotifier::default(),
            TimerQueue::default(),
        )
    }

    #[rstest]
    #[case(Key::ArrowRight, Panel::Signup)]
    #[case(Key::ArrowLeft, Panel::Login)]
    fn test_arrow_keys_switch(#[case] key: Key, #[case] expected: Panel) {
        let mut controller = controller();
        controller.activate(expected.other());
        assert_eq!(
            controller.dispatch(PageEvent::KeyDown(key)),
            Dispatch::Handled
        );
        assert_eq!(controller.active_panel(), expected);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut controller = controller();
        assert_eq!(
            controller.dispatch(PageEvent::KeyDown(Key::Other)),
            Dispatch::Ignored
        );
        assert_eq!(controller.active_panel(), Panel::Login);
    }

    #[rstest]
    #[case(Control::SignupTab, Panel::Signup)]
    #[case(Control::LoginTab, Panel::Login)]
    #[case(Control::CancelSignup, Panel::Login)]
    fn test_clicks_switch(#[case] control: Control, #[case] expected: Panel) {
        let mut controller = controller();
        controller.activate(expected.other());
        controller.dispatch(PageEvent::Click(control));
        assert_eq!(controller.active_panel(), expected);
    }

    #[test]
    fn test_forgot_password_click() {
        let mut controller = controller();
        controller.page_mut().login_form.email.set_value("x@y.com");
        controller.dispatch(PageEvent::Click(Control::ForgotPassword));
        assert_eq!(
            controller.notifier().last(),
            Some("If an account exists for \"x@y.com\", we've sent a password reset link (demo).")
        );
    }
}
