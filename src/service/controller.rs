use std::time::Duration;

use log::{debug, info};

use crate::config::PageConfig;
use crate::domain::page::{Page, PasswordSlot};
use crate::domain::panel::Panel;
use crate::domain::password::Visibility;
use crate::service::notifier::Notifier;
use crate::service::scheduler::{ScheduledAction, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Rejected,
}

pub fn forgot_password_message(email: &str) -> String {
    format!(
        "If an account exists for \"{}\", we've sent a password reset link (demo).",
        email
    )
}

pub const LOGIN_SUCCESS_MESSAGE: &str = "Welcome back — login successful (demo).";

/// Owns the page and the active panel, and applies every user action to them.
#[derive(Debug)]
pub struct PageController<N, S> {
    page: Page,
    active: Panel,
    config: PageConfig,
    notifier: N,
    scheduler: S,
}

impl<N: Notifier, S: Scheduler> PageController<N, S> {
    pub fn new(page: Page, config: PageConfig, notifier: N, scheduler: S) -> Self {
        for slot in [PasswordSlot::Login, PasswordSlot::Signup] {
            if !page.has_toggle(slot) {
                debug!("no reveal control for {:?} password, toggle not wired", slot);
            }
        }
        let mut controller = Self {
            page,
            active: Panel::Login,
            config,
            notifier,
            scheduler,
        };
        controller.activate(Panel::Login);
        controller
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Host access for writing field values as the user types.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn active_panel(&self) -> Panel {
        self.active
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn activate(&mut self, panel: Panel) {
        let login = panel == Panel::Login;
        self.page.login_button.select(login);
        self.page.signup_button.select(!login);
        self.page.login_panel.visible = login;
        self.page.signup_panel.visible = !login;
        if self.active != panel {
            debug!("switched panel {} -> {}", self.active, panel);
        }
        self.active = panel;
    }

    /// Flips masking for one password field. Returns `None` when the page has
    /// no reveal control for it.
    pub fn toggle_password(&mut self, slot: PasswordSlot) -> Option<Visibility> {
        let (field, control) = self.page.password_pair(slot);
        let control = control?;
        let visibility = field.flip();
        control.sync(visibility);
        debug!("{:?} password is now {:?}", slot, visibility);
        Some(visibility)
    }

    pub fn submit_login(&mut self) -> Submission {
        if let Err(e) = self.page.login_form.validate() {
            debug!("login rejected");
            self.notifier.notify(&e.to_string());
            return Submission::Rejected;
        }
        info!("demo login accepted");
        self.notifier.notify(LOGIN_SUCCESS_MESSAGE);
        self.page.login_form.reset();
        Submission::Accepted
    }

    pub fn submit_signup(&mut self) -> Submission {
        if self.page.signup_form.validate().is_err() {
            debug!("signup rejected, showing helper");
            self.page.signup_helper.visible = true;
            self.scheduler
                .after(self.config.helper_hide_delay, ScheduledAction::HideSignupHelper);
            return Submission::Rejected;
        }
        info!("demo signup accepted");
        let message = self.config.signup_success_message();
        self.notifier.notify(&message);
        self.page.signup_form.reset();
        self.activate(Panel::Login);
        Submission::Accepted
    }

    pub fn cancel_signup(&mut self) {
        self.page.signup_form.reset();
        self.activate(Panel::Login);
    }

    pub fn forgot_password(&mut self) {
        let message = forgot_password_message(self.page.login_form.email.value());
        self.notifier.notify(&message);
    }

    /// Advances the scheduler and runs whatever came due.
    pub fn tick(&mut self, elapsed: Duration) {
        for action in self.scheduler.advance(elapsed) {
            self.run(action);
        }
    }

    fn run(&mut self, action: ScheduledAction) {
        debug!("running {:?}", action);
        match action {
            ScheduledAction::HideSignupHelper => self.page.signup_helper.visible = false,
        }
    }
}
