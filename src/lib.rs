//! Headless controller for the MentalHealth login/signup demo page.
//!
//! The host (a terminal front-end, a test) feeds [`events::PageEvent`]s into a
//! [`service::controller::PageController`] and renders the resulting
//! [`domain::page::Page`]. Messages go through a [`service::notifier::Notifier`]
//! and delayed work through a [`service::scheduler::Scheduler`].

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod service;

pub use config::PageConfig;
pub use domain::page::{Page, PasswordSlot};
pub use domain::panel::Panel;
pub use error::Error;
pub use events::{Control, Dispatch, FormKind, Key, PageEvent};
pub use service::controller::{PageController, Submission};
pub use service::notifier::{Notifier, RecordingNotifier};
pub use service::scheduler::{ScheduledAction, Scheduler, TimerQueue};
