pub mod controller;
pub mod notifier;
pub mod scheduler;
