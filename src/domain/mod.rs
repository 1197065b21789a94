pub mod auth;
pub mod panel;
pub mod page;
pub mod password;
