use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Please enter a valid email and a password with at least 6 characters.")]
    InvalidLogin,
    #[error("Please fill in every field and use a password with at least 6 characters.")]
    InvalidSignup,
    #[error("Invalid value for {name}: {value}")]
    InvalidConfig { name: &'static str, value: String },
}
