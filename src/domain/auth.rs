use validator::Validate;

use crate::domain::password::Visibility;
use crate::error::Error;

#[derive(Debug, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    pub value: String,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordField {
    pub value: String,
    pub visibility: Visibility,
}

impl PasswordField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Clears the text only; a form reset leaves the masking alone.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn flip(&mut self) -> Visibility {
        self.visibility = self.visibility.flipped();
        self.visibility
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: TextField,
    pub password: PasswordField,
}

impl LoginForm {
    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.request().validate().map_err(|_| Error::InvalidLogin)
    }

    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.email.value().is_empty() && self.password.value().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub first_name: TextField,
    pub last_name: TextField,
    pub email: TextField,
    pub password: PasswordField,
}

impl SignupForm {
    pub fn request(&self) -> SignupRequest {
        SignupRequest {
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.request().validate().map_err(|_| Error::InvalidSignup)
    }

    pub fn reset(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.password.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.value().is_empty()
            && self.last_name.value().is_empty()
            && self.email.value().is_empty()
            && self.password.value().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn login(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::default();
        form.email.set_value(email);
        form.password.set_value(password);
        form
    }

    fn signup(first: &str, last: &str, email: &str, password: &str) -> SignupForm {
        let mut form = SignupForm::default();
        form.first_name.set_value(first);
        form.last_name.set_value(last);
        form.email.set_value(email);
        form.password.set_value(password);
        form
    }

    #[rstest]
    #[case("", "abcdef")]
    #[case("a@b.com", "")]
    #[case("a@b.com", "a")]
    #[case("a@b.com", "abcde")]
    #[case("", "")]
    fn test_login_rejected(#[case] email: &str, #[case] password: &str) {
        assert_eq!(login(email, password).validate(), Err(Error::InvalidLogin));
    }

    #[rstest]
    #[case("a@b.com", "abcdef")]
    #[case("not-an-email", "longer password")]
    fn test_login_accepted(#[case] email: &str, #[case] password: &str) {
        assert_eq!(login(email, password).validate(), Ok(()));
    }

    #[rstest]
    #[case("", "Doe", "a@b.com", "abcdef")]
    #[case("Jane", "", "a@b.com", "abcdef")]
    #[case("Jane", "Doe", "", "abcdef")]
    #[case("Jane", "Doe", "a@b.com", "")]
    #[case("Jane", "Doe", "a@b.com", "abc12")]
    fn test_signup_rejected(
        #[case] first: &str,
        #[case] last: &str,
        #[case] email: &str,
        #[case] password: &str,
    ) {
        assert_eq!(
            signup(first, last, email, password).validate(),
            Err(Error::InvalidSignup)
        );
    }

    #[test]
    fn test_signup_accepted() {
        assert_eq!(signup("Jane", "Doe", "a@b.com", "abcdef").validate(), Ok(()));
    }

    #[test]
    fn test_password_length_counts_characters() {
        // six characters, more than six bytes
        assert_eq!(login("a@b.com", "ññññññ").validate(), Ok(()));
        assert_eq!(login("a@b.com", "ñññññ").validate(), Err(Error::InvalidLogin));
    }

    #[test]
    fn test_reset_keeps_visibility() {
        let mut form = login("a@b.com", "abcdef");
        form.password.flip();
        form.reset();
        assert!(form.is_empty());
        assert_eq!(form.password.visibility, Visibility::Revealed);
    }
}
