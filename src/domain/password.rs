pub const SHOW_ICON: &str = "👁️";
pub const HIDE_ICON: &str = "🙈";
pub const SHOW_TITLE: &str = "Show password";
pub const HIDE_TITLE: &str = "Hide password";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Masked,
    Revealed,
}

impl Visibility {
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        }
    }
}

/// The eye button next to a password field.
///
/// Icon and title always describe what the next activation does: a masked
/// field offers "Show password", a revealed one offers "Hide password".
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleControl {
    pub icon: &'static str,
    pub title: &'static str,
}

impl Default for ToggleControl {
    fn default() -> Self {
        Self::for_visibility(Visibility::Masked)
    }
}

impl ToggleControl {
    pub fn for_visibility(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Masked => Self {
                icon: SHOW_ICON,
                title: SHOW_TITLE,
            },
            Visibility::Revealed => Self {
                icon: HIDE_ICON,
                title: HIDE_TITLE,
            },
        }
    }

    pub fn sync(&mut self, visibility: Visibility) {
        *self = Self::for_visibility(visibility);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offers_show() {
        let control = ToggleControl::default();
        assert_eq!(control.icon, SHOW_ICON);
        assert_eq!(control.title, SHOW_TITLE);
    }

    #[test]
    fn test_sync_follows_visibility() {
        let mut control = ToggleControl::default();
        control.sync(Visibility::Revealed);
        assert_eq!(control.title, HIDE_TITLE);
        assert_eq!(control.icon, HIDE_ICON);
        control.sync(Visibility::Revealed.flipped());
        assert_eq!(control, ToggleControl::default());
    }
}
