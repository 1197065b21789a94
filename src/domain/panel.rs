use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Login,
    Signup,
}

impl Panel {
    pub fn other(self) -> Self {
        match self {
            Panel::Login => Panel::Signup,
            Panel::Signup => Panel::Login,
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Login => write!(f, "Login"),
            Panel::Signup => write!(f, "Signup"),
        }
    }
}

/// One of the two tab buttons above the panels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorButton {
    pub active: bool,
    pub aria_selected: bool,
}

impl SelectorButton {
    pub fn select(&mut self, selected: bool) {
        self.active = selected;
        self.aria_selected = selected;
    }

    pub fn is_selected(&self) -> bool {
        self.active && self.aria_selected
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    pub visible: bool,
}
