//! Navigation state for the interactive session.

use std::fmt::Display;

/// The screens a session can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Converter,
    History,
    About,
}

impl Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Screen::Home => "home",
                Screen::Converter => "converter",
                Screen::History => "history",
                Screen::About => "about",
            }
        )
    }
}

/// Navigation requests a screen can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    GoHome,
    GoConverter,
    GoHistory,
    GoAbout,
}

impl Screen {
    /// Applies a navigation action. Every screen accepts every action; the
    /// action alone determines the destination.
    pub fn navigate(self, action: NavAction) -> Screen {
        match action {
            NavAction::GoHome => Screen::Home,
            NavAction::GoConverter => Screen::Converter,
            NavAction::GoHistory => Screen::History,
            NavAction::GoAbout => Screen::About,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_at_home() {
        assert_eq!(Screen::default(), Screen::Home);
    }

    #[test]
    fn test_navigation_is_destination_driven() {
        for start in [
            Screen::Home,
            Screen::Converter,
            Screen::History,
            Screen::About,
        ] {
            assert_eq!(start.navigate(NavAction::GoConverter), Screen::Converter);
            assert_eq!(start.navigate(NavAction::GoHistory), Screen::History);
            assert_eq!(start.navigate(NavAction::GoAbout), Screen::About);
            assert_eq!(start.navigate(NavAction::GoHome), Screen::Home);
        }
    }
}
