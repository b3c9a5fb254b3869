//! Screen navigation as an explicit state machine.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Home,
    Detail { pokemon: String },
    Battle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Grid button, search box, evolution or variety link.
    SelectPokemon(String),
    OpenBattle,
    Back,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub screen: Screen,
}

impl Default for NavState {
    fn default() -> Self {
        Self { screen: Screen::Home }
    }
}

impl NavState {
    pub fn transition(self, event: NavEvent) -> NavState {
        let screen = match event {
            NavEvent::SelectPokemon(name) => {
                let name = name.trim().to_lowercase();
                if name.is_empty() {
                    self.screen
                } else {
                    Screen::Detail { pokemon: name }
                }
            }
            NavEvent::OpenBattle => Screen::Battle,
            NavEvent::Back => Screen::Home,
        };
        NavState { screen }
    }

    pub fn selected_pokemon(&self) -> Option<&str> {
        match &self.screen {
            Screen::Detail { pokemon } => Some(pokemon),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_back() {
        let state = NavState::default().transition(NavEvent::SelectPokemon("Pikachu".into()));
        assert_eq!(state.selected_pokemon(), Some("pikachu"));

        let state = state.transition(NavEvent::Back);
        assert_eq!(state, NavState::default());
        assert_eq!(state.selected_pokemon(), None);
    }

    #[test]
    fn test_empty_search_keeps_screen() {
        let state = NavState::default().transition(NavEvent::SelectPokemon("  ".into()));
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn test_detail_to_detail() {
        let state = NavState::default()
            .transition(NavEvent::SelectPokemon("charmander".into()))
            .transition(NavEvent::SelectPokemon("charmeleon".into()));
        assert_eq!(state.selected_pokemon(), Some("charmeleon"));
    }
}
