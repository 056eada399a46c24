use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::card::Scope;
use crate::deck::Deck;
use crate::divine::{SpreadResult, draw_spread};
use crate::info::CardInfo;

/// Application state for the TUI. Starts on the welcome screen; a reading
/// replaces it with the spread until the scope changes or the user quits.
pub struct App {
    pub deck: Deck,
    pub info: CardInfo,
    pub reading: Option<SpreadResult>,
    pub should_quit: bool,
}

impl App {
    pub fn new(info: CardInfo, deck: Deck) -> Self {
        App {
            deck,
            info,
            reading: None,
            should_quit: false,
        }
    }

    /// Perform a reading and show it.
    pub fn divine(&mut self) {
        self.reading = Some(draw_spread(&mut self.deck));
    }

    /// Switch the deck to `scope` and return to the welcome screen. The old
    /// sequence and any displayed reading are discarded.
    pub fn select_scope(&mut self, scope: Scope) {
        self.deck.set_scope(scope);
        self.reading = None;
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char(' ') => self.divine(),
            KeyCode::Char('1') => self.select_scope(Scope::Major),
            KeyCode::Char('2') => self.select_scope(Scope::Minor),
            KeyCode::Char('3') => self.select_scope(Scope::All),
            _ => {}
        }
    }

    /// A left click anywhere performs a reading, like tapping the table.
    pub fn handle_click(&mut self) {
        self.divine();
    }
}
