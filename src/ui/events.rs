// ============================================================================
// Gestion des événements
// ============================================================================
// Gère les événements clavier, le redimensionnement et les ticks
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter différents types d'événements
// 2. Error handling avec Result
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Terminal redimensionné (colonnes, lignes)
    Resize(u16, u16),

    /// Tick régulier (animation)
    Tick,
}

/// Gestionnaire d'événements
pub struct EventHandler {
    /// Timeout du poll : fréquence minimale des ticks
    tick_rate: Duration,
}

impl EventHandler {
    /// Crée un gestionnaire avec la fréquence de tick donnée
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Lit le prochain événement (bloquant avec timeout)
    ///
    /// CONCEPT : Non-blocking I/O avec timeout
    /// - poll(tick_rate) attend au maximum tick_rate
    /// - Si pas d'événement, retourne Ok(Event::Tick)
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Sur certains OS, on reçoit Press ET Release
                // On ne veut gérer que Press pour éviter les doublons
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),

                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),

                // Release, souris, focus, paste : ignorés
                _ => Ok(Event::Tick),
            }
        } else {
            // Timeout : pas d'événement, retourne Tick
            Ok(Event::Tick)
        }
    }
}

/// Vérifie si l'événement est la touche 'q' (quitter)
pub fn is_quit_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
    } else {
        false
    }
}

/// Vérifie si l'événement est '+' (accélérer)
///
/// '=' est accepté : même touche que '+' sans Shift sur un clavier QWERTY
pub fn is_faster_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('+') | KeyCode::Char('='))
    } else {
        false
    }
}

/// Vérifie si l'événement est '-' (ralentir)
pub fn is_slower_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('-') | KeyCode::Char('_'))
    } else {
        false
    }
}

/// Vérifie si l'événement est Espace (pause / reprise)
pub fn is_pause_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char(' '))
    } else {
        false
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), event::KeyModifiers::empty()))
    }

    #[test]
    fn test_is_quit_event() {
        assert!(is_quit_event(&key('q')));
        assert!(is_quit_event(&key('Q')));
        assert!(!is_quit_event(&key('a')));
        assert!(!is_quit_event(&Event::Tick));
    }

    #[test]
    fn test_speed_events() {
        assert!(is_faster_event(&key('+')));
        assert!(is_faster_event(&key('=')));
        assert!(is_slower_event(&key('-')));
        assert!(!is_slower_event(&key('+')));
        assert!(!is_faster_event(&Event::Resize(80, 24)));
    }

    #[test]
    fn test_pause_event() {
        assert!(is_pause_event(&key(' ')));
        assert!(!is_pause_event(&key('p')));
    }
}
