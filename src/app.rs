// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// PATTERN : "Application State"
// - Le rendu lit depuis App
// - Toutes les modifications passent par les méthodes de App
// ============================================================================

use std::time::Duration;

use tracing::debug;

use crate::ticker::TickerWidget;

/// Pas d'ajustement de la vitesse avec + et -
pub const SPEED_STEP: f64 = 2.0;

/// Bornes de la vitesse ajustable au clavier (colonnes / seconde)
pub const MIN_SPEED: f64 = 1.0;
pub const MAX_SPEED: f64 = 200.0;

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Le bandeau défilant
    pub ticker: TickerWidget,

    /// Indique si l'utilisateur a demandé à quitter (attend confirmation)
    /// CONCEPT : Two-step quit pour éviter les sorties accidentelles
    /// - Première pression de 'q' : confirm_quit = true
    /// - Deuxième pression de 'q' : running = false (quit réel)
    /// - N'importe quelle autre touche : confirm_quit = false (annulation)
    pub confirm_quit: bool,
}

impl App {
    /// Crée l'application autour d'un ticker
    pub fn new(ticker: TickerWidget) -> Self {
        Self {
            running: true,
            ticker,
            confirm_quit: false,
        }
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tick : appelé à chaque itération de la boucle
    ///
    /// CONCEPT : Event Loop Pattern
    /// - Avance l'animation du temps réellement écoulé
    /// - Indépendant de la fréquence des ticks
    pub fn tick(&mut self, elapsed: Duration) {
        self.ticker.advance(elapsed);
    }

    /// Le terminal a été redimensionné : la prochaine mesure est appliquée
    pub fn on_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Terminal resized, layout recalculation requested");
        self.ticker.request_measurement();
    }

    /// Accélère le défilement (borné à MAX_SPEED)
    pub fn speed_up(&mut self) {
        let speed = (self.ticker.target_speed() + SPEED_STEP).min(MAX_SPEED);
        self.ticker.set_target_speed(speed);
    }

    /// Ralentit le défilement (borné à MIN_SPEED)
    pub fn slow_down(&mut self) {
        let speed = (self.ticker.target_speed() - SPEED_STEP).max(MIN_SPEED);
        self.ticker.set_target_speed(speed);
    }

    pub fn toggle_pause(&mut self) {
        self.ticker.toggle_pause();
    }

    /// Demande la confirmation de quitter
    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    /// Annule la demande de quit
    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    /// Vérifie si on attend la confirmation de quit
    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
