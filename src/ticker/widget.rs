// ============================================================================
// Structure : TickerWidget
// ============================================================================
// Possède la liste de prix, sa projection répétée et l'état du layout.
// Avance la phase de défilement au fil du temps.
//
// CONCEPTS RUST :
// 1. Encapsulation : champs privés, modifications via méthodes
// 2. Recalcul explicite : la liste affichée est reprojetée à chaque
//    changement de multiplier (pas de signal réactif)
// 3. Trait impl : TickerWidget implémente ViewportObserver
// ============================================================================

use std::time::Duration;

use tracing::{debug, info};

use crate::models::PriceEntry;
use crate::ticker::layout::{
    cycle_duration, is_valid_speed, project_display_list, recalculate_layout, LayoutState,
    DEFAULT_TARGET_SPEED,
};
use crate::ticker::viewport::{Measurement, ViewportObserver};

/// Widget du bandeau défilant
#[derive(Debug, Clone)]
pub struct TickerWidget {
    /// Liste de base (statique après construction)
    entries: Vec<PriceEntry>,

    /// Projection : entries répétée layout.multiplier fois
    display: Vec<PriceEntry>,

    layout: LayoutState,

    /// Vitesse visée en colonnes par seconde
    target_speed: f64,

    /// Position dans le cycle, dans [0, 1)
    /// CONCEPT : On stocke la phase et pas l'offset
    /// - La durée peut changer sans saut visuel
    phase: f64,

    paused: bool,

    /// Vrai au démarrage et après un resize : la prochaine mesure est appliquée
    needs_measurement: bool,

    /// Dernière mesure appliquée (évite les recalculs en boucle)
    last_measurement: Option<Measurement>,

    /// Largeur d'une copie de la liste, connue après la première mesure valide
    per_copy_width: Option<f64>,
}

impl TickerWidget {
    /// Crée un widget avec un multiplier de 1, en attente de la première mesure
    ///
    /// Une vitesse nulle, négative ou non finie est remplacée par
    /// DEFAULT_TARGET_SPEED.
    pub fn new(entries: Vec<PriceEntry>, target_speed: f64) -> Self {
        let target_speed = if is_valid_speed(target_speed) {
            target_speed
        } else {
            DEFAULT_TARGET_SPEED
        };
        let layout = LayoutState::default();
        let display = project_display_list(&entries, layout.multiplier);

        Self {
            entries,
            display,
            layout,
            target_speed,
            phase: 0.0,
            paused: false,
            needs_measurement: true,
            last_measurement: None,
            per_copy_width: None,
        }
    }

    pub fn entries(&self) -> &[PriceEntry] {
        &self.entries
    }

    /// Liste affichée (un bloc complet)
    pub fn display_list(&self) -> &[PriceEntry] {
        &self.display
    }

    pub fn layout(&self) -> LayoutState {
        self.layout
    }

    pub fn multiplier(&self) -> u32 {
        self.layout.multiplier
    }

    pub fn animation_duration(&self) -> f64 {
        self.layout.animation_duration
    }

    pub fn target_speed(&self) -> f64 {
        self.target_speed
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn needs_measurement(&self) -> bool {
        self.needs_measurement
    }

    /// Demande un recalcul à la prochaine mesure (resize du conteneur)
    pub fn request_measurement(&mut self) {
        self.needs_measurement = true;
    }

    /// Applique une mesure : recalcule multiplier et durée
    ///
    /// Retourne None si la mesure n'est pas exploitable (largeur nulle) : rien
    /// ne change. Sinon Some(true) si le multiplier a changé (la liste a été
    /// reprojetée), Some(false) si seule la durée a été recalculée.
    pub fn apply_measurement(&mut self, measurement: Measurement) -> Option<bool> {
        let Some(next) = recalculate_layout(
            measurement.container_width,
            measurement.block_width,
            self.layout.multiplier,
            self.target_speed,
        ) else {
            return None;
        };

        self.per_copy_width = Some(measurement.block_width / f64::from(self.layout.multiplier));

        let changed = next.multiplier != self.layout.multiplier;
        if changed {
            debug!(
                from = self.layout.multiplier,
                to = next.multiplier,
                container_width = measurement.container_width,
                "Ticker multiplier changed"
            );
            self.display = project_display_list(&self.entries, next.multiplier);

            // Même décalage en colonnes sur un bloc de taille différente
            let ratio = f64::from(self.layout.multiplier) / f64::from(next.multiplier);
            self.phase = (self.phase * ratio).rem_euclid(1.0);
        }

        // Durée mise à jour même sans changement de multiplier
        self.layout = next;
        Some(changed)
    }

    /// Change la vitesse et recalibre la durée sur la largeur connue
    ///
    /// Le multiplier ne dépend pas de la vitesse : seule la durée change.
    pub fn set_target_speed(&mut self, speed: f64) {
        if !is_valid_speed(speed) {
            return;
        }
        self.target_speed = speed;
        info!(target_speed = speed, "Ticker speed changed");

        let duration = self
            .per_copy_width
            .and_then(|width| cycle_duration(self.layout.multiplier, width, speed));
        if let Some(duration) = duration {
            self.layout.animation_duration = duration;
        }
    }

    /// Avance la phase de dt / durée, modulo 1
    pub fn advance(&mut self, dt: Duration) {
        if self.paused || !(self.layout.animation_duration > 0.0) {
            return;
        }
        self.phase = (self.phase + dt.as_secs_f64() / self.layout.animation_duration).rem_euclid(1.0);
    }

    /// Décalage horizontal courant pour un bloc de `block_width` colonnes
    pub fn scroll_offset(&self, block_width: usize) -> usize {
        let offset = (self.phase * block_width as f64).floor() as usize;
        // phase < 1 mais l'arrondi flottant peut atteindre block_width
        if block_width == 0 {
            0
        } else {
            offset % block_width
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!(paused = self.paused, "Ticker pause toggled");
    }
}

impl ViewportObserver for TickerWidget {
    /// Appelé après chaque frame avec les largeurs mesurées
    ///
    /// Une mesure identique à la précédente est ignorée, sauf si un recalcul
    /// a été demandé (premier frame, resize).
    fn viewport_changed(&mut self, measurement: Measurement) {
        if !self.needs_measurement && self.last_measurement == Some(measurement) {
            return;
        }

        let applied = self.apply_measurement(measurement);
        self.last_measurement = Some(measurement);

        // Tant que le layout n'a pas été recalculé, on garde la demande active
        if applied.is_some() {
            self.needs_measurement = false;
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
