// ============================================================================
// Interface viewport : mesures fournies par la couche de rendu
// ============================================================================
// Le ticker ne mesure rien lui-même. La couche de rendu (ratatui ici) mesure
// le conteneur et le bloc dessiné, puis notifie l'observateur.
// ============================================================================

/// Largeurs mesurées après un rendu
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    /// Largeur visible du bandeau
    pub container_width: f64,

    /// Largeur d'un bloc complet (toutes les copies) au multiplier courant
    pub block_width: f64,
}

impl Measurement {
    pub fn new(container_width: f64, block_width: f64) -> Self {
        Self {
            container_width,
            block_width,
        }
    }
}

/// Callback "la taille du viewport a changé"
///
/// CONCEPT RUST : Traits comme interface
/// - Le cœur dépend du trait, pas de ratatui
/// - N'importe quelle couche de rendu peut fournir les mesures
pub trait ViewportObserver {
    fn viewport_changed(&mut self, measurement: Measurement);
}
