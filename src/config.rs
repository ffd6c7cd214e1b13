// ============================================================================
// Configuration
// ============================================================================
// Charge la configuration du ticker depuis un fichier JSON optionnel
//
// Ordre de recherche :
// 1. Chemin dans la variable d'environnement PRICE_TICKER_CONFIG
// 2. ~/.config/price-ticker/config.json (via dirs) s'il existe
// 3. Valeurs par défaut
//
// Exemple de fichier :
// ```json
// {
//   "targetSpeed": 15.0,
//   "tickRateMs": 40,
//   "entries": [
//     { "label": "Barclays PLC", "price": 1696.5, "previousPrice": 1690.0,
//       "dayHigh": 1705.0, "dayLow": 1689.0 }
//   ]
// }
// ```
// ============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::models::{sample_entries, PriceEntry};
use crate::ticker::is_valid_speed;

pub use crate::ticker::DEFAULT_TARGET_SPEED;

/// Variable d'environnement pointant vers un fichier de config
pub const CONFIG_ENV_VAR: &str = "PRICE_TICKER_CONFIG";

/// Timeout du poll clavier, donc fréquence de rafraîchissement
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

/// D'où vient la configuration chargée
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Fichier désigné par PRICE_TICKER_CONFIG
    Env(PathBuf),
    /// Fichier dans le répertoire de config utilisateur
    File(PathBuf),
    /// Aucun fichier trouvé
    Defaults,
}

/// Configuration du ticker
///
/// CONCEPT RUST : #[serde(default)]
/// - Les champs absents du JSON prennent la valeur de Default::default()
/// - Un fichier partiel reste valide
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TickerConfig {
    /// Vitesse de défilement visée (colonnes / seconde)
    pub target_speed: f64,

    /// Intervalle de tick en millisecondes
    pub tick_rate_ms: u64,

    /// Remplace la liste d'exemple si présente et non vide
    pub entries: Option<Vec<PriceEntry>>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            target_speed: DEFAULT_TARGET_SPEED,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            entries: None,
        }
    }
}

impl TickerConfig {
    /// Charge la configuration selon l'ordre de recherche
    pub fn load() -> Result<(Self, ConfigSource)> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            let config = Self::from_path(&path)?;
            return Ok((config, ConfigSource::Env(path)));
        }

        if let Some(path) = default_config_path() {
            if path.exists() {
                let config = Self::from_path(&path)?;
                return Ok((config, ConfigSource::File(path)));
            }
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Lit et valide un fichier de configuration
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire la config {}", path.display()))?;

        Self::from_json(&content)
            .with_context(|| format!("Config invalide dans {}", path.display()))
    }

    /// Parse et valide une configuration JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).context("Échec du parsing JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Vérifie les valeurs
    pub fn validate(&self) -> Result<()> {
        if !is_valid_speed(self.target_speed) {
            bail!("targetSpeed doit être > 0 (reçu {})", self.target_speed);
        }
        if self.tick_rate_ms == 0 {
            bail!("tickRateMs doit être >= 1");
        }
        if let Some(entries) = &self.entries {
            if let Some(index) = entries.iter().position(|e| e.label.trim().is_empty()) {
                bail!("entries[{}] : label vide", index);
            }
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Entrées à afficher : celles de la config, sinon la liste d'exemple
    pub fn entries(&self) -> Vec<PriceEntry> {
        match &self.entries {
            Some(entries) if !entries.is_empty() => entries.clone(),
            _ => sample_entries(),
        }
    }
}

/// ~/.config/price-ticker/config.json (selon la plateforme)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("price-ticker").join("config.json"))
}

// ============================================================================
// Tests
// ============================================================================
