// ============================================================================
// Structure : PriceEntry
// ============================================================================
// Représente un élément du bandeau défilant : un titre avec son prix
//
// CONCEPTS RUST :
// 1. #[derive(...)] : génère automatiquement l'implémentation de traits
// 2. Valeurs dérivées : la tendance est calculée à la lecture, jamais stockée
// 3. Serde rename_all : mappe les noms camelCase du fichier de config
// ============================================================================

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Direction du prix par rapport au prix précédent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,      // price > previous_price
    Down,    // price < previous_price
    Neutral, // égalité (ou comparaison impossible, ex: NaN)
}

impl Trend {
    /// Flèche affichée à côté de la variation
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "■",
        }
    }
}

/// Un prix affiché dans le ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")] // "previousPrice" (JSON) -> previous_price (Rust)
pub struct PriceEntry {
    /// Nom affiché (ex: "Barclays PLC")
    pub label: String,

    /// Prix actuel
    pub price: f64,

    /// Prix précédent, sert uniquement à classer la tendance
    pub previous_price: f64,

    /// Plus haut du jour (affichage seulement)
    pub day_high: f64,

    /// Plus bas du jour (affichage seulement)
    pub day_low: f64,
}

impl PriceEntry {
    /// Crée une entrée en vérifiant que le label n'est pas vide
    ///
    /// CONCEPT RUST : bail!
    /// - Raccourci anyhow pour `return Err(anyhow!(...))`
    pub fn new(
        label: impl Into<String>,
        price: f64,
        previous_price: f64,
        day_high: f64,
        day_low: f64,
    ) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            bail!("Le label d'un PriceEntry ne peut pas être vide");
        }

        Ok(Self {
            label,
            price,
            previous_price,
            day_high,
            day_low,
        })
    }

    /// Classe la tendance du prix
    ///
    /// Fonction totale : toute paire de f64 donne une valeur
    /// (les NaN tombent dans Neutral car aucune comparaison n'est vraie).
    pub fn trend(&self) -> Trend {
        classify_trend(self)
    }

    /// Variation absolue depuis le prix précédent
    pub fn change(&self) -> f64 {
        self.price - self.previous_price
    }

    /// Variation en pourcentage, None si le prix précédent vaut 0
    pub fn change_percent(&self) -> Option<f64> {
        if self.previous_price == 0.0 {
            return None;
        }
        Some(self.change() / self.previous_price * 100.0)
    }

    /// Prix formatté : "1696.500"
    pub fn price_text(&self) -> String {
        format!("{:.3}", self.price)
    }

    /// Variation avec flèche : "▲ +1.200 (+0.07%)", sans pourcentage si
    /// le prix précédent vaut 0
    pub fn change_text(&self) -> String {
        let arrow = self.trend().arrow();
        match self.change_percent() {
            Some(pct) => format!("{} {:+.3} ({:+.2}%)", arrow, self.change(), pct),
            None => format!("{} {:+.3}", arrow, self.change()),
        }
    }

    /// Bornes du jour : "H: 1705.00  L: 1689.00"
    pub fn range_text(&self) -> String {
        format!("H: {:.2}  L: {:.2}", self.day_high, self.day_low)
    }
}

/// Classe la tendance d'une entrée : hausse, baisse ou stable
pub fn classify_trend(entry: &PriceEntry) -> Trend {
    if entry.price > entry.previous_price {
        Trend::Up
    } else if entry.price < entry.previous_price {
        Trend::Down
    } else {
        Trend::Neutral
    }
}

/// Liste d'exemple affichée quand la config ne fournit pas d'entrées
///
/// CONCEPT RUST : Array de tuples
/// - (label, price, previous_price, high, low) pour chaque titre
pub fn sample_entries() -> Vec<PriceEntry> {
    let samples = [
        ("Barclays PLC", 1696.500, 1696.500, 1705.00, 1689.00),
        ("Lloyds Banking", 445.400, 448.100, 454.55, 444.45),
        ("Apple Inc", 180.50, 179.30, 182.00, 179.00),
        ("Google", 135.20, 135.70, 136.00, 134.50),
    ];

    samples
        .iter()
        .map(|&(label, price, previous_price, day_high, day_low)| PriceEntry {
            label: label.to_string(),
            price,
            previous_price,
            day_high,
            day_low,
        })
        .collect()
}

// ============================================================================
// Tests unitaires
// ============================================================================
