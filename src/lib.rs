// ============================================================================
// Price Ticker - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod app;     // État de l'application
pub mod config;  // Configuration (fichier JSON optionnel)
pub mod models;  // Structures de données
pub mod ticker;  // Cœur du bandeau : layout et widget
pub mod ui;      // Interface utilisateur
