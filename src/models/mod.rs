// ============================================================================
// Module : models
// ============================================================================
// Structures de données du ticker
// ============================================================================

pub mod price_entry; // PriceEntry et classification de tendance

// Re-export pour simplifier les imports
// On peut faire : use price_ticker::models::PriceEntry;
pub use price_entry::{classify_trend, sample_entries, PriceEntry, Trend};
