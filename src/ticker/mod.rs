// ============================================================================
// Module : ticker
// ============================================================================
// Cœur du bandeau défilant : layout, widget et interface viewport
// ============================================================================

pub mod layout;   // Arithmétique de répétition et de durée
pub mod viewport; // Mesures fournies par la couche de rendu
pub mod widget;   // État du ticker

pub use layout::{
    cycle_duration, is_valid_speed, project_display_list, recalculate_layout, LayoutState,
    DEFAULT_ANIMATION_SECS, DEFAULT_TARGET_SPEED, MAX_MULTIPLIER, SAFETY_MARGIN,
};
pub use viewport::{Measurement, ViewportObserver};
pub use widget::TickerWidget;
