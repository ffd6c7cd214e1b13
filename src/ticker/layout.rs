// ============================================================================
// Layout du bandeau : répétition et durée d'animation
// ============================================================================
// Calcule combien de fois répéter la liste pour que le bloc dépasse la
// largeur du conteneur, et la durée d'un cycle pour une vitesse donnée.
//
// Toutes les largeurs sont en f64 : colonnes du terminal ici, mais la même
// arithmétique vaut pour des pixels.
// ============================================================================

/// Copies ajoutées au-delà du strict nécessaire (arrondis, mesures approchées)
pub const SAFETY_MARGIN: u32 = 1;

/// Plafond du multiplier : au-delà, la liste répétée ne tient plus en mémoire
///
/// Un terminal fait au plus u16::MAX colonnes et une copie au moins une
/// colonne, donc ce plafond n'est atteint qu'avec des largeurs aberrantes.
pub const MAX_MULTIPLIER: u32 = 1024;

/// Durée d'un cycle avant la première mesure
pub const DEFAULT_ANIMATION_SECS: f64 = 20.0;

/// Vitesse par défaut en colonnes par seconde
pub const DEFAULT_TARGET_SPEED: f64 = 12.0;

/// Vrai si la vitesse est utilisable (finie et strictement positive)
pub fn is_valid_speed(speed: f64) -> bool {
    speed.is_finite() && speed > 0.0
}

/// Durée d'un cycle : largeur du bloc divisée par la vitesse
///
/// None si la vitesse n'est pas utilisable.
pub fn cycle_duration(multiplier: u32, per_copy_width: f64, target_speed: f64) -> Option<f64> {
    if !is_valid_speed(target_speed) {
        return None;
    }
    Some(f64::from(multiplier) * per_copy_width / target_speed)
}

/// État du layout : nombre de répétitions et durée d'un cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    /// Nombre de copies de la liste de base dans un bloc (>= 1)
    pub multiplier: u32,

    /// Temps pour défiler d'une largeur de bloc, en secondes
    pub animation_duration: f64,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            multiplier: 1,
            animation_duration: DEFAULT_ANIMATION_SECS,
        }
    }
}

/// Concatène `base` avec elle-même `multiplier` fois, dans l'ordre
///
/// CONCEPT RUST : Generics avec bound Clone
/// - Marche pour n'importe quel T clonable
/// - extend_from_slice() clone chaque élément de la slice
///
/// Un multiplier de 0 est traité comme 1.
pub fn project_display_list<T: Clone>(base: &[T], multiplier: u32) -> Vec<T> {
    let copies = multiplier.max(1) as usize;
    let mut display = Vec::with_capacity(base.len() * copies);
    for _ in 0..copies {
        display.extend_from_slice(base);
    }
    display
}

/// Recalcule le layout à partir des largeurs mesurées
///
/// # Arguments
/// * `container_width` - Largeur visible du bandeau
/// * `rendered_block_width` - Largeur mesurée d'un bloc au multiplier courant
/// * `multiplier` - Multiplier courant
/// * `target_speed` - Vitesse de défilement visée (largeur par seconde)
///
/// Retourne None quand le contenu n'est pas encore mesurable (largeur nulle,
/// liste vide) ou que la vitesse n'est pas strictement positive : l'appelant
/// ne change alors rien.
pub fn recalculate_layout(
    container_width: f64,
    rendered_block_width: f64,
    multiplier: u32,
    target_speed: f64,
) -> Option<LayoutState> {
    // Contenu pas encore rendu. `!(x > 0.0)` attrape aussi NaN.
    if !(rendered_block_width > 0.0) {
        return None;
    }
    if !is_valid_speed(target_speed) {
        return None;
    }

    let per_copy_width = rendered_block_width / f64::from(multiplier.max(1));
    if !(per_copy_width > 0.0) {
        return None;
    }

    // `as u32` sature : un conteneur négatif ou NaN donne 0 copie + la marge
    let needed = (container_width / per_copy_width).ceil() as u32;
    let new_multiplier = needed
        .saturating_add(SAFETY_MARGIN)
        .clamp(1, MAX_MULTIPLIER);

    Some(LayoutState {
        multiplier: new_multiplier,
        animation_duration: cycle_duration(new_multiplier, per_copy_width, target_speed)?,
    })
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_display_list_repeats_in_order() {
        let base = vec!["A", "B", "C"];
        let display = project_display_list(&base, 3);

        assert_eq!(display.len(), 9);
        assert_eq!(display, vec!["A", "B", "C", "A", "B", "C", "A", "B", "C"]);
    }

    #[test]
    fn test_project_display_list_lengths() {
        let base = vec![1, 2];
        for m in 1..=6 {
            assert_eq!(project_display_list(&base, m).len(), m as usize * base.len());
        }

        let empty: Vec<i32> = Vec::new();
        assert!(project_display_list(&empty, 5).is_empty());
    }

    #[test]
    fn test_project_display_list_zero_multiplier() {
        assert_eq!(project_display_list(&[7], 0), vec![7]);
    }

    #[test]
    fn test_zero_block_width_is_noop() {
        assert_eq!(recalculate_layout(450.0, 0.0, 1, 100.0), None);
        assert_eq!(recalculate_layout(450.0, 0.0, 3, 100.0), None);
        assert_eq!(recalculate_layout(0.0, 0.0, 1, 100.0), None);
    }

    #[test]
    fn test_wide_container() {
        // per copy 200, ceil(450 / 200) + 1 = 4, 800 / 100 = 8s
        let layout = recalculate_layout(450.0, 200.0, 1, 100.0).unwrap();
        assert_eq!(layout.multiplier, 4);
        assert!((layout.animation_duration - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_narrow_container() {
        // ceil(150 / 200) + 1 = 2, 400 / 100 = 4s
        let layout = recalculate_layout(150.0, 200.0, 1, 100.0).unwrap();
        assert_eq!(layout.multiplier, 2);
        assert!((layout.animation_duration - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_block_width_is_divided_by_current_multiplier() {
        // Bloc de 800 mesuré avec 4 copies : 200 par copie
        let layout = recalculate_layout(150.0, 800.0, 4, 100.0).unwrap();
        assert_eq!(layout.multiplier, 2);
        assert!((layout.animation_duration - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_point_in_one_step() {
        let first = recalculate_layout(450.0, 200.0, 1, 100.0).unwrap();

        // Deuxième passe : le bloc mesure maintenant multiplier * 200
        let block = f64::from(first.multiplier) * 200.0;
        let second = recalculate_layout(450.0, block, first.multiplier, 100.0).unwrap();

        assert_eq!(second, first);
    }

    #[test]
    fn test_resize_round_trip() {
        let speed = 100.0;
        let per_copy = 120.0;

        let at_w1 = recalculate_layout(500.0, per_copy, 1, speed).unwrap();
        let at_w2 = recalculate_layout(
            1300.0,
            per_copy * f64::from(at_w1.multiplier),
            at_w1.multiplier,
            speed,
        )
        .unwrap();
        let back = recalculate_layout(
            500.0,
            per_copy * f64::from(at_w2.multiplier),
            at_w2.multiplier,
            speed,
        )
        .unwrap();

        assert_ne!(at_w1.multiplier, at_w2.multiplier);
        assert_eq!(back.multiplier, at_w1.multiplier);
        assert!((back.animation_duration - at_w1.animation_duration).abs() < 1e-9);
    }

    #[test]
    fn test_block_always_covers_container() {
        for container in [0.0, 1.0, 79.0, 80.0, 81.0, 333.3, 1920.0] {
            let layout = recalculate_layout(container, 80.0, 1, 10.0).unwrap();
            assert!(f64::from(layout.multiplier) * 80.0 > container);
        }
    }

    #[test]
    fn test_huge_container_is_capped() {
        let layout = recalculate_layout(1e12, 1.0, 1, 100.0).unwrap();
        assert_eq!(layout.multiplier, MAX_MULTIPLIER);
        assert!((layout.animation_duration - f64::from(MAX_MULTIPLIER) / 100.0).abs() < 1e-9);

        let layout = recalculate_layout(f64::INFINITY, 1.0, 1, 100.0).unwrap();
        assert_eq!(layout.multiplier, MAX_MULTIPLIER);
    }

    #[test]
    fn test_cycle_duration() {
        assert_eq!(cycle_duration(4, 200.0, 100.0), Some(8.0));
        assert_eq!(cycle_duration(4, 200.0, 0.0), None);
        assert_eq!(cycle_duration(4, 200.0, f64::INFINITY), None);
    }

    #[test]
    fn test_invalid_speed_is_noop() {
        assert_eq!(recalculate_layout(450.0, 200.0, 1, 0.0), None);
        assert_eq!(recalculate_layout(450.0, 200.0, 1, -5.0), None);
        assert_eq!(recalculate_layout(450.0, 200.0, 1, f64::NAN), None);
    }
}
