//! Tests for DirectionResolver.

#[cfg(test)]
mod tests {
    use crate::direction::{Direction, DirectionResolver};

    const NONE: [bool; 4] = [false; 4];

    #[test]
    fn test_single_press_and_release() {
        let mut resolver = DirectionResolver::new();

        resolver.update(&[true, false, false, false]);
        assert_eq!(resolver.primary(), Some(Direction::Up));
        assert_eq!(resolver.secondary(), None);

        resolver.update(&NONE);
        assert_eq!(resolver.primary(), None);
        assert_eq!(resolver.secondary(), None);
    }

    #[test]
    fn test_opposite_directions_never_pair() {
        let mut resolver = DirectionResolver::new();

        // up + down
        resolver.update(&[true, false, true, false]);
        assert_eq!(resolver.primary(), Some(Direction::Up));
        assert_eq!(resolver.secondary(), None);

        // left + right
        let mut resolver = DirectionResolver::new();
        resolver.update(&[false, true, false, true]);
        assert_eq!(resolver.primary(), Some(Direction::Right));
        assert_eq!(resolver.secondary(), None);
    }

    #[test]
    fn test_orthogonal_pair_sets_secondary() {
        let mut resolver = DirectionResolver::new();
        resolver.update(&[true, true, false, false]);

        assert_eq!(resolver.primary(), Some(Direction::Up));
        assert_eq!(resolver.secondary(), Some(Direction::Right));
    }

    #[test]
    fn test_secondary_promoted_when_primary_released() {
        let mut resolver = DirectionResolver::new();
        resolver.update(&[true, true, false, false]);

        // Отпустили up, держим right
        resolver.update(&[false, true, false, false]);
        assert_eq!(resolver.primary(), Some(Direction::Right));
        assert_eq!(resolver.secondary(), None);
    }

    #[test]
    fn test_released_secondary_is_cleared() {
        let mut resolver = DirectionResolver::new();
        resolver.update(&[false, false, true, true]);
        assert_eq!(resolver.primary(), Some(Direction::Down));
        assert_eq!(resolver.secondary(), Some(Direction::Left));

        resolver.update(&[false, false, true, false]);
        assert_eq!(resolver.primary(), Some(Direction::Down));
        assert_eq!(resolver.secondary(), None);
    }

    #[test]
    fn test_existing_primary_kept_over_lower_index() {
        let mut resolver = DirectionResolver::new();
        resolver.update(&[false, false, true, false]);
        assert_eq!(resolver.primary(), Some(Direction::Down));

        // up now held too: opposite of down, so nothing changes
        resolver.update(&[true, false, true, false]);
        assert_eq!(resolver.primary(), Some(Direction::Down));
        assert_eq!(resolver.secondary(), None);

        // left joins: orthogonal to down
        resolver.update(&[true, false, true, true]);
        assert_eq!(resolver.secondary(), Some(Direction::Left));
    }

    #[test]
    fn test_invariant_under_all_inputs() {
        let mut resolver = DirectionResolver::new();

        // Перебираем все 16 комбинаций дважды подряд (с историей)
        for first in 0..16u8 {
            for second in 0..16u8 {
                let to_input = |bits: u8| [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0];
                resolver.update(&to_input(first));
                resolver.update(&to_input(second));

                if let Some(secondary) = resolver.secondary() {
                    let primary = resolver.primary().expect("secondary without primary");
                    assert!(primary.is_orthogonal_to(secondary));
                }
            }
        }
    }

    #[test]
    fn test_movement_vector_diagonal() {
        let mut resolver = DirectionResolver::new();
        resolver.update(&[true, true, false, false]);

        let v = resolver.movement_vector();
        assert!((v.length() - 1.0).abs() < 1e-5);
        assert!(v.x > 0.0 && v.y > 0.0);
    }
}
