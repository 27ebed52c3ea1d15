//! Резолвер вариантов стен и таблица отображаемых частей

use crate::{ConfiguratorError, Face, FaceVariant, UnitId, WallAssignments};

/// Части модели, которые видны всегда, независимо от вариантов
pub const BASE_PARTS: [&str; 2] = ["Container_Base", "Floor_V1"];

/// Активный вариант грани: назначенный или базовый
pub fn resolve_variant(walls: &WallAssignments, unit: UnitId, face: Face) -> FaceVariant {
    walls.get(unit, face).unwrap_or_default()
}

/// Назначить вариант грани. Возвращает новое отображение, исходное не меняется.
///
/// Крыше можно назначить только `Base`.
pub fn assign_variant(
    walls: &WallAssignments,
    unit: UnitId,
    face: Face,
    variant: FaceVariant,
) -> Result<WallAssignments, ConfiguratorError> {
    if face == Face::Roof && variant != FaceVariant::Base {
        return Err(ConfiguratorError::InvalidFaceForVariant { face, variant });
    }
    let mut updated = walls.clone();
    updated.insert(unit, face, variant);
    Ok(updated)
}

/// Ключ отображаемой части для пары (грань, вариант).
/// `None` для крыши с вариантом, отличным от базового.
pub fn part_key(face: Face, variant: FaceVariant) -> Option<&'static str> {
    use Face::*;
    use FaceVariant::*;

    let key = match (face, variant) {
        (Front, Base) => "Wall_Front_V1",
        (Front, Window) => "Wall_Front_Window",
        (Front, Door) => "Wall_Front_Door",
        (Back, Base) => "Wall_Back_V1",
        (Back, Window) => "Wall_Back_Window",
        (Back, Door) => "Wall_Back_Door",
        (Left, Base) => "Wall_Left_V1",
        (Left, Window) => "Wall_Left_Window",
        (Left, Door) => "Wall_Left_Door",
        (Right, Base) => "Wall_Right_V1",
        (Right, Window) => "Wall_Right_Window",
        (Right, Door) => "Wall_Right_Door",
        (Roof, Base) => "Roof_V1",
        (Roof, _) => return None,
    };
    Some(key)
}

/// Активные части всех пяти граней модуля
pub fn active_parts(walls: &WallAssignments, unit: UnitId) -> Vec<(Face, &'static str)> {
    Face::ALL
        .iter()
        .filter_map(|&face| {
            part_key(face, resolve_variant(walls, unit, face)).map(|key| (face, key))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_to_base() {
        let walls = WallAssignments::new();
        for face in Face::ALL {
            assert_eq!(resolve_variant(&walls, 42, face), FaceVariant::Base);
        }
    }

    #[test]
    fn test_assign_then_resolve() {
        let walls = WallAssignments::new();
        let walls = assign_variant(&walls, 1, Face::Front, FaceVariant::Window).unwrap();
        assert_eq!(resolve_variant(&walls, 1, Face::Front), FaceVariant::Window);
        assert_eq!(resolve_variant(&walls, 1, Face::Back), FaceVariant::Base);
        assert_eq!(resolve_variant(&walls, 2, Face::Front), FaceVariant::Base);
    }

    #[test]
    fn test_assign_does_not_touch_input() {
        let walls = WallAssignments::new();
        let updated = assign_variant(&walls, 1, Face::Left, FaceVariant::Door).unwrap();
        assert!(walls.is_empty());
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn test_assign_overwrites_previous_variant() {
        let walls = assign_variant(&WallAssignments::new(), 1, Face::Left, FaceVariant::Door).unwrap();
        let walls = assign_variant(&walls, 1, Face::Left, FaceVariant::Window).unwrap();
        assert_eq!(walls.len(), 1);
        assert_eq!(resolve_variant(&walls, 1, Face::Left), FaceVariant::Window);
    }

    #[test]
    fn test_roof_rejects_non_base_variants() {
        let mut walls = WallAssignments::new();
        for unit in [1, 2, 99] {
            for variant in [FaceVariant::Window, FaceVariant::Door] {
                let err = assign_variant(&walls, unit, Face::Roof, variant).unwrap_err();
                assert_eq!(
                    err,
                    ConfiguratorError::InvalidFaceForVariant {
                        face: Face::Roof,
                        variant
                    }
                );
            }
            walls = assign_variant(&walls, unit, Face::Front, FaceVariant::Door).unwrap();
        }
    }

    #[test]
    fn test_roof_accepts_base() {
        let walls = assign_variant(&WallAssignments::new(), 1, Face::Roof, FaceVariant::Base).unwrap();
        assert_eq!(resolve_variant(&walls, 1, Face::Roof), FaceVariant::Base);
    }

    #[test]
    fn test_part_key_table_is_total_for_walls() {
        for face in Face::WALLS {
            for variant in FaceVariant::ALL {
                let key = part_key(face, variant).unwrap();
                assert!(key.starts_with("Wall_"));
            }
        }
        assert_eq!(part_key(Face::Roof, FaceVariant::Base), Some("Roof_V1"));
        assert_eq!(part_key(Face::Roof, FaceVariant::Door), None);
    }

    #[test]
    fn test_active_parts_follow_assignments() {
        let walls = assign_variant(&WallAssignments::new(), 5, Face::Right, FaceVariant::Door).unwrap();
        let parts = active_parts(&walls, 5);
        assert_eq!(parts.len(), 5);
        assert!(parts.contains(&(Face::Right, "Wall_Right_Door")));
        assert!(parts.contains(&(Face::Front, "Wall_Front_V1")));
        assert!(parts.contains(&(Face::Roof, "Roof_V1")));
    }
}
