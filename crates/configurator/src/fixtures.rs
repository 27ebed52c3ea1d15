//! Factory functions for creating test data.
//!
//! Provides convenient helpers to construct `Unit`, `WallAssignments` and
//! `AssemblyDescription` values used in tests and by scripted sessions.

use shared::*;

use crate::placement::place_adjacent;

// ── Unit factories ──────────────────────────────────────────────

/// Create a unit at a position.
pub fn unit_at(id: UnitId, position: [f64; 3]) -> Unit {
    Unit { id, position }
}

/// `count` units in a row along +X, each attached to the right face of the
/// previous one. Ids start at 1.
pub fn row_of_units(count: usize, dims: &UnitDimensions) -> Vec<Unit> {
    let mut units: Vec<Unit> = Vec::with_capacity(count);
    for i in 0..count {
        let position = match units.last() {
            Some(prev) => place_adjacent(prev, Face::Right, dims),
            None => [0.0, 0.0, 0.0],
        };
        units.push(unit_at(i as UnitId + 1, position));
    }
    units
}

// ── Wall factories ──────────────────────────────────────────────

/// Build wall assignments from `(unit, face, variant)` entries.
pub fn walls_with(entries: &[(UnitId, Face, FaceVariant)]) -> Result<WallAssignments, ConfiguratorError> {
    entries
        .iter()
        .try_fold(WallAssignments::new(), |walls, &(unit, face, variant)| {
            assign_variant(&walls, unit, face, variant)
        })
}

// ── AssemblyDescription factories ───────────────────────────────

/// Assembly with the given `(id, position)` units and no wall variants.
pub fn assembly_with(units: &[(UnitId, [f64; 3])]) -> AssemblyDescription {
    AssemblyDescription {
        units: units.iter().map(|&(id, pos)| unit_at(id, pos)).collect(),
        ..AssemblyDescription::default()
    }
}

/// Empty assembly.
pub fn empty_assembly() -> AssemblyDescription {
    AssemblyDescription::default()
}
