//! Assembly validation utilities.
//!
//! `AssemblyValidator` checks the invariants an assembly must keep:
//! unique ids, wall variants only for live units, no roof variants, no
//! overlapping units, and a selection that points at a live unit.

use std::collections::HashSet;

use glam::DVec3;
use shared::{AssemblyDescription, Face, FaceVariant, UnitDimensions, UnitId};

use crate::state::Selection;

/// Tolerance for touching faces, in meters
const OVERLAP_EPSILON: f64 = 1e-9;

/// Validator for `AssemblyDescription` integrity checks.
pub struct AssemblyValidator<'a> {
    assembly: &'a AssemblyDescription,
    dims: UnitDimensions,
}

impl<'a> AssemblyValidator<'a> {
    /// Create a new validator for the given assembly.
    pub fn new(assembly: &'a AssemblyDescription, dims: UnitDimensions) -> Self {
        Self { assembly, dims }
    }

    pub fn unit_count(&self) -> usize {
        self.assembly.units.len()
    }

    /// No two units share an id.
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::new();
        self.assembly.units.iter().all(|u| seen.insert(u.id))
    }

    /// Wall entries whose unit is not in the assembly.
    pub fn dangling_wall_units(&self) -> Vec<UnitId> {
        self.assembly
            .walls
            .unit_ids()
            .filter(|id| !self.assembly.contains(*id))
            .collect()
    }

    /// The roof carries no window or door.
    pub fn roof_is_plain(&self) -> bool {
        self.assembly
            .walls
            .iter()
            .all(|(_, face, v)| face != Face::Roof || v == FaceVariant::Base)
    }

    /// Pairs of units whose boxes intersect with positive volume.
    /// Units that merely touch do not count.
    pub fn overlapping_pairs(&self) -> Vec<(UnitId, UnitId)> {
        let size = DVec3::new(self.dims.width, self.dims.height, self.dims.depth);
        let units = &self.assembly.units;
        let mut pairs = Vec::new();
        for (i, a) in units.iter().enumerate() {
            for b in &units[i + 1..] {
                let gap = (DVec3::from_array(a.position) - DVec3::from_array(b.position)).abs();
                if (size - gap).cmpgt(DVec3::splat(OVERLAP_EPSILON)).all() {
                    pairs.push((a.id, b.id));
                }
            }
        }
        pairs
    }

    /// The selection references a live unit or nothing.
    pub fn selection_is_live(&self, selection: &Selection) -> bool {
        selection.unit().map_or(true, |id| self.assembly.contains(id))
    }

    /// Run all validation checks and return a list of error messages.
    /// An empty list means the assembly is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.has_unique_ids() {
            errors.push("Duplicate unit ids".to_string());
        }

        let dangling = self.dangling_wall_units();
        if !dangling.is_empty() {
            errors.push(format!("Wall variants reference missing units: {:?}", dangling));
        }

        if !self.roof_is_plain() {
            errors.push("Roof has a non-base variant".to_string());
        }

        let overlaps = self.overlapping_pairs();
        if !overlaps.is_empty() {
            errors.push(format!("Overlapping units: {:?}", overlaps));
        }

        errors
    }
}
