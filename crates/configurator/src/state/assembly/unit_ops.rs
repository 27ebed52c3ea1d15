//! Unit add/remove and wall variant operations

use shared::{assign_variant, AssemblyDescription, ConfiguratorError, Face, FaceVariant, Unit, UnitDimensions, UnitId};

use super::AssemblyState;
use crate::placement::place_adjacent;
use crate::state::selection::Selection;

impl AssemblyState {
    /// Attach a new unit to the selected face.
    ///
    /// Requires a `UnitAndFace` selection; the new unit is placed flush
    /// against that face of the selected unit.
    pub fn add_unit(&mut self, selection: &Selection, dims: &UnitDimensions) -> Result<UnitId, ConfiguratorError> {
        let (anchor_id, face) = selection.face().ok_or(ConfiguratorError::NoFaceSelected)?;
        let anchor = self
            .get_unit(anchor_id)
            .ok_or(ConfiguratorError::UnknownUnit(anchor_id))?;
        let position = place_adjacent(anchor, face, dims);

        let id = self.issue_id()?;
        self.save_undo();
        self.assembly.units.push(Unit { id, position });
        self.version += 1;

        tracing::info!(unit = id, anchor = anchor_id, %face, ?position, "unit added");
        Ok(id)
    }

    /// Remove a unit and all its wall variants.
    ///
    /// Unknown ids are ignored. Returns true if a unit was removed; the caller
    /// forwards that to the selection.
    pub fn remove_unit(&mut self, id: UnitId) -> bool {
        if !self.contains(id) {
            return false;
        }

        self.save_undo();
        self.assembly.units.retain(|u| u.id != id);
        self.assembly.walls.remove_unit(id);
        self.version += 1;

        tracing::info!(unit = id, "unit removed");
        true
    }

    /// Set the variant of a wall. The selection must be exactly that
    /// unit and face.
    pub fn set_wall_variant(
        &mut self,
        selection: &Selection,
        unit: UnitId,
        face: Face,
        variant: FaceVariant,
    ) -> Result<(), ConfiguratorError> {
        if selection.face() != Some((unit, face)) {
            return Err(ConfiguratorError::NoFaceSelected);
        }
        if !self.contains(unit) {
            return Err(ConfiguratorError::UnknownUnit(unit));
        }
        let walls = assign_variant(&self.assembly.walls, unit, face, variant)?;

        self.save_undo();
        self.assembly.walls = walls;
        self.version += 1;

        tracing::info!(unit, %face, %variant, "wall variant set");
        Ok(())
    }

    /// Remove every unit
    pub fn clear(&mut self) {
        self.save_undo();
        self.assembly = AssemblyDescription::default();
        self.version += 1;
    }

    /// Replace the assembly with a loaded description.
    ///
    /// The description is checked first; on error nothing changes. The id
    /// counter moves past the largest loaded id.
    pub fn set_assembly(&mut self, assembly: AssemblyDescription) -> Result<(), ConfiguratorError> {
        assembly.check_invariants()?;
        let past_loaded = assembly
            .max_id()
            .checked_add(1)
            .ok_or(ConfiguratorError::IdSpaceExhausted)?;

        self.save_undo();
        self.next_id = self.next_id.max(past_loaded);
        self.assembly = assembly;
        self.version += 1;
        Ok(())
    }
}
