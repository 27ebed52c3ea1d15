use serde::{Deserialize, Serialize};
use shared::{Face, UnitId};

/// Current user focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    None,
    /// A whole unit is selected
    UnitOnly { unit: UnitId },
    /// A specific face of a unit is selected
    UnitAndFace { unit: UnitId, face: Face },
}

impl Selection {
    /// Unit referenced by the selection, if any
    pub fn unit(&self) -> Option<UnitId> {
        match *self {
            Selection::None => None,
            Selection::UnitOnly { unit } | Selection::UnitAndFace { unit, .. } => Some(unit),
        }
    }

    /// `(unit, face)` when a face is selected
    pub fn face(&self) -> Option<(UnitId, Face)> {
        match *self {
            Selection::UnitAndFace { unit, face } => Some((unit, face)),
            _ => None,
        }
    }
}

/// Selection state machine (none → unit → unit + face)
#[derive(Default)]
pub struct SelectionState {
    current: Selection,
    /// Version counter for selection changes (for cache invalidation)
    pub version: u64,
}

impl SelectionState {
    pub fn current(&self) -> Selection {
        self.current
    }

    /// Selected unit, with or without a face
    pub fn selected_unit(&self) -> Option<UnitId> {
        self.current.unit()
    }

    /// Selected `(unit, face)` pair
    pub fn selected_face(&self) -> Option<(UnitId, Face)> {
        self.current.face()
    }

    pub fn is_unit_selected(&self, unit: UnitId) -> bool {
        self.selected_unit() == Some(unit)
    }

    pub fn is_face_selected(&self, unit: UnitId, face: Face) -> bool {
        self.selected_face() == Some((unit, face))
    }

    /// Pointer landed on `unit`. `face` is `None` for parts that are not a
    /// wall or the roof (floor, frame).
    ///
    /// The first hit on a unit always selects the unit as a whole; only a hit
    /// on the already selected unit drills down to the face.
    pub fn pointer_hit(&mut self, unit: UnitId, face: Option<Face>) {
        if self.is_unit_selected(unit) {
            if let Some(face) = face {
                self.set(Selection::UnitAndFace { unit, face });
            }
        } else {
            self.set(Selection::UnitOnly { unit });
        }
    }

    /// Pointer missed every unit
    pub fn background_click(&mut self) {
        self.clear();
    }

    /// Select a whole unit (clears any face)
    pub fn select_unit(&mut self, unit: UnitId) {
        self.set(Selection::UnitOnly { unit });
    }

    /// Select a face directly
    pub fn select_face(&mut self, unit: UnitId, face: Face) {
        self.set(Selection::UnitAndFace { unit, face });
    }

    /// Clear all selection
    pub fn clear(&mut self) {
        self.set(Selection::None);
    }

    /// A unit was removed from the assembly
    pub fn unit_removed(&mut self, unit: UnitId) {
        if self.is_unit_selected(unit) {
            self.clear();
        }
    }

    /// Drop the selection when its unit no longer satisfies `is_live`
    pub fn retain_live(&mut self, is_live: impl Fn(UnitId) -> bool) {
        if let Some(unit) = self.selected_unit() {
            if !is_live(unit) {
                self.clear();
            }
        }
    }

    fn set(&mut self, next: Selection) {
        if self.current != next {
            tracing::debug!(from = ?self.current, to = ?next, "selection changed");
            self.current = next;
            self.version += 1;
        }
    }
}
