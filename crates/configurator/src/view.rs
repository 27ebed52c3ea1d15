//! View model for the rendering adapter.
//!
//! For every unit: which parts are visible and how each one is highlighted.
//! The adapter turns this into meshes and materials; nothing here knows
//! about assets.

use serde::Serialize;
use shared::{active_parts, AssemblyDescription, Face, UnitId, BASE_PARTS};

use crate::i18n::{face_label, t_in, Lang};
use crate::state::{unit_display_name, Selection, ViewportSettings};

/// Highlight applied to a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    None,
    /// The owning unit is selected
    Unit,
    /// This face of the owning unit is selected
    Face,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartView {
    pub key: &'static str,
    /// Face the part belongs to; `None` for the frame and floor
    pub face: Option<Face>,
    pub highlight: Highlight,
    /// Override color RGB, set when highlighted
    pub color: Option<[u8; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitView {
    pub id: UnitId,
    pub position: [f64; 3],
    pub parts: Vec<PartView>,
}

impl UnitView {
    pub fn part(&self, key: &str) -> Option<&PartView> {
        self.parts.iter().find(|p| p.key == key)
    }
}

/// Build the per-unit view for the whole assembly
pub fn build_unit_views(
    assembly: &AssemblyDescription,
    selection: &Selection,
    viewport: &ViewportSettings,
) -> Vec<UnitView> {
    assembly
        .units
        .iter()
        .map(|unit| {
            let unit_selected = selection.unit() == Some(unit.id);
            let highlight_for = |face: Option<Face>| {
                if !unit_selected {
                    Highlight::None
                } else if face.is_some() && selection.face() == face.map(|f| (unit.id, f)) {
                    Highlight::Face
                } else {
                    Highlight::Unit
                }
            };
            let color_for = |h: Highlight| match h {
                Highlight::None => None,
                Highlight::Unit => Some(viewport.unit_highlight),
                Highlight::Face => Some(viewport.face_highlight),
            };

            let base = BASE_PARTS.iter().map(|&key| (None, key));
            let faces = active_parts(&assembly.walls, unit.id)
                .into_iter()
                .map(|(face, key)| (Some(face), key));

            let parts = base
                .chain(faces)
                .map(|(face, key)| {
                    let highlight = highlight_for(face);
                    PartView {
                        key,
                        face,
                        highlight,
                        color: color_for(highlight),
                    }
                })
                .collect();

            UnitView {
                id: unit.id,
                position: unit.position,
                parts,
            }
        })
        .collect()
}

/// Status bar text for the current selection
pub fn status_line(selection: &Selection, lang: Lang) -> String {
    match *selection {
        Selection::None => t_in(lang, "status.no_unit").to_string(),
        Selection::UnitOnly { unit } => {
            format!("{} {}", t_in(lang, "status.unit"), unit_display_name(unit))
        }
        Selection::UnitAndFace { unit, face: Face::Roof } => format!(
            "{} {} ({}). {}",
            t_in(lang, "status.face"),
            face_label(lang, Face::Roof),
            unit_display_name(unit),
            t_in(lang, "status.roof_hint")
        ),
        Selection::UnitAndFace { unit, face } => format!(
            "{} {} ({})",
            t_in(lang, "status.face"),
            face_label(lang, face),
            unit_display_name(unit)
        ),
    }
}
