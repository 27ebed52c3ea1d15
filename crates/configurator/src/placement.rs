//! Adjacency placement: where a new unit lands when attached to a face.

use glam::DVec3;
use shared::{Face, Unit, UnitDimensions};

/// Center of a new unit attached to `face` of `anchor`.
///
/// The new unit sits flush against the anchor along the face axis:
/// `anchor + offset(face) + normal(face) * extent(face) / 2`.
pub fn place_adjacent(anchor: &Unit, face: Face, dims: &UnitDimensions) -> [f64; 3] {
    let base = DVec3::from_array(anchor.position);
    let offset = DVec3::from_array(face.offset(dims));
    let normal = DVec3::from_array(face.normal());

    (base + offset + normal * (face.extent(dims) / 2.0)).to_array()
}
