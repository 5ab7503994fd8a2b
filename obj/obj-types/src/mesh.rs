//! Indexed polygonal mesh.

use approx::abs_diff_eq;
use nalgebra::{Point3, Vector2, Vector3};

use crate::Face;

/// An indexed polygonal mesh in Wavefront OBJ terms.
///
/// Four ordered sequences: positions, texture coordinates, normals, faces.
/// Insertion order is significant — it determines both the 0-based indices
/// that faces reference and the order in which elements are re-emitted by
/// the serializer.
///
/// Positions are not deduplicated and have no equality requirement; each
/// entry is purely positional. Normals are directions with no unit-length
/// requirement.
///
/// # Example
///
/// ```
/// use obj_types::{Face, ObjMesh, Point3, Vector2};
///
/// let mut mesh = ObjMesh::new();
/// mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.texture_coords.push(Vector2::new(0.5, 0.5));
/// mesh.faces.push(Face::from_parts(vec![0, 1, 2], vec![0, 0, 0], vec![]));
///
/// assert!(!mesh.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjMesh {
    /// Vertex positions (`v` records).
    pub positions: Vec<Point3<f32>>,

    /// Texture coordinates (`vt` records), semantically (u, v).
    pub texture_coords: Vec<Vector2<f32>>,

    /// Normals (`vn` records). Magnitude is not enforced.
    pub normals: Vec<Vector3<f32>>,

    /// Polygonal faces (`f` records).
    pub faces: Vec<Face>,
}

impl ObjMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            texture_coords: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity for each sequence.
    #[inline]
    #[must_use]
    pub fn with_capacity(
        position_count: usize,
        texture_coord_count: usize,
        normal_count: usize,
        face_count: usize,
    ) -> Self {
        Self {
            positions: Vec::with_capacity(position_count),
            texture_coords: Vec::with_capacity(texture_coord_count),
            normals: Vec::with_capacity(normal_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from its four sequences.
    #[inline]
    #[must_use]
    pub const fn from_parts(
        positions: Vec<Point3<f32>>,
        texture_coords: Vec<Vector2<f32>>,
        normals: Vec<Vector3<f32>>,
        faces: Vec<Face>,
    ) -> Self {
        Self {
            positions,
            texture_coords,
            normals,
            faces,
        }
    }

    /// Number of vertex positions.
    #[inline]
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of texture coordinates.
    #[inline]
    #[must_use]
    pub fn texture_coord_count(&self) -> usize {
        self.texture_coords.len()
    }

    /// Number of normals.
    #[inline]
    #[must_use]
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether all four sequences are empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
            && self.texture_coords.is_empty()
            && self.normals.is_empty()
            && self.faces.is_empty()
    }

    /// Structural equality up to a floating-point epsilon.
    ///
    /// Sequences must have equal lengths, numeric elements must agree
    /// component-wise within `epsilon`, and faces must be identical.
    /// Used by round-trip tests and the comparison tooling; the serializer
    /// never compares elements.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.positions.len() == other.positions.len()
            && self.texture_coords.len() == other.texture_coords.len()
            && self.normals.len() == other.normals.len()
            && self.faces == other.faces
            && self
                .positions
                .iter()
                .zip(&other.positions)
                .all(|(a, b)| abs_diff_eq!(*a, *b, epsilon = epsilon))
            && self
                .texture_coords
                .iter()
                .zip(&other.texture_coords)
                .all(|(a, b)| abs_diff_eq!(*a, *b, epsilon = epsilon))
            && self
                .normals
                .iter()
                .zip(&other.normals)
                .all(|(a, b)| abs_diff_eq!(*a, *b, epsilon = epsilon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::APPROX_EPSILON;

    fn triangle() -> ObjMesh {
        let mut mesh = ObjMesh::new();
        mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
        mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
        mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
        mesh.faces.push(Face::from_vertices(vec![0, 1, 2]));
        mesh
    }

    #[test]
    fn new_mesh_is_empty() {
        let mesh = ObjMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.position_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn counts_track_sequences() {
        let mesh = triangle();
        assert_eq!(mesh.position_count(), 3);
        assert_eq!(mesh.texture_coord_count(), 0);
        assert_eq!(mesh.normal_count(), 0);
        assert_eq!(mesh.face_count(), 1);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn mesh_with_only_texture_coords_is_not_empty() {
        let mut mesh = ObjMesh::new();
        mesh.texture_coords.push(Vector2::new(0.5, 0.5));
        assert!(!mesh.is_empty());
    }

    #[test]
    fn approx_eq_within_epsilon() {
        let a = triangle();
        let mut b = a.clone();
        b.positions[1].x += APPROX_EPSILON / 2.0;
        assert!(a.approx_eq(&b, APPROX_EPSILON));
    }

    #[test]
    fn approx_eq_rejects_large_drift() {
        let a = triangle();
        let mut b = a.clone();
        b.positions[1].x += 1e-3;
        assert!(!a.approx_eq(&b, APPROX_EPSILON));
    }

    #[test]
    fn approx_eq_rejects_different_faces() {
        let a = triangle();
        let mut b = a.clone();
        b.faces[0].vertex_indices[0] = 2;
        assert!(!a.approx_eq(&b, APPROX_EPSILON));
    }

    #[test]
    fn approx_eq_rejects_length_mismatch() {
        let a = triangle();
        let mut b = a.clone();
        b.positions.pop();
        assert!(!a.approx_eq(&b, APPROX_EPSILON));
    }
}
