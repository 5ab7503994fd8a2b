//! Structural validation of a mesh before serialization.
//!
//! The mesh containers enforce nothing; every cross-referential rule is
//! checked here as a pure pass over the four sequences. In Rust the
//! original format's "element must not be null" rule is unrepresentable,
//! so only the numeric and index rules remain.

use obj_types::{Face, ObjMesh};

use crate::error::ValidationError;

/// Validate a mesh against the interchange format's structural rules.
///
/// Checks, in order: every position, texture coordinate, and normal for
/// non-finite components (in sequence order), then every face. Faces are
/// checked last because index bounds need the full sequence lengths.
/// Per face the order is: minimum vertex count, vertex index bounds,
/// texture index count match, texture index bounds, normal index count
/// match, normal index bounds.
///
/// Pure inspection; the mesh is never mutated. Fails fast on the first
/// violation rather than aggregating diagnostics, matching the observed
/// behavior of the interchange tooling this format comes from.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
///
/// # Example
///
/// ```
/// use obj_io::validate;
/// use obj_types::{Face, ObjMesh, Point3};
///
/// let mut mesh = ObjMesh::new();
/// mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.faces.push(Face::from_vertices(vec![0, 1, 2]));
///
/// // Face references positions 1 and 2, but only one exists.
/// assert!(validate(&mesh).is_err());
/// ```
pub fn validate(mesh: &ObjMesh) -> Result<(), ValidationError> {
    for (index, position) in mesh.positions.iter().enumerate() {
        if !is_finite3(position.x, position.y, position.z) {
            return Err(ValidationError::NonFinitePosition { index });
        }
    }

    for (index, uv) in mesh.texture_coords.iter().enumerate() {
        if !(uv.x.is_finite() && uv.y.is_finite()) {
            return Err(ValidationError::NonFiniteTextureCoord { index });
        }
    }

    for (index, normal) in mesh.normals.iter().enumerate() {
        if !is_finite3(normal.x, normal.y, normal.z) {
            return Err(ValidationError::NonFiniteNormal { index });
        }
    }

    for (face_index, face) in mesh.faces.iter().enumerate() {
        validate_face(
            face,
            face_index,
            mesh.positions.len(),
            mesh.texture_coords.len(),
            mesh.normals.len(),
        )?;
    }

    Ok(())
}

#[inline]
fn is_finite3(x: f32, y: f32, z: f32) -> bool {
    x.is_finite() && y.is_finite() && z.is_finite()
}

/// Validate one face against the mesh sequence lengths.
fn validate_face(
    face: &Face,
    face_index: usize,
    position_count: usize,
    texture_count: usize,
    normal_count: usize,
) -> Result<(), ValidationError> {
    let vertex_count = face.vertex_indices.len();
    if vertex_count < 3 {
        return Err(ValidationError::TooFewVertices {
            face: face_index,
            count: vertex_count,
        });
    }

    for &index in &face.vertex_indices {
        if index as usize >= position_count {
            return Err(ValidationError::VertexIndexOutOfRange {
                face: face_index,
                index,
                bound: position_count,
            });
        }
    }

    if face.has_texture() {
        if face.texture_indices.len() != vertex_count {
            return Err(ValidationError::TextureIndexCountMismatch {
                face: face_index,
                vertices: vertex_count,
                texture: face.texture_indices.len(),
            });
        }
        for &index in &face.texture_indices {
            if index as usize >= texture_count {
                return Err(ValidationError::TextureIndexOutOfRange {
                    face: face_index,
                    index,
                    bound: texture_count,
                });
            }
        }
    }

    if face.has_normals() {
        if face.normal_indices.len() != vertex_count {
            return Err(ValidationError::NormalIndexCountMismatch {
                face: face_index,
                vertices: vertex_count,
                normals: face.normal_indices.len(),
            });
        }
        for &index in &face.normal_indices {
            if index as usize >= normal_count {
                return Err(ValidationError::NormalIndexOutOfRange {
                    face: face_index,
                    index,
                    bound: normal_count,
                });
            }
        }
    }

    Ok(())
}
