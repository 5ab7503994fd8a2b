//! Polygonal face with parallel index lists.

/// A polygon referencing mesh attribute sequences by index.
///
/// A face carries three parallel index lists. `vertex_indices` is required
/// and must have at least 3 entries for the face to validate.
/// `texture_indices` and `normal_indices` are optional: each is either empty
/// or exactly as long as `vertex_indices`, pairing one auxiliary index with
/// each vertex slot.
///
/// Indices are 0-based positions into the owning [`ObjMesh`]'s sequences.
/// Bounds are not checked here; validation happens in `obj-io` before any
/// text is emitted.
///
/// # Example
///
/// ```
/// use obj_types::Face;
///
/// let plain = Face::from_vertices(vec![0, 1, 2]);
/// assert!(!plain.has_texture());
///
/// let textured = Face::from_parts(vec![0, 1, 2], vec![0, 0, 1], vec![]);
/// assert!(textured.has_texture());
/// assert!(!textured.has_normals());
/// ```
///
/// [`ObjMesh`]: crate::ObjMesh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Face {
    /// Indices into the mesh position sequence. One per vertex slot.
    pub vertex_indices: Vec<u32>,

    /// Indices into the texture coordinate sequence.
    /// Either empty or one per vertex slot.
    pub texture_indices: Vec<u32>,

    /// Indices into the normal sequence.
    /// Either empty or one per vertex slot.
    pub normal_indices: Vec<u32>,
}

impl Face {
    /// Create a face with only vertex indices set.
    #[inline]
    #[must_use]
    pub const fn from_vertices(vertex_indices: Vec<u32>) -> Self {
        Self {
            vertex_indices,
            texture_indices: Vec::new(),
            normal_indices: Vec::new(),
        }
    }

    /// Create a face from all three index lists.
    ///
    /// Pass an empty `Vec` for an auxiliary list the face does not carry.
    #[inline]
    #[must_use]
    pub const fn from_parts(
        vertex_indices: Vec<u32>,
        texture_indices: Vec<u32>,
        normal_indices: Vec<u32>,
    ) -> Self {
        Self {
            vertex_indices,
            texture_indices,
            normal_indices,
        }
    }

    /// Number of vertex slots in this face.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_indices.len()
    }

    /// Whether this face carries texture coordinate indices.
    #[inline]
    #[must_use]
    pub fn has_texture(&self) -> bool {
        !self.texture_indices.is_empty()
    }

    /// Whether this face carries normal indices.
    #[inline]
    #[must_use]
    pub fn has_normals(&self) -> bool {
        !self.normal_indices.is_empty()
    }
}
