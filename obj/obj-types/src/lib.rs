//! Core mesh model for the Wavefront OBJ toolkit.
//!
//! This crate provides the in-memory representation of an OBJ model:
//!
//! - [`ObjMesh`] - Four ordered attribute sequences (positions, texture
//!   coordinates, normals, faces)
//! - [`Face`] - A polygon as parallel index lists into those sequences
//!
//! # Indexing
//!
//! All indices are **0-based** and reference elements by insertion order.
//! The interchange text format is 1-based; the conversion happens in
//! `obj-io`, never here.
//!
//! # Invariants
//!
//! The containers enforce nothing. Cross-referential rules (index bounds,
//! minimum vertex counts, matching auxiliary index lengths) are checked by
//! `obj_io::validate` immediately before serialization, so a mesh under
//! construction may be temporarily inconsistent.
//!
//! # Example
//!
//! ```
//! use obj_types::{Face, ObjMesh, Point3};
//!
//! let mut mesh = ObjMesh::new();
//! mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
//! mesh.faces.push(Face::from_vertices(vec![0, 1, 2]));
//!
//! assert_eq!(mesh.position_count(), 3);
//! assert_eq!(mesh.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod face;
mod mesh;

pub use face::Face;
pub use mesh::ObjMesh;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector2, Vector3};

/// Epsilon used for approximate equality of mesh elements in tests and
/// round-trip tooling. The serializer never compares elements.
pub const APPROX_EPSILON: f32 = 1e-7;
