//! Wavefront OBJ interchange: serialization, validation, and parsing.
//!
//! This crate turns an [`ObjMesh`](obj_types::ObjMesh) into canonical OBJ
//! text and back:
//!
//! - [`validate`] - structural rules (numeric sanity, index bounds,
//!   auxiliary index counts), checked before any text is produced
//! - [`format_f32`] - canonical decimal formatting at 6 fractional digits
//! - [`obj_to_string`] / [`save_obj`] - the serializer
//! - [`parse_obj`] / [`load_obj`] - the parser
//! - [`compare_strings`] / [`compare_files`] - line-based diff summary for
//!   eyeballing round-trip fidelity
//!
//! # Pipeline
//!
//! Serialization is a single synchronous pass: validate the entire mesh,
//! format every numeric field, assemble the text. Either the complete,
//! valid interchange text is produced or an error is surfaced with enough
//! context to locate the offending element; no partial text ever escapes.
//! Calls are stateless, so serializing distinct meshes concurrently needs
//! no coordination.
//!
//! # Example
//!
//! ```
//! use obj_io::{obj_to_string, parse_obj};
//! use obj_types::{Face, ObjMesh, Point3};
//!
//! let mut mesh = ObjMesh::new();
//! mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
//! mesh.faces.push(Face::from_vertices(vec![0, 1, 2]));
//!
//! let text = obj_to_string(&mesh, Some("unit triangle")).unwrap();
//! let reparsed = parse_obj(&text).unwrap();
//! assert_eq!(reparsed.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod compare;
mod error;
mod format;
mod reader;
mod validate;
mod writer;

pub use compare::{compare_files, compare_strings, ObjComparison, SectionCounts};
pub use error::{FormatError, ParseError, ValidationError, WriteError};
pub use format::format_f32;
pub use reader::{load_obj, parse_obj};
pub use validate::validate;
pub use writer::{obj_to_string, save_obj};
