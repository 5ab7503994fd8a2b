//! Error types for OBJ serialization, validation, and parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Structural rule violations found while validating a mesh.
///
/// Each variant names the offending element kind, its index within its
/// sequence, and enough context to locate the bad data without re-running
/// with instrumentation. Validation fails on the first violation; nothing
/// is aggregated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A position contains a NaN or infinite coordinate.
    #[error("position {index} contains a non-finite coordinate")]
    NonFinitePosition {
        /// Index of the position within the mesh sequence.
        index: usize,
    },

    /// A texture coordinate contains a NaN or infinite component.
    #[error("texture coordinate {index} contains a non-finite component")]
    NonFiniteTextureCoord {
        /// Index of the texture coordinate within the mesh sequence.
        index: usize,
    },

    /// A normal contains a NaN or infinite component.
    #[error("normal {index} contains a non-finite component")]
    NonFiniteNormal {
        /// Index of the normal within the mesh sequence.
        index: usize,
    },

    /// A face has fewer than 3 vertex indices.
    #[error("face {face} has {count} vertex indices, at least 3 required")]
    TooFewVertices {
        /// Index of the face within the mesh sequence.
        face: usize,
        /// Number of vertex indices the face actually has.
        count: usize,
    },

    /// A face references a vertex index outside the position sequence.
    #[error("face {face} references vertex index {index}, valid range is 0..{bound}")]
    VertexIndexOutOfRange {
        /// Index of the face within the mesh sequence.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of positions in the mesh (exclusive upper bound).
        bound: usize,
    },

    /// A face has texture indices but not one per vertex slot.
    #[error("face {face} has {texture} texture indices for {vertices} vertex indices")]
    TextureIndexCountMismatch {
        /// Index of the face within the mesh sequence.
        face: usize,
        /// Number of vertex indices.
        vertices: usize,
        /// Number of texture indices.
        texture: usize,
    },

    /// A face references a texture index outside the texture coordinate sequence.
    #[error("face {face} references texture index {index}, valid range is 0..{bound}")]
    TextureIndexOutOfRange {
        /// Index of the face within the mesh sequence.
        face: usize,
        /// The out-of-range texture index.
        index: u32,
        /// Number of texture coordinates in the mesh (exclusive upper bound).
        bound: usize,
    },

    /// A face has normal indices but not one per vertex slot.
    #[error("face {face} has {normals} normal indices for {vertices} vertex indices")]
    NormalIndexCountMismatch {
        /// Index of the face within the mesh sequence.
        face: usize,
        /// Number of vertex indices.
        vertices: usize,
        /// Number of normal indices.
        normals: usize,
    },

    /// A face references a normal index outside the normal sequence.
    #[error("face {face} references normal index {index}, valid range is 0..{bound}")]
    NormalIndexOutOfRange {
        /// Index of the face within the mesh sequence.
        face: usize,
        /// The out-of-range normal index.
        index: u32,
        /// Number of normals in the mesh (exclusive upper bound).
        bound: usize,
    },
}

/// Attempt to format a non-finite number as canonical decimal text.
///
/// Formatting is defined only for finite values. Validation upstream is
/// expected to have excluded these already; the formatter re-checks rather
/// than produce silently wrong output.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The value was NaN.
    #[error("cannot format NaN")]
    Nan,

    /// The value was positive or negative infinity.
    #[error("cannot format an infinite value")]
    Infinite,
}

/// Errors that can occur while producing interchange text.
///
/// Validation and formatting failures are deterministic and input-derived.
/// Storage failures pass through as the underlying [`std::io::Error`] with
/// no added context, since they are not this crate's concern.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The mesh violated a structural rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A numeric field could not be formatted.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The destination could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing interchange text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A record line did not match the interchange grammar.
    #[error("line {line}: {message}")]
    Malformed {
        /// 1-based line number of the offending record.
        line: usize,
        /// Description of what was malformed.
        message: String,
    },

    /// A numeric field could not be parsed as a float.
    #[error("line {line}: float parsing error: {source}")]
    ParseFloat {
        /// 1-based line number of the offending record.
        line: usize,
        /// The underlying parse failure.
        source: std::num::ParseFloatError,
    },

    /// A face index could not be parsed as a positive integer.
    #[error("line {line}: index parsing error: {source}")]
    ParseIndex {
        /// 1-based line number of the offending record.
        line: usize,
        /// The underlying parse failure.
        source: std::num::ParseIntError,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Create a `Malformed` error for the given line.
    #[must_use]
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            message: message.into(),
        }
    }
}
