//! OBJ interchange text parsing.
//!
//! The parser accepts `v`, `vt`, `vn`, and `f` records, `#` comment lines,
//! and blank lines; unknown record types are skipped. It guarantees only
//! syntactic shape — the produced mesh goes through [`validate`] like any
//! caller-built mesh, with no special treatment.
//!
//! [`validate`]: crate::validate

use std::fs;
use std::path::Path;

use obj_types::{Face, ObjMesh};
use tracing::debug;

use crate::error::ParseError;

/// Parse OBJ interchange text into a mesh.
///
/// Face indices convert from the text's 1-based form to the internal
/// 0-based form. All vertex slots of one face must use the same token
/// shape (`v`, `v/t`, `v//n`, or `v/t/n`).
///
/// # Errors
///
/// Returns [`ParseError`] with the 1-based line number for malformed
/// records: missing fields, unparsable numbers, zero indices, truncated
/// faces, or mixed token shapes.
///
/// # Example
///
/// ```
/// use obj_io::parse_obj;
///
/// let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
/// assert_eq!(mesh.position_count(), 3);
/// assert_eq!(mesh.faces[0].vertex_indices, vec![0, 1, 2]);
/// ```
pub fn parse_obj(text: &str) -> Result<ObjMesh, ParseError> {
    let mut mesh = ObjMesh::new();

    for (line_index, raw_line) in text.lines().enumerate() {
        let line = line_index + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let Some(keyword) = fields.next() else {
            continue;
        };

        match keyword {
            "v" => {
                let [x, y, z] = parse_floats(&mut fields, line)?;
                mesh.positions.push(obj_types::Point3::new(x, y, z));
            }
            "vt" => {
                // A third component (w) is legal in the wild; ignore it.
                let u = parse_float(fields.next(), line)?;
                let v = parse_float(fields.next(), line)?;
                mesh.texture_coords.push(obj_types::Vector2::new(u, v));
            }
            "vn" => {
                let [x, y, z] = parse_floats(&mut fields, line)?;
                mesh.normals.push(obj_types::Vector3::new(x, y, z));
            }
            "f" => mesh.faces.push(parse_face(fields, line)?),
            _ => {
                // Unknown record types (o, g, s, mtllib, usemtl, ...) are
                // outside the interchange subset and skipped.
            }
        }
    }

    debug!(
        positions = mesh.position_count(),
        texture_coords = mesh.texture_coord_count(),
        normals = mesh.normal_count(),
        faces = mesh.face_count(),
        "parsed OBJ text"
    );

    Ok(mesh)
}

/// Load and parse an OBJ file.
///
/// # Errors
///
/// Returns [`ParseError::FileNotFound`] for a missing file,
/// [`ParseError::Io`] for other read failures, and the same parse
/// failures as [`parse_obj`].
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<ObjMesh, ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ParseError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ParseError::Io(e)
        }
    })?;
    parse_obj(&text)
}

fn parse_float(field: Option<&str>, line: usize) -> Result<f32, ParseError> {
    let field = field.ok_or_else(|| ParseError::malformed(line, "missing numeric field"))?;
    field
        .parse::<f32>()
        .map_err(|source| ParseError::ParseFloat { line, source })
}

fn parse_floats<'a, I>(fields: &mut I, line: usize) -> Result<[f32; 3], ParseError>
where
    I: Iterator<Item = &'a str>,
{
    let x = parse_float(fields.next(), line)?;
    let y = parse_float(fields.next(), line)?;
    let z = parse_float(fields.next(), line)?;
    Ok([x, y, z])
}

/// Shape of a face token, fixed by the first token of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenShape {
    Vertex,
    VertexTexture,
    VertexNormal,
    VertexTextureNormal,
}

fn parse_face<'a, I>(fields: I, line: usize) -> Result<Face, ParseError>
where
    I: Iterator<Item = &'a str>,
{
    let mut face = Face::default();
    let mut shape: Option<TokenShape> = None;

    for token in fields {
        let (vertex, texture, normal, token_shape) = parse_face_token(token, line)?;
        match shape {
            None => shape = Some(token_shape),
            Some(expected) if expected != token_shape => {
                return Err(ParseError::malformed(
                    line,
                    format!("face mixes token shapes: {token:?}"),
                ));
            }
            Some(_) => {}
        }

        face.vertex_indices.push(vertex);
        if let Some(texture) = texture {
            face.texture_indices.push(texture);
        }
        if let Some(normal) = normal {
            face.normal_indices.push(normal);
        }
    }

    if face.vertex_indices.len() < 3 {
        return Err(ParseError::malformed(
            line,
            format!(
                "face has {} vertex slots, at least 3 required",
                face.vertex_indices.len()
            ),
        ));
    }

    Ok(face)
}

/// Parse one face token: `i`, `i/t`, `i//n`, or `i/t/n`.
fn parse_face_token(
    token: &str,
    line: usize,
) -> Result<(u32, Option<u32>, Option<u32>, TokenShape), ParseError> {
    let mut parts = token.split('/');

    // split('/') always yields at least one part, possibly empty.
    let vertex = match parts.next() {
        Some(first) if !first.is_empty() => parse_index(first, line)?,
        _ => return Err(ParseError::malformed(line, format!("empty face token: {token:?}"))),
    };

    let Some(texture_part) = parts.next() else {
        return Ok((vertex, None, None, TokenShape::Vertex));
    };
    let normal_part = parts.next();
    if parts.next().is_some() {
        return Err(ParseError::malformed(
            line,
            format!("face token has too many fields: {token:?}"),
        ));
    }

    match normal_part {
        None => Ok((
            vertex,
            Some(parse_index(texture_part, line)?),
            None,
            TokenShape::VertexTexture,
        )),
        Some(n) if texture_part.is_empty() => Ok((
            vertex,
            None,
            Some(parse_index(n, line)?),
            TokenShape::VertexNormal,
        )),
        Some(n) => Ok((
            vertex,
            Some(parse_index(texture_part, line)?),
            Some(parse_index(n, line)?),
            TokenShape::VertexTextureNormal,
        )),
    }
}

/// Parse a 1-based interchange index into 0-based internal form.
fn parse_index(field: &str, line: usize) -> Result<u32, ParseError> {
    let value = field
        .parse::<u32>()
        .map_err(|source| ParseError::ParseIndex { line, source })?;
    if value == 0 {
        return Err(ParseError::malformed(line, "index 0 is not valid, indices are 1-based"));
    }
    Ok(value - 1)
}
