//! Canonical OBJ text serialization.
//!
//! The writer walks the mesh in fixed section order — positions, texture
//! coordinates, normals, faces — one record per line, with a single blank
//! line between adjacent non-empty sections. Internal indices are 0-based;
//! the text is 1-based.
//!
//! Validation and emission are two separate phases: the whole mesh is
//! validated before the first byte of text is assembled, so no partial or
//! malformed output can ever be observed.

use std::fs;
use std::path::Path;

use obj_types::{Face, ObjMesh};
use tracing::debug;

use crate::error::WriteError;
use crate::format::format_f32;
use crate::validate::validate;

/// Serialize a mesh to canonical OBJ interchange text.
///
/// An optional single-line comment is emitted first as `# {comment}`, only
/// if `comment` is non-empty. Sections follow in fixed order regardless of
/// mesh insertion order. A blank separator line appears only between two
/// adjacent emitted non-empty sections, with one documented exception: the
/// separator before the face section appears whenever any geometry section
/// is non-empty and faces exist.
///
/// # Errors
///
/// Returns [`WriteError::Validation`] if the mesh violates a structural
/// rule, or [`WriteError::Format`] if a numeric field is non-finite. No
/// partial text is returned on failure.
///
/// # Example
///
/// ```
/// use obj_io::obj_to_string;
/// use obj_types::{Face, ObjMesh, Point3};
///
/// let mut mesh = ObjMesh::new();
/// mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.faces.push(Face::from_vertices(vec![0, 1, 2]));
///
/// let text = obj_to_string(&mesh, None).unwrap();
/// assert!(text.contains("f 1 2 3"));
/// ```
pub fn obj_to_string(mesh: &ObjMesh, comment: Option<&str>) -> Result<String, WriteError> {
    validate(mesh)?;

    let mut out = String::new();

    if let Some(comment) = comment.filter(|c| !c.is_empty()) {
        out.push_str("# ");
        out.push_str(comment);
        out.push('\n');
    }

    for position in &mesh.positions {
        out.push_str("v ");
        out.push_str(&format_f32(position.x)?);
        out.push(' ');
        out.push_str(&format_f32(position.y)?);
        out.push(' ');
        out.push_str(&format_f32(position.z)?);
        out.push('\n');
    }

    if !mesh.positions.is_empty()
        && (!mesh.texture_coords.is_empty() || !mesh.normals.is_empty())
    {
        out.push('\n');
    }

    for uv in &mesh.texture_coords {
        out.push_str("vt ");
        out.push_str(&format_f32(uv.x)?);
        out.push(' ');
        out.push_str(&format_f32(uv.y)?);
        out.push('\n');
    }

    if !mesh.texture_coords.is_empty() && !mesh.normals.is_empty() {
        out.push('\n');
    }

    for normal in &mesh.normals {
        out.push_str("vn ");
        out.push_str(&format_f32(normal.x)?);
        out.push(' ');
        out.push_str(&format_f32(normal.y)?);
        out.push(' ');
        out.push_str(&format_f32(normal.z)?);
        out.push('\n');
    }

    let any_geometry = !mesh.positions.is_empty()
        || !mesh.texture_coords.is_empty()
        || !mesh.normals.is_empty();
    if any_geometry && !mesh.faces.is_empty() {
        out.push('\n');
    }

    for face in &mesh.faces {
        push_face_line(&mut out, face);
    }

    Ok(out)
}

/// Append one `f` record. Indices convert from 0-based to 1-based here.
fn push_face_line(out: &mut String, face: &Face) {
    out.push('f');
    for (slot, &vertex) in face.vertex_indices.iter().enumerate() {
        out.push(' ');
        out.push_str(&(vertex + 1).to_string());

        if face.has_texture() || face.has_normals() {
            out.push('/');
            if face.has_texture() {
                out.push_str(&(face.texture_indices[slot] + 1).to_string());
            }
            if face.has_normals() {
                out.push('/');
                out.push_str(&(face.normal_indices[slot] + 1).to_string());
            }
        }
    }
    out.push('\n');
}

/// Serialize a mesh and write the text to a file.
///
/// # Errors
///
/// Returns the same failures as [`obj_to_string`], plus
/// [`WriteError::Io`] if the destination cannot be written. Nothing is
/// written unless the full text was produced.
pub fn save_obj<P: AsRef<Path>>(
    mesh: &ObjMesh,
    path: P,
    comment: Option<&str>,
) -> Result<(), WriteError> {
    let text = obj_to_string(mesh, comment)?;
    fs::write(path.as_ref(), &text)?;
    debug!(
        path = %path.as_ref().display(),
        bytes = text.len(),
        "wrote OBJ file"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use obj_types::{Point3, Vector2, Vector3};

    fn triangle() -> ObjMesh {
        let mut mesh = ObjMesh::new();
        mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
        mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
        mesh.positions.push(Point3::new(0.0, 0.0, 1.0));
        mesh.faces.push(Face::from_vertices(vec![0, 1, 2]));
        mesh
    }

    #[test]
    fn indices_become_one_based() {
        let text = obj_to_string(&triangle(), None).unwrap();
        assert!(text.contains("f 1 2 3"));
    }

    #[test]
    fn plain_faces_have_no_slashes() {
        let text = obj_to_string(&triangle(), None).unwrap();
        assert!(!text.contains('/'));
    }

    #[test]
    fn comment_is_emitted_first() {
        let text = obj_to_string(&triangle(), Some("exported for test")).unwrap();
        assert!(text.starts_with("# exported for test\n"));
    }

    #[test]
    fn empty_comment_is_skipped() {
        let text = obj_to_string(&triangle(), Some("")).unwrap();
        assert!(text.starts_with("v "));
    }

    #[test]
    fn vertex_texture_tokens_use_single_slash() {
        let mut mesh = triangle();
        mesh.texture_coords.push(Vector2::new(0.5, 0.5));
        mesh.faces[0].texture_indices = vec![0, 0, 0];

        let text = obj_to_string(&mesh, None).unwrap();
        assert!(text.contains("vt 0.5 0.5"));
        assert!(text.contains("f 1/1 2/1 3/1"));
        assert!(!text.contains("//"));
    }

    #[test]
    fn vertex_normal_tokens_use_double_slash() {
        let mut mesh = triangle();
        mesh.normals.push(Vector3::new(0.0, 1.0, 0.0));
        mesh.faces[0].normal_indices = vec![0, 0, 0];

        let text = obj_to_string(&mesh, None).unwrap();
        assert!(text.contains("vn 0 1 0"));
        assert!(text.contains("f 1//1 2//1 3//1"));
    }

    #[test]
    fn full_tokens_carry_all_three_indices() {
        let mut mesh = triangle();
        mesh.texture_coords.push(Vector2::new(0.5, 0.5));
        mesh.normals.push(Vector3::new(0.0, 1.0, 0.0));
        mesh.faces[0].texture_indices = vec![0, 0, 0];
        mesh.faces[0].normal_indices = vec![0, 0, 0];

        let text = obj_to_string(&mesh, None).unwrap();
        assert!(text.contains("f 1/1/1 2/1/1 3/1/1"));
    }

    #[test]
    fn sections_emit_in_fixed_order() {
        let mut mesh = ObjMesh::new();
        // Inserted out of order on purpose.
        mesh.normals.push(Vector3::new(0.0, 0.0, 1.0));
        mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
        mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
        mesh.positions.push(Point3::new(0.0, 0.0, 1.0));
        mesh.texture_coords.push(Vector2::new(0.5, 0.5));
        mesh.faces.push(Face::from_parts(
            vec![0, 1, 2],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ));

        let text = obj_to_string(&mesh, None).unwrap();
        let v = text.find("v ").unwrap();
        let vt = text.find("vt ").unwrap();
        let vn = text.find("vn ").unwrap();
        let f = text.find("f ").unwrap();
        assert!(v < vt && vt < vn && vn < f);
    }

    #[test]
    fn separators_appear_between_nonempty_sections() {
        let mut mesh = triangle();
        mesh.texture_coords.push(Vector2::new(0.0, 0.0));
        mesh.normals.push(Vector3::new(0.0, 0.0, 1.0));
        mesh.faces[0].texture_indices = vec![0, 0, 0];
        mesh.faces[0].normal_indices = vec![0, 0, 0];

        let text = obj_to_string(&mesh, None).unwrap();
        let expected = "v 1 0 0\nv 0 1 0\nv 0 0 1\n\nvt 0 0\n\nvn 0 0 1\n\nf 1/1/1 2/1/1 3/1/1\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn face_separator_fires_even_when_normals_are_empty() {
        let text = obj_to_string(&triangle(), None).unwrap();
        assert_eq!(text, "v 1 0 0\nv 0 1 0\nv 0 0 1\n\nf 1 2 3\n");
    }

    #[test]
    fn no_trailing_blank_line_after_last_section() {
        let mut mesh = ObjMesh::new();
        mesh.positions.push(Point3::new(1.0, 2.0, 3.0));
        let text = obj_to_string(&mesh, None).unwrap();
        assert_eq!(text, "v 1 2 3\n");
    }

    #[test]
    fn empty_mesh_yields_only_the_comment() {
        let text = obj_to_string(&ObjMesh::new(), Some("empty export")).unwrap();
        assert_eq!(text, "# empty export\n");

        let bare = obj_to_string(&ObjMesh::new(), None).unwrap();
        assert_eq!(bare, "");
    }

    #[test]
    fn single_nonempty_section_has_no_separators() {
        let mut mesh = ObjMesh::new();
        mesh.texture_coords.push(Vector2::new(0.25, 0.75));
        let text = obj_to_string(&mesh, None).unwrap();
        assert_eq!(text, "vt 0.25 0.75\n");
    }

    #[test]
    fn invalid_mesh_produces_no_text() {
        let mut mesh = triangle();
        mesh.faces[0].vertex_indices[0] = 10;
        let err = obj_to_string(&mesh, None);
        assert!(matches!(err, Err(WriteError::Validation(_))));
    }

    #[test]
    fn quad_faces_serialize_every_slot() {
        let mut mesh = ObjMesh::new();
        mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
        mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
        mesh.positions.push(Point3::new(1.0, 1.0, 0.0));
        mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
        mesh.faces.push(Face::from_vertices(vec![0, 1, 2, 3]));

        let text = obj_to_string(&mesh, None).unwrap();
        assert!(text.contains("f 1 2 3 4"));
    }

    #[test]
    fn save_obj_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.obj");
        save_obj(&triangle(), &path, Some("file test")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# file test\n"));
        assert!(content.contains("f 1 2 3"));
    }

    #[test]
    fn save_obj_refuses_invalid_mesh_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.obj");
        let mut mesh = triangle();
        mesh.positions[0] = Point3::new(f32::NAN, 0.0, 0.0);

        assert!(save_obj(&mesh, &path, None).is_err());
        assert!(!path.exists());
    }
}
