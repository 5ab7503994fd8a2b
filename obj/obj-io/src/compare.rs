//! Line-based comparison of two OBJ texts.
//!
//! Used to eyeball round-trip fidelity: element counts per record type for
//! both inputs, plus a line-level diff summary. The comparison reads the
//! texts as lines only; it takes nothing from, and feeds nothing back
//! into, the serialization pipeline.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::ParseError;

/// Per-record-type line counts for one OBJ text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounts {
    /// Total lines.
    pub lines: usize,
    /// `v` records.
    pub positions: usize,
    /// `vt` records.
    pub texture_coords: usize,
    /// `vn` records.
    pub normals: usize,
    /// `f` records.
    pub faces: usize,
}

impl SectionCounts {
    /// Count record lines in one OBJ text.
    ///
    /// Records are recognized by their first whitespace-delimited token,
    /// the same tokenization the parser uses.
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut counts = Self::default();
        for line in text.lines() {
            counts.lines += 1;
            match line.split_whitespace().next() {
                Some("v") => counts.positions += 1,
                Some("vt") => counts.texture_coords += 1,
                Some("vn") => counts.normals += 1,
                Some("f") => counts.faces += 1,
                _ => {}
            }
        }
        counts
    }
}

impl fmt::Display for SectionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines (v: {}, vt: {}, vn: {}, f: {})",
            self.lines, self.positions, self.texture_coords, self.normals, self.faces
        )
    }
}

/// Result of comparing two OBJ texts line by line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjComparison {
    /// Counts for the first input.
    pub first: SectionCounts,
    /// Counts for the second input.
    pub second: SectionCounts,
    /// Number of differing lines, surplus lines of the longer input included.
    pub differing_lines: usize,
    /// 1-based line number of the first divergence, if any.
    pub first_divergence: Option<usize>,
}

impl ObjComparison {
    /// Whether the two texts are line-identical.
    #[inline]
    #[must_use]
    pub const fn matches(&self) -> bool {
        self.differing_lines == 0
    }
}

impl fmt::Display for ObjComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "first:  {}", self.first)?;
        writeln!(f, "second: {}", self.second)?;
        if self.matches() {
            write!(f, "status: identical")
        } else {
            write!(f, "status: {} differing lines", self.differing_lines)?;
            if let Some(line) = self.first_divergence {
                write!(f, " (first at line {line})")?;
            }
            Ok(())
        }
    }
}

/// Compare two OBJ texts line by line.
#[must_use]
pub fn compare_strings(first: &str, second: &str) -> ObjComparison {
    let first_lines: Vec<&str> = first.lines().collect();
    let second_lines: Vec<&str> = second.lines().collect();

    let mut differing_lines = 0;
    let mut first_divergence = None;
    let shared = first_lines.len().min(second_lines.len());

    for index in 0..shared {
        if first_lines[index] != second_lines[index] {
            differing_lines += 1;
            if first_divergence.is_none() {
                first_divergence = Some(index + 1);
            }
        }
    }

    let surplus = first_lines.len().abs_diff(second_lines.len());
    if surplus > 0 {
        differing_lines += surplus;
        if first_divergence.is_none() {
            first_divergence = Some(shared + 1);
        }
    }

    ObjComparison {
        first: SectionCounts::of(first),
        second: SectionCounts::of(second),
        differing_lines,
        first_divergence,
    }
}

/// Compare two OBJ files line by line.
///
/// # Errors
///
/// Returns [`ParseError::FileNotFound`] for a missing file or
/// [`ParseError::Io`] for other read failures.
pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
    first: P,
    second: Q,
) -> Result<ObjComparison, ParseError> {
    let first_text = read(first.as_ref())?;
    let second_text = read(second.as_ref())?;
    Ok(compare_strings(&first_text, &second_text))
}

fn read(path: &Path) -> Result<String, ParseError> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ParseError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ParseError::Io(e)
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "# test\nv 0 0 0\nv 1 0 0\nv 0 1 0\n\nf 1 2 3\n";

    #[test]
    fn counts_every_record_type() {
        let text = "v 0 0 0\nvt 0 0\nvn 0 0 1\nf 1/1/1 1/1/1 1/1/1\n";
        let counts = SectionCounts::of(text);
        assert_eq!(counts.positions, 1);
        assert_eq!(counts.texture_coords, 1);
        assert_eq!(counts.normals, 1);
        assert_eq!(counts.faces, 1);
        assert_eq!(counts.lines, 4);
    }

    #[test]
    fn vt_lines_do_not_count_as_v() {
        let counts = SectionCounts::of("vt 0 0\nvn 0 0 1\n");
        assert_eq!(counts.positions, 0);
    }

    #[test]
    fn tab_separated_records_are_counted() {
        // The parser tokenizes on any whitespace; the counts must agree.
        let text = "v\t0 0 0\nvt\t0 0\nvn\t0 0 1\nf\t1/1/1 1/1/1 1/1/1\n";
        let counts = SectionCounts::of(text);
        assert_eq!(counts.positions, 1);
        assert_eq!(counts.texture_coords, 1);
        assert_eq!(counts.normals, 1);
        assert_eq!(counts.faces, 1);
    }

    #[test]
    fn identical_texts_match() {
        let comparison = compare_strings(TRIANGLE, TRIANGLE);
        assert!(comparison.matches());
        assert_eq!(comparison.first, comparison.second);
        assert_eq!(comparison.first_divergence, None);
    }

    #[test]
    fn differing_line_is_located() {
        let altered = TRIANGLE.replace("v 1 0 0", "v 2 0 0");
        let comparison = compare_strings(TRIANGLE, &altered);
        assert!(!comparison.matches());
        assert_eq!(comparison.differing_lines, 1);
        assert_eq!(comparison.first_divergence, Some(3));
    }

    #[test]
    fn surplus_lines_count_as_differences() {
        let longer = format!("{TRIANGLE}f 1 2 3\n");
        let comparison = compare_strings(TRIANGLE, &longer);
        assert_eq!(comparison.differing_lines, 1);
        assert_eq!(comparison.first_divergence, Some(7));
    }

    #[test]
    fn display_summarizes_the_comparison() {
        let comparison = compare_strings(TRIANGLE, TRIANGLE);
        let rendered = comparison.to_string();
        assert!(rendered.contains("v: 3"));
        assert!(rendered.contains("status: identical"));
    }

    #[test]
    fn compare_files_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.obj");
        let b = dir.path().join("b.obj");
        std::fs::write(&a, TRIANGLE).unwrap();
        std::fs::write(&b, TRIANGLE).unwrap();

        let comparison = compare_files(&a, &b).unwrap();
        assert!(comparison.matches());
    }

    #[test]
    fn compare_files_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.obj");
        std::fs::write(&a, TRIANGLE).unwrap();

        let result = compare_files(&a, dir.path().join("missing.obj"));
        assert!(matches!(result, Err(ParseError::FileNotFound { .. })));
    }
}
