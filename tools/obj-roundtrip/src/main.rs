//! Round-trip driver for the OBJ toolkit.
//!
//! Loads an OBJ file, prints element counts, serializes the mesh back out
//! in canonical form, then prints a line-based comparison of the two files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use obj_io::{compare_files, load_obj, save_obj};

/// Load an OBJ file, write it back canonically, and summarize the differences.
#[derive(Parser)]
#[command(name = "obj-roundtrip")]
struct Args {
    /// Input OBJ file.
    input: PathBuf,

    /// Output path. Defaults to `<input stem>_output.obj` next to the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Header comment for the generated file.
    #[arg(short, long, default_value = "Exported by obj-roundtrip")]
    comment: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let args = Args::parse();
    let output = args
        .output
        .unwrap_or_else(|| default_output(&args.input));

    println!("Loading model ...");
    let mesh = load_obj(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    println!("Vertices: {}", mesh.position_count());
    println!("Texture vertices: {}", mesh.texture_coord_count());
    println!("Normals: {}", mesh.normal_count());
    println!("Polygons: {}", mesh.face_count());

    println!("\nSaving model back ...");
    save_obj(&mesh, &output, Some(&args.comment))
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Model saved to: {}", output.display());

    println!("\n=== Difference Summary ===");
    let comparison = compare_files(&args.input, &output)?;
    println!("{comparison}");

    Ok(())
}

/// `<stem>_output.obj` next to the input file.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "model".into(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_output.obj"))
}
