//! Mesh inspection tool: load an OBJ, report what would be uploaded.

use std::path::PathBuf;

use anyhow::{Context, Result};
use asset::FlattenedMesh;

const DEFAULT_DUMP_LIMIT: usize = 32;

#[derive(Debug, PartialEq)]
struct Args {
    obj: Option<PathBuf>,
    dump: bool,
    limit: usize,
    /// Arguments that were not understood, in order.
    ignored: Vec<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    // Accept: --obj=<path> | <path>, --dump[=on|off], --limit=<n>
    let mut out = Args {
        obj: None,
        dump: false,
        limit: DEFAULT_DUMP_LIMIT,
        ignored: Vec::new(),
    };
    for arg in args {
        if let Some(val) = arg.strip_prefix("--obj=") {
            out.obj = Some(PathBuf::from(val));
        } else if arg == "--dump" {
            out.dump = true;
        } else if let Some(val) = arg.strip_prefix("--dump=") {
            out.dump = matches!(
                val.to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            );
        } else if let Some(val) = arg.strip_prefix("--limit=") {
            match val.parse::<usize>() {
                Ok(n) => out.limit = n,
                Err(_) => log::warn!("Bad --limit '{}', keeping {}.", val, out.limit),
            }
        } else if arg.starts_with("--") {
            log::warn!("Unknown argument '{}', ignored.", arg);
            out.ignored.push(arg);
        } else if out.obj.is_none() {
            out.obj = Some(PathBuf::from(arg));
        } else {
            log::warn!("Extra path '{}', only one OBJ is loaded.", arg);
            out.ignored.push(arg);
        }
    }
    out
}

fn report(mesh: &FlattenedMesh) {
    log::info!(
        "{} faces, {} vertices; upload sizes: positions={}B uvs={}B normals={}B",
        mesh.face_count(),
        mesh.vertex_count(),
        mesh.position_bytes().len(),
        mesh.tex_coord_bytes().len(),
        mesh.normal_bytes().len()
    );
    if let Some((lo, hi)) = mesh.bounds() {
        log::info!("Bounds: min={} max={}", lo, hi);
    }
}

fn dump(mesh: &FlattenedMesh, limit: usize) {
    for (i, v) in mesh.vertices().take(limit).enumerate() {
        println!(
            "{:>6}  p=({:.4}, {:.4}, {:.4})  uv=({:.4}, {:.4})  n=({:.4}, {:.4}, {:.4})",
            i,
            v.position.x,
            v.position.y,
            v.position.z,
            v.tex_coord.x,
            v.tex_coord.y,
            v.normal.x,
            v.normal.y,
            v.normal.z
        );
    }
    if mesh.vertex_count() > limit {
        println!("... {} more", mesh.vertex_count() - limit);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1));
    let path = args
        .obj
        .context("No OBJ file given (usage: app --obj=<path> [--dump] [--limit=N])")?;

    let mesh = asset::load_obj_from_path(&path)
        .with_context(|| format!("Failed to load mesh {}", path.display()))?;

    report(&mesh);
    if args.dump {
        dump(&mesh, args.limit);
    }
    Ok(())
}
