//! Triangle-only OBJ loader producing flattened, non-indexed vertex arrays.
//!
//! Supported directives: `v x y z`, `vt u v`, `vn x y z` and
//! `f p/t/n p/t/n p/t/n`. Anything else is skipped. The V component of each
//! texture coordinate is negated while reading.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use glam::{Vec2, Vec3};

use crate::{
    error::{AttributeTable, ObjError, ObjResult},
    mesh::FlattenedMesh,
};

/// Load an OBJ mesh from a file path.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> ObjResult<FlattenedMesh> {
    let path = path.as_ref();
    log::info!("Loading OBJ file {}", path.display());
    let file = File::open(path).map_err(|source| ObjError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    load_obj_from_reader(BufReader::new(file))
}

/// Load an OBJ mesh from a [`BufRead`] implementation.
pub fn load_obj_from_reader<R: BufRead>(reader: R) -> ObjResult<FlattenedMesh> {
    let (tables, faces) = parse_obj(reader)?;
    let mesh = resolve_faces(&tables, &faces)?;
    log::info!(
        "OBJ loaded: {} positions, {} uvs, {} normals, {} faces -> {} vertices",
        tables.positions.len(),
        tables.tex_coords.len(),
        tables.normals.len(),
        faces.len(),
        mesh.vertex_count()
    );
    Ok(mesh)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str) -> ObjResult<FlattenedMesh> {
    load_obj_from_reader(io::Cursor::new(contents))
}

/// Attributes in declaration order. Face indices are 1-based into these.
#[derive(Debug, Default)]
struct RawTables {
    positions: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    normals: Vec<Vec3>,
}

/// Unresolved `position/texcoord/normal` indices exactly as written.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Corner {
    position: i64,
    tex_coord: i64,
    normal: i64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Face {
    corners: [Corner; 3],
    line: usize,
}

fn parse_obj<R: BufRead>(reader: R) -> ObjResult<(RawTables, Vec<Face>)> {
    let mut tables = RawTables::default();
    let mut faces: Vec<Face> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| ObjError::Read {
            line: line_no,
            source,
        })?;
        let trimmed = line.trim();

        let mut parts = trimmed.split_whitespace();
        let Some(tag) = parts.next() else {
            continue;
        };

        match tag {
            "v" => {
                let [x, y, z] = parse_floats(parts, "v", line_no, trimmed)?;
                tables.positions.push(Vec3::new(x, y, z));
            }
            "vt" => {
                let [u, v] = parse_floats(parts, "vt", line_no, trimmed)?;
                tables.tex_coords.push(Vec2::new(u, -v));
            }
            "vn" => {
                let [x, y, z] = parse_floats(parts, "vn", line_no, trimmed)?;
                tables.normals.push(Vec3::new(x, y, z));
            }
            "f" => {
                let corners = parse_face(parts).ok_or_else(|| ObjError::MalformedFace {
                    line: line_no,
                    text: trimmed.to_owned(),
                })?;
                faces.push(Face {
                    corners,
                    line: line_no,
                });
            }
            other => {
                log::debug!("Skipping '{}' directive on line {}", other, line_no);
            }
        }
    }

    if faces.is_empty() {
        log::warn!("OBJ contained no faces");
    }

    Ok((tables, faces))
}

/// Read the first `N` fields as floats; trailing fields (e.g. `w`) are ignored.
fn parse_floats<'a, const N: usize>(
    mut parts: impl Iterator<Item = &'a str>,
    directive: &'static str,
    line_no: usize,
    text: &str,
) -> ObjResult<[f32; N]> {
    let mut out = [0.0; N];
    for slot in &mut out {
        *slot = parts
            .next()
            .and_then(|token| token.parse::<f32>().ok())
            .ok_or_else(|| ObjError::MalformedAttribute {
                line: line_no,
                directive,
                text: text.to_owned(),
            })?;
    }
    Ok(out)
}

fn parse_face<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<[Corner; 3]> {
    let corners = [
        parse_corner(parts.next()?)?,
        parse_corner(parts.next()?)?,
        parse_corner(parts.next()?)?,
    ];
    if parts.next().is_some() {
        return None;
    }
    Some(corners)
}

fn parse_corner(token: &str) -> Option<Corner> {
    let mut split = token.split('/');
    let position = split.next()?.parse::<i64>().ok()?;
    let tex_coord = split.next()?.parse::<i64>().ok()?;
    let normal = split.next()?.parse::<i64>().ok()?;
    if split.next().is_some() {
        return None;
    }
    Some(Corner {
        position,
        tex_coord,
        normal,
    })
}

fn resolve_faces(tables: &RawTables, faces: &[Face]) -> ObjResult<FlattenedMesh> {
    let count = faces.len() * 3;
    let mut positions = Vec::with_capacity(count);
    let mut tex_coords = Vec::with_capacity(count);
    let mut normals = Vec::with_capacity(count);

    for (face_idx, face) in faces.iter().enumerate() {
        let face_no = face_idx + 1;
        for corner in &face.corners {
            let position = lookup(&tables.positions, AttributeTable::Position, corner.position);
            let tex_coord = lookup(&tables.tex_coords, AttributeTable::TexCoord, corner.tex_coord);
            let normal = lookup(&tables.normals, AttributeTable::Normal, corner.normal);
            positions.push(position.map_err(|e| e.at(face_no, face.line))?);
            tex_coords.push(tex_coord.map_err(|e| e.at(face_no, face.line))?);
            normals.push(normal.map_err(|e| e.at(face_no, face.line))?);
        }
    }

    Ok(FlattenedMesh::from_parts(positions, tex_coords, normals))
}

/// Index that fell outside its table; face and line are attached by the caller.
struct Miss {
    table: AttributeTable,
    index: i64,
    len: usize,
}

impl Miss {
    fn at(self, face: usize, line: usize) -> ObjError {
        ObjError::IndexOutOfRange {
            table: self.table,
            index: self.index,
            len: self.len,
            face,
            line,
        }
    }
}

/// Resolve a 1-based OBJ index against `items`.
fn lookup<T: Copy>(items: &[T], table: AttributeTable, index: i64) -> Result<T, Miss> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| items.get(i).copied())
        .ok_or(Miss {
            table,
            index,
            len: items.len(),
        })
}
