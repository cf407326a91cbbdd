//! Loading OBJ fixtures from disk.

use std::path::PathBuf;

use asset::{AttributeTable, ObjError, load_obj_from_path};
use glam::{Vec2, Vec3};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn cube_has_three_vertices_per_face() {
    let mesh = load_obj_from_path(fixture("cube.obj")).expect("load cube");
    assert_eq!(mesh.face_count(), 12);
    assert_eq!(mesh.positions().len(), 36);
    assert_eq!(mesh.tex_coords().len(), 36);
    assert_eq!(mesh.normals().len(), 36);

    let (lo, hi) = mesh.bounds().unwrap();
    assert_eq!(lo, Vec3::splat(-1.0));
    assert_eq!(hi, Vec3::splat(1.0));
}

#[test]
fn cube_parts_are_three_per_face() {
    let mesh = load_obj_from_path(fixture("cube.obj")).unwrap();
    let faces = mesh.face_count();
    let (positions, tex_coords, normals) = mesh.into_parts();
    assert_eq!(positions.len(), 3 * faces);
    assert_eq!(tex_coords.len(), 3 * faces);
    assert_eq!(normals.len(), 3 * faces);
}

#[test]
fn cube_first_face_resolves_in_corner_order() {
    let mesh = load_obj_from_path(fixture("cube.obj")).unwrap();
    // f 2/1/1 3/2/1 4/3/1
    assert_eq!(mesh.positions()[0], Vec3::new(1.0, -1.0, 1.0));
    assert_eq!(mesh.positions()[1], Vec3::new(-1.0, -1.0, 1.0));
    assert_eq!(mesh.positions()[2], Vec3::new(-1.0, -1.0, -1.0));
    assert_eq!(mesh.tex_coords()[0], Vec2::new(0.748573, -0.750412));
    assert_eq!(mesh.tex_coords()[2], Vec2::new(0.999110, -0.501077));
    assert_eq!(mesh.normals()[1], Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn cube_texture_v_is_always_negative_of_source() {
    let mesh = load_obj_from_path(fixture("cube.obj")).unwrap();
    // every source V in the fixture is positive
    assert!(mesh.tex_coords().iter().all(|uv| uv.y < 0.0));
}

#[test]
fn single_face_repeats_the_only_attributes() {
    let mesh = load_obj_from_path(fixture("single.obj")).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    for v in mesh.vertices() {
        assert_eq!(v.position, Vec3::new(0.5, -1.25, 2.0));
        assert_eq!(v.tex_coord, Vec2::new(0.25, -0.75));
        assert_eq!(v.normal, Vec3::Z);
    }
}

#[test]
fn loading_twice_is_bit_identical() {
    let a = load_obj_from_path(fixture("cube.obj")).unwrap();
    let b = load_obj_from_path(fixture("cube.obj")).unwrap();
    assert_eq!(a.position_bytes(), b.position_bytes());
    assert_eq!(a.tex_coord_bytes(), b.tex_coord_bytes());
    assert_eq!(a.normal_bytes(), b.normal_bytes());
}

#[test]
fn texcoord_out_of_range_names_table_and_index() {
    let err = load_obj_from_path(fixture("bad_texcoord.obj")).unwrap_err();
    match err {
        ObjError::IndexOutOfRange {
            table,
            index,
            face,
            line,
            ..
        } => {
            assert_eq!(table, AttributeTable::TexCoord);
            assert_eq!(index, 4);
            assert_eq!(face, 1);
            assert_eq!(line, 9);
        }
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn nonexistent_path_is_file_not_found() {
    let path = fixture("does_not_exist.obj");
    match load_obj_from_path(&path) {
        Err(ObjError::FileNotFound { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}
