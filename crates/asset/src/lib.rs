//! Asset loading: OBJ meshes flattened into non-indexed attribute arrays.

pub mod error;
pub mod mesh;
pub mod obj;

pub use error::{AttributeTable, ObjError, ObjResult};
pub use mesh::{FlattenedMesh, FlattenedVertex};
pub use obj::{load_obj_from_path, load_obj_from_reader, load_obj_from_str};
