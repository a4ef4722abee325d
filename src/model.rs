//! The in-memory OBJ model populated by the decoder.
//!
//! All records have a fixed arity: optional source fields (`w` on a vertex,
//! `v`/`w` on a texture coordinate) are defaulted once at parse time, so
//! the exporter never has to re-derive defaults.

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A geometric vertex (`v`). `w` defaults to `1.0` when the source omits it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Vertex {
    fn default() -> Self {
        Vertex {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

/// A vertex normal (`vn`). Kept exactly as parsed; not normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Normal {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A texture coordinate (`vt`). `v` and `w` default to `0.0` when omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TexCoord {
    pub u: f32,
    pub v: f32,
    pub w: f32,
}

/// One `vertex/texcoord/normal` reference within a face.
///
/// Indices are stored as 1-based absolutes; relative (negative) source
/// indices are resolved by the decoder before a reference is stored.
/// Absent fields stay absent, they are never defaulted to an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FaceVertex {
    pub vertex: usize,
    pub texcoord: Option<usize>,
    pub normal: Option<usize>,
}

/// A polygonal face (`f`): an ordered list of vertex references, plus the
/// material that was active (`usemtl`) when the face was parsed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Face {
    pub vertices: Vec<FaceVertex>,
    pub material: Option<String>,
}

/// A decoded OBJ model.
///
/// The four collections keep strict source order; face references are
/// positional, so order is significant. A `WaveObj` is produced wholesale
/// by one decode call and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct WaveObj {
    /// Object name from the last `o` line, if any.
    pub name: Option<String>,
    /// Smooth shading state from the last `s` line, if any.
    pub smooth_shading: Option<bool>,
    /// Material libraries referenced by `mtllib` lines.
    pub mtl_libs: Vec<String>,
    pub vertices: Vec<Vertex>,
    pub normals: Vec<Normal>,
    pub texcoords: Vec<TexCoord>,
    pub faces: Vec<Face>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_vertex_default_weight() {
        assert_eq!(Vertex::default().w, 1.0);
    }

    #[test]
    fn test_face_vertex_absent_fields() {
        let fv = FaceVertex {
            vertex: 3,
            ..FaceVertex::default()
        };
        assert_eq!(fv.texcoord, None);
        assert_eq!(fv.normal, None);
    }
}
