//! Decoder and encoder for the Wavefront OBJ text format
//! (<https://en.wikipedia.org/wiki/Wavefront_.obj_file>).
//!
//! [`decode`] turns a sequence of OBJ source lines into a [`WaveObj`]:
//! ordered collections of vertices, normals, texture coordinates and faces.
//! [`WaveObj::export`] renders a model back to OBJ text with all face
//! indices as positive 1-based absolutes.
//!
//! Decoding is a single forward pass and fail-fast: unsupported tags
//! (including `g` and `l`) and malformed tokens abort the decode with an
//! [`ObjError`] naming the offending line, rather than being silently
//! dropped.
//!
//! ```
//! let obj = waveobj::decode_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 -1")?;
//! assert_eq!(obj.faces[0].vertices[2].vertex, 3);
//!
//! let text = obj.export_to_string();
//! assert!(text.contains("f 1 2 3"));
//! # Ok::<(), waveobj::ObjError>(())
//! ```

mod decoder;
mod error;
mod exporter;
mod model;
mod tag;
mod tokenizer;

pub use decoder::{decode, decode_file, decode_str};
pub use error::{ObjError, Result};
pub use model::{Face, FaceVertex, Normal, TexCoord, Vertex, WaveObj};
pub use tag::Tag;
