//! Single-pass OBJ decoding.
//!
//! The decoder folds the line sequence into an exclusively-owned [`WaveObj`]
//! accumulator: tokenize, dispatch on the [`Tag`], let the tag's consumer
//! append a typed record. Relative face indices are resolved against the
//! current collection lengths while parsing; forward absolute indices are
//! checked once the pass is complete.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{ObjError, Result};
use crate::model::{Face, FaceVertex, Normal, TexCoord, Vertex, WaveObj};
use crate::tag::Tag;
use crate::tokenizer::tokenize;

/// Decode a sequence of OBJ source lines into a [`WaveObj`].
///
/// Fail-fast: the first unknown tag or malformed token aborts the decode
/// and no partial model is returned.
pub fn decode<I, S>(lines: I) -> Result<WaveObj>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut decoder = Decoder::default();

    for (idx, line) in lines.into_iter().enumerate() {
        decoder.consume_line(line.as_ref(), idx + 1)?;
    }

    decoder.finish()
}

/// Decode OBJ text held in a string.
pub fn decode_str(source: &str) -> Result<WaveObj> {
    decode(source.lines())
}

/// Read a file and decode its contents.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<WaveObj> {
    let path = path.as_ref();
    log::info!("Loading OBJ file: {}", path.display());
    let text = fs::read_to_string(path)?;
    decode(text.lines())
}

#[derive(Default)]
struct Decoder {
    obj: WaveObj,
    /// Material selected by the last `usemtl`; attached to faces as parsed.
    active_material: Option<String>,
    /// Source line of each face, for the end-of-pass index check.
    face_lines: Vec<usize>,
}

impl Decoder {
    fn consume_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        let (token, args) = match tokenize(line) {
            Some(split) => split,
            None => return Ok(()),
        };

        debug!("Parsing line {}: {:?}", line_no, line);

        let tag = Tag::from_token(token).ok_or_else(|| ObjError::UnknownTag {
            tag: token.to_owned(),
            line: line_no,
        })?;

        match tag {
            Tag::Vertex => {
                let vertex = parse_vertex(&args, line_no)?;
                self.obj.vertices.push(vertex);
            }
            Tag::VertexNormal => {
                let normal = parse_normal(&args, line_no)?;
                self.obj.normals.push(normal);
            }
            Tag::VertexTexture => {
                let texcoord = parse_texcoord(&args, line_no)?;
                self.obj.texcoords.push(texcoord);
            }
            Tag::Face => {
                let face = self.parse_face(&args, line_no)?;
                self.obj.faces.push(face);
                self.face_lines.push(line_no);
            }
            Tag::Object => {
                self.obj.name = if args.is_empty() {
                    None
                } else {
                    Some(args.join(" "))
                };
            }
            Tag::SmoothShading => {
                self.obj.smooth_shading = Some(parse_smoothing(&args, line_no)?);
            }
            Tag::MtlLib => {
                self.obj.mtl_libs.extend(args.iter().map(|s| s.to_string()));
            }
            Tag::UseMtl => {
                // a bare `usemtl` is malformed: OBJ has no way to re-emit an
                // "unset material" between faces, so accepting it would make
                // the model unexportable
                let name = args
                    .first()
                    .ok_or_else(|| arity_error(Tag::UseMtl, &args, line_no))?;
                self.active_material = Some(name.to_string());
            }
        }

        Ok(())
    }

    fn parse_face(&self, args: &[&str], line: usize) -> Result<Face> {
        if args.is_empty() {
            return Err(ObjError::MalformedFaceReference {
                reference: String::new(),
                line,
            });
        }

        let vertices = args
            .iter()
            .map(|token| self.parse_face_vertex(token, line))
            .collect::<Result<Vec<_>>>()?;

        Ok(Face {
            vertices,
            material: self.active_material.clone(),
        })
    }

    /// Parse one `vertex[/texcoord[/normal]]` token. Empty fields between
    /// slashes are absent, not zero; the vertex field is mandatory.
    fn parse_face_vertex(&self, token: &str, line: usize) -> Result<FaceVertex> {
        let fields: Vec<&str> = token.split('/').collect();
        if fields.len() > 3 {
            return Err(ObjError::MalformedFaceReference {
                reference: token.to_owned(),
                line,
            });
        }

        let vertex = resolve_index(fields[0], self.obj.vertices.len(), token, line)?
            .ok_or_else(|| ObjError::MalformedFaceReference {
                reference: token.to_owned(),
                line,
            })?;
        let texcoord = match fields.get(1) {
            Some(field) => resolve_index(field, self.obj.texcoords.len(), token, line)?,
            None => None,
        };
        let normal = match fields.get(2) {
            Some(field) => resolve_index(field, self.obj.normals.len(), token, line)?,
            None => None,
        };

        Ok(FaceVertex {
            vertex,
            texcoord,
            normal,
        })
    }

    /// Check forward absolute indices against the final collection lengths.
    ///
    /// Relative indices were already resolved while parsing and always point
    /// backwards; absolute indices may legally point past the collection's
    /// length at the time the face appeared, so they can only be validated
    /// here.
    fn finish(self) -> Result<WaveObj> {
        for (face, &line) in self.obj.faces.iter().zip(&self.face_lines) {
            for fv in &face.vertices {
                check_range(fv.vertex, self.obj.vertices.len(), "vertex", line)?;
                if let Some(i) = fv.texcoord {
                    check_range(i, self.obj.texcoords.len(), "texcoord", line)?;
                }
                if let Some(i) = fv.normal {
                    check_range(i, self.obj.normals.len(), "normal", line)?;
                }
            }
        }

        Ok(self.obj)
    }
}

/// Resolve one face index field to a 1-based absolute index, or `None` if
/// the field is empty. Negative indices count back from the current end of
/// the referenced collection (`-1` is the element parsed last).
fn resolve_index(field: &str, len: usize, token: &str, line: usize) -> Result<Option<usize>> {
    if field.is_empty() {
        return Ok(None);
    }

    let raw: i64 = field.parse().map_err(|_| ObjError::MalformedNumeric {
        tag: Tag::Face.as_str(),
        line,
        token: field.to_owned(),
    })?;

    let resolved = if raw < 0 { len as i64 + 1 + raw } else { raw };
    if resolved < 1 {
        return Err(ObjError::MalformedFaceReference {
            reference: token.to_owned(),
            line,
        });
    }

    Ok(Some(resolved as usize))
}

fn check_range(index: usize, len: usize, collection: &str, line: usize) -> Result<()> {
    if index > len {
        return Err(ObjError::MalformedFaceReference {
            reference: format!("{} index {} out of range ({} parsed)", collection, index, len),
            line,
        });
    }
    Ok(())
}

fn parse_floats(tag: Tag, args: &[&str], line: usize) -> Result<Vec<f32>> {
    args.iter()
        .map(|token| {
            token.parse().map_err(|_| ObjError::MalformedNumeric {
                tag: tag.as_str(),
                line,
                token: (*token).to_owned(),
            })
        })
        .collect()
}

fn arity_error(tag: Tag, args: &[&str], line: usize) -> ObjError {
    ObjError::MalformedNumeric {
        tag: tag.as_str(),
        line,
        token: args.join(" "),
    }
}

fn parse_vertex(args: &[&str], line: usize) -> Result<Vertex> {
    let numbers = parse_floats(Tag::Vertex, args, line)?;
    match numbers[..] {
        [x, y, z] => Ok(Vertex { x, y, z, w: 1.0 }),
        [x, y, z, w] => Ok(Vertex { x, y, z, w }),
        _ => Err(arity_error(Tag::Vertex, args, line)),
    }
}

fn parse_normal(args: &[&str], line: usize) -> Result<Normal> {
    let numbers = parse_floats(Tag::VertexNormal, args, line)?;
    match numbers[..] {
        [x, y, z] => Ok(Normal { x, y, z }),
        _ => Err(arity_error(Tag::VertexNormal, args, line)),
    }
}

fn parse_texcoord(args: &[&str], line: usize) -> Result<TexCoord> {
    let numbers = parse_floats(Tag::VertexTexture, args, line)?;
    match numbers[..] {
        [u] => Ok(TexCoord { u, v: 0.0, w: 0.0 }),
        [u, v] => Ok(TexCoord { u, v, w: 0.0 }),
        [u, v, w] => Ok(TexCoord { u, v, w }),
        _ => Err(arity_error(Tag::VertexTexture, args, line)),
    }
}

/// `s on`/`s 1` enable smooth shading, `s off`/`s 0` disable it. Other
/// integers are smoothing-group numbers and count as enabled.
fn parse_smoothing(args: &[&str], line: usize) -> Result<bool> {
    match args {
        ["on"] => Ok(true),
        ["off"] => Ok(false),
        [token] => token.parse::<i64>().map(|n| n != 0).map_err(|_| {
            ObjError::MalformedNumeric {
                tag: Tag::SmoothShading.as_str(),
                line,
                token: (*token).to_owned(),
            }
        }),
        _ => Err(arity_error(Tag::SmoothShading, args, line)),
    }
}
