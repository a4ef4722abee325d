//! OBJ text emission.
//!
//! Export is a pure function of the model: indices are written exactly as
//! stored (positive 1-based absolutes), absent face fields are omitted
//! entirely, and floats render through `Display`, whose shortest-exact
//! output re-parses to the identical value.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::model::{Face, WaveObj};

impl WaveObj {
    /// Write the model as OBJ text to the given sink.
    ///
    /// Emission order: `mtllib` lines, `o` line, vertices, normals,
    /// texture coordinates, the `s` line, then faces with `usemtl`
    /// interleaved wherever the active material changes.
    pub fn export<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "# exported by waveobj")?;

        for lib in &self.mtl_libs {
            writeln!(writer, "mtllib {}", lib)?;
        }
        if let Some(name) = &self.name {
            writeln!(writer, "o {}", name)?;
        }

        for v in &self.vertices {
            if v.w == 1.0 {
                writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
            } else {
                writeln!(writer, "v {} {} {} {}", v.x, v.y, v.z, v.w)?;
            }
        }
        for n in &self.normals {
            writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        for t in &self.texcoords {
            if t.w == 0.0 {
                writeln!(writer, "vt {} {}", t.u, t.v)?;
            } else {
                writeln!(writer, "vt {} {} {}", t.u, t.v, t.w)?;
            }
        }

        if let Some(smooth) = self.smooth_shading {
            writeln!(writer, "s {}", if smooth { "1" } else { "off" })?;
        }

        let mut active: Option<&str> = None;
        for face in &self.faces {
            if face.material.as_deref() != active {
                if let Some(material) = &face.material {
                    writeln!(writer, "usemtl {}", material)?;
                }
                active = face.material.as_deref();
            }
            write_face(writer, face)?;
        }

        Ok(())
    }

    /// Render the model as an OBJ string.
    pub fn export_to_string(&self) -> String {
        let mut buffer = Vec::new();
        self.export(&mut buffer)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(buffer).expect("OBJ export emits valid UTF-8")
    }

    /// Write the model as OBJ text to a file.
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        log::info!("Writing OBJ file: {}", path.display());
        let mut writer = BufWriter::new(File::create(path)?);
        self.export(&mut writer)?;
        writer.flush()
    }
}

fn write_face<W: Write>(writer: &mut W, face: &Face) -> io::Result<()> {
    write!(writer, "f")?;
    for fv in &face.vertices {
        match (fv.texcoord, fv.normal) {
            (Some(t), Some(n)) => write!(writer, " {}/{}/{}", fv.vertex, t, n)?,
            (Some(t), None) => write!(writer, " {}/{}", fv.vertex, t)?,
            (None, Some(n)) => write!(writer, " {}//{}", fv.vertex, n)?,
            (None, None) => write!(writer, " {}", fv.vertex)?,
        }
    }
    writeln!(writer)
}
