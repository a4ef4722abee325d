/// The supported OBJ line tags.
///
/// Dispatch is a closed enum rather than a string-keyed registry, so
/// supporting a new tag later is a compiler-checked variant addition.
/// Tags without a variant (`g`, `l`, `vp`, ...) are rejected by the
/// decoder with [`ObjError::UnknownTag`](crate::ObjError::UnknownTag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `v` - geometric vertex
    Vertex,
    /// `vn` - vertex normal
    VertexNormal,
    /// `vt` - texture coordinate
    VertexTexture,
    /// `f` - polygonal face
    Face,
    /// `o` - object name
    Object,
    /// `s` - smooth shading toggle
    SmoothShading,
    /// `mtllib` - material library reference
    MtlLib,
    /// `usemtl` - active material selection
    UseMtl,
}

impl Tag {
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "v" => Tag::Vertex,
            "vn" => Tag::VertexNormal,
            "vt" => Tag::VertexTexture,
            "f" => Tag::Face,
            "o" => Tag::Object,
            "s" => Tag::SmoothShading,
            "mtllib" => Tag::MtlLib,
            "usemtl" => Tag::UseMtl,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Vertex => "v",
            Tag::VertexNormal => "vn",
            Tag::VertexTexture => "vt",
            Tag::Face => "f",
            Tag::Object => "o",
            Tag::SmoothShading => "s",
            Tag::MtlLib => "mtllib",
            Tag::UseMtl => "usemtl",
        }
    }
}
