use std::io;

use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, ObjError>;

/// Errors raised while decoding OBJ text.
///
/// Decoding is all-or-nothing: any of these aborts the whole decode call
/// and no partial model is handed to the caller. Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum ObjError {
    /// The line's tag has no consumer. Covers `g`, `l`, `vp` and anything
    /// else outside the supported tag set.
    #[error("unknown tag `{tag}` on line {line}")]
    UnknownTag { tag: String, line: usize },

    /// A token expected to be a float or integer failed to parse.
    #[error("malformed numeric value `{token}` in `{tag}` element on line {line}")]
    MalformedNumeric {
        tag: &'static str,
        line: usize,
        token: String,
    },

    /// A face reference token has an invalid slash structure, or one of its
    /// indices resolves outside the referenced collection.
    #[error("malformed face reference `{reference}` on line {line}")]
    MalformedFaceReference { reference: String, line: usize },

    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
}
