//! Line tokenization, the first stage of the decode pipeline.

/// Split one OBJ source line into its tag token and argument tokens.
///
/// A `#` starts a comment running to the end of the line. Blank and
/// comment-only lines yield `None`. Tokens are separated by runs of
/// whitespace. Pure function of the line; no model access.
pub(crate) fn tokenize(line: &str) -> Option<(&str, Vec<&str>)> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut tokens = content.split_whitespace();
    let tag = tokens.next()?;
    Some((tag, tokens.collect()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tag_and_args() {
        assert_eq!(tokenize("v 1.0 2.0 3.0"), Some(("v", vec!["1.0", "2.0", "3.0"])));
        assert_eq!(tokenize("f 1//2 3//4"), Some(("f", vec!["1//2", "3//4"])));
        assert_eq!(tokenize("usemtl steel"), Some(("usemtl", vec!["steel"])));
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(tokenize("  v\t 1   2  3 "), Some(("v", vec!["1", "2", "3"])));
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        assert_eq!(tokenize(""), None);
        assert_eq!(tokenize("   \t  "), None);
        assert_eq!(tokenize("# a comment"), None);
        assert_eq!(tokenize("   # indented comment"), None);
    }

    #[test]
    fn test_trailing_comment_stripped() {
        assert_eq!(tokenize("v 1 2 3 # position"), Some(("v", vec!["1", "2", "3"])));
        assert_eq!(tokenize("v 1 2 3#position"), Some(("v", vec!["1", "2", "3"])));
    }
}
