use std::fmt;

/// What each level of depth is indented by in the text renderings.
pub(crate) const INDENT: &str = "  ";

/// Writes `value` on its own line, indented for the given `depth`.
pub(crate) fn write_indented<W, T>(out: &mut W, depth: usize, value: &T) -> fmt::Result
where
    W: fmt::Write,
    T: fmt::Display,
{
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    writeln!(out, "{}", value)
}
