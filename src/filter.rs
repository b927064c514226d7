/// Build an open-file filter in the native provider's grammar.
///
/// Each `(name, patterns)` pair becomes `name NUL patterns NUL`, e.g.
/// `("Text", "*.txt")` turns into `"Text\0*.txt\0"`. Several patterns can
/// share a name when separated with `;` (`"*.exe;*.com"`). The marshaling
/// layer appends one more NUL, giving the double terminator the provider
/// scans for.
///
/// Hand-built filter strings are passed through
/// [`DialogBridge::open_file_filtered`](crate::DialogBridge::open_file_filtered)
/// untouched; this helper only spares callers the NUL bookkeeping.
pub fn build_filter(pairs: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (name, patterns) in pairs {
        out.push_str(name);
        out.push('\0');
        out.push_str(patterns);
        out.push('\0');
    }
    out
}
