//! Binary dump of intermediate byte buffers, for debugging the padding.

/// Octets printed per row by `--dump`.
pub const BYTES_PER_ROW: usize = 8;

/// Render `bytes` as 8-digit binary octets, each followed by `separator`,
/// breaking the line after every `per_row` octets.
pub fn render_binary(bytes: &[u8], separator: &str, per_row: usize) -> String {
    let per_row = per_row.max(1);
    let mut out = String::with_capacity(bytes.len() * (8 + separator.len()) + bytes.len() / per_row + 1);
    for (i, byte) in bytes.iter().enumerate() {
        out.push_str(&format!("{byte:08b}"));
        out.push_str(separator);
        if (i + 1) % per_row == 0 {
            out.push('\n');
        }
    }
    out.push('\n');
    out
}
