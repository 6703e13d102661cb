//! Turning raw shader bytes into C string literal lines.

/// Splits `data` into lines the way text-mode readers do: `\n`, `\r\n` and a
/// lone `\r` all end a line.
///
/// A trailing line break does not produce an empty final line, and an empty
/// input yields no lines at all. Each line is right-stripped of ASCII
/// whitespace.
pub fn split_lines(data: &[u8]) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < data.len() {
        match data[i] {
            b'\n' => {
                lines.push(strip_trailing_whitespace(&data[start..i]));
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(strip_trailing_whitespace(&data[start..i]));
                i += if data.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < data.len() {
        lines.push(strip_trailing_whitespace(&data[start..]));
    }
    lines
}

// TAB, LF, VT, FF, CR, the 0x1C..=0x1F separators and space.
fn is_ascii_space(byte: u8) -> bool {
    matches!(byte, b'\t'..=b'\r' | 0x1c..=0x1f | b' ')
}

fn strip_trailing_whitespace(line: &[u8]) -> Vec<u8> {
    let end = line
        .iter()
        .rposition(|&b| !is_ascii_space(b))
        .map_or(0, |pos| pos + 1);
    line[..end].to_vec()
}

/// Escapes one line for use inside a C string literal.
///
/// Bytes outside printable ASCII are written as three-digit octal escapes so
/// the compiled string holds exactly the input bytes.
pub fn escape_line(line: &[u8]) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    for &byte in line {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\{:03o}", byte)),
        }
    }
    out
}

/// `"<escaped>\n"` for one input line, newline escape included.
pub fn literal_line(line: &[u8]) -> String {
    format!("\"{}\\n\"", escape_line(line))
}
