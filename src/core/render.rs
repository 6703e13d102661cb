use crate::core::escape::literal_line;
use crate::domain::model::{DeclarationStyle, HeaderSpec};

pub fn declaration_prefix(variable: &str, style: DeclarationStyle) -> String {
    match style {
        DeclarationStyle::Pointer => format!("const char* {} = \n", variable),
        DeclarationStyle::Array => format!("const char {}[] = \n", variable),
    }
}

/// Renders the complete header text for `lines`.
pub fn render_header(spec: &HeaderSpec, lines: &[Vec<u8>]) -> String {
    let mut out = String::new();

    if let Some(guard) = &spec.include_guard {
        out.push_str(&format!("#ifndef {}\n#define {}\n\n", guard, guard));
    }

    out.push_str(&declaration_prefix(&spec.variable, spec.style));

    if lines.is_empty() {
        // keeps `const char* x = ;` from being emitted for empty shaders
        out.push_str("\"\"\n");
    }
    for line in lines {
        out.push_str(&literal_line(line));
        out.push('\n');
    }
    out.push_str(";\n");

    if let Some(guard) = &spec.include_guard {
        out.push_str(&format!("\n#endif // {}\n", guard));
    }

    out
}

/// Include guard derived from a header file name, e.g. `basic.vert.h` -> `BASIC_VERT_H`.
pub fn guard_from_file_name(file_name: &str) -> String {
    let mut guard: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if guard.is_empty() || guard.starts_with(|c: char| c.is_ascii_digit()) {
        guard.insert(0, '_');
    }
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(style: DeclarationStyle, guard: Option<&str>) -> HeaderSpec {
        HeaderSpec {
            variable: "basicVert".to_string(),
            style,
            include_guard: guard.map(str::to_string),
        }
    }

    #[test]
    fn test_render_two_lines_pointer_style() {
        let lines = vec![b"void main() {".to_vec(), b"}".to_vec()];
        let text = render_header(&spec(DeclarationStyle::Pointer, None), &lines);

        assert_eq!(
            text,
            "const char* basicVert = \n\"void main() {\\n\"\n\"}\\n\"\n;\n"
        );
    }

    #[test]
    fn test_render_array_style() {
        let lines = vec![b"x".to_vec()];
        let text = render_header(&spec(DeclarationStyle::Array, None), &lines);
        assert!(text.starts_with("const char basicVert[] = \n"));
        assert!(text.ends_with("\"x\\n\"\n;\n"));
    }

    #[test]
    fn test_render_empty_source_stays_valid() {
        let text = render_header(&spec(DeclarationStyle::Pointer, None), &[]);
        assert_eq!(text, "const char* basicVert = \n\"\"\n;\n");
    }

    #[test]
    fn test_render_with_include_guard() {
        let lines = vec![b"x".to_vec()];
        let text = render_header(&spec(DeclarationStyle::Pointer, Some("BASIC_VERT_H")), &lines);

        assert!(text.starts_with("#ifndef BASIC_VERT_H\n#define BASIC_VERT_H\n\nconst char* basicVert = \n"));
        assert!(text.ends_with(";\n\n#endif // BASIC_VERT_H\n"));
    }

    #[test]
    fn test_guard_from_file_name() {
        assert_eq!(guard_from_file_name("basic_vert.h"), "BASIC_VERT_H");
        assert_eq!(guard_from_file_name("basic.vert.h"), "BASIC_VERT_H");
        assert_eq!(guard_from_file_name("2d-blit.h"), "_2D_BLIT_H");
    }
}
