use crate::utils::error::{HeaderError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

// Reserved in C or C++ (including the alternative operator spellings); a
// header declaring one of these would not compile.
const RESERVED_WORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "co_await",
    "co_return", "co_yield", "compl", "concept", "const", "const_cast", "consteval",
    "constexpr", "constinit", "continue", "decltype", "default", "delete", "do", "double",
    "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false", "float", "for",
    "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace", "new",
    "noexcept", "not", "not_eq", "nullptr", "operator", "or", "or_eq", "private",
    "protected", "public", "register", "reinterpret_cast", "requires", "restrict", "return",
    "short", "signed", "sizeof", "static", "static_assert", "static_cast", "struct",
    "switch", "template", "this", "thread_local", "throw", "true", "try", "typedef",
    "typeid", "typename", "typeof", "typeof_unqual", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq", "_Alignas",
    "_Alignof", "_Atomic", "_BitInt", "_Bool", "_Complex", "_Decimal32", "_Decimal64",
    "_Decimal128", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local",
];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(HeaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Identifier cannot be empty".to_string(),
        });
    }

    if !IDENTIFIER.is_match(value) {
        return Err(HeaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a valid C identifier".to_string(),
        });
    }

    if RESERVED_WORDS.contains(&value) {
        return Err(HeaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Identifier is a reserved C/C++ keyword".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(HeaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(HeaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Header names end up joined onto the output directory, so they must stay inside it.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(HeaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Must be a plain file name without directories".to_string(),
        });
    }

    Ok(())
}

pub fn validate_unique<'a>(field_name: &str, values: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(HeaderError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Value is used more than once".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(HeaderError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("variable", "basicVert").is_ok());
        assert!(validate_identifier("variable", "_shader_2").is_ok());
        assert!(validate_identifier("variable", "").is_err());
        assert!(validate_identifier("variable", "2d_shader").is_err());
        assert!(validate_identifier("variable", "my-shader").is_err());
        assert!(validate_identifier("variable", "const").is_err());
        assert!(validate_identifier("variable", "class").is_err());
    }

    #[test]
    fn test_validate_identifier_rejects_cpp_and_c11_keywords() {
        for keyword in [
            "static_cast", "reinterpret_cast", "wchar_t", "char16_t", "decltype", "and",
            "or", "not", "xor_eq", "asm", "thread_local", "static_assert", "typeid",
            "export", "concept", "requires", "co_await", "consteval", "_Bool", "_Atomic",
            "_Static_assert",
        ] {
            assert!(
                validate_identifier("variable", keyword).is_err(),
                "{keyword} should be rejected"
            );
        }

        assert!(validate_identifier("variable", "android").is_ok());
        assert!(validate_identifier("variable", "static_vert").is_ok());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("source", "shaders/basic.vert").is_ok());
        assert!(validate_path("source", "").is_err());
        assert!(validate_path("source", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("header", "basic_vert.h").is_ok());
        assert!(validate_file_name("header", "../escape.h").is_err());
        assert!(validate_file_name("header", "nested/basic.h").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("variable", ["a", "b", "c"]).is_ok());
        assert!(validate_unique("variable", ["a", "b", "a"]).is_err());
    }
}
