use crate::utils::error::{GrocerError, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GrocerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GrocerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 解析成可比較的路徑：相對於 `base`，去掉 `.`/`..`，再 canonicalize 最深的既存祖先
pub fn normalize_path(base: &Path, path: &str) -> PathBuf {
    let joined = base.join(path);
    let absolute = if joined.is_absolute() {
        joined
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(joined),
            Err(_) => joined,
        }
    };
    let lexical = lexical_normalize(&absolute);

    for ancestor in lexical.ancestors() {
        if let Ok(real) = fs::canonicalize(ancestor) {
            return match lexical.strip_prefix(ancestor) {
                Ok(rest) if !rest.as_os_str().is_empty() => real.join(rest),
                _ => real,
            };
        }
    }
    lexical
}

fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Rejects two settings that resolve to the same file under `base`.
pub fn validate_distinct_paths(base: &Path, first: (&str, &str), second: (&str, &str)) -> Result<()> {
    if normalize_path(base, first.1) == normalize_path(base, second.1) {
        return Err(GrocerError::InvalidConfigValueError {
            field: second.0.to_string(),
            value: second.1.to_string(),
            reason: format!("Must not be the same file as {} ('{}')", first.0, first.1),
        });
    }
    Ok(())
}

pub fn validate_marker(field_name: &str, marker: char) -> Result<()> {
    if marker.is_whitespace() || marker.is_control() {
        return Err(GrocerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: marker.escape_debug().to_string(),
            reason: "Marker must be a visible character".to_string(),
        });
    }
    Ok(())
}

/// 將單字元字串轉成 char
pub fn parse_marker(field_name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            validate_marker(field_name, c)?;
            Ok(c)
        }
        _ => Err(GrocerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Marker must be exactly one character".to_string(),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GrocerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "CS210_Project_Three_Input_File.txt").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        let base = Path::new(".");
        assert!(validate_distinct_paths(base, ("input", "a.txt"), ("output", "b.dat")).is_ok());
        assert!(validate_distinct_paths(base, ("input", "a.txt"), ("output", "a.txt")).is_err());
    }

    #[test]
    fn test_distinct_paths_sees_through_aliases() {
        let base = Path::new(".");
        assert!(validate_distinct_paths(base, ("input", "list.txt"), ("output", "./list.txt")).is_err());
        assert!(
            validate_distinct_paths(base, ("input", "list.txt"), ("output", "data/../list.txt")).is_err()
        );
        assert!(
            validate_distinct_paths(base, ("input", "no_dir/list.txt"), ("output", "no_dir/./list.txt"))
                .is_err()
        );
    }

    #[test]
    fn test_distinct_paths_absolute_against_relative() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let input = temp_dir.path().join("list.txt");
        fs::write(&input, "Apples\n").unwrap();

        let result = validate_distinct_paths(
            temp_dir.path(),
            ("input", input.to_str().unwrap()),
            ("output", "list.txt"),
        );
        assert!(result.is_err());

        let result = validate_distinct_paths(
            temp_dir.path(),
            ("input", input.to_str().unwrap()),
            ("output", "frequency.dat"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_marker() {
        assert_eq!(parse_marker("marker", "#").unwrap(), '#');
        assert!(parse_marker("marker", "").is_err());
        assert!(parse_marker("marker", "**").is_err());
        assert!(parse_marker("marker", " ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("min_width", 15, 1, 80).is_ok());
        assert!(validate_range("min_width", 0, 1, 80).is_err());
        assert!(validate_range("min_width", 81, 1, 80).is_err());
    }
}
