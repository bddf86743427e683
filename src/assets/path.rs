use crate::foundation::error::{WavyteError, WavyteResult};

/// Normalize and validate an image identifier relative to the image directory.
///
/// The normalized result uses `/` separators, removes `.` and empty segments, and rejects
/// absolute paths or parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> WavyteResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(WavyteError::invalid_parameter(format!(
            "asset path '{source}' must be relative"
        )));
    }
    if s.is_empty() {
        return Err(WavyteError::invalid_parameter("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(WavyteError::invalid_parameter(format!(
                "asset path '{source}' must not contain '..'"
            )));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(WavyteError::invalid_parameter(format!(
            "asset path '{source}' must contain a file name"
        )));
    }

    Ok(out.join("/"))
}

/// Validate a font style name, which becomes the `<style>.ttf` file stem.
pub fn validate_style(style: &str) -> WavyteResult<&str> {
    if style.trim().is_empty() {
        return Err(WavyteError::invalid_parameter("font style must be non-empty"));
    }
    if style.contains(['/', '\\']) || style == "." || style == ".." {
        return Err(WavyteError::invalid_parameter(format!(
            "font style '{style}' must be a bare file stem"
        )));
    }
    Ok(style)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/path.rs"]
mod tests;
