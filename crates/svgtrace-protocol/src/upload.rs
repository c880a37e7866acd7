//! Upload file-type hints.
//!
//! The server decides which files it accepts. These helpers only shape
//! the file picker filter and the MIME type attached to the upload.

/// Extensions the conversion server accepts.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Value for the file input's `accept` attribute, e.g. `.png,.jpg`.
#[must_use]
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// MIME type for an uploaded file, guessed from its extension.
#[must_use]
pub fn mime_type_for(filename: &str) -> &'static str {
    let Some((_, ext)) = filename.rsplit_once('.') else {
        return "application/octet-stream";
    };
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_attribute_lists_extensions() {
        assert_eq!(accept_attribute(), ".png,.jpg,.jpeg,.gif");
    }

    #[test]
    fn mime_types() {
        assert_eq!(mime_type_for("photo.PNG"), "image/png");
        assert_eq!(mime_type_for("a.b.jpeg"), "image/jpeg");
        assert_eq!(mime_type_for("anim.gif"), "image/gif");
        assert_eq!(mime_type_for("scan.tiff"), "application/octet-stream");
        assert_eq!(mime_type_for("noext"), "application/octet-stream");
    }
}
