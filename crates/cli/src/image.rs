//! File-to-data-URI loading for the product form.
//!
//! The engine only ever stores plain image strings; this is the front-end
//! collaborator that turns a local file selection into one.

use std::io;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Read a local file and encode it as a `data:` URI.
///
/// # Errors
///
/// Propagates the underlying read failure.
pub fn data_uri_from_file(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(format!(
        "data:{};base64,{}",
        mime_for(path),
        STANDARD.encode(bytes)
    ))
}

/// Guess a MIME type from the file extension. Unknown extensions get the
/// generic octet-stream type; the store treats the URI as opaque anyway.
fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for(Path::new("a.png")), "image/png");
        assert_eq!(mime_for(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("a.svg")), "image/svg+xml");
        assert_eq!(mime_for(Path::new("a")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("a.txt")), "application/octet-stream");
    }

    #[test]
    fn test_data_uri_round_trip() {
        let path = std::env::temp_dir().join(format!("mercadito-image-{}.png", std::process::id()));
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let uri = data_uri_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(uri.starts_with("data:image/png;base64,"));
        let payload = uri.split_once(',').unwrap().1;
        assert_eq!(
            STANDARD.decode(payload).unwrap(),
            vec![0x89, b'P', b'N', b'G']
        );
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(data_uri_from_file(Path::new("/no/such/file.png")).is_err());
    }
}
