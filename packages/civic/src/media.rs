//! Uploaded files travel as `data:` URLs, the same form a browser produces
//! for a `FileReader` read, so they can be stored in a text column and put
//! straight into an `img` source.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// MIME type guessed from the file extension.
pub fn mime_type(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

pub fn data_url(file_name: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type(file_name), STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_type("pothole.JPG"), "image/jpeg");
        assert_eq!(mime_type("badge.scan.pdf"), "application/pdf");
        assert_eq!(mime_type("README"), "application/octet-stream");
    }

    #[test]
    fn encodes_as_data_url() {
        assert_eq!(data_url("id.png", b"hi!"), "data:image/png;base64,aGkh");
    }
}
