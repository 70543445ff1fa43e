//! Helpers for base64 image data URIs

use base64::Engine;

/// Prefix of every image handed back to callers
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// MIME type edit requests carry unless detection is enabled
pub const DEFAULT_EDIT_MIME: &str = "image/jpeg";

const STRIPPED_MIME_TYPES: [&str; 3] = ["png", "jpeg", "jpg"];

/// Wrap a raw base64 PNG payload as a data URI
pub fn png_data_uri(payload: &str) -> String {
    format!("{PNG_DATA_URI_PREFIX}{payload}")
}

/// Split `data:image/<png|jpeg|jpg>;base64,` off the front of `data`.
///
/// Returns the subtype found and the remaining payload. Input without one of
/// those prefixes is returned whole with no subtype.
pub fn split_image_data_uri(data: &str) -> (Option<&str>, &str) {
    let Some(rest) = data.strip_prefix("data:image/") else {
        return (None, data);
    };
    for subtype in STRIPPED_MIME_TYPES {
        if let Some(payload) = rest
            .strip_prefix(subtype)
            .and_then(|r| r.strip_prefix(";base64,"))
        {
            return (Some(subtype), payload);
        }
    }
    (None, data)
}

/// Raw base64 payload of an image, with any recognised data-URI prefix removed
pub fn strip_image_prefix(data: &str) -> &str {
    split_image_data_uri(data).1
}

/// MIME type declared by a data URI, `image/jpeg` when none is recognised
pub fn detect_image_mime(data: &str) -> &'static str {
    match split_image_data_uri(data).0 {
        Some("png") => "image/png",
        _ => DEFAULT_EDIT_MIME,
    }
}

/// Whether `payload` is non-empty, decodable standard base64
pub fn is_base64_payload(payload: &str) -> bool {
    !payload.is_empty()
        && base64::engine::general_purpose::STANDARD
            .decode(payload.as_bytes())
            .is_ok()
}
