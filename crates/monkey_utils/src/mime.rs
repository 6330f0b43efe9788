use phf::{phf_map, phf_set};

/// Extensions that resolve to a url at runtime when imported without any query flag.
///
/// Follows the asset list vite treats as static assets.
pub static KNOWN_ASSET_TYPES: phf::Set<&'static str> = phf_set! {
  // images
  "png", "jpg", "jpeg", "jfif", "pjpeg", "pjp", "gif", "svg", "ico", "webp", "avif",
  // media
  "mp4", "webm", "ogg", "mp3", "wav", "flac", "aac",
  // fonts
  "woff", "woff2", "eot", "ttf", "otf",
  // other
  "webmanifest", "pdf", "txt",
};

static MIME_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
  "aac" => "audio/aac",
  "avif" => "image/avif",
  "bmp" => "image/bmp",
  "css" => "text/css",
  "csv" => "text/csv",
  "eot" => "application/vnd.ms-fontobject",
  "flac" => "audio/flac",
  "gif" => "image/gif",
  "htm" => "text/html",
  "html" => "text/html",
  "ico" => "image/x-icon",
  "jfif" => "image/jpeg",
  "jpeg" => "image/jpeg",
  "jpg" => "image/jpeg",
  "js" => "text/javascript",
  "json" => "application/json",
  "md" => "text/markdown",
  "mjs" => "text/javascript",
  "mp3" => "audio/mpeg",
  "mp4" => "video/mp4",
  "ogg" => "audio/ogg",
  "otf" => "font/otf",
  "pdf" => "application/pdf",
  "pjp" => "image/jpeg",
  "pjpeg" => "image/jpeg",
  "png" => "image/png",
  "svg" => "image/svg+xml",
  "ttf" => "font/ttf",
  "txt" => "text/plain",
  "wasm" => "application/wasm",
  "wav" => "audio/wav",
  "webm" => "video/webm",
  "webmanifest" => "application/manifest+json",
  "webp" => "image/webp",
  "woff" => "font/woff",
  "woff2" => "font/woff2",
  "xml" => "application/xml",
  "yaml" => "text/yaml",
  "yml" => "text/yaml",
  "zip" => "application/zip",
};

/// Looks up the media type registered for a file extension, case-insensitively.
pub fn lookup(ext: &str) -> Option<&'static str> {
  MIME_TYPES.get(ext).or_else(|| MIME_TYPES.get(ext.to_ascii_lowercase().as_str())).copied()
}

pub fn lookup_or_octet_stream(ext: &str) -> String {
  lookup(ext).map_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string(), ToString::to_string)
}

pub fn is_known_asset_type(ext: &str) -> bool {
  KNOWN_ASSET_TYPES.contains(ext)
}

#[test]
fn test_lookup() {
  assert_eq!(lookup("png"), Some("image/png"));
  assert_eq!(lookup("PNG"), Some("image/png"));
  assert_eq!(lookup("unknown"), None);
  assert_eq!(lookup_or_octet_stream("unknown"), "application/octet-stream");
}

#[test]
fn test_known_asset_types_have_mime() {
  for ext in &KNOWN_ASSET_TYPES {
    assert!(lookup(ext).is_some(), "missing media type for {ext}");
  }
}
