//! Normalization of media references returned by the video agent.

/// Sentinel the video agent returns while a video is still being rendered.
pub const PLACEHOLDER_VIDEO: &str = "placeholder.mp4";

/// Turn a media reference from the video agent into something a browser can
/// load.
///
/// - Absolute `http://` / `https://` URLs are kept.
/// - Paths starting with `/` are resolved against `origin` (the agent's base URL).
/// - The [`PLACEHOLDER_VIDEO`] sentinel is kept verbatim so clients can show a
///   "processing" state.
/// - Anything else is passed through unchanged.
pub fn normalize_media_url(origin: &str, raw: &str) -> String {
    if raw == PLACEHOLDER_VIDEO || raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }
    if raw.starts_with('/') {
        return format!("{}{raw}", origin.trim_end_matches('/'));
    }
    raw.to_string()
}
