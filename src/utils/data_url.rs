use base64::Engine;

/// Encodes raw file content as a `data:` URL usable as an image source.
pub fn encode_data_url(mime_type: &str, content: &[u8]) -> String {
    format!(
        "data:{mime_type};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(content)
    )
}
