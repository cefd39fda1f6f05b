/// Decodes a response body as UTF-8, dropping any invalid byte sequences.
pub fn decode_body(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }

    text
}
