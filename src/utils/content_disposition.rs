/// Extracts the suggested filename from a `content-disposition` header value.
/// Handles the quoted form (`filename="report.pdf"`) and the bare form
/// (`filename=report.pdf`); anything else yields `None`.
pub fn filename_from_header(value: &str) -> Option<String> {
    const KEY: &str = "filename=";

    for segment in value.split(';') {
        let segment = segment.trim();
        if segment.len() < KEY.len() || !segment.is_char_boundary(KEY.len()) {
            continue;
        }
        let (key, rest) = segment.split_at(KEY.len());
        if !key.eq_ignore_ascii_case(KEY) {
            continue;
        }

        let name = match rest.strip_prefix('"') {
            Some(quoted) => quoted.split('"').next().unwrap_or(""),
            None => rest.trim(),
        };
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }

    None
}
