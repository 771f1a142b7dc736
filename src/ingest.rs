//! Turns pasted text and uploaded files into an item list.

/// One entry per line, trimmed, blank lines dropped.
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// First comma-separated field of each line, trimmed and unquoted.
pub fn parse_csv(text: &str) -> Vec<String> {
    text.lines()
        .map(first_field)
        .filter(|field| !field.is_empty())
        .map(str::to_owned)
        .collect()
}

fn first_field(line: &str) -> &str {
    let field = line.split(',').next().unwrap_or("").trim();
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(field)
}

/// Parse uploaded content, treating `.csv` files as CSV and anything else as a
/// plain list.
pub fn parse_upload(file_name: &str, text: &str) -> Vec<String> {
    let is_csv = file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        parse_csv(text)
    } else {
        parse_list(text)
    }
}
