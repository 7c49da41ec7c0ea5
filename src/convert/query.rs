//! Query-string splitting

use indexmap::IndexMap;
use percent_encoding::percent_decode_str;

/// Split `url` on its first `?` into the base URL and decoded query parameters.
///
/// Pairs without `=` are skipped, values are percent-decoded (`+` stays
/// literal) and a repeated key keeps its first position with the last value.
pub fn split_query(url: &str) -> (String, IndexMap<String, String>) {
    let mut params = IndexMap::new();

    let (base, query) = match url.split_once('?') {
        Some(parts) => parts,
        None => return (url.to_string(), params),
    };

    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            let value = percent_decode_str(value).decode_utf8_lossy().into_owned();
            params.insert(key.to_string(), value);
        }
    }

    (base.to_string(), params)
}
