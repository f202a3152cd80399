use super::data::Picture;

/// Pictures whose author contains `query`, ignoring case.
///
/// Relative order is preserved and an empty query matches everything.
pub fn filter_by_author<'a>(pictures: &'a [Picture], query: &str) -> Vec<&'a Picture> {
    if query.is_empty() {
        return pictures.iter().collect();
    }

    let needle = fold_case(query);
    pictures
        .iter()
        .filter(|picture| fold_case(&picture.author).contains(&needle))
        .collect()
}

/// Lowercase each char on its own.
///
/// `str::to_lowercase` maps a word-final 'Σ' to 'ς', which would stop "ΟΔΥΣ"
/// from matching "Σ".
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
