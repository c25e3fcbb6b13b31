/// Counts query terms contained in `name`, case-insensitive.
///
/// Terms are the whitespace-split pieces of `query`; each occurrence in the
/// query counts on its own, so a repeated term scores twice. Substring
/// containment, no length normalization, no weighting.
pub fn relevance_score(name: &str, query: &str) -> u32 {
    let name = name.to_lowercase();
    let query = query.to_lowercase();

    query
        .split_whitespace()
        .filter(|term| name.contains(term))
        .count() as u32
}
