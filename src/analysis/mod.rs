pub mod champions;
pub mod recommender;
pub mod resolver;
pub mod scout;
pub mod tags;
pub mod traits;

/// Lowercases and strips everything that is not an ASCII letter or digit,
/// so "Kha'Zix", "kha zix" and "KHAZIX" all compare equal.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Substring keyword test used across the rule tables. A fragment can match
/// inside an unrelated longer name ("vi" in "viktor"); that looseness is kept.
pub fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| {
        let k = normalize(k);
        !k.is_empty() && name.contains(k.as_str())
    })
}
