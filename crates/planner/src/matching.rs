//! Case-insensitive substring matching of topic names.

/// Trim and lowercase caller-supplied substrings, discarding blanks.
pub fn normalize_needles(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// True if any (already normalized) needle occurs in the topic name.
pub fn matches_any(topic: &str, needles: &[String]) -> bool {
    let topic = topic.to_lowercase();
    needles.iter().any(|n| topic.contains(n.as_str()))
}

/// Split a comma-separated list the way a student would type it
/// ("LangChain basics, RAG").
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
