use crate::monitoring::domain::{Marker, SupplyBucket};
use once_cell::sync::Lazy;
use regex::Regex;

/// Exact colour codes reported by devices for the four tracked channels
const HEX_COLORS: [(&str, SupplyBucket); 4] = [
    ("#000000", SupplyBucket::Black),
    ("#00ffff", SupplyBucket::Cyan),
    ("#ff00ff", SupplyBucket::Magenta),
    ("#ffff00", SupplyBucket::Yellow),
];

/// Whole-word name tokens (English and Portuguese), checked in this order
static NAME_TOKENS: Lazy<[(Regex, SupplyBucket); 4]> = Lazy::new(|| {
    let token = |pattern: &str| Regex::new(pattern).expect("supply name pattern is valid");
    [
        (token(r"(?i)\b(bk|black|preto)\b"), SupplyBucket::Black),
        (token(r"(?i)\b(c|cyan|ciano)\b"), SupplyBucket::Cyan),
        (token(r"(?i)\b(m|magenta)\b"), SupplyBucket::Magenta),
        (token(r"(?i)\b(y|yellow|amarelo)\b"), SupplyBucket::Yellow),
    ]
});

/// SupplyColorRule maps a marker onto one of the four supply buckets
///
/// Priority order:
/// 1. exact hex colour code (case-insensitive)
/// 2. whole-word colour token in the marker name
///
/// A marker matching neither rule has no bucket.
pub struct SupplyColorRule;

impl SupplyColorRule {
    pub fn classify(marker: &Marker) -> Option<SupplyBucket> {
        Self::by_hex_color(marker.color.as_deref()).or_else(|| Self::by_name(&marker.name))
    }

    fn by_hex_color(color: Option<&str>) -> Option<SupplyBucket> {
        let color = color?.trim().to_lowercase();
        HEX_COLORS
            .iter()
            .find(|(hex, _)| *hex == color)
            .map(|(_, bucket)| *bucket)
    }

    fn by_name(name: &str) -> Option<SupplyBucket> {
        NAME_TOKENS
            .iter()
            .find(|(pattern, _)| pattern.is_match(name))
            .map(|(_, bucket)| *bucket)
    }
}
