use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeColor {
    Green,
    Red,
    Blue,
    Orange,
    Slate,
}

/// Label and colour shown for an enumerated status or severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub color: BadgeColor,
}

impl Badge {
    pub const UNKNOWN: Badge = Badge::new("Unknown", BadgeColor::Slate);

    pub const fn new(label: &'static str, color: BadgeColor) -> Self {
        Self { label, color }
    }
}

/// Looks `key` up in a badge table, falling back to `Badge::UNKNOWN`.
pub fn lookup<K: PartialEq>(table: &[(K, Badge)], key: &K) -> Badge {
    table
        .iter()
        .find(|(candidate, _)| candidate == key)
        .map(|(_, badge)| *badge)
        .unwrap_or(Badge::UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_falls_back_to_unknown() {
        let table = [("a", Badge::new("A", BadgeColor::Green))];

        assert_eq!(lookup(&table, &"a").label, "A");
        assert_eq!(lookup(&table, &"b"), Badge::UNKNOWN);
        assert_eq!(lookup::<&str>(&[], &"a"), Badge::UNKNOWN, "Empty table should still be total");
    }
}
