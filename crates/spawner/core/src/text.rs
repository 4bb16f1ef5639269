//! Placeholder maps for localized templates.

use std::collections::BTreeMap;

/// Mapping from placeholder name to substitution value.
///
/// Templates reference placeholders as `%name%`. Names that are not present in
/// the map are left in the output verbatim, and substituted values are never
/// re-scanned for further placeholders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placeholders(BTreeMap<String, String>);

impl Placeholders {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts or replaces a placeholder value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Adds a placeholder value (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Substitutes every known `%name%` in `template`.
    pub fn apply(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('%') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('%') else {
                out.push_str(&rest[start..]);
                return out;
            };

            match self.get(&after[..end]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[end + 1..];
                }
                None => {
                    // Keep the opening '%' and rescan from the next one, which
                    // may open a known placeholder.
                    out.push('%');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl<K, V> FromIterator<(K, V)> for Placeholders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_placeholders() {
        let placeholders = Placeholders::new()
            .with("entity", "Zombie")
            .with("amount", "3");

        assert_eq!(
            placeholders.apply("%amount%x %entity% Spawner"),
            "3x Zombie Spawner"
        );
    }

    #[test]
    fn unknown_placeholders_stay_literal() {
        let placeholders = Placeholders::new().with("known", "K");

        assert_eq!(placeholders.apply("%unknown% and %known%"), "%unknown% and K");
        assert_eq!(placeholders.apply("50%%known%"), "50%K");
        assert_eq!(placeholders.apply("dangling %known"), "dangling %known");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let placeholders = Placeholders::new()
            .with("a", "%b%")
            .with("b", "nope");

        assert_eq!(placeholders.apply("%a%"), "%b%");
    }

    #[test]
    fn handles_non_ascii_names() {
        let placeholders = Placeholders::new().with("ᴇɴᴛɪᴛʏ", "ᴢᴏᴍʙɪᴇ");

        assert_eq!(placeholders.apply("» %ᴇɴᴛɪᴛʏ% «"), "» ᴢᴏᴍʙɪᴇ «");
    }
}
