//! Named colour registry.
//!
//! A `ColourTable` maps colour names to hex strings: the built-in CSS
//! colours merged with caller overrides (overrides win). The table is
//! immutable after construction; it backs name lookup and string
//! resolution.
//!
//! # Example
//!
//! ```
//! use tint::registry::ColourTable;
//!
//! let table = ColourTable::with_overrides([("magicColor", "#ff00ff")]);
//! assert_eq!(table.named("magicColor").unwrap().hex(), "#FF00FF");
//! assert_eq!(table.resolve("no-such-colour").hex(), "#FFFFFF");
//! ```

mod builtin;

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::error::{Result, TintError};
use crate::types::{parse_raw, Colour, ColourInput};

use builtin::BUILTIN_COLOURS;

static BUILTIN_TABLE: Lazy<ColourTable> = Lazy::new(ColourTable::builtin);

/// The shared table of built-in colours, used by [`Colour::named`] and
/// [`Colour::resolve`].
pub fn builtin_table() -> &'static ColourTable {
    &BUILTIN_TABLE
}

/// Name -> hex lookup table.
#[derive(Debug, Clone)]
pub struct ColourTable {
    colours: HashMap<String, String>,
}

impl ColourTable {
    /// A table with only the built-in colours.
    pub fn builtin() -> Self {
        Self {
            colours: BUILTIN_COLOURS
                .iter()
                .map(|(name, hex)| (name.to_string(), hex.to_string()))
                .collect(),
        }
    }

    /// The built-in colours with `overrides` merged on top.
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::builtin();
        table.merge_from(overrides);
        table
    }

    /// Check whether `name` is one of the built-in colours.
    pub fn is_builtin_name(name: &str) -> bool {
        BUILTIN_COLOURS.iter().any(|(builtin, _)| *builtin == name)
    }

    /// Get the hex string registered for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colours.get(name).map(|s| s.as_str())
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.colours.contains_key(name)
    }

    /// Get all colour names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.colours.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Look up a colour by name.
    ///
    /// Fails with `UnknownColourName` on a miss, or `InvalidFormat` if the
    /// registered value has an unusable length.
    pub fn named(&self, name: &str) -> Result<Colour> {
        match self.get(name) {
            Some(hex) => Colour::from_hex(hex),
            None => Err(TintError::UnknownColourName {
                name: name.to_string(),
                help: Some("Use a CSS colour name or define it in tint.yaml".to_string()),
            }),
        }
    }

    /// Resolve a colour, reporting failures.
    pub fn try_resolve(&self, input: impl Into<ColourInput>) -> Result<Colour> {
        match input.into() {
            ColourInput::Resolved(colour) => Ok(colour),
            ColourInput::Raw(raw) => parse_raw(&raw, |name| self.named(name)),
        }
    }

    /// Resolve a colour. Never fails: any error yields opaque white.
    pub fn resolve(&self, input: impl Into<ColourInput>) -> Colour {
        self.try_resolve(input).unwrap_or_else(|e| {
            debug!(target: "tint::resolve", "{e}; using white");
            Colour::WHITE
        })
    }

    /// Merge entries into this table, overwriting existing names.
    fn merge_from<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, hex) in entries {
            self.colours.insert(name.into(), hex.into());
        }
    }
}

impl Default for ColourTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = ColourTable::builtin();
        assert_eq!(table.len(), 148);
        assert_eq!(table.get("red"), Some("#FF0000"));
        assert_eq!(table.named("rebeccapurple").unwrap().hex(), "#663399");
    }

    #[test]
    fn test_overrides() {
        let table = ColourTable::with_overrides([("magicColor", "#ff00ff")]);
        assert_eq!(table.named("magicColor").unwrap().hex(), "#FF00FF");
        assert_eq!(table.len(), 149);

        assert!(matches!(
            ColourTable::builtin().named("magicColor"),
            Err(TintError::UnknownColourName { .. })
        ));
    }

    #[test]
    fn test_override_wins_over_builtin() {
        let table = ColourTable::with_overrides([("red".to_string(), "#AA0000".to_string())]);
        assert_eq!(table.named("red").unwrap().hex(), "#AA0000");
        assert_eq!(ColourTable::builtin().named("red").unwrap().hex(), "#FF0000");
    }

    #[test]
    fn test_named_is_case_sensitive() {
        assert!(ColourTable::builtin().named("Red").is_err());
    }

    #[test]
    fn test_named_bad_override_length() {
        let table = ColourTable::with_overrides([("broken", "#12")]);
        assert!(matches!(
            table.named("broken"),
            Err(TintError::InvalidFormat { .. })
        ));
        assert_eq!(table.resolve("broken"), Colour::WHITE);
    }

    #[test]
    fn test_resolve() {
        let table = ColourTable::builtin();
        assert_eq!(table.resolve("red").hex(), "#FF0000");
        assert_eq!(table.resolve("illegal"), Colour::WHITE);
        assert_eq!(table.resolve("#FF000080").hex_string(), "#FF000080");
        assert_eq!(table.resolve(table.resolve("red")), table.resolve("red"));
    }

    #[test]
    fn test_resolve_swallows_every_error() {
        let table = ColourTable::builtin();
        for input in ["#12", "rgb(x, y, z)", "hsl(1, 2)", "", "   "] {
            assert_eq!(table.resolve(input), Colour::WHITE, "{input:?}");
        }
    }

    #[test]
    fn test_resolved_value_is_returned_unchanged() {
        let c = Colour::from_rgba(1, 2, 3, 0.5);
        assert_eq!(ColourTable::builtin().resolve(c), c);
    }

    #[test]
    fn test_names_sorted() {
        let table = ColourTable::builtin();
        let names = table.names();
        assert_eq!(names.first(), Some(&"aliceblue"));
        assert_eq!(names.last(), Some(&"yellowgreen"));
    }

    #[test]
    fn test_is_builtin_name() {
        assert!(ColourTable::is_builtin_name("teal"));
        assert!(!ColourTable::is_builtin_name("magicColor"));
    }

    #[test]
    fn test_shared_builtin_table() {
        assert_eq!(Colour::named("navy").unwrap().hex(), "#000080");
        assert_eq!(Colour::resolve("not a colour"), Colour::WHITE);
    }
}
