//! Key name ↔ key code lookup tables.
//!
//! Three tables make up the lookup surface:
//!
//! - **name table** – canonical lowercase name → code, including the
//!   generated letter/digit/function-key/numpad ranges.  Alias entries are
//!   merged into this table so a single name lookup finds them too.
//! - **alias table** – alternate spelling → code, kept separately so callers
//!   can distinguish aliases from canonical names.
//! - **reverse table** – code → canonical name, derived from the name table
//!   entries in insertion order.  When two names share a code the later
//!   insertion wins; aliases never participate.
//!
//! The tables are built once, at first use, and shared process-wide as
//! read-only state.  Consumers must not mutate them (nothing in the public
//! surface allows it); resolution behavior is fixed for the process lifetime.

mod literals;

use std::collections::HashMap;
use std::sync::LazyLock;

/// Numeric key identifier, as reported by a keyboard event field.
///
/// Observed table values span 8–222; the single-character fallback path can
/// produce any Unicode scalar value, hence `u32`.
pub type KeyCode = u32;

/// The three lookup tables, built together so their construction order is
/// a single auditable sequence.
#[derive(Debug)]
pub struct KeyTables {
    code_by_name: HashMap<String, KeyCode>,
    alias_by_name: HashMap<String, KeyCode>,
    name_by_code: HashMap<KeyCode, String>,
}

impl KeyTables {
    /// Builds all three tables.
    ///
    /// Construction is deterministic and order-dependent: literal named keys
    /// first, then the generated letter, digit, function-key, and numpad
    /// ranges.  The reverse table is derived from exactly those entries, in
    /// that order, with last-write-wins on code collisions.  Aliases are
    /// merged into the name-lookup surface only afterwards, so they can be
    /// found by name but never returned by a reverse lookup.
    pub fn build() -> Self {
        let mut entries: Vec<(String, KeyCode)> =
            Vec::with_capacity(literals::NAMED_KEYS.len() + 26 + 10 + 12 + 10);

        for &(name, code) in literals::NAMED_KEYS {
            entries.push((name.to_owned(), code));
        }
        // Letters: the code is the uppercase ASCII value.
        for c in 'a'..='z' {
            entries.push((c.to_string(), c as KeyCode - 32));
        }
        // Digit characters '0'..'9'.
        for d in 0..=9u32 {
            entries.push((d.to_string(), 48 + d));
        }
        // Function keys f1..f12.
        for n in 1..=12u32 {
            entries.push((format!("f{n}"), 111 + n));
        }
        // Numpad digits.
        for d in 0..=9u32 {
            entries.push((format!("numpad {d}"), 96 + d));
        }

        // Reverse table from canonical entries only, in insertion order.
        // Later entries overwrite earlier ones for the same code; collision
        // resolution is insertion order, nothing else.
        let mut name_by_code = HashMap::with_capacity(entries.len());
        for (name, code) in &entries {
            name_by_code.insert(*code, name.clone());
        }

        let mut code_by_name: HashMap<String, KeyCode> = entries.into_iter().collect();

        // Aliases: separate table, and merged into the name-lookup surface.
        // The merge happens after the reverse table is derived.
        let mut alias_by_name = HashMap::with_capacity(literals::ALIASES.len());
        for &(alias, code) in literals::ALIASES {
            alias_by_name.insert(alias.to_owned(), code);
            code_by_name.insert(alias.to_owned(), code);
        }

        Self {
            code_by_name,
            alias_by_name,
            name_by_code,
        }
    }

    /// Name → code, aliases included.
    pub fn code_by_name(&self) -> &HashMap<String, KeyCode> {
        &self.code_by_name
    }

    /// Alias → code.
    pub fn alias_by_name(&self) -> &HashMap<String, KeyCode> {
        &self.alias_by_name
    }

    /// Code → canonical name.  Aliases never appear as values.
    pub fn name_by_code(&self) -> &HashMap<KeyCode, String> {
        &self.name_by_code
    }
}

static TABLES: LazyLock<KeyTables> = LazyLock::new(KeyTables::build);

/// The process-wide shared tables, built on first access.
pub fn shared() -> &'static KeyTables {
    &TABLES
}

/// Name → code lookup table for the shared instance, aliases included.
pub fn code_by_name() -> &'static HashMap<String, KeyCode> {
    shared().code_by_name()
}

/// Alias → code lookup table for the shared instance.
pub fn alias_by_name() -> &'static HashMap<String, KeyCode> {
    shared().alias_by_name()
}

/// Code → canonical name lookup table for the shared instance.
pub fn name_by_code() -> &'static HashMap<KeyCode, String> {
    shared().name_by_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Literal named keys that must be present with exactly these codes.
    const EXPECTED_LITERALS: &[(&str, KeyCode)] = &[
        ("backspace", 8),
        ("tab", 9),
        ("enter", 13),
        ("shift", 16),
        ("ctrl", 17),
        ("alt", 18),
        ("pause/break", 19),
        ("caps lock", 20),
        ("esc", 27),
        ("space", 32),
        ("page up", 33),
        ("page down", 34),
        ("end", 35),
        ("home", 36),
        ("left", 37),
        ("up", 38),
        ("right", 39),
        ("down", 40),
        ("insert", 45),
        ("delete", 46),
        ("windows/command", 91),
        ("right click", 93),
        ("numpad *", 106),
        ("numpad +", 107),
        ("numpad -", 109),
        ("numpad .", 110),
        ("numpad /", 111),
        ("num lock", 144),
        ("scroll lock", 145),
        (";", 186),
        ("=", 187),
        (",", 188),
        ("-", 189),
        (".", 190),
        ("/", 191),
        ("`", 192),
        ("[", 219),
        ("\\", 220),
        ("]", 221),
        ("'", 222),
    ];

    #[test]
    fn test_literal_entries_present_with_expected_codes() {
        let tables = KeyTables::build();
        for &(name, code) in EXPECTED_LITERALS {
            assert_eq!(
                tables.code_by_name().get(name),
                Some(&code),
                "{name:?} should map to {code}"
            );
        }
    }

    #[test]
    fn test_letter_range_uses_uppercase_ascii_codes() {
        let tables = KeyTables::build();
        for c in 'a'..='z' {
            let expected = c as KeyCode - 32;
            assert_eq!(
                tables.code_by_name().get(&c.to_string()),
                Some(&expected),
                "letter {c:?} should map to {expected}"
            );
        }
    }

    #[test]
    fn test_digit_range_uses_ascii_digit_codes() {
        let tables = KeyTables::build();
        for d in 0..=9u32 {
            assert_eq!(
                tables.code_by_name().get(&d.to_string()),
                Some(&(48 + d)),
                "digit name {d} should map to {}",
                48 + d
            );
        }
    }

    #[test]
    fn test_function_key_range() {
        let tables = KeyTables::build();
        for n in 1..=12u32 {
            assert_eq!(
                tables.code_by_name().get(&format!("f{n}")),
                Some(&(111 + n)),
                "f{n} should map to {}",
                111 + n
            );
        }
    }

    #[test]
    fn test_numpad_digit_range() {
        let tables = KeyTables::build();
        for d in 0..=9u32 {
            assert_eq!(
                tables.code_by_name().get(&format!("numpad {d}")),
                Some(&(96 + d)),
                "numpad {d} should map to {}",
                96 + d
            );
        }
    }

    #[test]
    fn test_aliases_resolve_to_existing_codes() {
        let tables = KeyTables::build();
        for (alias, code) in tables.alias_by_name() {
            // Every alias code must already be reachable through a canonical
            // name, otherwise the alias points at nothing.
            assert!(
                tables.name_by_code().contains_key(code),
                "alias {alias:?} targets code {code} with no canonical name"
            );
        }
    }

    #[test]
    fn test_aliases_are_merged_into_name_lookup_surface() {
        let tables = KeyTables::build();
        for (alias, code) in tables.alias_by_name() {
            assert_eq!(
                tables.code_by_name().get(alias),
                Some(code),
                "alias {alias:?} should be findable through the name table"
            );
        }
    }

    #[test]
    fn test_aliases_never_appear_in_reverse_table() {
        let tables = KeyTables::build();
        for (alias, _) in tables.alias_by_name() {
            assert!(
                !tables.name_by_code().values().any(|name| name == alias),
                "alias {alias:?} leaked into the reverse table"
            );
        }
    }

    // The reverse table depends on insertion order: literals, then letters,
    // digits, function keys, numpad.  These assertions pin the observed
    // results so a change to that order fails loudly instead of silently
    // shifting reverse lookups.
    #[test]
    fn test_reverse_table_ordering_dependency_is_pinned() {
        let tables = KeyTables::build();
        assert_eq!(tables.name_by_code().get(&27).map(String::as_str), Some("esc"));
        assert_eq!(
            tables.name_by_code().get(&33).map(String::as_str),
            Some("page up")
        );
        assert_eq!(tables.name_by_code().get(&13).map(String::as_str), Some("enter"));
        assert_eq!(tables.name_by_code().get(&112).map(String::as_str), Some("f1"));
        assert_eq!(
            tables.name_by_code().get(&99).map(String::as_str),
            Some("numpad 3")
        );
    }

    #[test]
    fn test_reverse_table_is_consistent_with_name_table() {
        let tables = KeyTables::build();
        for (code, name) in tables.name_by_code() {
            assert_eq!(
                tables.code_by_name().get(name),
                Some(code),
                "reverse entry {code} -> {name:?} has no matching forward entry"
            );
        }
    }

    #[test]
    fn test_shared_instance_is_stable_across_calls() {
        let a = shared() as *const KeyTables;
        let b = shared() as *const KeyTables;
        assert_eq!(a, b, "shared() should always return the same instance");
    }
}
