//! Circular-safe key renaming over nested metadata structures.

use std::collections::HashMap;
use std::iter::FromIterator;

use indexmap::IndexMap;

use crate::types::{Mapping, Value};

/// A flat old-key to new-key table, typically mapping raw EPLAN property
/// codes to human-readable labels.
#[derive(Debug, Clone, Default)]
pub struct RenameTable(IndexMap<String, String>);

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, old_key: &str) -> Option<&str> {
        self.0.get(old_key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, old_key: String, new_key: String) -> Option<String> {
        self.0.insert(old_key, new_key)
    }
}

impl FromIterator<(String, String)> for RenameTable {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for RenameTable {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        iter.into_iter()
            .map(|(old, new)| (old.to_string(), new.to_string()))
            .collect()
    }
}

/// Renames keys throughout `value` per `table`, if `value` is a mapping.
/// Any other input is left untouched, matching the best-effort policy of
/// the rest of this module.
pub fn rename_keys(value: &mut Value, table: &RenameTable) {
    if let Value::Mapping(mapping) = value {
        rename_mapping_keys(mapping, table);
    }
}

/// Renames the keys of `mapping` per `table`, then recurses into every
/// mapping value and every mapping element of sequence values.
///
/// The whole table is applied atomically to each mapping: a rename whose
/// destination is another entry's source (including a two-way swap) resolves
/// without losing or duplicating values, and every entry keeps the position
/// its original key occupied. A rename whose destination collides with an
/// untouched key silently overwrites that entry.
pub fn rename_mapping_keys(mapping: &mut Mapping, table: &RenameTable) {
    if !table.is_empty() && !mapping.is_empty() {
        apply_table(mapping, table);
    }

    for value in mapping.values_mut() {
        match value {
            Value::Mapping(inner) => rename_mapping_keys(inner, table),
            Value::Sequence(elements) => {
                for element in elements {
                    if let Value::Mapping(inner) = element {
                        rename_mapping_keys(inner, table);
                    }
                }
            },
            _ => {},
        }
    }
}

/// Applies `table` to the top level of `mapping` in four phases: plan,
/// stage, commit, reassemble.
///
/// A naive in-place walk clobbers values whenever the table contains a
/// cycle or a destination that is also a pending source. Detaching every
/// planned entry before committing any of them makes the rename atomic
/// with respect to the whole table.
fn apply_table(mapping: &mut Mapping, table: &RenameTable) {
    // Plan: scan the entries once, in order, noting each key the table maps.
    // Iterating the mapping rather than the table makes the outcome of a
    // cyclic swap independent of the table's own insertion order.
    let original_order: Vec<String> = mapping.keys().cloned().collect();
    let planned: Vec<(String, String)> = original_order
        .iter()
        .filter_map(|old| table.get(old).map(|new| (old.clone(), new.to_string())))
        .collect();

    if planned.is_empty() {
        return;
    }

    // Stage: detach every planned entry's value from the mapping, so no
    // commit can read a value another rename has already overwritten.
    let mut staged: Vec<(String, Value)> = Vec::with_capacity(planned.len());
    for (old_key, new_key) in &planned {
        if let Some(value) = mapping.remove(old_key) {
            staged.push((new_key.clone(), value));
        }
    }

    // Commit: land each staged value under its final key. Destination wins
    // over any untouched entry already sitting there.
    for (new_key, value) in staged {
        mapping.insert(new_key, value);
    }

    // Reassemble in the original key order, substituting renamed keys in
    // place. Values are re-read live from the mapping so that a collision
    // overwrite is reflected; inserting a key twice keeps its first
    // (earliest) position.
    let renamed: HashMap<&str, &str> = planned
        .iter()
        .map(|(old, new)| (old.as_str(), new.as_str()))
        .collect();

    let mut rebuilt = Mapping::new();
    for original_key in &original_order {
        let final_key = renamed
            .get(original_key.as_str())
            .copied()
            .unwrap_or(original_key.as_str());

        if let Some(value) = mapping.get(final_key) {
            rebuilt.insert(final_key.to_string(), value.clone());
        }
    }

    *mapping = rebuilt;
}

#[cfg(test)]
mod tests {
    use super::*;

    use indexmap::indexmap;
    use str_macro::str;

    fn table(pairs: &[(&str, &str)]) -> RenameTable {
        pairs.iter().copied().collect()
    }

    fn ordered_keys(mapping: &Mapping) -> Vec<&str> {
        mapping.keys().map(String::as_str).collect()
    }

    #[test]
    fn rename_simple() {
        let mut mapping = Mapping(indexmap![
            str!("old_a") => Value::Integer(1),
            str!("old_b") => Value::Integer(2),
            str!("keep") => Value::Integer(3),
        ]);

        rename_mapping_keys(&mut mapping, &table(&[("old_a", "new_a"), ("old_b", "new_b")]));

        let expected = Mapping(indexmap![
            str!("new_a") => Value::Integer(1),
            str!("new_b") => Value::Integer(2),
            str!("keep") => Value::Integer(3),
        ]);
        assert_eq!(expected, mapping);
    }

    #[test]
    fn rename_preserves_order() {
        let mut mapping = Mapping(indexmap![
            str!("first") => Value::Integer(1),
            str!("second") => Value::Integer(2),
            str!("third") => Value::Integer(3),
        ]);

        rename_mapping_keys(&mut mapping, &table(&[("second", "middle")]));

        assert_eq!(vec!["first", "middle", "third"], ordered_keys(&mapping));
    }

    #[test]
    fn rename_nested_mapping() {
        let mut mapping = Mapping(indexmap![
            str!("old_a") => Value::Integer(1),
            str!("nested") => Value::Mapping(Mapping(indexmap![
                str!("old_b") => Value::Integer(2),
                str!("old_a") => Value::Integer(3),
            ])),
        ]);

        rename_mapping_keys(&mut mapping, &table(&[("old_a", "new_a"), ("old_b", "new_b")]));

        let expected = Mapping(indexmap![
            str!("new_a") => Value::Integer(1),
            str!("nested") => Value::Mapping(Mapping(indexmap![
                str!("new_b") => Value::Integer(2),
                str!("new_a") => Value::Integer(3),
            ])),
        ]);
        assert_eq!(expected, mapping);
    }

    #[test]
    fn rename_mappings_inside_sequences() {
        let mut mapping = Mapping(indexmap![
            str!("items") => Value::Sequence(vec![
                Value::Mapping(Mapping(indexmap![
                    str!("old") => Value::from("value1"),
                ])),
                Value::Mapping(Mapping(indexmap![
                    str!("old") => Value::from("value2"),
                    str!("other") => Value::from("keep"),
                ])),
                Value::from("plain_string"),
            ]),
        ]);

        rename_mapping_keys(&mut mapping, &table(&[("old", "new")]));

        let expected = Mapping(indexmap![
            str!("items") => Value::Sequence(vec![
                Value::Mapping(Mapping(indexmap![
                    str!("new") => Value::from("value1"),
                ])),
                Value::Mapping(Mapping(indexmap![
                    str!("new") => Value::from("value2"),
                    str!("other") => Value::from("keep"),
                ])),
                Value::from("plain_string"),
            ]),
        ]);
        assert_eq!(expected, mapping);
    }

    #[test]
    fn rename_recurses_even_when_top_level_has_no_match() {
        let mut mapping = Mapping(indexmap![
            str!("container") => Value::Mapping(Mapping(indexmap![
                str!("old") => Value::Integer(1),
            ])),
        ]);

        rename_mapping_keys(&mut mapping, &table(&[("old", "new")]));

        let expected = Mapping(indexmap![
            str!("container") => Value::Mapping(Mapping(indexmap![
                str!("new") => Value::Integer(1),
            ])),
        ]);
        assert_eq!(expected, mapping);
    }

    #[test]
    fn rename_no_matching_keys() {
        let mut mapping = Mapping(indexmap![
            str!("existing") => Value::Integer(1),
            str!("other") => Value::Integer(2),
        ]);
        let original = mapping.clone();

        rename_mapping_keys(&mut mapping, &table(&[("missing", "new_name")]));

        assert_eq!(original, mapping);
    }

    #[test]
    fn rename_empty_table() {
        let mut mapping = Mapping(indexmap![
            str!("a") => Value::Integer(1),
            str!("b") => Value::Integer(2),
        ]);
        let original = mapping.clone();

        rename_mapping_keys(&mut mapping, &RenameTable::new());

        assert_eq!(original, mapping);
    }

    #[test]
    fn rename_empty_mapping() {
        let mut mapping = Mapping::new();

        rename_mapping_keys(&mut mapping, &table(&[("old", "new")]));

        assert!(mapping.is_empty());
    }

    #[test]
    fn rename_non_mapping_value_is_untouched() {
        let mut value = Value::from("not a mapping");

        rename_keys(&mut value, &table(&[("old", "new")]));

        assert_eq!(Value::from("not a mapping"), value);
    }

    #[test]
    fn rename_overwrites_existing_destination() {
        let mut mapping = Mapping(indexmap![
            str!("old") => Value::from("old_value"),
            str!("existing") => Value::from("existing_value"),
        ]);

        rename_mapping_keys(&mut mapping, &table(&[("old", "existing")]));

        let expected = Mapping(indexmap![
            str!("existing") => Value::from("old_value"),
        ]);
        assert_eq!(expected, mapping);
        assert!(!mapping.contains_key("old"));
    }

    #[test]
    fn rename_cycle_swaps_values() {
        let mut mapping = Mapping(indexmap![
            str!("a") => Value::Integer(1),
            str!("b") => Value::Integer(2),
        ]);

        rename_mapping_keys(&mut mapping, &table(&[("a", "b"), ("b", "a")]));

        // Each original key's value moves to its mapped destination, so the
        // values swap. Nothing is lost or duplicated, and the entry count
        // holds steady.
        assert_eq!(2, mapping.len());
        assert_eq!(Some(&Value::Integer(1)), mapping.get("b"));
        assert_eq!(Some(&Value::Integer(2)), mapping.get("a"));
    }

    #[test]
    fn rename_cycle_outcome_independent_of_table_order() {
        let forward = table(&[("a", "b"), ("b", "a")]);
        let backward = table(&[("b", "a"), ("a", "b")]);

        for swap_table in [forward, backward] {
            let mut mapping = Mapping(indexmap![
                str!("a") => Value::Integer(1),
                str!("b") => Value::Integer(2),
            ]);

            rename_mapping_keys(&mut mapping, &swap_table);

            assert_eq!(Some(&Value::Integer(1)), mapping.get("b"));
            assert_eq!(Some(&Value::Integer(2)), mapping.get("a"));
        }
    }

    #[test]
    fn rename_chain_into_pending_source() {
        // "a" renames onto a key that is itself being renamed away. The
        // staged value must not be clobbered by the commit of "a".
        let mut mapping = Mapping(indexmap![
            str!("a") => Value::Integer(1),
            str!("b") => Value::Integer(2),
        ]);

        rename_mapping_keys(&mut mapping, &table(&[("a", "b"), ("b", "c")]));

        assert_eq!(2, mapping.len());
        assert_eq!(Some(&Value::Integer(1)), mapping.get("b"));
        assert_eq!(Some(&Value::Integer(2)), mapping.get("c"));
    }

    #[test]
    fn rename_preserves_null_values() {
        let mut mapping = Mapping(indexmap![
            str!("old") => Value::Null,
            str!("other") => Value::from("value"),
        ]);

        rename_mapping_keys(&mut mapping, &table(&[("old", "new")]));

        let expected = Mapping(indexmap![
            str!("new") => Value::Null,
            str!("other") => Value::from("value"),
        ]);
        assert_eq!(expected, mapping);
    }

    #[test]
    fn rename_complex_nesting() {
        let mut mapping = Mapping(indexmap![
            str!("old_root") => Value::Mapping(Mapping(indexmap![
                str!("old_nested") => Value::Mapping(Mapping(indexmap![
                    str!("old_deep") => Value::from("value1"),
                ])),
                str!("list_with_mappings") => Value::Sequence(vec![
                    Value::Mapping(Mapping(indexmap![
                        str!("old_item") => Value::from("value2"),
                    ])),
                    Value::Mapping(Mapping(indexmap![
                        str!("old_nested") => Value::from("value3"),
                        str!("old_item") => Value::from("value4"),
                    ])),
                ]),
            ])),
            str!("old_simple") => Value::from("value5"),
        ]);

        rename_mapping_keys(
            &mut mapping,
            &table(&[
                ("old_root", "new_root"),
                ("old_nested", "new_nested"),
                ("old_deep", "new_deep"),
                ("old_item", "new_item"),
                ("old_simple", "new_simple"),
            ]),
        );

        let expected = Mapping(indexmap![
            str!("new_root") => Value::Mapping(Mapping(indexmap![
                str!("new_nested") => Value::Mapping(Mapping(indexmap![
                    str!("new_deep") => Value::from("value1"),
                ])),
                str!("list_with_mappings") => Value::Sequence(vec![
                    Value::Mapping(Mapping(indexmap![
                        str!("new_item") => Value::from("value2"),
                    ])),
                    Value::Mapping(Mapping(indexmap![
                        str!("new_nested") => Value::from("value3"),
                        str!("new_item") => Value::from("value4"),
                    ])),
                ]),
            ])),
            str!("new_simple") => Value::from("value5"),
        ]);
        assert_eq!(expected, mapping);
    }

    #[test]
    fn rename_eplan_codes_end_to_end() {
        let mut value = serde_json::from_str::<Value>(
            r#"{"@P10009": "Acme Corp", "nested": {"@P10011": "desc"}}"#,
        )
        .unwrap();

        rename_keys(
            &mut value,
            &table(&[
                ("@P10009", "Project Name Full"),
                ("@P10011", "Project Description"),
            ]),
        );

        let expected = Value::Mapping(Mapping(indexmap![
            str!("Project Name Full") => Value::from("Acme Corp"),
            str!("nested") => Value::Mapping(Mapping(indexmap![
                str!("Project Description") => Value::from("desc"),
            ])),
        ]));
        assert_eq!(expected, value);
    }
}
