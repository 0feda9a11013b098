//! Recursive removal of null-valued entries from nested metadata.

use crate::types::{Mapping, Value};

/// Deletes every entry of `mapping` whose value is null, then recurses into
/// every mapping value and every mapping element of sequence values.
///
/// Only mapping entries are pruned: a literal null sitting inside a
/// sequence is left where it is, as are scalar sequence elements. Surviving
/// entries keep their relative order.
pub fn remove_null_values(mapping: &mut Mapping) {
    let null_keys: Vec<String> = mapping
        .iter()
        .filter(|(_, value)| value.is_null())
        .map(|(key, _)| key.clone())
        .collect();

    for key in null_keys {
        mapping.remove(&key);
    }

    for value in mapping.values_mut() {
        match value {
            Value::Mapping(inner) => remove_null_values(inner),
            Value::Sequence(elements) => {
                for element in elements {
                    if let Value::Mapping(inner) = element {
                        remove_null_values(inner);
                    }
                }
            },
            _ => {},
        }
    }
}
