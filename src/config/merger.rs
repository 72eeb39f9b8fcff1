//! Deep merge for layered YAML configuration.
//!
//! # Merge Rules
//!
//! - Mappings merge recursively
//! - Sequences are replaced entirely
//! - A null in the overlay removes the key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Deep merge `overlay` onto `base`, returning a new value.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        // An empty file parses to null and changes nothing.
        (base, Value::Null) => base.clone(),

        (_, overlay) => overlay.clone(),
    }
}

/// Merge configs in order; later entries win.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}
