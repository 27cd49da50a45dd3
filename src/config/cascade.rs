//! Ordered merging of configuration layers

use crate::spec::ConfigMap;

/// Merge configuration layers, later layers winning key by key
///
/// The merge is shallow: nested lists and maps are replaced, never combined.
/// `None` layers count as empty. The inputs are left untouched and a fresh
/// map is returned.
pub fn merge<'a, I, L>(layers: I) -> ConfigMap
where
    I: IntoIterator<Item = L>,
    L: Into<Option<&'a ConfigMap>>,
{
    let mut merged = ConfigMap::new();
    for layer in layers {
        let layer: Option<&ConfigMap> = layer.into();
        for (key, value) in layer.into_iter().flatten() {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}
