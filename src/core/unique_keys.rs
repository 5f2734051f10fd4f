//! Map deserialization that rejects repeated keys
//!
//! serde's stock map impls keep the last value for a repeated key. Keys here can
//! collide through aliases (`es6Import` and `import` are the same kind) or through a
//! JSON object naming a project twice, and both must be reported.
//!
//! Use with `#[serde(deserialize_with = "unique_keys::deserialize")]`.

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// A map that can tell whether an insert hit an existing key.
pub trait KeyedMap: Default {
  type Key;
  type Value;

  /// Insert unless the key is present. Returns `false` on a repeat.
  fn insert_new(&mut self, key: Self::Key, value: Self::Value) -> bool;
}

impl<K: Ord, V> KeyedMap for BTreeMap<K, V> {
  type Key = K;
  type Value = V;

  fn insert_new(&mut self, key: K, value: V) -> bool {
    match self.entry(key) {
      std::collections::btree_map::Entry::Vacant(entry) => {
        entry.insert(value);
        true
      }
      std::collections::btree_map::Entry::Occupied(_) => false,
    }
  }
}

impl<K: Hash + Eq, V> KeyedMap for IndexMap<K, V> {
  type Key = K;
  type Value = V;

  fn insert_new(&mut self, key: K, value: V) -> bool {
    match self.entry(key) {
      indexmap::map::Entry::Vacant(entry) => {
        entry.insert(value);
        true
      }
      indexmap::map::Entry::Occupied(_) => false,
    }
  }
}

struct UniqueKeysVisitor<M>(PhantomData<M>);

impl<'de, M> Visitor<'de> for UniqueKeysVisitor<M>
where
  M: KeyedMap,
  M::Key: Deserialize<'de> + fmt::Display,
  M::Value: Deserialize<'de>,
{
  type Value = M;

  fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    formatter.write_str("a map with unique keys")
  }

  fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<M, A::Error> {
    let mut map = M::default();
    while let Some(key) = access.next_key::<M::Key>()? {
      let value = access.next_value::<M::Value>()?;
      let shown = key.to_string();
      if !map.insert_new(key, value) {
        return Err(de::Error::custom(format!("`{}` is declared more than once", shown)));
      }
    }
    Ok(map)
  }
}

/// Deserialize a map, failing on the second occurrence of any key.
pub fn deserialize<'de, D, M>(deserializer: D) -> Result<M, D::Error>
where
  D: Deserializer<'de>,
  M: KeyedMap,
  M::Key: Deserialize<'de> + fmt::Display,
  M::Value: Deserialize<'de>,
{
  deserializer.deserialize_map(UniqueKeysVisitor(PhantomData))
}
