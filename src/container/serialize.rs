//! Serde support
//!
//! A container has the same wire shape as `Option<T>`: `null` when empty.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::types::Container;

impl<T: Serialize> Serialize for Container<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.get_or_null().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Container<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Container::of_nullable)
    }
}
