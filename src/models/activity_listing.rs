use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ActivityRecord;

/// Activity name to record pairs in a stable order.
///
/// Serializes as a JSON object whose keys keep this order, which is the shape
/// of `GET /activities` and of a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityListing(pub Vec<(String, ActivityRecord)>);

impl ActivityListing {
    pub fn get(&self, name: &str) -> Option<&ActivityRecord> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ActivityListing {
    type Item = (String, ActivityRecord);
    type IntoIter = std::vec::IntoIter<(String, ActivityRecord)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, record) in &self.0 {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

struct ListingVisitor;

impl<'de> Visitor<'de> for ListingVisitor {
    type Value = ActivityListing;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping activity names to activity records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, record)) = access.next_entry::<String, ActivityRecord>()? {
            if !seen.insert(name.clone()) {
                return Err(serde::de::Error::custom(format!(
                    "activity {name:?} is listed more than once"
                )));
            }
            entries.push((name, record));
        }
        Ok(ActivityListing(entries))
    }
}

impl<'de> Deserialize<'de> for ActivityListing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ListingVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_key_order_in_json() {
        let listing = ActivityListing(vec![
            ("Zeta".to_string(), ActivityRecord::new("z", "s", 1, &[])),
            ("Alpha".to_string(), ActivityRecord::new("a", "s", 1, &[])),
        ]);
        let json = serde_json::to_string(&listing).unwrap();
        assert!(json.find("Zeta").unwrap() < json.find("Alpha").unwrap());

        let parsed: ActivityListing = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.names().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn rejects_repeated_names() {
        let json = r#"{
            "Chess": {"description":"d","schedule":"s","max_participants":2},
            "Chess": {"description":"d","schedule":"s","max_participants":3}
        }"#;
        let err = serde_json::from_str::<ActivityListing>(json).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
