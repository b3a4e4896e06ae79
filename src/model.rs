//! Activity Data Model
//!
//! Types mirroring the `/activities` payload. The collection keeps the
//! server's key order so repeated renders of the same payload are stable.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A single extracurricular activity as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: u32,
    /// Registered emails in server order
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style participant registration (tests and benches)
    pub fn participant(mut self, email: &str) -> Self {
        self.participants.push(email.to_string());
        self
    }

    /// Remaining capacity. Negative when the server over-filled the roster.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Activity name → Activity, in server iteration order.
///
/// Replaced wholesale on every fetch; there is no incremental patching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    entries: Vec<(String, Activity)>,
}

impl ActivityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `/activities` response body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Insert or replace an activity. A replaced entry keeps its position.
    pub fn insert(&mut self, name: &str, activity: Activity) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = activity,
            None => self.entries.push((name.to_string(), activity)),
        }
    }

    pub fn with(mut self, name: &str, activity: Activity) -> Self {
        self.insert(name, activity);
        self
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut collection = ActivityCollection::new();
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    collection.insert(&name, activity);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
