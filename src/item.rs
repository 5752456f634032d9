//! Identity and auxiliary metadata shared by every appointment

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;


/// An opaque identifier, assigned once when an appointment is created and never changed afterwards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId {
    content: Uuid,
}

impl ItemId {
    /// Generate a random ItemId.
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.content
    }
}

impl From<Uuid> for ItemId {
    fn from(uuid: Uuid) -> Self {
        Self { content: uuid }
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let u = Uuid::parse_str(s)?;
        Ok(Self::from(u))
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}

/// Used to support serde
impl Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<ItemId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}



/// Metadata that the calendar model itself does not carry
///
/// An appointment without any record is considered as a dated, uncompleted calendar event (see [`Properties::default`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    pub is_completed: bool,
    /// Whether this item is bound to a date. Dateless tasks only appear in the todo list, not on the calendar
    pub has_date: bool,
    /// `true` for a calendar event, `false` for a task
    pub is_event: bool,
}

impl Properties {
    pub fn new(is_completed: bool, has_date: bool, is_event: bool) -> Self {
        Self { is_completed, has_date, is_event }
    }

    /// The properties of a freshly created task that has no date
    ///
    /// Note that these are not the same as [`Properties::default`]
    pub fn dateless_task() -> Self {
        Self::new(false, false, false)
    }

    pub fn is_task(&self) -> bool {
        self.is_event == false
    }
}

impl Default for Properties {
    /// What an appointment is assumed to be when it has no properties record
    fn default() -> Self {
        Self::new(false, true, true)
    }
}
