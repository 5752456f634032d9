//! Conversion between in-memory appointments and the records stored on disk
//!
//! This is the only place that knows about the on-disk schema. There is no version field: older files must
//! remain readable, which is why every field added later has a serde default.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::appointment::Appointment;
use crate::color::Background;
use crate::item::{ItemId, Properties};

fn default_true() -> bool {
    true
}

/// Read a date-time written either without an offset (`2024-05-01T09:00:00`) or with one
/// (`2024-05-01T09:00:00.1234567+02:00`).
///
/// The offset is dropped, not applied: the wall-clock time is kept as-is
pub(crate) fn deserialize_local_date_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if let Ok(naive) = s.parse::<NaiveDateTime>() {
        return Ok(naive);
    }
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.naive_local())
        .map_err(|err| serde::de::Error::custom(format!("invalid date-time {:?}: {}", s, err)))
}

/// A flat, storage-friendly representation of an appointment joined with its properties
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppointmentRecord {
    /// Files written by older versions have no identifiers. A new one is picked when loading such records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "deserialize_local_date_time")]
    pub start_time: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_local_date_time")]
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub background_hex: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default = "default_true")]
    pub has_date: bool,
    #[serde(default = "default_true")]
    pub is_event: bool,
}

impl AppointmentRecord {
    pub fn from_appointment(appointment: &Appointment, properties: Properties) -> Self {
        Self {
            id: Some(*appointment.id()),
            start_time: *appointment.start(),
            end_time: *appointment.end(),
            subject: appointment.subject().to_string(),
            background_hex: Some(appointment.background().to_argb_hex()),
            is_completed: properties.is_completed,
            has_date: properties.has_date,
            is_event: properties.is_event,
        }
    }

    /// Rebuild the appointment and its properties
    pub fn into_appointment(self) -> (Appointment, Properties) {
        let id = self.id.unwrap_or_else(ItemId::random);
        let background = match &self.background_hex {
            Some(hex) => Background::from_argb_hex_or_default(hex),
            None => Background::default(),
        };
        let properties = Properties::new(self.is_completed, self.has_date, self.is_event);
        let appointment = Appointment::new_with_id(id, self.start_time, self.end_time, self.subject, background);
        (appointment, properties)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::color::Palette;

    #[test]
    fn records_use_pascal_case_keys() {
        let start = NaiveDate::from_ymd(2024, 5, 1).and_hms(9, 0, 0);
        let end = NaiveDate::from_ymd(2024, 5, 1).and_hms(10, 0, 0);
        let appt = Appointment::new(start, end, "Standup".to_string(), Palette::Blue.into());
        let record = AppointmentRecord::from_appointment(&appt, Properties::default());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Id"], serde_json::Value::String(appt.id().to_string()));
        assert_eq!(json["StartTime"], "2024-05-01T09:00:00");
        assert_eq!(json["EndTime"], "2024-05-01T10:00:00");
        assert_eq!(json["Subject"], "Standup");
        assert_eq!(json["BackgroundHex"], "#FF0000FF");
        assert_eq!(json["IsCompleted"], false);
        assert_eq!(json["HasDate"], true);
        assert_eq!(json["IsEvent"], true);
    }

    #[test]
    fn conversion_preserves_every_field() {
        let start = NaiveDate::from_ymd(2024, 5, 1).and_hms(9, 30, 0);
        let end = NaiveDate::from_ymd(2024, 5, 2).and_hms(8, 15, 0);
        let appt = Appointment::new(start, end, "Night shift".to_string(), Background::from_argb(0x80, 1, 2, 3));
        let props = Properties::new(true, false, false);

        let json = serde_json::to_string(&AppointmentRecord::from_appointment(&appt, props)).unwrap();
        let record: AppointmentRecord = serde_json::from_str(&json).unwrap();
        let (back, back_props) = record.into_appointment();

        assert_eq!(back, appt);
        assert_eq!(back_props, props);
    }

    #[test]
    fn legacy_records_get_defaults() {
        let json = r#"{"StartTime":"2024-05-01T09:00:00","EndTime":"2024-05-01T10:00:00","Subject":"Old one"}"#;
        let record: AppointmentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, None);

        let (appt, props) = record.into_appointment();
        assert_eq!(appt.subject(), "Old one");
        assert_eq!(appt.background().to_argb_hex(), crate::color::DEFAULT_BACKGROUND_HEX);
        assert_eq!(props, Properties::default());
    }

    #[test]
    fn timestamps_with_an_offset_keep_their_wall_clock_time() {
        let json = r##"{"StartTime":"2024-05-01T09:00:00.1234567+02:00","EndTime":"2024-05-01T10:00:00Z","Subject":"Standup","BackgroundHex":"#FFA500"}"##;
        let record: AppointmentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.start_time, NaiveDate::from_ymd(2024, 5, 1).and_hms_nano(9, 0, 0, 123_456_700));
        assert_eq!(record.end_time, NaiveDate::from_ymd(2024, 5, 1).and_hms(10, 0, 0));
        let (appt, _) = record.into_appointment();
        assert_eq!(appt.background().to_argb_hex(), "#FFFFA500");
    }

    #[test]
    fn unparseable_timestamps_are_rejected() {
        let json = r#"{"StartTime":"yesterday","EndTime":"2024-05-01T10:00:00","Subject":"s"}"#;
        assert!(serde_json::from_str::<AppointmentRecord>(json).is_err());
    }

    #[test]
    fn unreadable_colors_become_orange() {
        let json = r##"{"StartTime":"2024-05-01T09:00:00","EndTime":"2024-05-01T10:00:00","Subject":"s","BackgroundHex":"#GG"}"##;
        let record: AppointmentRecord = serde_json::from_str(json).unwrap();
        let (appt, _) = record.into_appointment();
        assert_eq!(appt.background(), &Background::from(Palette::Orange));
    }
}
