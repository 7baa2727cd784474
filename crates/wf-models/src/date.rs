//! Calendar date helpers for request payloads
//!
//! Optional dates arrive from clients as a date string, `null`, an empty
//! string, or not at all. [`NullableDate`] captures that explicitly at the
//! JSON boundary; everything behind it works with `Option<NaiveDate>`.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Wire format for all dates (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An optional calendar date in a request payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullableDate {
    #[default]
    Unset,
    Present(NaiveDate),
}

impl NullableDate {
    pub fn into_option(self) -> Option<NaiveDate> {
        match self {
            NullableDate::Unset => None,
            NullableDate::Present(date) => Some(date),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, NullableDate::Unset)
    }
}

impl From<NullableDate> for Option<NaiveDate> {
    fn from(value: NullableDate) -> Self {
        value.into_option()
    }
}

impl From<Option<NaiveDate>> for NullableDate {
    fn from(value: Option<NaiveDate>) -> Self {
        match value {
            Some(date) => NullableDate::Present(date),
            None => NullableDate::Unset,
        }
    }
}

impl Serialize for NullableDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NullableDate::Present(date) => {
                serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
            }
            NullableDate::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NullableDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(NullableDate::Unset),
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(NullableDate::Present)
                .map_err(|_| {
                    de::Error::custom(format!("invalid date '{}', expected YYYY-MM-DD", s))
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Payload {
        #[serde(default)]
        end_date: NullableDate,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_absent_null_and_empty_are_unset() {
        for body in [r#"{}"#, r#"{"end_date":null}"#, r#"{"end_date":""}"#] {
            let payload: Payload = serde_json::from_str(body).unwrap();
            assert!(payload.end_date.is_unset(), "body {}", body);
            assert_eq!(payload.end_date.into_option(), None);
        }
    }

    #[test]
    fn test_present_date() {
        let payload: Payload = serde_json::from_str(r#"{"end_date":"2025-03-31"}"#).unwrap();
        assert_eq!(payload.end_date, NullableDate::Present(date(2025, 3, 31)));
        assert_eq!(
            Option::<NaiveDate>::from(payload.end_date),
            Some(date(2025, 3, 31))
        );
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!(serde_json::from_str::<Payload>(r#"{"end_date":"31.03.2025"}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{"end_date":"2025-03-31T00:00:00Z"}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{"end_date":20250331}"#).is_err());
    }

    #[test]
    fn test_serialize() {
        let set = Payload {
            end_date: NullableDate::Present(date(2024, 1, 2)),
        };
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"{"end_date":"2024-01-02"}"#);

        let unset = Payload {
            end_date: NullableDate::Unset,
        };
        assert_eq!(serde_json::to_string(&unset).unwrap(), r#"{"end_date":null}"#);
    }
}
