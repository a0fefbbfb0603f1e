//! Calendar dates on the wire as `YYYY-MM-DD`.
//!
//! Parsing is lenient about zero padding (`2020-1-5` reads as 2020-01-05);
//! formatting always pads.

use time::{macros::format_description, Date};

pub fn parse_date(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(
        raw,
        format_description!("[year]-[month padding:none]-[day padding:none]"),
    )
}

pub fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(format_description!("[year]-[month]-[day]"))
}

/// `#[serde(with = "crate::dates::ymd")]` for `Date` fields.
pub mod ymd {
    use serde::{de, ser, Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = super::format_date(*date).map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw)
            .map_err(|e| <D::Error as de::Error>::custom(format!("date {raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_padded_and_unpadded() {
        assert_eq!(parse_date("2020-01-05").unwrap(), date!(2020 - 01 - 05));
        assert_eq!(parse_date("2020-1-5").unwrap(), date!(2020 - 01 - 05));
        assert_eq!(parse_date("2020-11-5").unwrap(), date!(2020 - 11 - 05));
    }

    #[test]
    fn rejects_out_of_range_and_other_layouts() {
        assert!(parse_date("2021-13-01").is_err());
        assert!(parse_date("2021-02-30").is_err());
        assert!(parse_date("15/06/2021").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn formats_with_padding() {
        assert_eq!(format_date(date!(2020 - 01 - 05)).unwrap(), "2020-01-05");
    }
}
