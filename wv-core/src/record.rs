use crate::error::RecordError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used by the form, the seed CSV and the table: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sky condition reported with a record.
///
/// The form only offers the five known conditions. Seed data may carry other
/// labels; those are kept verbatim in `Other` and render without a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Snowy,
    Other(String),
}

impl Condition {
    /// The conditions offered by the entry form, in display order.
    pub const KNOWN: [Condition; 5] = [
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Snowy,
    ];

    pub fn label(&self) -> &str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Snowy => "Snowy",
            Condition::Other(label) => label,
        }
    }

    /// Symbol drawn above the marker. Unrecognised conditions get an empty glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::PartlyCloudy => "⛅",
            Condition::Cloudy => "☁️",
            Condition::Rainy => "🌧️",
            Condition::Snowy => "❄️",
            Condition::Other(_) => "",
        }
    }

    /// Lenient conversion used for seed data: unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        label
            .parse()
            .unwrap_or_else(|_| Condition::Other(label.trim().to_string()))
    }
}

impl FromStr for Condition {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Condition::KNOWN
            .into_iter()
            .find(|c| c.label() == trimmed)
            .ok_or_else(|| RecordError::UnknownCondition(trimmed.to_string()))
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Condition::from_label(&value)
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One day of weather. Records are immutable once accepted into the log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    /// Degrees Fahrenheit
    pub temperature: i32,
    /// Relative humidity, 0-100 percent
    pub humidity: u8,
    pub condition: Condition,
}

impl WeatherRecord {
    pub fn new(date: NaiveDate, temperature: i32, humidity: u8, condition: Condition) -> Self {
        Self {
            date,
            temperature,
            humidity,
            condition,
        }
    }

    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Text of the floating value label, e.g. "62°F"
    pub fn temperature_label(&self) -> String {
        format!("{}°F", self.temperature)
    }
}

/// Raw, unvalidated field values as typed into the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub date: String,
    pub temperature: String,
    pub humidity: String,
    pub condition: String,
}

impl RecordDraft {
    /// Validate every field, returning the first rejection encountered.
    ///
    /// Dates must parse as `YYYY-MM-DD`. Temperature and humidity must be
    /// numeric; fractions are truncated toward zero ("60.5" reads as 60).
    /// Humidity must lie in 0-100 after truncation.
    pub fn validate(&self) -> Result<WeatherRecord, RecordError> {
        let date = parse_date(&self.date)?;

        let temperature = coerce_integer(&self.temperature)
            .and_then(|t| i32::try_from(t).ok())
            .ok_or_else(|| RecordError::InvalidTemperature(self.temperature.clone()))?;

        let humidity = coerce_integer(&self.humidity)
            .ok_or_else(|| RecordError::InvalidHumidity(self.humidity.clone()))?;
        let humidity = u8::try_from(humidity)
            .ok()
            .filter(|h| *h <= 100)
            .ok_or(RecordError::HumidityOutOfRange(humidity))?;

        let condition = self.condition.parse::<Condition>()?;

        Ok(WeatherRecord::new(date, temperature, humidity, condition))
    }
}

/// Read a numeric field as an integer, truncating any fraction toward zero.
/// Non-numeric, empty and non-finite input gives `None`.
fn coerce_integer(raw: &str) -> Option<i64> {
    let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(value.trunc() as i64)
}

/// Parse a "YYYY-MM-DD" date, rejecting anything that is not a real calendar day.
pub fn parse_date(s: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| RecordError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(date: &str, temperature: &str, humidity: &str, condition: &str) -> RecordDraft {
        RecordDraft {
            date: date.to_string(),
            temperature: temperature.to_string(),
            humidity: humidity.to_string(),
            condition: condition.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_draft() {
        let record = draft("2025-03-17", "60", "70", "Sunny").validate().unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 17).unwrap());
        assert_eq!(record.temperature, 60);
        assert_eq!(record.humidity, 70);
        assert_eq!(record.condition, Condition::Sunny);
    }

    #[test]
    fn test_validate_trims_whitespace_and_accepts_negative_temperature() {
        let record = draft(" 2025-01-02 ", " -4 ", "100", "Snowy").validate().unwrap();
        assert_eq!(record.temperature, -4);
        assert_eq!(record.humidity, 100);
        assert_eq!(record.condition, Condition::Snowy);
    }

    #[test]
    fn test_validate_rejects_bad_dates() {
        for bad in ["", "2025-02-30", "2025-13-01", "03/17/2025", "tomorrow"] {
            let err = draft(bad, "60", "70", "Sunny").validate().unwrap_err();
            assert_eq!(err, RecordError::InvalidDate(bad.to_string()));
        }
    }

    #[test]
    fn test_validate_rejects_non_numeric_readings() {
        assert_eq!(
            draft("2025-03-17", "sixty", "70", "Sunny").validate(),
            Err(RecordError::InvalidTemperature("sixty".to_string()))
        );
        assert_eq!(
            draft("2025-03-17", "NaN", "70", "Sunny").validate(),
            Err(RecordError::InvalidTemperature("NaN".to_string()))
        );
        assert_eq!(
            draft("2025-03-17", "60", "", "Sunny").validate(),
            Err(RecordError::InvalidHumidity(String::new()))
        );
        assert_eq!(
            draft("2025-03-17", "60", "humid", "Sunny").validate(),
            Err(RecordError::InvalidHumidity("humid".to_string()))
        );
    }

    #[test]
    fn test_validate_truncates_fractional_readings() {
        let record = draft("2025-03-17", "60.5", "70.9", "Sunny").validate().unwrap();
        assert_eq!(record.temperature, 60);
        assert_eq!(record.humidity, 70);

        let record = draft("2025-03-17", "-3.7", "100.4", "Sunny").validate().unwrap();
        assert_eq!(record.temperature, -3);
        assert_eq!(record.humidity, 100);

        assert_eq!(
            draft("2025-03-17", "60", "100.5e1", "Sunny").validate(),
            Err(RecordError::HumidityOutOfRange(1005))
        );
    }

    #[test]
    fn test_validate_rejects_humidity_out_of_range() {
        assert_eq!(
            draft("2025-03-17", "60", "101", "Sunny").validate(),
            Err(RecordError::HumidityOutOfRange(101))
        );
        assert_eq!(
            draft("2025-03-17", "60", "-1", "Sunny").validate(),
            Err(RecordError::HumidityOutOfRange(-1))
        );
    }

    #[test]
    fn test_validate_rejects_unknown_condition() {
        assert_eq!(
            draft("2025-03-17", "60", "70", "Foggy").validate(),
            Err(RecordError::UnknownCondition("Foggy".to_string()))
        );
    }

    #[test]
    fn test_condition_labels_and_glyphs() {
        assert_eq!(Condition::PartlyCloudy.label(), "Partly Cloudy");
        assert_eq!("Partly Cloudy".parse::<Condition>().unwrap(), Condition::PartlyCloudy);
        for condition in Condition::KNOWN {
            assert!(!condition.glyph().is_empty());
        }
        let foggy = Condition::from_label("Foggy");
        assert_eq!(foggy, Condition::Other("Foggy".to_string()));
        assert_eq!(foggy.glyph(), "");
        assert_eq!(foggy.to_string(), "Foggy");
    }

    #[test]
    fn test_record_labels() {
        let record = WeatherRecord::new(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            62,
            65,
            Condition::Sunny,
        );
        assert_eq!(record.date_label(), "2025-03-10");
        assert_eq!(record.temperature_label(), "62°F");
    }
}
