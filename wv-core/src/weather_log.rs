//! The ordered sequence of weather records and the entry form that feeds it.
//!
//! The log is append-only. Rendering follows sequence order, so the form
//! suggests the day after the last accepted record to keep the common path
//! chronological.

use crate::error::RecordError;
use crate::record::{parse_date, Condition, RecordDraft, WeatherRecord, DATE_FORMAT};
use chrono::{Days, NaiveDate};

/// Date pre-filled in the entry form before anything has been appended.
pub const DEFAULT_NEXT_DATE: &str = "2025-03-17";
/// Temperature the form resets to after each submission.
pub const DEFAULT_TEMPERATURE: i32 = 60;
/// Humidity the form resets to after each submission.
pub const DEFAULT_HUMIDITY: u8 = 70;

/// In-memory, append-only sequence of accepted records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherLog {
    records: Vec<WeatherRecord>,
}

impl WeatherLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<WeatherRecord>) -> Self {
        Self { records }
    }

    /// Load records from CSV with headers `date,temperature,humidity,condition`.
    ///
    /// # Example CSV
    /// ```text
    /// date,temperature,humidity,condition
    /// 2025-03-10,62,65,Sunny
    /// 2025-03-11,58,70,Partly Cloudy
    /// ```
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut records = Vec::new();
        for result in rdr.deserialize::<WeatherRecord>() {
            let record = result?;
            if record.humidity > 100 {
                anyhow::bail!(RecordError::HumidityOutOfRange(record.humidity.into()));
            }
            records.push(record);
        }
        log::info!("[WV] weather_log: loaded {} seed records", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeatherRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn append(&mut self, record: WeatherRecord) {
        log::debug!(
            "[WV] weather_log: appending {} ({} records before)",
            record.date_label(),
            self.records.len()
        );
        self.records.push(record);
    }
}

/// Field values of the data-entry form.
///
/// Fields hold the raw text the user typed; nothing is validated until
/// [`EntryForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub draft: RecordDraft,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::starting_at(DEFAULT_NEXT_DATE)
    }
}

impl EntryForm {
    /// A form with default readings and the given suggested date.
    pub fn starting_at(date: &str) -> Self {
        Self {
            draft: RecordDraft {
                date: date.to_string(),
                temperature: DEFAULT_TEMPERATURE.to_string(),
                humidity: DEFAULT_HUMIDITY.to_string(),
                condition: Condition::Sunny.label().to_string(),
            },
        }
    }

    /// Validate the draft and append it to `log`.
    ///
    /// On success the readings reset to their defaults and the suggested date
    /// advances to the day after the accepted one. On rejection the form is
    /// left untouched so the user can correct it.
    pub fn submit(&mut self, log: &mut WeatherLog) -> Result<WeatherRecord, RecordError> {
        let record = match self.draft.validate() {
            Ok(record) => record,
            Err(e) => {
                log::warn!("[WV] entry_form: rejected draft: {}", e);
                return Err(e);
            }
        };
        log.append(record.clone());
        *self = Self::starting_at(&next_date_after(record.date));
        log::info!(
            "[WV] entry_form: accepted {}, next suggested date {}",
            record.date_label(),
            self.draft.date
        );
        Ok(record)
    }

    /// The currently suggested date, if the date field holds a valid one.
    pub fn suggested_date(&self) -> Option<NaiveDate> {
        parse_date(&self.draft.date).ok()
    }
}

/// The calendar day after `date`, formatted for the form.
/// Saturates at the last representable date.
fn next_date_after(date: NaiveDate) -> String {
    date.checked_add_days(Days::new(1))
        .unwrap_or(date)
        .format(DATE_FORMAT)
        .to_string()
}
