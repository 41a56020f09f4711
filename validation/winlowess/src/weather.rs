//! Yearly temperature records and their on-disk formats.
//!
//! Four formats carry the same `(year, temperature, temperature_smoothed)`
//! triples:
//!
//! * whitespace-separated text, one record per line, with optional
//!   `year temperature temperature_smoothed` header, blank lines and `#`
//!   comments;
//! * a JSON array of objects;
//! * CSV with a `year,temperature,temperature_smoothed` header;
//! * XML with one `<entry>` element per record under a single root, each
//!   holding `<year>`, `<temperature>` and `<temperature_smoothed>`.

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use winlowess::Series;

/// Fewest records a file may hold and still be smoothed.
pub const MIN_RECORDS: usize = 5;

const HEADER: [&str; 3] = ["year", "temperature", "temperature_smoothed"];

/// Error type for loading and validating weather data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    ReadError(String),

    #[error("Line {line}: expected 3 fields (year temperature temperature_smoothed), found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("Line {line}: invalid {field} '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Failed to parse CSV: {0}")]
    CsvError(String),

    #[error("Failed to parse JSON: {0}")]
    JsonError(String),

    #[error("Failed to parse XML: {0}")]
    XmlError(String),

    #[error("Too few records: found {found}, need at least {}", MIN_RECORDS)]
    TooFewRecords { found: usize },

    #[error("Years are not consecutive: {previous} is followed by {next}")]
    NonConsecutiveYears { previous: i32, next: i32 },
}

/// File format of a weather data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Csv,
    Xml,
}

impl Format {
    /// Guess the format from a file extension, defaulting to text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Format::Csv,
            Some(ext) if ext.eq_ignore_ascii_case("xml") => Format::Xml,
            _ => Format::Text,
        }
    }
}

/// One year of observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub year: i32,
    pub temperature: f64,
    pub temperature_smoothed: f64,
}

impl Display for WeatherRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.temperature, self.temperature_smoothed)
    }
}

/// XML document root; its own tag name is not checked.
#[derive(Debug, Default, Deserialize)]
struct XmlDocument {
    #[serde(rename = "entry", default)]
    entries: Vec<WeatherRecord>,
}

/// Sort order for [`Query`] results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Ascending by temperature.
    Asc,
    /// Descending by temperature.
    Desc,
}

/// Year-range filter with optional temperature ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub lower: i32,
    pub upper: i32,
    pub order: Option<Order>,
}

impl Query {
    /// Query covering every year, sorted by year.
    pub fn all() -> Self {
        Self {
            lower: i32::MIN,
            upper: i32::MAX,
            order: None,
        }
    }

    fn matches(&self, record: &WeatherRecord) -> bool {
        self.lower <= record.year && record.year <= self.upper
    }
}

/// Append-only list of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherData {
    records: Vec<WeatherRecord>,
}

impl WeatherData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: WeatherRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.temperature).collect()
    }

    pub fn temperatures_smoothed(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.temperature_smoothed).collect()
    }

    /// Lowest and highest temperature, or `None` when there are no records.
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let range = self
            .temperatures()
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Some(range)
    }

    /// Temperatures as a series with positions `0..n`.
    pub fn to_series(&self) -> Series<f64> {
        Series::from_values(self.records.iter().map(|r| r.temperature))
    }

    /// Parse the whitespace-separated text format.
    pub fn parse_text(text: &str) -> Result<Self, LoadError> {
        let mut data = Self::new();
        let mut header_allowed = true;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if header_allowed && fields == HEADER {
                header_allowed = false;
                continue;
            }
            header_allowed = false;

            if fields.len() != 3 {
                return Err(LoadError::FieldCount {
                    line: line_no,
                    found: fields.len(),
                });
            }

            data.append(WeatherRecord {
                year: parse_field(fields[0], line_no, "year")?,
                temperature: parse_field(fields[1], line_no, "temperature")?,
                temperature_smoothed: parse_field(fields[2], line_no, "temperature_smoothed")?,
            });
        }

        Ok(data)
    }

    /// Parse a JSON array of record objects.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        serde_json::from_str(text).map_err(|e| LoadError::JsonError(e.to_string()))
    }

    /// Parse CSV with a `year,temperature,temperature_smoothed` header.
    pub fn from_csv(text: &str) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut data = Self::new();
        for result in reader.deserialize::<WeatherRecord>() {
            data.append(result.map_err(|e| LoadError::CsvError(e.to_string()))?);
        }
        Ok(data)
    }

    /// Parse an XML document of `<entry>` records.
    pub fn from_xml(text: &str) -> Result<Self, LoadError> {
        let document: XmlDocument =
            quick_xml::de::from_str(text).map_err(|e| LoadError::XmlError(e.to_string()))?;
        Ok(Self {
            records: document.entries,
        })
    }

    /// Read and parse a file in the given format.
    pub fn load(path: &Path, format: Format) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)
            .map_err(|e| LoadError::ReadError(format!("{}: {e}", path.display())))?;

        match format {
            Format::Text => Self::parse_text(&text),
            Format::Json => Self::from_json(&text),
            Format::Csv => Self::from_csv(&text),
            Format::Xml => Self::from_xml(&text),
        }
    }

    /// At least [`MIN_RECORDS`] records with strictly consecutive years.
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.records.len() < MIN_RECORDS {
            return Err(LoadError::TooFewRecords {
                found: self.records.len(),
            });
        }

        for pair in self.records.windows(2) {
            let (previous, next) = (pair[0].year, pair[1].year);
            if previous.checked_add(1) != Some(next) {
                return Err(LoadError::NonConsecutiveYears { previous, next });
            }
        }

        Ok(())
    }

    /// Indices of the records matching `query`, in result order.
    pub fn query_indices(&self, query: &Query) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.records.len())
            .filter(|&i| query.matches(&self.records[i]))
            .collect();

        let records = &self.records;
        match query.order {
            None => indices.sort_by_key(|&i| records[i].year),
            Some(Order::Asc) => {
                indices.sort_by(|&a, &b| records[a].temperature.total_cmp(&records[b].temperature))
            }
            Some(Order::Desc) => {
                indices.sort_by(|&a, &b| records[b].temperature.total_cmp(&records[a].temperature))
            }
        }
        indices
    }
}

impl Display for WeatherData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", HEADER.join(" "))?;
        for record in &self.records {
            write!(f, "\n{record}")?;
        }
        Ok(())
    }
}

fn parse_field<F: std::str::FromStr>(value: &str, line: usize, field: &'static str) -> Result<F, LoadError> {
    value.parse().map_err(|_| LoadError::InvalidField {
        line,
        field,
        value: value.to_string(),
    })
}
