//! JSON report written by the `validate` binary.

use serde::Serialize;
use winlowess::prelude::{Comparison, SmoothResult};

use crate::weather::WeatherData;

/// Summary metrics of the comparison against the file's smoothed column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub max_abs: f64,
    pub mae: f64,
    pub rmse: f64,
    pub non_finite: usize,
}

impl From<&Comparison<f64>> for ComparisonSummary {
    fn from(cmp: &Comparison<f64>) -> Self {
        Self {
            max_abs: cmp.max_abs,
            mae: cmp.mae,
            rmse: cmp.rmse,
            non_finite: cmp.non_finite,
        }
    }
}

/// One year of the report. Non-finite values are reported as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub year: i32,
    pub temperature: f64,
    pub reference: f64,
    pub smoothed: Option<f64>,
    pub difference: Option<f64>,
}

/// Full validation report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: String,
    pub engine: String,
    pub half_width: usize,
    pub points: usize,
    pub comparison: ComparisonSummary,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Assemble a report; `rows` selects and orders the records to list.
    pub fn new(
        input: &str,
        data: &WeatherData,
        result: &SmoothResult<f64>,
        comparison: &Comparison<f64>,
        rows: &[usize],
    ) -> Self {
        let records = data.records();
        let rows = rows
            .iter()
            .map(|&i| ReportRow {
                year: records[i].year,
                temperature: records[i].temperature,
                reference: records[i].temperature_smoothed,
                smoothed: finite(result.smoothed[i]),
                difference: finite(comparison.difference[i]),
            })
            .collect();

        Self {
            input: input.to_string(),
            engine: result.engine.to_string(),
            half_width: result.half_width,
            points: result.len(),
            comparison: ComparisonSummary::from(comparison),
            rows,
        }
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winlowess::prelude::*;

    #[test]
    fn test_report_shape() {
        let data = WeatherData::parse_text(
            "1990 1.0 1.0\n1991 2.0 2.0\n1992 3.0 3.0\n1993 4.0 4.0\n1994 5.0 5.0\n1995 6.0 6.0\n",
        )
        .unwrap();
        let result = WinLowess::new()
            .half_width(2)
            .build()
            .unwrap()
            .fit(&data.to_series())
            .unwrap();
        let comparison = result.compare(&data.temperatures_smoothed()).unwrap();

        let report = Report::new("data.txt", &data, &result, &comparison, &[5, 0]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["input"], "data.txt");
        assert_eq!(json["engine"], "custom");
        assert_eq!(json["half_width"], 2);
        assert_eq!(json["points"], 6);
        assert_eq!(json["comparison"]["non_finite"], 0);
        assert_eq!(json["rows"].as_array().unwrap().len(), 2);
        assert_eq!(json["rows"][0]["year"], 1995);
        assert!(json["rows"][1]["difference"].as_f64().unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_rows_are_null() {
        let data = WeatherData::parse_text("2000 1.0 1.0\n2001 2.0 2.0\n").unwrap();
        let result = WinLowess::new()
            .half_width(1)
            .build()
            .unwrap()
            .fit(&data.to_series())
            .unwrap();
        let comparison = result.compare(&data.temperatures_smoothed()).unwrap();

        let report = Report::new("pair.txt", &data, &result, &comparison, &[0, 1]);
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["rows"][0]["smoothed"].is_null());
        assert!(json["rows"][0]["difference"].is_null());
        assert_eq!(json["comparison"]["non_finite"], 2);
    }
}
