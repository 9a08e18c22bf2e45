use crate::domain::model::{Combination, PuzzleParams, SearchStats, Solution};
use crate::utils::error::{PuzzleError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const SEPARATOR: &str = "===================================";
pub const TITLE: &str = "Hundred chickens puzzle solutions:";
pub const COLUMN_HEADER: &str = "Roosters   Hens       Chicks";
pub const NO_SOLUTION: &str = "No combinations found";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    pub const VALID: [&'static str; 3] = ["table", "csv", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            OutputFormat::Table => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(PuzzleError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    Self::VALID.join(", ")
                ),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    params: &'a PuzzleParams,
    stats: &'a SearchStats,
    count: usize,
    combinations: &'a [Combination],
}

pub fn render(format: OutputFormat, params: &PuzzleParams, solution: &Solution) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(&solution.combinations)),
        OutputFormat::Csv => render_csv(&solution.combinations),
        OutputFormat::Json => render_json(params, solution),
    }
}

/// Three 4-wide right-aligned counts separated by nine spaces.
pub fn format_row(c: &Combination) -> String {
    format!("{:4}         {:4}         {:4}", c.roosters, c.hens, c.chicks)
}

/// Fixed-width table framed by `=` separators.
pub fn render_table(combinations: &[Combination]) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(COLUMN_HEADER);
    out.push_str("\n\n");

    if combinations.is_empty() {
        out.push_str(NO_SOLUTION);
        out.push('\n');
    }
    for c in combinations {
        out.push_str(&format_row(c));
        out.push('\n');
    }

    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

pub fn render_csv(combinations: &[Combination]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if combinations.is_empty() {
        writer.write_record(["roosters", "hens", "chicks"])?;
    }
    for c in combinations {
        writer.serialize(c)?;
    }
    let data = writer.into_inner().map_err(|e| PuzzleError::OutputError {
        message: format!("Failed to flush CSV writer: {}", e),
    })?;
    String::from_utf8(data).map_err(|e| PuzzleError::OutputError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn render_json(params: &PuzzleParams, solution: &Solution) -> Result<String> {
    let report = JsonReport {
        generated_at: Utc::now(),
        params,
        stats: &solution.stats,
        count: solution.len(),
        combinations: &solution.combinations,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::solver::Solver;

    #[test]
    fn test_table_layout() {
        let table = render_table(&[Combination::new(0, 25, 75), Combination::new(12, 4, 84)]);
        let expected = "\
Hundred chickens puzzle solutions:
===================================
Roosters   Hens       Chicks

   0           25           75
  12            4           84
===================================
";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_row_width() {
        assert_eq!(format_row(&Combination::new(8, 11, 81)), "   8           11           81");
        assert_eq!(format_row(&Combination::new(1234, 5, 6)).len(), 30);
    }

    #[test]
    fn test_empty_table() {
        let table = render_table(&[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[4], NO_SOLUTION);
        assert_eq!(lines.first(), Some(&TITLE));
        assert_eq!(lines.last(), Some(&SEPARATOR));
    }

    #[test]
    fn test_csv_output() {
        let csv = render_csv(&[Combination::new(4, 18, 78)]).unwrap();
        assert_eq!(csv, "roosters,hens,chicks\n4,18,78\n");
        assert_eq!(render_csv(&[]).unwrap(), "roosters,hens,chicks\n");
    }

    #[test]
    fn test_json_report() {
        let solver = Solver::classic();
        let solution = solver.solve();
        let json = render_json(solver.params(), &solution).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 4);
        assert_eq!(value["params"]["budget"], 100);
        assert_eq!(value["params"]["check"], "tolerance");
        assert_eq!(value["stats"]["candidates_visited"], 714);
        assert_eq!(value["combinations"][1]["hens"], 18);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("table, csv, json"));
    }
}
