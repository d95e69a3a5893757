use anyhow::Context;
use cronfmt::{CronRecord, Field};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::OutputFormat;

#[derive(Debug, Clone, Tabled)]
pub struct Row {
    #[tabled(rename = "Cron Expression")]
    pub name: String,
    #[tabled(rename = "Extended Format")]
    pub value: String,
}

pub fn rows(record: &CronRecord) -> Vec<Row> {
    let mut rows: Vec<Row> = Field::ALL
        .iter()
        .map(|&f| Row {
            name: f.name().to_string(),
            value: record.get(f).to_string(),
        })
        .collect();
    rows.push(Row {
        name: "command".to_string(),
        value: record.command().to_string(),
    });
    rows
}

pub fn render(record: &CronRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(Table::new(rows(record)).with(Style::ascii()).to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(record).context("serialize cron record")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CronRecord {
        CronRecord::from_args(&["*/15", "0", "1,15", "*", "1-5", "/usr/bin/true"]).unwrap()
    }

    #[test]
    fn rows_follow_field_order() {
        let names: Vec<String> = rows(&sample()).into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["minute", "hour", "day of month", "month", "day of week", "command"]
        );
    }

    #[test]
    fn table_contains_header_and_values() {
        let out = render(&sample(), OutputFormat::Table).unwrap();
        assert!(out.contains("Cron Expression"));
        assert!(out.contains("Extended Format"));
        assert!(out.contains("0 15 30 45"));
        assert!(out.contains("/usr/bin/true"));
        assert!(out.starts_with('+'));
    }

    #[test]
    fn json_output() {
        let out = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["minute"], "0 15 30 45");
        assert_eq!(value["day_of_week"], "1 2 3 4 5");
        assert_eq!(value["command"], "/usr/bin/true");
    }
}
