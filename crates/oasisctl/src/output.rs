/*
 * SPDX-FileCopyrightText: Copyright (c) 2021-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// Rendering of API records as tables, JSON or YAML.

use prettytable::{Cell, Row, Table};
use prost_types::Timestamp;
use rpc::cli::{OasisCliResult, OutputFormat};
use rpc::protos::timestamp;
use serde::Serialize;

use crate::async_writeln;
use crate::cfg::runtime::RuntimeContext;

/// A record the CLI can print. `COLUMNS` names the table columns and
/// `cells` yields one value per column, in the same order.
pub trait Render: Serialize {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    /// Property/value pairs shown when a single record is printed.
    fn details(&self) -> Vec<(&'static str, String)> {
        Self::COLUMNS.iter().copied().zip(self.cells()).collect()
    }
}

pub fn render_item<T: Render>(item: &T, format: OutputFormat) -> OasisCliResult<String> {
    Ok(match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            for (property, value) in item.details() {
                table.add_row(Row::new(vec![Cell::new(property), Cell::new(&value)]));
            }
            table.to_string()
        }
        OutputFormat::Json => serde_json::to_string_pretty(item)?,
        OutputFormat::Yaml => serde_yaml::to_string(item)?,
    })
}

pub fn render_list<T: Render>(items: &[T], format: OutputFormat) -> OasisCliResult<String> {
    Ok(match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_titles(Row::new(T::COLUMNS.iter().map(|c| Cell::new(c)).collect()));
            for item in items {
                table.add_row(Row::new(
                    item.cells().iter().map(|c| Cell::new(c)).collect(),
                ));
            }
            table.to_string()
        }
        OutputFormat::Json => serde_json::to_string_pretty(items)?,
        OutputFormat::Yaml => serde_yaml::to_string(items)?,
    })
}

pub fn fmt_time(ts: &Option<Timestamp>) -> String {
    ts.as_ref()
        .and_then(timestamp::to_rfc3339)
        .unwrap_or_else(|| "-".to_string())
}

pub fn fmt_list(values: &[String]) -> String {
    values.join(", ")
}

pub fn fmt_flag(value: bool) -> String {
    let text = if value { "yes" } else { "-" };
    text.to_string()
}

impl RuntimeContext {
    pub async fn write_item<T: Render>(&mut self, item: &T) -> OasisCliResult<()> {
        let rendered = render_item(item, self.config.format)?;
        async_writeln!(self.output_file, "{}", rendered.trim_end())?;
        Ok(())
    }

    pub async fn write_list<T: Render>(&mut self, items: &[T]) -> OasisCliResult<()> {
        let rendered = render_list(items, self.config.format)?;
        async_writeln!(self.output_file, "{}", rendered.trim_end())?;
        Ok(())
    }

    /// Announces a successful mutation. Only printed for table output.
    pub async fn write_success(&mut self) -> OasisCliResult<()> {
        if self.config.format == OutputFormat::Table {
            async_writeln!(self.output_file, "Success!")?;
        }
        Ok(())
    }

    pub async fn write_message(&mut self, message: &str) -> OasisCliResult<()> {
        async_writeln!(self.output_file, "{message}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Widget {
        id: String,
        size: u32,
    }

    impl Render for Widget {
        const COLUMNS: &'static [&'static str] = &["Id", "Size"];

        fn cells(&self) -> Vec<String> {
            vec![self.id.clone(), self.size.to_string()]
        }
    }

    fn widgets() -> Vec<Widget> {
        vec![
            Widget {
                id: "w1".to_string(),
                size: 3,
            },
            Widget {
                id: "w2".to_string(),
                size: 42,
            },
        ]
    }

    #[test]
    fn list_table_has_titles_and_rows() {
        let rendered = render_list(&widgets(), OutputFormat::Table).expect("renders");
        assert!(rendered.contains("Id"));
        assert!(rendered.contains("Size"));
        assert!(rendered.contains("w2"));
        assert!(rendered.contains("42"));
    }

    #[test]
    fn item_table_lists_properties() {
        let rendered = render_item(&widgets()[0], OutputFormat::Table).expect("renders");
        let lines: Vec<&str> = rendered.lines().filter(|l| l.contains("Size")).collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains('3'));
    }

    #[test]
    fn json_and_yaml_serialize_records() {
        let json = render_list(&widgets(), OutputFormat::Json).expect("renders");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed[1]["size"], 42);

        let yaml = render_item(&widgets()[0], OutputFormat::Yaml).expect("renders");
        assert!(yaml.contains("id: w1"));
    }

    #[test]
    fn missing_timestamp_renders_placeholder() {
        assert_eq!(fmt_time(&None), "-");
        let ts = Timestamp {
            seconds: 1_577_836_800,
            nanos: 0,
        };
        assert_eq!(fmt_time(&Some(ts)), "2020-01-01T00:00:00Z");
    }
}
