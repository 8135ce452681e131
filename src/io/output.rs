//! Rendering of recommendation results.

use crate::core::FragmentRecommendationResult;
use anyhow::Result;
use chrono::Utc;
use colored::*;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &[FragmentRecommendationResult]) -> Result<()>;
}

/// Build a writer for the requested format, targeting a file when an output
/// path is given. Terminal output always goes to stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<Box<dyn OutputWriter>> {
    match (format, output) {
        (OutputFormat::Json, Some(path)) => Ok(Box::new(JsonWriter::new(File::create(path)?))),
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
        (OutputFormat::Markdown, Some(path)) => {
            Ok(Box::new(MarkdownWriter::new(File::create(path)?)))
        }
        (OutputFormat::Markdown, None) => Ok(Box::new(MarkdownWriter::new(std::io::stdout()))),
        (OutputFormat::Terminal, None) => Ok(Box::new(TerminalWriter::new())),
        (OutputFormat::Terminal, Some(_)) => Err(anyhow::anyhow!(
            "terminal format writes to stdout; use --format json or markdown with --output"
        )),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &[FragmentRecommendationResult]) -> Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_fragment(&mut self, result: &FragmentRecommendationResult) -> Result<()> {
        writeln!(self.writer, "## Fragment {}", display_id(&result.fragment_id))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Element type: {}",
            result.element_type.as_deref().unwrap_or("(none)")
        )?;
        writeln!(
            self.writer,
            "- Level attributes: {}",
            result.fragment_structure.len()
        )?;
        writeln!(self.writer)?;

        if result.recommendations.is_empty() {
            writeln!(self.writer, "No candidate classes matched.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Class | Score | Group |")?;
        writeln!(self.writer, "|-------|-------|-------|")?;
        for rec in &result.recommendations {
            writeln!(
                self.writer,
                "| {} | {:.3} | {} |",
                rec.class, rec.structure_score, rec.group_key
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &[FragmentRecommendationResult]) -> Result<()> {
        writeln!(self.writer, "# Fragmap Recommendation Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;

        let matched = results
            .iter()
            .filter(|r| !r.recommendations.is_empty())
            .count();
        writeln!(
            self.writer,
            "Fragments analyzed: {} ({} with candidate matches)",
            results.len(),
            matched
        )?;
        writeln!(self.writer)?;

        for result in results {
            self.write_fragment(result)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter;

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for TerminalWriter {
    fn write_results(&mut self, results: &[FragmentRecommendationResult]) -> Result<()> {
        for result in results {
            println!(
                "{} {} [{}]",
                "Fragment".bold(),
                display_id(&result.fragment_id).bold(),
                result.element_type.as_deref().unwrap_or("(none)")
            );

            if result.recommendations.is_empty() {
                println!("  {}", "no matches".dimmed());
                continue;
            }

            for rec in &result.recommendations {
                let score = format!("{:.3}", rec.structure_score);
                let colored_score = if rec.structure_score >= 0.75 {
                    score.green()
                } else if rec.structure_score >= 0.25 {
                    score.yellow()
                } else {
                    score.red()
                };
                println!("  {} {} ({})", colored_score, rec.class, rec.group_key);
            }
        }
        Ok(())
    }
}

fn display_id(fragment_id: &Option<Value>) -> String {
    match fragment_id {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "(unidentified)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Recommendation, Structure};
    use serde_json::json;

    fn sample_result() -> FragmentRecommendationResult {
        FragmentRecommendationResult {
            fragment_id: Some(json!("f1")),
            element_type: Some("Wall".to_string()),
            fragment_structure: Structure::new(),
            recommendations: vec![Recommendation {
                class: "ClassA".to_string(),
                structure: Structure::new(),
                structure_score: 0.5,
                group_key: "cluster_wall".to_string(),
            }],
        }
    }

    #[test]
    fn test_json_writer_round_trips_contract_fields() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_results(&[sample_result()])
            .unwrap();

        let parsed: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed[0]["fragment_id"], json!("f1"));
        assert_eq!(parsed[0]["element_type"], json!("Wall"));
        assert_eq!(parsed[0]["recommendations"][0]["class"], json!("ClassA"));
        assert_eq!(
            parsed[0]["recommendations"][0]["structure_score"],
            json!(0.5)
        );
        assert_eq!(
            parsed[0]["recommendations"][0]["group_key"],
            json!("cluster_wall")
        );
    }

    #[test]
    fn test_markdown_writer_lists_recommendations() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_results(&[sample_result()])
            .unwrap();

        let report = String::from_utf8(buffer).unwrap();
        assert!(report.contains("# Fragmap Recommendation Report"));
        assert!(report.contains("## Fragment f1"));
        assert!(report.contains("| ClassA | 0.500 | cluster_wall |"));
    }

    #[test]
    fn test_terminal_with_output_path_is_rejected() {
        let result = create_writer(OutputFormat::Terminal, Some(PathBuf::from("out.txt")));
        assert!(result.is_err());
    }
}
