use crate::domain::model::AggregateReport;
use crate::utils::error::{CandleError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render_candles(candles: i32) -> String {
    format!("We need {} Candles", candles)
}

pub fn render_report(report: &AggregateReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_csv(report),
    }
}

fn render_text(report: &AggregateReport) -> String {
    let mut lines = vec!["Details:".to_string()];
    for person in &report.details {
        lines.push(format!(
            "  {} ({}): {} candles",
            person.name, person.birthday, person.candles
        ));
    }
    lines.push(format!("Total candles needed: {}", report.total));
    lines.join("\n")
}

// 只輸出明細，總數可由 candles 欄位加總
fn render_csv(report: &AggregateReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for person in &report.details {
        writer.serialize(person)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CandleError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| CandleError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
