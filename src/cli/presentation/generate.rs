//! Generate presentation: summary of a completed scan.

use crate::error::ApiError;
use crate::tree::builder::GenerateSummary;
use owo_colors::OwoColorize;

/// Human-readable summary. `color` enables ANSI styling for terminals.
pub fn format_generate_summary_text(summary: &GenerateSummary, color: bool) -> String {
    let heading = if summary.failures.is_empty() {
        "Manifest generated"
    } else {
        "Manifest generated with skipped files"
    };

    let mut out = if color {
        if summary.failures.is_empty() {
            format!("{}\n", heading.green().bold())
        } else {
            format!("{}\n", heading.yellow().bold())
        }
    } else {
        format!("{}\n", heading)
    };

    out.push_str(&format!("  Root:      {}\n", summary.root.display()));
    out.push_str(&format!("  Output:    {}\n", summary.output.display()));
    out.push_str(&format!("  Algorithm: {}\n", summary.algorithm));
    out.push_str(&format!("  Files:     {}\n", summary.file_count));
    out.push_str(&format!("  Bytes:     {}\n", summary.bytes_hashed));
    out.push_str(&format!("  Elapsed:   {} ms", summary.elapsed_ms));

    if !summary.failures.is_empty() {
        out.push_str(&format!("\n\nSkipped ({}):", summary.failures.len()));
        for failure in &summary.failures {
            let line = format!("\n  - {}: {}", failure.path.display(), failure.reason);
            if color {
                out.push_str(&format!("{}", line.red()));
            } else {
                out.push_str(&line);
            }
        }
    }

    out
}

/// JSON summary with a generation timestamp.
pub fn format_generate_summary_json(summary: &GenerateSummary) -> Result<String, ApiError> {
    let value = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "complete": summary.failures.is_empty(),
        "summary": summary,
    });
    serde_json::to_string_pretty(&value)
        .map_err(|e| ApiError::ScanError(crate::error::ScanError::Serialize(e)))
}
