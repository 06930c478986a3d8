//! JSON reporter for summaries

use crate::stats::Summary;
use anyhow::Result;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format a summary as JSON
    ///
    /// Statistics are written in seconds. Comparisons include both parent
    /// summaries.
    pub fn format(summary: &Summary, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(summary)?
        } else {
            serde_json::to_string(summary)?
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SummaryKind;

    fn create_test_summary() -> Summary {
        Summary::from_samples("Test", &[1.0, 2.0, 3.0]).unwrap()
    }

    #[test]
    fn test_json_format_compact() {
        let output = JsonReporter::format(&create_test_summary(), false).unwrap();

        assert!(!output.contains('\n'));
        assert!(output.contains("\"name\":\"Test\""));
    }

    #[test]
    fn test_json_format_pretty() {
        let output = JsonReporter::format(&create_test_summary(), true).unwrap();

        assert!(output.contains('\n'));
        assert!(output.contains("  "));
    }

    #[test]
    fn test_json_comparison_roundtrip() {
        let from = create_test_summary();
        let to = Summary::from_samples("Other", &[2.0, 4.0, 6.0]).unwrap();
        let diff = from.compare_to(&to);

        let json = JsonReporter::format(&diff, false).unwrap();
        assert!(json.contains("\"type\":\"comparison\""));

        let parsed: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, diff);
        match parsed.kind {
            SummaryKind::Comparison { from: f, to: t } => {
                assert_eq!(f.name, "Test");
                assert_eq!(t.name, "Other");
            }
            SummaryKind::Base => panic!("Expected a comparison"),
        }
    }
}
