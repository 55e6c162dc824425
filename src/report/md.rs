use crate::template::fill::format_score;
use crate::types::report::QualityReport;

pub fn to_markdown(report: &QualityReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", report.project_name));
    output.push_str(&format!("Generated: {}\n\n", report.generated_at));

    output.push_str("## Lowest Maintainability\n\n");
    if report.maintainability.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for (index, entry) in report.maintainability.iter().enumerate() {
            output.push_str(&format!(
                "{}. [{}] {} (MI {})\n",
                index + 1,
                entry.grade,
                entry.path,
                format_score(entry.score)
            ));
        }
        output.push('\n');
    }

    output.push_str("## Highest Cyclomatic Complexity\n\n");
    if report.complexity.is_empty() {
        output.push_str("- none\n");
    } else {
        for (index, entry) in report.complexity.iter().enumerate() {
            let location = match entry.line {
                Some(line) => format!("{}:{}", entry.path, line),
                None => entry.path.clone(),
            };
            output.push_str(&format!(
                "{}. [{}] {} (CC {}) in {}\n",
                index + 1,
                entry.grade,
                entry.name,
                entry.complexity,
                location
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::metrics::{ComplexityEntry, FunctionKind, Grade, MaintainabilityEntry};

    #[test]
    fn markdown_report_lists_both_sections() {
        let report = QualityReport {
            project_name: "demo".to_string(),
            generated_at: "19/10/2026 10:00:00".to_string(),
            maintainability: vec![MaintainabilityEntry {
                path: "a.py".to_string(),
                score: 18.0,
                grade: Grade::B,
            }],
            complexity: vec![ComplexityEntry {
                path: "a.py".to_string(),
                name: "parse".to_string(),
                kind: FunctionKind::Function,
                complexity: 14,
                grade: Grade::C,
                line: Some(12),
            }],
        };

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# demo"));
        assert!(rendered.contains("1. [B] a.py (MI 18.0)"));
        assert!(rendered.contains("1. [C] parse (CC 14) in a.py:12"));
    }

    #[test]
    fn markdown_report_marks_empty_sections() {
        let report = QualityReport {
            project_name: "empty".to_string(),
            generated_at: "now".to_string(),
            maintainability: vec![],
            complexity: vec![],
        };
        let rendered = to_markdown(&report);
        assert_eq!(rendered.matches("- none").count(), 2);
    }
}
