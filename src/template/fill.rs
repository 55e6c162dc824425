use crate::analyze::grade::{complexity_color, maintainability_color};
use crate::error::{HeliumError, Result};
use crate::types::report::QualityReport;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// `{{ name }}` becomes `value` (XML-escaped on fill).
    Token { name: String, value: String },
    /// The placeholder color `#ffXXff` for `slot` becomes `color`.
    Color { slot: u8, color: &'static str },
}

impl Substitution {
    fn token(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Token {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Builds the substitutions for `report`. Maintainability rows take color
/// slots `1..=n`, complexity rows follow on from `n + 1`.
pub fn substitutions(report: &QualityReport) -> Result<Vec<Substitution>> {
    let mut subs = vec![
        Substitution::token("proj_name", report.project_name.as_str()),
        Substitution::token("report_date", report.generated_at.as_str()),
    ];

    for (index, entry) in report.maintainability.iter().enumerate() {
        let row = index + 1;
        subs.push(Substitution::token(format!("m{row}"), entry.grade.as_str()));
        subs.push(Substitution::token(format!("mq{row}"), format_score(entry.score)));
        subs.push(Substitution::token(format!("mf_{row}"), entry.path.as_str()));
        subs.push(Substitution::Color {
            slot: color_slot(row)?,
            color: maintainability_color(entry.grade),
        });
    }

    let offset = report.maintainability.len();
    for (index, entry) in report.complexity.iter().enumerate() {
        let row = index + 1;
        subs.push(Substitution::token(format!("cc{row}"), entry.grade.as_str()));
        subs.push(Substitution::token(format!("ccq{row}"), entry.complexity.to_string()));
        subs.push(Substitution::token(format!("ccn{row}"), entry.name.as_str()));
        subs.push(Substitution::token(format!("ccf{row}"), base_name(&entry.path)));
        subs.push(Substitution::Color {
            slot: color_slot(row + offset)?,
            color: complexity_color(entry.grade),
        });
    }

    Ok(subs)
}

/// Replaces every placeholder in a single pass, so substituted text is
/// never scanned again. Placeholders without a substitution are left as they
/// are. In `commented` mode only the `<!-- {{ name }} -->` form of a token is
/// replaced.
pub fn fill(template: &str, subs: &[Substitution], commented: bool) -> Result<String> {
    let mut tokens = HashMap::new();
    let mut colors = HashMap::new();
    for sub in subs {
        match sub {
            Substitution::Token { name, value } => {
                tokens
                    .entry(name.as_str())
                    .or_insert_with(|| escape_xml(value));
            }
            Substitution::Color { slot, color } => {
                colors.entry(*slot).or_insert(*color);
            }
        }
    }

    let token = if commented {
        r"<!--\s*\{\{\s*(?P<token>\w+)\s*\}\}\s*-->"
    } else {
        r"\{\{\s*(?P<token>\w+)\s*\}\}"
    };
    let regex = Regex::new(&format!("{token}|(?i:#ff(?P<slot>[0-9a-f]{{2}})ff)"))
        .map_err(|e| HeliumError::Template(format!("bad placeholder pattern: {e}")))?;

    let filled = regex.replace_all(template, |caps: &Captures| {
        let replacement = match caps.name("token") {
            Some(name) => tokens.get(name.as_str()).cloned(),
            None => caps
                .name("slot")
                .and_then(|slot| u8::from_str_radix(slot.as_str(), 16).ok())
                .and_then(|slot| colors.get(&slot))
                .map(|color| (*color).to_string()),
        };
        replacement.unwrap_or_else(|| caps[0].to_string())
    });
    Ok(filled.into_owned())
}

fn color_slot(slot: usize) -> Result<u8> {
    u8::try_from(slot)
        .map_err(|_| HeliumError::Template(format!("color slot {slot} does not fit in one byte")))
}

/// Two decimals, trailing zeros dropped, at least one decimal kept.
pub fn format_score(score: f64) -> String {
    let rounded = format!("{score:.2}");
    let trimmed = rounded.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::metrics::{ComplexityEntry, FunctionKind, Grade, MaintainabilityEntry};

    fn report() -> QualityReport {
        QualityReport {
            project_name: "Billing & Co".to_string(),
            generated_at: "19/10/2026 09:30:00".to_string(),
            maintainability: vec![
                MaintainabilityEntry {
                    path: "./billing/core.py".to_string(),
                    score: 8.456,
                    grade: Grade::C,
                },
                MaintainabilityEntry {
                    path: "./billing/api.py".to_string(),
                    score: 54.3,
                    grade: Grade::A,
                },
            ],
            complexity: vec![ComplexityEntry {
                path: "./billing/core.py".to_string(),
                name: "<lambda>".to_string(),
                kind: FunctionKind::Function,
                complexity: 23,
                grade: Grade::D,
                line: Some(7),
            }],
        }
    }

    #[test]
    fn format_score_trims_like_a_rounded_float() {
        assert_eq!(format_score(54.3), "54.3");
        assert_eq!(format_score(100.0), "100.0");
        assert_eq!(format_score(8.456), "8.46");
        assert_eq!(format_score(12.999), "13.0");
    }

    #[test]
    fn substitutions_assign_color_slots_after_maintainability_rows() {
        let subs = substitutions(&report()).expect("substitutions should build");
        assert!(subs.contains(&Substitution::Color {
            slot: 1,
            color: "#800000"
        }));
        assert!(subs.contains(&Substitution::Color {
            slot: 2,
            color: "#217821"
        }));
        assert!(subs.contains(&Substitution::Color {
            slot: 3,
            color: "#C87137"
        }));
        assert!(subs.contains(&Substitution::token("ccf1", "core.py")));
        assert!(subs.contains(&Substitution::token("mq1", "8.46")));
    }

    #[test]
    fn fill_replaces_tokens_with_loose_whitespace_and_escapes_values() {
        let template = r##"<text>{{proj_name}}</text><text>{{   ccn1 }}</text><circle fill="#FF03FF"/>"##;
        let subs = substitutions(&report()).expect("substitutions should build");
        let filled = fill(template, &subs, false).expect("fill should succeed");
        assert_eq!(
            filled,
            r##"<text>Billing &amp; Co</text><text>&lt;lambda&gt;</text><circle fill="#C87137"/>"##
        );
    }

    #[test]
    fn fill_matches_token_names_exactly() {
        let template = "{{ m1 }} {{ m10 }} {{ mq1 }}";
        let subs = vec![Substitution::token("m1", "A")];
        let filled = fill(template, &subs, false).expect("fill should succeed");
        assert_eq!(filled, "A {{ m10 }} {{ mq1 }}");
    }

    #[test]
    fn fill_in_commented_mode_replaces_only_commented_tokens() {
        let template = "<!-- {{ proj_name }} --> {{ proj_name }}";
        let subs = vec![Substitution::token("proj_name", "demo")];
        let filled = fill(template, &subs, true).expect("fill should succeed");
        assert_eq!(filled, "demo {{ proj_name }}");
    }

    #[test]
    fn fill_does_not_expand_capture_references() {
        let subs = vec![Substitution::token("proj_name", "cost $1 ${name}")];
        let filled = fill("{{ proj_name }}", &subs, false).expect("fill should succeed");
        assert_eq!(filled, "cost $1 ${name}");
    }

    #[test]
    fn fill_leaves_placeholders_inside_values_untouched() {
        let subs = vec![
            Substitution::token("proj_name", "{{ m1 }} #ff02ff"),
            Substitution::token("m1", "C"),
            Substitution::Color {
                slot: 2,
                color: "#217821",
            },
        ];
        let filled = fill("{{ proj_name }}|{{ m1 }}|#FF02FF|#ff09ff", &subs, false)
            .expect("fill should succeed");
        assert_eq!(filled, "{{ m1 }} #ff02ff|C|#217821|#ff09ff");
    }

    #[test]
    fn fill_builtin_template_leaves_no_placeholders() {
        let mut full = report();
        full.maintainability.push(MaintainabilityEntry {
            path: "c.py".to_string(),
            score: 60.0,
            grade: Grade::A,
        });
        full.complexity = (0..8)
            .map(|i| ComplexityEntry {
                path: format!("pkg/mod{i}.py"),
                name: format!("func_{i}"),
                kind: FunctionKind::Method,
                complexity: 40 - i,
                grade: Grade::E,
                line: None,
            })
            .collect();
        let subs = substitutions(&full).expect("substitutions should build");
        let filled = fill(crate::template::BUILTIN_TEMPLATE, &subs, false)
            .expect("fill should succeed");
        assert!(!filled.contains("{{"));
        assert!(!filled.contains("#ff0bff"));
        assert!(filled.contains("func_7"));
    }
}
