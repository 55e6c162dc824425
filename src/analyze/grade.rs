use crate::types::metrics::Grade;

/// Upper bounds (exclusive) for each complexity grade; anything past the last
/// bound is an F.
const COMPLEXITY_BOUNDS: [(u32, Grade); 5] = [
    (6, Grade::A),
    (11, Grade::B),
    (21, Grade::C),
    (31, Grade::D),
    (41, Grade::E),
];

pub fn grade_complexity(complexity: u32) -> Grade {
    COMPLEXITY_BOUNDS
        .iter()
        .find(|(bound, _)| complexity < *bound)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

pub fn grade_maintainability(score: f64) -> Grade {
    if score > 19.0 {
        Grade::A
    } else if score > 9.0 {
        Grade::B
    } else {
        Grade::C
    }
}

/// Highlight color for a maintainability grade. Grades past C share C's color.
pub fn maintainability_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "#217821",
        Grade::B => "#D45500",
        _ => "#800000",
    }
}

pub fn complexity_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "#217821",
        Grade::B => "#D4AA00",
        Grade::C => "#D45500",
        Grade::D => "#C87137",
        Grade::E => "#A02C2C",
        Grade::F => "#800000",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_grade_boundaries() {
        let cases = [
            (0, Grade::A),
            (5, Grade::A),
            (6, Grade::B),
            (10, Grade::B),
            (11, Grade::C),
            (20, Grade::C),
            (21, Grade::D),
            (30, Grade::D),
            (31, Grade::E),
            (40, Grade::E),
            (41, Grade::F),
            (250, Grade::F),
        ];
        for (complexity, expected) in cases {
            assert_eq!(grade_complexity(complexity), expected, "complexity {complexity}");
        }
    }

    #[test]
    fn maintainability_grade_boundaries() {
        assert_eq!(grade_maintainability(100.0), Grade::A);
        assert_eq!(grade_maintainability(19.01), Grade::A);
        assert_eq!(grade_maintainability(19.0), Grade::B);
        assert_eq!(grade_maintainability(9.5), Grade::B);
        assert_eq!(grade_maintainability(9.0), Grade::C);
        assert_eq!(grade_maintainability(0.0), Grade::C);
    }

    #[test]
    fn colors_follow_grade_tables() {
        assert_eq!(maintainability_color(Grade::A), "#217821");
        assert_eq!(maintainability_color(Grade::C), "#800000");
        assert_eq!(complexity_color(Grade::B), "#D4AA00");
        assert_eq!(complexity_color(Grade::D), "#C87137");
        assert_eq!(complexity_color(Grade::F), "#800000");
    }
}
