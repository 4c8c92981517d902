//! Human-readable rendering of a difference list.

use crate::diff::model::Difference;

/// Render a list of differences as a dump block.
///
/// ```text
/// (differences) (len=2) {
///  "slice[0]: 1 != 2",
///  "slice[2]: 3 != 1"
/// }
/// ```
pub fn render_differences(differences: &[Difference]) -> String {
    let mut out = format!("(differences) (len={}) ", differences.len());
    if differences.is_empty() {
        out.push_str("{}");
        return out;
    }
    out.push_str("{\n");
    let lines: Vec<String> = differences
        .iter()
        .map(|d| format!(" {:?}", d.to_string()))
        .collect();
    out.push_str(&lines.join(",\n"));
    out.push_str("\n}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(render_differences(&[]), "(differences) (len=0) {}");
    }

    #[test]
    fn test_entries_are_listed_in_order() {
        let rendered = render_differences(&[
            Difference::new("slice[0]", "1", "2"),
            Difference::new("slice[2]", "3", "1"),
        ]);
        assert_eq!(
            rendered,
            "(differences) (len=2) {\n \"slice[0]: 1 != 2\",\n \"slice[2]: 3 != 1\"\n}"
        );
    }
}
