//! Turns the unordered bag of recognized nameplate lines into a best-guess
//! machine name and a remaining info blob.

use std::cmp::Ordering;

use crate::CONFIDENCE_THRESHOLD;
use crate::domain::nameplate::{Classification, TextHit};

/// Keyword groups that mark a line as a likely machine name, highest
/// priority first. A group is exhausted over every line before the next
/// group is tried.
const NAME_KEYWORD_GROUPS: [&[&str]; 8] = [
    &["型号", "Model"],
    &["编号", "No.", "NO."],
    &["名称", "Name"],
    &["设备", "Equipment"],
    &["机", "Machine"],
    &["变压器", "Transformer"],
    &["开关", "Switch"],
    &["断路器", "Breaker"],
];

/// Longest line (in characters) still plausible as a name on its own.
const MAX_NAME_LEN: usize = 30;

/// Classifies recognizer output into name/info fields.
///
/// Lines at or below [`CONFIDENCE_THRESHOLD`] are dropped, the rest are
/// ordered by confidence descending (ties keep recognizer order) and joined
/// into `full_text`. The reported confidence is the minimum over the raw,
/// unfiltered hits, or 0.5 when there were none. Pure and total: any input
/// sequence, including the empty one, yields a result.
pub fn classify(hits: &[TextHit]) -> Classification {
    let confidence = hits
        .iter()
        .map(|hit| hit.confidence)
        .reduce(f32::min)
        .unwrap_or(0.5);

    let mut ordered: Vec<&TextHit> = hits
        .iter()
        .filter(|hit| hit.confidence > CONFIDENCE_THRESHOLD)
        .collect();
    // sort_by is stable, so equal confidences keep recognizer order
    ordered.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    let lines: Vec<&str> = ordered.iter().map(|hit| hit.text.as_str()).collect();
    let full_text = lines.join("\n");

    let machine_name = select_name(&lines);
    let machine_info = assemble_info(&lines, &machine_name, &full_text);

    Classification {
        full_text,
        machine_name,
        machine_info,
        confidence,
    }
}

fn select_name(lines: &[&str]) -> String {
    for keywords in NAME_KEYWORD_GROUPS {
        if let Some(line) = lines
            .iter()
            .find(|line| keywords.iter().any(|keyword| line.contains(keyword)))
        {
            return (*line).to_string();
        }
    }

    // No keyword anywhere: prefer the first short line, then the first line.
    if let Some(line) = lines
        .iter()
        .find(|line| line.chars().count() <= MAX_NAME_LEN)
    {
        return (*line).to_string();
    }

    lines.first().map(|line| (*line).to_string()).unwrap_or_default()
}

fn assemble_info(lines: &[&str], machine_name: &str, full_text: &str) -> String {
    if lines.is_empty() {
        return String::new();
    }

    // Membership is exact-line equality, never substring: a name that also
    // occurs inside a longer line must not drag that line out of the info.
    if !machine_name.is_empty() && lines.iter().any(|line| *line == machine_name) {
        let remaining: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| *line != machine_name)
            .collect();
        if remaining.is_empty() {
            full_text.to_string()
        } else {
            remaining.join("\n")
        }
    } else if lines.len() > 1 {
        lines[1..].join("\n")
    } else {
        full_text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::domain::nameplate::TextHit;

    fn hits(raw: &[(&str, f32)]) -> Vec<TextHit> {
        raw.iter()
            .map(|(text, confidence)| TextHit::new(*text, *confidence))
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let result = classify(&[]);

        assert_eq!(result.full_text, "");
        assert_eq!(result.machine_name, "");
        assert_eq!(result.machine_info, "");
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn orders_full_text_by_confidence_descending() {
        let input = hits(&[("b", 0.5), ("a", 0.9), ("c", 0.7)]);

        let result = classify(&input);

        assert_eq!(result.full_text, "a\nc\nb");
    }

    #[test]
    fn equal_confidences_keep_recognizer_order() {
        let input = hits(&[("first", 0.8), ("second", 0.8), ("third", 0.8)]);

        let result = classify(&input);

        assert_eq!(result.full_text, "first\nsecond\nthird");
    }

    #[test]
    fn keyword_group_order_beats_confidence_order() {
        // 型号 is a higher-priority group than 编号, even on a weaker line.
        let input = hits(&[("编号 A-1", 0.95), ("型号 T-500", 0.4)]);

        let result = classify(&input);

        assert_eq!(result.machine_name, "型号 T-500");
        assert_eq!(result.machine_info, "编号 A-1");
    }

    #[test]
    fn earlier_keyword_group_wins_over_later_groups() {
        let input = hits(&[
            ("开关 SF6 断路器", 0.95),
            ("编号: A-102", 0.88),
            ("出厂日期 2020", 0.4),
        ]);

        let result = classify(&input);

        assert_eq!(result.full_text, "开关 SF6 断路器\n编号: A-102\n出厂日期 2020");
        assert_eq!(result.machine_name, "编号: A-102");
        assert_eq!(result.machine_info, "开关 SF6 断路器\n出厂日期 2020");
        assert!((result.confidence - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn falls_back_to_first_short_line_without_keywords() {
        let input = hits(&[
            ("THIS LINE IS WAY TOO LONG TO PASS FOR A LABEL", 0.9),
            ("XJ-2000", 0.8),
            ("220kV 50Hz", 0.7),
        ]);

        let result = classify(&input);

        assert_eq!(result.machine_name, "XJ-2000");
        assert_eq!(
            result.machine_info,
            "THIS LINE IS WAY TOO LONG TO PASS FOR A LABEL\n220kV 50Hz"
        );
    }

    #[test]
    fn falls_back_to_first_line_when_all_lines_are_long() {
        let long_a = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        let long_b = "9876543210ZYXWVUTSRQPONMLKJIHGFEDCBA";
        let input = hits(&[(long_a, 0.9), (long_b, 0.8)]);

        let result = classify(&input);

        assert_eq!(result.machine_name, long_a);
        assert_eq!(result.machine_info, long_b);
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 12 CJK characters, 36 bytes: still a short line.
        let cjk = "高压柜高压柜高压柜高压柜";
        let input = hits(&[(cjk, 0.9)]);

        let result = classify(&input);

        assert_eq!(result.machine_name, cjk);
    }

    #[test]
    fn info_excludes_exact_name_line_only() {
        // The chosen name also occurs inside a longer line; that line stays.
        let input = hits(&[("型号 T-500", 0.9), ("型号 T-500 出厂编号 77", 0.8)]);

        let result = classify(&input);

        assert_eq!(result.machine_name, "型号 T-500");
        assert_eq!(result.machine_info, "型号 T-500 出厂编号 77");
    }

    #[test]
    fn info_drops_every_duplicate_of_the_name_line() {
        let input = hits(&[("设备柜", 0.9), ("设备柜", 0.8), ("500kV", 0.7)]);

        let result = classify(&input);

        assert_eq!(result.machine_name, "设备柜");
        assert_eq!(result.machine_info, "500kV");
    }

    #[test]
    fn info_falls_back_to_full_text_when_nothing_remains() {
        let input = hits(&[("变压器", 0.9)]);

        let result = classify(&input);

        assert_eq!(result.machine_name, "变压器");
        assert_eq!(result.machine_info, "变压器");
    }

    #[test]
    fn confidence_is_minimum_over_raw_hits_even_below_threshold() {
        let input = hits(&[("ABC", 0.2)]);

        let result = classify(&input);

        assert_eq!(result.full_text, "");
        assert_eq!(result.machine_name, "");
        assert_eq!(result.machine_info, "");
        assert!((result.confidence - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn filtered_lines_never_reach_full_text_but_count_for_confidence() {
        let input = hits(&[("名称 主变", 0.9), ("smudge", 0.1)]);

        let result = classify(&input);

        assert_eq!(result.full_text, "名称 主变");
        assert!((result.confidence - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn classify_is_idempotent() {
        let input = hits(&[("编号 9", 0.6), ("开关柜", 0.6)]);

        assert_eq!(classify(&input), classify(&input));
    }
}
