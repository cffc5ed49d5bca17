use crate::model::habit::Habit;

use super::CodecError;

/// Parse the habit file: one JSON object per line, in list order.
///
/// Every line must hold a complete record. The first bad line aborts the
/// whole parse so records are never silently dropped.
pub fn parse_habits(source: &str) -> Result<Vec<Habit>, CodecError> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str::<Habit>(line).map_err(|e| CodecError::Habit {
                line: i + 1,
                source: e,
            })
        })
        .collect()
}

/// Serialize habits one compact JSON object per line, each line newline-terminated.
pub fn serialize_habits(habits: &[Habit]) -> Result<String, CodecError> {
    let mut out = String::new();
    for habit in habits {
        out.push_str(&serde_json::to_string(habit)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::habit::Weekday;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Habit> {
        vec![
            Habit {
                name: "Stretch".into(),
                note: "10 minutes".into(),
                weekdays: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
                highlight: true,
                checked: false,
            },
            Habit {
                name: "Journal \"daily\"".into(),
                note: String::new(),
                weekdays: vec![Weekday::Sat, Weekday::Sun],
                highlight: false,
                checked: true,
            },
        ]
    }

    #[test]
    fn serialize_one_record_per_line() {
        let text = serialize_habits(&sample()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"name":"Stretch","note":"10 minutes","weekdays":["Mon","Wed","Fri"],"highlight":true,"checked":false}"#
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn parse_what_was_written() {
        let habits = sample();
        let text = serialize_habits(&habits).unwrap();
        assert_eq!(parse_habits(&text).unwrap(), habits);
    }

    #[test]
    fn parse_spaced_json_layout() {
        // Layout written by other JSON encoders, e.g. `", "` separators
        let text = "{\"name\": \"Walk\", \"note\": \"\", \"weekdays\": [\"Sun\", \"Tue\"], \"highlight\": false, \"checked\": true}\n";
        let habits = parse_habits(text).unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Walk");
        assert_eq!(habits[0].weekdays, vec![Weekday::Sun, Weekday::Tue]);
        assert!(habits[0].checked);
    }

    #[test]
    fn parse_keeps_weekday_file_order() {
        let text = r#"{"name":"a","note":"","weekdays":["Fri","Mon"],"highlight":false,"checked":false}"#;
        let habits = parse_habits(text).unwrap();
        assert_eq!(habits[0].weekdays, vec![Weekday::Fri, Weekday::Mon]);
    }

    #[test]
    fn parse_empty_source() {
        assert!(parse_habits("").unwrap().is_empty());
    }

    #[test]
    fn parse_crlf_lines() {
        let text = "{\"name\":\"a\",\"note\":\"\",\"weekdays\":[],\"highlight\":false,\"checked\":false}\r\n";
        assert_eq!(parse_habits(text).unwrap().len(), 1);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let good = r#"{"name":"a","note":"","weekdays":[],"highlight":false,"checked":false}"#;
        let text = format!("{}\n{{not json\n{}\n", good, good);
        match parse_habits(&text) {
            Err(CodecError::Habit { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected habit error, got {:?}", other),
        }
    }

    #[test]
    fn blank_line_is_an_error() {
        let good = r#"{"name":"a","note":"","weekdays":[],"highlight":false,"checked":false}"#;
        let text = format!("{}\n\n{}\n", good, good);
        assert!(matches!(
            parse_habits(&text),
            Err(CodecError::Habit { line: 2, .. })
        ));
    }
}
