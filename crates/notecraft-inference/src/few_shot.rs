//! Few-shot examples anchoring the extraction output format.
//!
//! Three worked examples are embedded in every extraction prompt: a relative
//! date with a time, a different relative-date phrasing, and a description
//! with no date at all. Together they pin down the field names, the null
//! handling, and date arithmetic against a stated "today".

use serde_json::{json, Value};

/// A single worked input/output pair.
#[derive(Debug, Clone)]
pub struct FewShotExample {
    /// Free-text description as a user would type it.
    pub input: &'static str,
    /// The "today" the example's date arithmetic is relative to, if any.
    pub today: Option<&'static str>,
    /// The exact JSON the model is expected to emit.
    pub output: Value,
}

/// The canonical extraction examples, in prompt order.
pub fn extraction_examples() -> Vec<FewShotExample> {
    vec![
        FewShotExample {
            input: "Badminton tmr 5pm @polyu",
            today: Some("Monday, January 15, 2024"),
            output: json!({
                "Title": "Badminton at PolyU",
                "Notes": "Remember to play badminton at 5pm tomorrow at PolyU.",
                "Tags": ["badminton", "sports"],
                "EventDate": "2024-01-16",
                "EventTime": "17:00"
            }),
        },
        FewShotExample {
            input: "Team meeting next Monday at 2pm to discuss Q4 goals",
            today: Some("Wednesday, January 10, 2024"),
            output: json!({
                "Title": "Q4 Team Meeting",
                "Notes": "Team meeting scheduled for next Monday at 2pm to discuss Q4 goals.",
                "Tags": ["meeting", "Q4", "team"],
                "EventDate": "2024-01-15",
                "EventTime": "14:00"
            }),
        },
        FewShotExample {
            input: "Remember to buy groceries",
            today: None,
            output: json!({
                "Title": "Buy Groceries",
                "Notes": "Remember to buy groceries.",
                "Tags": ["shopping", "groceries"],
                "EventDate": null,
                "EventTime": null
            }),
        },
    ]
}

/// Render examples as a prompt section.
pub fn render_examples(examples: &[FewShotExample]) -> String {
    let mut out = String::new();
    for (i, example) in examples.iter().enumerate() {
        out.push_str(&format!("Example {}:\n", i + 1));
        match example.today {
            Some(today) => out.push_str(&format!(
                "Input: \"{}\" (assuming today is {})\n",
                example.input, today
            )),
            None => out.push_str(&format!("Input: \"{}\"\n", example.input)),
        }
        let rendered =
            serde_json::to_string_pretty(&example.output).unwrap_or_else(|_| "{}".to_string());
        out.push_str(&format!("Output:\n{}\n\n", rendered));
    }
    out
}
