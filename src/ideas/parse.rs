use regex::Regex;
use std::sync::OnceLock;

use crate::models::idea::Idea;

use super::IDEA_COUNT;

fn bracket_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Greedy: first '[' through the last ']' in the reply.
    RE.get_or_init(|| Regex::new(r"\[[\s\S]*\]").expect("static pattern"))
}

/// Find the JSON array a model embedded in its free-text reply.
pub fn extract_json_array(text: &str) -> Option<&str> {
    bracket_span().find(text).map(|m| m.as_str())
}

/// Decode a model reply into exactly `IDEA_COUNT` valid ideas.
pub fn decode_ideas(text: &str) -> Result<Vec<Idea>, String> {
    log::debug!("[ideas] raw reply: {}", truncate(text, 500));

    let span = extract_json_array(text).ok_or("no JSON array in reply")?;
    let ideas: Vec<Idea> =
        serde_json::from_str(span).map_err(|e| format!("reply does not match idea schema: {}", e))?;

    if ideas.len() != IDEA_COUNT {
        return Err(format!("expected {} ideas, got {}", IDEA_COUNT, ideas.len()));
    }
    for (i, idea) in ideas.iter().enumerate() {
        idea.validate().map_err(|e| format!("idea {}: {}", i + 1, e))?;
    }
    Ok(ideas)
}

fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea_json(title: &str, score: i64) -> String {
        format!(
            r##"{{"title": "{}", "hook": "h", "script": "s", "hashtags": ["#a"], "viralScore": {}}}"##,
            title, score
        )
    }

    fn reply(ideas: &[String]) -> String {
        format!(
            "Here are your ideas:\n```json\n[{}]\n```\nEnjoy!",
            ideas.join(",")
        )
    }

    #[test]
    fn span_is_greedy() {
        let text = "a [1] b [2] c";
        assert_eq!(extract_json_array(text), Some("[1] b [2]"));
    }

    #[test]
    fn span_crosses_lines() {
        assert_eq!(extract_json_array("x\n[\n1\n]\ny"), Some("[\n1\n]"));
    }

    #[test]
    fn no_span() {
        assert!(extract_json_array("no brackets here").is_none());
        assert!(extract_json_array("] backwards [").is_none());
    }

    #[test]
    fn decodes_three_ideas_in_prose() {
        let text = reply(&[idea_json("A", 8), idea_json("B", 9), idea_json("C", 7)]);
        let ideas = decode_ideas(&text).unwrap();
        assert_eq!(ideas.len(), 3);
        assert_eq!(ideas[1].title, "B");
        assert_eq!(ideas[2].viral_score, 7);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let extra = r##"{"title": "A", "hook": "h", "script": "s", "hashtags": ["#a"], "viralScore": 5, "music": "lofi"}"##;
        let text = reply(&[extra.to_string(), idea_json("B", 9), idea_json("C", 7)]);
        assert!(decode_ideas(&text).is_ok());
    }

    #[test]
    fn wrong_count_rejected() {
        let text = reply(&[idea_json("A", 8), idea_json("B", 9)]);
        assert!(decode_ideas(&text).is_err());
    }

    #[test]
    fn out_of_range_score_rejected() {
        let text = reply(&[idea_json("A", 11), idea_json("B", 9), idea_json("C", 7)]);
        assert!(decode_ideas(&text).is_err());
        let text = reply(&[idea_json("A", -1), idea_json("B", 9), idea_json("C", 7)]);
        assert!(decode_ideas(&text).is_err());
    }

    #[test]
    fn wrong_types_rejected() {
        let bad = r##"{"title": "A", "hook": "h", "script": "s", "hashtags": "#a", "viralScore": 5}"##;
        let text = reply(&[bad.to_string(), idea_json("B", 9), idea_json("C", 7)]);
        assert!(decode_ideas(&text).is_err());

        let bad = r##"{"title": "A", "hook": "h", "script": "s", "hashtags": ["#a"], "viralScore": "8"}"##;
        let text = reply(&[bad.to_string(), idea_json("B", 9), idea_json("C", 7)]);
        assert!(decode_ideas(&text).is_err());
    }

    #[test]
    fn missing_field_rejected() {
        let bad = r##"{"title": "A", "hook": "h", "hashtags": ["#a"], "viralScore": 5}"##;
        let text = reply(&[bad.to_string(), idea_json("B", 9), idea_json("C", 7)]);
        assert!(decode_ideas(&text).is_err());
    }

    #[test]
    fn not_json_rejected() {
        assert!(decode_ideas("[this is not json]").is_err());
        assert!(decode_ideas("Sorry, I can't help with that.").is_err());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "h");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
