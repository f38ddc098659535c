/// System prompt for idea generation
pub fn ideas_system() -> String {
    "You are a viral YouTube Shorts expert. \
     Always respond with a valid JSON array as specified. Do not include markdown fences or explanations outside the JSON."
        .to_string()
}

/// Ask for three short-form video ideas for a niche, optionally tied to a trend
pub fn viral_ideas(niche: &str, trend: Option<&str>) -> String {
    let trend_line = match trend {
        Some(t) => format!("Current Trend: {}\n", t),
        None => String::new(),
    };
    format!(
        "Generate 3 highly viral video ideas for the following:\n\n\
         Niche: {}\n\
         {}\n\
         For each idea, provide:\n\
         1. A catchy, clickbait-worthy title (under 60 characters)\n\
         2. A powerful hook for the first 3 seconds that stops scrolling\n\
         3. A complete script outline (30-60 seconds worth of content)\n\
         4. 5-8 relevant hashtags\n\
         5. A viral score from 1-10 based on current trends\n\n\
         Format your response as a JSON array with this structure:\n\
         [\n  {{\n    \"title\": \"...\",\n    \"hook\": \"...\",\n    \"script\": \"...\",\n    \
         \"hashtags\": [\"#...\", \"#...\"],\n    \"viralScore\": 8\n  }}\n]\n\n\
         Make the ideas highly engaging, trend-focused, and optimized for maximum views and engagement.",
        niche, trend_line
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_niche() {
        let p = viral_ideas("home cooking", None);
        assert!(p.contains("Niche: home cooking\n"));
        assert!(!p.contains("Current Trend:"));
    }

    #[test]
    fn embeds_trend_when_present() {
        let p = viral_ideas("fitness", Some("morning routines"));
        assert!(p.contains("Niche: fitness\nCurrent Trend: morning routines\n"));
    }

    #[test]
    fn names_every_field() {
        let p = viral_ideas("tech", None);
        for field in ["\"title\"", "\"hook\"", "\"script\"", "\"hashtags\"", "\"viralScore\""] {
            assert!(p.contains(field), "missing {}", field);
        }
    }
}
