use crate::models::idea::Idea;

/// `#` + lower-cased text with all whitespace dropped. No other sanitizing.
pub fn hashtag(text: &str) -> String {
    let token: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("#{}", token)
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// Three templated ideas for `niche`, deterministic in its inputs.
pub fn ideas(niche: &str, trend: Option<&str>) -> Vec<Idea> {
    let niche_tag = hashtag(niche);
    let trend_text = trend.map(|t| format!(" about {}", t)).unwrap_or_default();
    let closing_tag = trend.map(hashtag).unwrap_or_else(|| "#tips".to_string());

    let secret_hook = format!("\"Stop! If you're into {}, you NEED to see this...\"", niche);
    let day_hook = "\"Day 1 vs Day 30... I can't believe what happened\"".to_string();
    let mistakes_hook = format!("\"If you're doing THIS in {}, STOP immediately!\"", niche);

    let mut first_tags = tags(&["#shorts"]);
    first_tags.push(niche_tag.clone());
    first_tags.extend(tags(&["#viral", "#fyp", "#trending"]));
    first_tags.push(closing_tag);

    let mut second_tags = tags(&["#shorts"]);
    second_tags.push(niche_tag.clone());
    second_tags.extend(tags(&["#transformation", "#beforeandafter", "#challenge", "#results"]));

    let mut third_tags = tags(&["#shorts"]);
    third_tags.push(niche_tag);
    third_tags.extend(tags(&["#mistakes", "#tips", "#howto", "#tutorial", "#learn"]));

    vec![
        Idea {
            title: format!("{} Secret Nobody Tells You{}! 🤯", niche, trend_text),
            script: format!(
                "Hook: {}\n\n\
                 Main Content:\n\
                 - Show the problem most people face in {}\n\
                 - Reveal the shocking truth or hidden technique\n\
                 - Demonstrate quick results or transformation\n\
                 - Share 3 actionable tips viewers can use TODAY\n\n\
                 CTA: \"Follow for more {} secrets! Comment 'YES' if this helped!\"",
                secret_hook, niche, niche
            ),
            hook: secret_hook,
            hashtags: first_tags,
            viral_score: 8,
        },
        Idea {
            title: format!("I Tried This {} Hack For 30 Days... 😱", niche),
            script: format!(
                "Hook: {}\n\n\
                 Main Content:\n\
                 - Quick montage of Day 1 (showing struggle)\n\
                 - Fast forward through the journey\n\
                 - Reveal Day 30 results (dramatic reveal)\n\
                 - Share the exact method you used\n\
                 - Show before/after comparison\n\n\
                 CTA: \"Want the full tutorial? Check my bio! 🔥\"",
                day_hook
            ),
            hook: day_hook,
            hashtags: second_tags,
            viral_score: 9,
        },
        Idea {
            title: format!("{} Mistakes Killing Your Results! ❌", niche),
            script: format!(
                "Hook: {}\n\n\
                 Main Content:\n\
                 - Mistake #1: [Common error] - Why it's wrong\n\
                 - Mistake #2: [Another error] - What to do instead\n\
                 - Mistake #3: [Final error] - The correct approach\n\
                 - Quick recap with on-screen text\n\
                 - Bonus tip for engagement\n\n\
                 CTA: \"Which mistake were YOU making? Comment below! 👇\"",
                mistakes_hook
            ),
            hook: mistakes_hook,
            hashtags: third_tags,
            viral_score: 7,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashtag_lowercases_and_drops_whitespace() {
        assert_eq!(hashtag("Tech Reviews"), "#techreviews");
        assert_eq!(hashtag("  Morning \t Routines "), "#morningroutines");
    }

    #[test]
    fn hashtag_keeps_special_characters() {
        assert_eq!(hashtag("C++ & Rust"), "#c++&rust");
    }

    #[test]
    fn three_ideas_with_fixed_scores() {
        let ideas = ideas("fitness", None);
        let scores: Vec<u8> = ideas.iter().map(|i| i.viral_score).collect();
        assert_eq!(scores, vec![8, 9, 7]);
        for idea in &ideas {
            assert!(idea.validate().is_ok());
            assert_eq!(idea.hashtags[1], "#fitness");
        }
    }

    #[test]
    fn no_trend_ends_with_tips() {
        let ideas = ideas("fitness", None);
        assert_eq!(ideas[0].hashtags.last().unwrap(), "#tips");
        assert_eq!(ideas[0].title, "fitness Secret Nobody Tells You! 🤯");
    }

    #[test]
    fn trend_replaces_tips_on_first_idea_only() {
        let ideas = ideas("fitness", Some("morning routines"));
        assert_eq!(ideas[0].hashtags.last().unwrap(), "#morningroutines");
        assert!(!ideas[0].hashtags.contains(&"#tips".to_string()));
        assert_eq!(
            ideas[0].title,
            "fitness Secret Nobody Tells You about morning routines! 🤯"
        );
        assert_eq!(ideas[1].hashtags.last().unwrap(), "#results");
    }

    #[test]
    fn script_opens_with_hook() {
        for idea in ideas("cooking", None) {
            assert!(idea.script.starts_with(&format!("Hook: {}", idea.hook)));
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(ideas("tech", Some("AI tools")), ideas("tech", Some("AI tools")));
    }
}
