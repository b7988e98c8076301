//! Title and slug derivation for snapshot filenames.

const MAX_SLUG_LEN: usize = 50;
const MAX_TITLE_WORDS: usize = 10;

/// Derive a title from a rendered transcript: the first line of the
/// first user message, capped to a few words.
pub fn extract_title(content: &str) -> String {
    for block in content.split("\n\n----\n\n") {
        if let Some(body) = block.strip_prefix("User: \n\n") {
            let first_line = body.lines().next().unwrap_or("").trim();
            let words: Vec<&str> = first_line.split_whitespace().collect();
            if !words.is_empty() {
                return words[..words.len().min(MAX_TITLE_WORDS)].join(" ");
            }
        }
    }
    "Untitled Chat".to_string()
}

/// URL-friendly slug: lowercase, word characters kept, runs of
/// whitespace/underscores/hyphens collapsed to one hyphen, trimmed and
/// length-capped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut pending_hyphen = false;
    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '_' || c == '-' {
            pending_hyphen = true;
        }
        // Everything else is stripped outright.
    }
    if slug.chars().count() > MAX_SLUG_LEN {
        slug = slug.chars().take(MAX_SLUG_LEN).collect();
    }
    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        "untitled-chat".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_comes_from_the_first_user_message() {
        let content = "Assistant: \n\ngreeting\n\n----\n\nUser: \n\nPlan a weekend trip to the coast\nmore";
        assert_eq!(extract_title(content), "Plan a weekend trip to the coast");
    }

    #[test]
    fn title_caps_the_word_count() {
        let content = "User: \n\none two three four five six seven eight nine ten eleven twelve";
        assert_eq!(
            extract_title(content),
            "one two three four five six seven eight nine ten"
        );
    }

    #[test]
    fn missing_user_message_is_untitled() {
        assert_eq!(extract_title("Assistant: \n\nhello"), "Untitled Chat");
        assert_eq!(extract_title(""), "Untitled Chat");
    }

    #[test]
    fn slugs_collapse_separators_and_strip_punctuation() {
        assert_eq!(slugify("Plan a weekend trip!"), "plan-a-weekend-trip");
        assert_eq!(slugify("under_score  and --- dashes"), "under-score-and-dashes");
        assert_eq!(slugify("???"), "untitled-chat");
        assert_eq!(slugify(""), "untitled-chat");
    }

    #[test]
    fn slugs_are_length_capped() {
        let long = "word ".repeat(30);
        assert!(slugify(&long).len() <= 50);
    }
}
