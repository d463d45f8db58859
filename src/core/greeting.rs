use crate::core::setup::ChaosLevel;

/// Coach text substituted for any reply that could not be delivered.
pub const FALLBACK_REPLY: &str =
    "🦃 Oh no! The turkey got loose and unplugged the WiFi. Try again!";

/// Scripted opening line for a freshly mounted chat session.
pub fn greeting(family_count: u32, chaos_level: ChaosLevel) -> String {
    format!(
        "{} Hey there, chaos coordinator! Welcome to the hot mess. I see you've got \
         {family_count} family members coming and we're operating at {chaos_level} chaos level. \
         Don't worry – I've survived worse (probably). What's the first crisis we need to tackle?",
        chaos_level.emoji()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_interpolates_count_level_and_emoji() {
        let text = greeting(12, ChaosLevel::Medium);
        assert!(text.starts_with("😅 "));
        assert!(text.contains("12 family members"));
        assert!(text.contains("medium chaos level"));
    }

    #[test]
    fn greeting_emoji_follows_chaos_level() {
        assert!(greeting(5, ChaosLevel::Zen).starts_with("☮️"));
        assert!(greeting(30, ChaosLevel::Chaotic).starts_with("🚨"));
    }

    #[test]
    fn greeting_is_deterministic() {
        assert_eq!(
            greeting(21, ChaosLevel::Chaotic),
            greeting(21, ChaosLevel::Chaotic)
        );
    }
}
