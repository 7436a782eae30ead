use crate::types::MatchPercent;

/// Renders a fixed-width bar whose filled portion is proportional to the match percentage.
pub fn render_match_bar(match_percent: MatchPercent, width: usize) -> String {
    let filled = (usize::from(match_percent.min(100)) * width) / 100;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_match_bar() {
        assert_eq!(render_match_bar(50, 10), "[█████░░░░░]");
        assert_eq!(render_match_bar(0, 4), "[░░░░]");
        assert_eq!(render_match_bar(100, 4), "[████]");
    }
}
