use super::style::Style;
use crate::reference::{Handtrap, HandtrapTier, SideDeckCard};

/// Side-deck cards with role, description and usage
pub fn format_side_cards(cards: &[&SideDeckCard], style: &Style) -> String {
    if cards.is_empty() {
        return "No side-deck cards found.".to_string();
    }

    cards
        .iter()
        .map(|card| {
            let mut lines = vec![format!(
                "{} [{}]",
                style.bold(&card.name),
                card.role_label()
            )];
            if let Some(ref description) = card.description {
                lines.push(format!("  {}", description));
            }
            if let Some(ref usage) = card.usage {
                lines.push(format!("  Usage: {}", style.dimmed(usage)));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Handtrap tier list, S through C
pub fn format_handtrap_list(
    list: &[(HandtrapTier, Vec<&Handtrap>)],
    style: &Style,
) -> String {
    if list.iter().all(|(_, members)| members.is_empty()) {
        return "No handtraps found.".to_string();
    }

    list.iter()
        .map(|(tier, members)| {
            let mut lines = vec![style.handtrap_tier(*tier, &format!("{} tier", tier))];
            if members.is_empty() {
                lines.push(style.dimmed("  (none)"));
            }
            for card in members {
                lines.push(format!("  - {}", card.name));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::handtrap_tier_list;

    fn card(name: &str, role: &str, usage: Option<&str>) -> SideDeckCard {
        SideDeckCard {
            name: name.to_string(),
            card_type: role.to_string(),
            description: Some("Negates search effects.".to_string()),
            usage: usage.map(String::from),
            image: None,
        }
    }

    #[test]
    fn test_format_side_cards_empty() {
        assert_eq!(
            format_side_cards(&[], &Style::plain()),
            "No side-deck cards found."
        );
    }

    #[test]
    fn test_format_side_cards() {
        let ash = card("Ash Blossom & Joyous Spring", "handtrap", Some("95% of decks"));
        let evenly = card("Evenly Matched", "board-breaker", None);
        let result = format_side_cards(&[&ash, &evenly], &Style::plain());
        assert!(result.starts_with("Ash Blossom & Joyous Spring [Handtrap]"));
        assert!(result.contains("  Usage: 95% of decks"));
        assert!(result.contains("Evenly Matched [Board Breaker]"));
        assert_eq!(result.matches("Usage:").count(), 1);
    }

    #[test]
    fn test_format_handtrap_list() {
        let cards = vec![
            Handtrap {
                name: "Ash Blossom & Joyous Spring".to_string(),
                tier: "S".to_string(),
                image: None,
                formats: None,
            },
            Handtrap {
                name: "Ghost Belle & Haunted Mansion".to_string(),
                tier: "B".to_string(),
                image: None,
                formats: None,
            },
        ];
        let list = handtrap_tier_list(&cards, None);
        let result = format_handtrap_list(&list, &Style::plain());
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[0], "S tier");
        assert_eq!(lines[1], "  - Ash Blossom & Joyous Spring");
        assert_eq!(lines[2], "A tier");
        assert_eq!(lines[3], "  (none)");
        assert!(result.contains("  - Ghost Belle & Haunted Mansion"));
    }

    #[test]
    fn test_format_handtrap_list_empty() {
        let list = handtrap_tier_list(&[], None);
        assert_eq!(
            format_handtrap_list(&list, &Style::plain()),
            "No handtraps found."
        );
    }
}
