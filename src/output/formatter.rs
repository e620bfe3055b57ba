use super::style::{get_terminal_width, truncate, Style};
use crate::compare::{Comparison, Winner};
use crate::data::MetaData;
use crate::deck::{
    difficulty_label, going_label, recommendation_stars, score_rating, simple_recommendation,
    stars, stat_description, DeckRecord, Going,
};
use crate::meta::{average_score, tier_percentages, top_tier_count, MetaSummary, RankedDeck};
use crate::scoring::{Favored, MatchupVerdict, ScoreResult};

/// Format a score, appending an asterisk when the performance profile was defaulted
pub fn format_score(score: i64, incomplete: bool) -> String {
    if incomplete {
        format!("{}*", score)
    } else {
        score.to_string()
    }
}

fn format_optional_score(result: Option<&ScoreResult>) -> String {
    match result {
        Some(r) => format_score(r.score, r.incomplete),
        None => "-".to_string(),
    }
}

fn one_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "N/A".to_string(),
    }
}

fn percent(value: Option<i64>) -> String {
    match value {
        Some(v) => format!("{}%", v),
        None => "N/A".to_string(),
    }
}

fn rating_stars(rating: i32) -> String {
    stars(u8::try_from(rating).unwrap_or(0), 5)
}

/// Fit a name column to the terminal, leaving `fixed_width` for the other columns
fn fit_name(name: &str, fixed_width: usize, term_width: Option<usize>) -> String {
    match term_width {
        Some(width) if width > fixed_width + 10 => truncate(name, width - fixed_width),
        Some(_) => truncate(name, 20),
        None => name.to_string(),
    }
}

/// Browse list: Index, Score, Name, Tier, Type
///
/// Decks that cannot be scored show "-" in the score column.
pub fn format_deck_list(data: &MetaData, decks: &[&DeckRecord], style: &Style) -> String {
    if decks.is_empty() {
        return "No decks found.".to_string();
    }

    let term_width = get_terminal_width();
    let score_width = 4;
    let separator = "  ";

    decks
        .iter()
        .enumerate()
        .map(|(idx, deck)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score = data.score(&deck.name);
            let score_padded = format!(
                "{:>width$}",
                format_optional_score(score.as_ref()),
                width = score_width
            );
            let suffix = format!("{} / {}", deck.tier_label(), deck.type_label());
            let fixed_width = 3 + 1 + score_width + separator.len() * 2 + suffix.len();
            let name = fit_name(&deck.name, fixed_width, term_width);

            format!(
                "{} {}{}{}{}{}",
                style.dimmed(&index_str),
                style.bold(&score_padded),
                separator,
                name,
                separator,
                style.tier(deck.tier, &suffix)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const DEFAULT_ANALYSIS: &str = "This deck has traits of its own within its archetype.";

/// Multi-line deck detail with score breakdown and recommendation
pub fn format_deck_detail(data: &MetaData, deck: &DeckRecord, style: &Style) -> String {
    let mut lines = vec![style.heading(&deck.name)];

    let tier_line = match deck.tier {
        Some(tier) => format!("{} ({})", style.tier(Some(tier), tier.as_str()), tier.description()),
        None => "Unknown".to_string(),
    };
    lines.push(format!("  Tier: {}", tier_line));
    lines.push(format!("  Type: {}", deck.type_label()));
    match deck.difficulty {
        Some(d) => lines.push(format!("  Difficulty: {}/10 ({})", d, difficulty_label(d))),
        None => lines.push("  Difficulty: Unknown".to_string()),
    }

    let extra = data.extra(&deck.name);
    if let Some(engine) = extra.and_then(|e| e.engine.as_deref()) {
        lines.push(format!("  Engine: {}", engine));
    }

    let (going, defaulted) = data.performance(&deck.name);
    let note = if defaulted { " (not rated, neutral)" } else { "" };
    lines.push(format!(
        "  Going first: {}/5 {} {}{}",
        going.going_first,
        rating_stars(going.going_first),
        going_label(Going::First, going.going_first),
        note
    ));
    lines.push(format!(
        "  Going second: {}/5 {} {}{}",
        going.going_second,
        rating_stars(going.going_second),
        going_label(Going::Second, going.going_second),
        note
    ));

    if let Some(extra) = extra {
        for (name, value) in &extra.stats {
            lines.push(format!(
                "  {}: {}/10 ({})",
                name,
                value,
                stat_description(name, *value)
            ));
        }
    }

    match data.score(&deck.name) {
        Some(result) => {
            lines.push(format!(
                "  Score: {} ({})",
                style.bold(&format_score(result.score, result.incomplete)),
                score_rating(result.score)
            ));
            for term in &result.breakdown.terms {
                lines.push(format!(
                    "    {:<12}{:>6.1}  {}",
                    term.label, term.value, term.description
                ));
            }
            lines.push(format!(
                "    {:<12}{:>6.1}  / 3",
                "Sum", result.breakdown.sum
            ));
            if result.incomplete {
                lines.push(style.dimmed("    * going ratings missing, neutral 3/3 assumed"));
            }
        }
        None => lines.push("  Score: not available (difficulty unknown)".to_string()),
    }

    let recommendation = recommendation_stars(deck.tier, going.average());
    lines.push(format!("  Recommendation: {}", stars(recommendation, 5)));
    if let Some(difficulty) = deck.difficulty {
        lines.push(format!(
            "  {}",
            simple_recommendation(deck.tier, going.average(), difficulty)
        ));
    }

    if deck.weaknesses.is_empty() {
        lines.push("  Weaknesses: None".to_string());
    } else {
        lines.push("  Weaknesses:".to_string());
        for weakness in &deck.weaknesses {
            lines.push(format!("    - {}", style.bad(weakness)));
        }
    }

    let side_in = data.side_in(&deck.name);
    if !side_in.is_empty() {
        lines.push("  Side in:".to_string());
        for card in side_in {
            lines.push(format!("    - {}", style.good(card)));
        }
    }

    let analysis = extra
        .and_then(|e| e.analysis.as_deref())
        .unwrap_or(DEFAULT_ANALYSIS);
    lines.push(format!("  Analysis: {}", analysis));

    lines.join("\n")
}

/// Name suggestions, one per line
pub fn format_suggestions(query: &str, names: &[&str]) -> String {
    if names.is_empty() {
        return format!("No decks match '{}'.", query);
    }
    names.join("\n")
}

/// Competitive meta table with a header row
pub fn format_meta_table(rows: &[&DeckRecord], style: &Style) -> String {
    if rows.is_empty() {
        return "No competitive decks found.".to_string();
    }

    let headers = ["Deck", "Tier", "Type", "Difficulty", "Main weakness"];
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|d| {
            [
                d.name.clone(),
                d.tier_label().to_string(),
                d.type_label().to_string(),
                d.difficulty
                    .map(|v| format!("{}/10", v))
                    .unwrap_or_else(|| "Unknown".to_string()),
                d.primary_weakness().unwrap_or("None").to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let pad = |text: &str, width: usize| {
        let len = text.chars().count();
        format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
    };

    let header = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    let mut lines = vec![style.bold(header.trim_end())];

    for (row, deck) in cells.iter().zip(rows) {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let padded = pad(cell, widths[i]);
                if i == 1 {
                    style.tier(deck.tier, &padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Ranked decks with columns: Index, Score, Name, Tier
pub fn format_ranked_table(ranked: &[RankedDeck<'_>], style: &Style) -> String {
    if ranked.is_empty() {
        return "No competitive decks to rank.".to_string();
    }

    let term_width = get_terminal_width();
    let score_width = 4;
    let separator = "  ";

    ranked
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!(
                "{:>width$}",
                format_score(entry.score, entry.incomplete),
                width = score_width
            );
            let tier = entry.deck.tier_label();
            let fixed_width = 3 + 1 + score_width + separator.len() * 2 + tier.len();
            let name = fit_name(&entry.deck.name, fixed_width, term_width);

            format!(
                "{} {}{}{}{}{}",
                style.dimmed(&index_str),
                style.bold(&score_padded),
                separator,
                name,
                separator,
                style.tier(entry.deck.tier, tier)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ranked decks as tab-separated values for scripting
/// Columns: score, name, tier, type (no headers, no colors)
pub fn format_tsv(ranked: &[RankedDeck<'_>]) -> String {
    ranked
        .iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}\t{}",
                entry.score,
                entry.deck.name,
                entry.deck.tier_label(),
                entry.deck.type_label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line matchup verdict, e.g. "Dragon Link vs Labrynth: Dragon Link favored by 15 (76 - 61)"
pub fn format_verdict(verdict: &MatchupVerdict, style: &Style) -> String {
    let outcome = match verdict.favored {
        Favored::Even => "even".to_string(),
        _ => format!(
            "{} favored by {}",
            style.bold(verdict.favored_name()),
            verdict.score_gap()
        ),
    };
    format!(
        "{} vs {}: {} ({} - {})",
        verdict.deck1, verdict.deck2, outcome, verdict.score_deck1, verdict.score_deck2
    )
}

/// Full meta analysis report
pub fn format_analysis(summary: &MetaSummary<'_>, style: &Style) -> String {
    if summary.is_empty() {
        return "No competitive decks in the current meta.".to_string();
    }

    let mut lines = vec![style.heading("Meta overview")];
    lines.push(format!("  Competitive decks: {}", summary.total_decks));
    lines.push(format!("  Type diversity: {}%", summary.type_diversity));
    lines.push(format!(
        "  Average difficulty: {}",
        one_decimal(summary.average_difficulty)
    ));
    lines.push(format!(
        "  Dominant tier: {}",
        summary
            .dominant_tier
            .map(|t| style.tier(Some(t), t.as_str()))
            .unwrap_or_else(|| "None".to_string())
    ));

    lines.push(String::new());
    lines.push(style.heading("Tier distribution"));
    for (tier, share) in tier_percentages(&summary.distribution) {
        lines.push(format!(
            "  {}{:>3}  {}",
            style.tier(Some(tier), &format!("{:<8}", tier.as_str())),
            summary.distribution.count(tier),
            percent(share)
        ));
    }

    lines.push(String::new());
    lines.push(style.heading("Top decks"));
    lines.push(format!(
        "  Tier 1 in top {}: {}, average score {}",
        summary.top_decks.len(),
        top_tier_count(&summary.top_decks),
        average_score(&summary.top_decks)
    ));
    lines.push(format_ranked_table(&summary.top_decks, style));

    if !summary.key_matchups.is_empty() {
        lines.push(String::new());
        lines.push(style.heading("Key matchups"));
        for verdict in &summary.key_matchups {
            lines.push(format!("  {}", format_verdict(verdict, style)));
        }
    }

    lines.push(String::new());
    lines.push(style.heading("Archetypes"));
    for (share, perf) in summary
        .type_distribution
        .iter()
        .zip(&summary.performance_by_type)
    {
        lines.push(format!(
            "  {:<10}{:>3}  {:>4}  avg score {}",
            share.deck_type.as_str(),
            share.count,
            percent(share.percentage),
            perf.average
        ));
    }

    if !summary.common_weaknesses.is_empty() {
        lines.push(String::new());
        lines.push(style.heading("Common weaknesses"));
        for weakness in &summary.common_weaknesses {
            lines.push(format!("  {:>3}  {}", weakness.count, weakness.name));
        }
    }

    lines.push(String::new());
    lines.push(style.heading("General"));
    lines.push(format!(
        "  Avg going first: {}",
        one_decimal(summary.general.avg_going_first)
    ));
    lines.push(format!(
        "  Avg going second: {}",
        one_decimal(summary.general.avg_going_second)
    ));
    lines.push(format!(
        "  Most common type: {}",
        summary
            .general
            .most_common_type
            .map(|t| t.as_str())
            .unwrap_or("None")
    ));

    lines.join("\n")
}

/// Category table and matchup verdict for two decks
pub fn format_comparison(comparison: &Comparison, style: &Style) -> String {
    let mut lines = vec![style.heading(&format!(
        "{} vs {}",
        comparison.deck1, comparison.deck2
    ))];

    let value_width = comparison
        .rows
        .iter()
        .map(|r| r.value1.chars().count())
        .max()
        .unwrap_or(0);

    for row in &comparison.rows {
        let (left, right) = match row.winner {
            Winner::Deck1 => (style.good(&row.value1), row.value2.clone()),
            Winner::Deck2 => (row.value1.clone(), style.good(&row.value2)),
            Winner::Tie => (row.value1.clone(), row.value2.clone()),
        };
        let marker = match row.winner {
            Winner::Deck1 => "<",
            Winner::Deck2 => ">",
            Winner::Tie => "=",
        };
        let pad = value_width.saturating_sub(row.value1.chars().count());
        lines.push(format!(
            "  {:<14}{}{}  {}  {}",
            row.category,
            left,
            " ".repeat(pad),
            marker,
            right
        ));
    }

    let (wins1, wins2) = comparison.wins();
    lines.push(format!(
        "  Categories won: {} {}, {} {}",
        comparison.deck1, wins1, comparison.deck2, wins2
    ));

    match &comparison.verdict {
        Some(verdict) => lines.push(format!("  Matchup: {}", format_verdict(verdict, style))),
        None => lines.push("  Matchup: not available (difficulty unknown)".to_string()),
    }

    let tactics = &comparison.tactics;
    lines.push(format!(
        "  {}: {}. {}.",
        comparison.deck1, tactics.deck1_plan, tactics.deck1_defense
    ));
    lines.push(format!(
        "  {}: {}. {}.",
        comparison.deck2, tactics.deck2_plan, tactics.deck2_defense
    ));
    if !comparison.tips.is_empty() {
        lines.push("  Tips:".to_string());
        for tip in &comparison.tips {
            lines.push(format!("    - {}", tip));
        }
    }

    lines.join("\n")
}
