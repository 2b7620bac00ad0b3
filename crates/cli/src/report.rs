#![forbid(unsafe_code)]

use kernel::QualityFlags;
use orchestrator::Analysis;
use orchestrator::directory::RaceContext;
use orchestrator::ranking::RankedCompetitor;
use std::io::{self, Write};

const IMPUTED_MARK: &str = "⚠";

/// Write the race header, ranked table, headline picks and collision map.
pub fn write_report<W: Write>(
    out: &mut W,
    analysis: &Analysis,
    context: Option<&RaceContext>,
) -> io::Result<()> {
    if let Some(context) = context {
        writeln!(
            out,
            "{} race {} | distance {} | live R/T timing: {}",
            context.track,
            context.race,
            context.distance,
            if context.live_timing { "yes" } else { "no" }
        )?;
        writeln!(out)?;
    }

    writeln!(out, "{}", format_table(analysis))?;
    writeln!(out)?;
    writeln!(
        out,
        "Predicted winner: {} (Box {})",
        analysis.top_pick.name, analysis.top_pick.lane
    )?;
    if let Some(split) = analysis.fastest_split() {
        writeln!(
            out,
            "Fastest split:    {} (Box {}) {split}",
            analysis.fastest.name, analysis.fastest.lane
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Collision map")?;
    writeln!(out, "{}", analysis.collision_map)?;
    Ok(())
}

/// Ranked table, one row per runner in rank order.
pub fn format_table(analysis: &Analysis) -> String {
    let header = format!(
        "{:>4}  {:<16} {:>3} {:>6} {:<5} {:<8} {:<9} {:>4} {:>2} {:<14} {:>6} {:>5}",
        "Rank",
        "Dog",
        "Box",
        "Split",
        "R/T",
        "Style",
        "Bias",
        "Risk",
        "RT",
        "Last win",
        "Total",
        "Win %"
    );
    std::iter::once(header)
        .chain(analysis.ranked.iter().map(format_row))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(competitor: &RankedCompetitor) -> String {
    let enriched = &competitor.enriched;
    let rank = competitor.rank.map_or_else(|| "-".to_owned(), |r| r.to_string());
    let mark = if enriched.flags.contains(QualityFlags::IMPUTATION_APPLIED) {
        IMPUTED_MARK
    } else {
        ""
    };
    let split = format!("{}{mark}", competitor.effective_split());
    let total = competitor
        .composite_score
        .map_or_else(|| "-".to_owned(), |score| format!("{score:.1}"));
    let name: String = competitor.name().chars().take(16).collect();
    let last_win = enriched
        .recency
        .map_or_else(|| "-".to_owned(), |recency| recency.to_string());

    format!(
        "{:>4}  {:<16} {:>3} {:>6} {:<5} {:<8} {:<9} {:>4} {:>2} {:<14} {:>6} {:>5.1}",
        rank,
        name,
        competitor.lane(),
        split,
        enriched.competitor.style_code.as_deref().unwrap_or("-"),
        enriched.style().to_string(),
        enriched.bias.to_string(),
        competitor.collision_risk,
        enriched.decoded.rating,
        last_win,
        total,
        competitor.win_probability,
    )
}
