#![forbid(unsafe_code)]

use crate::ranking::RankedCompetitor;
use kernel::{Interference, InterferenceKind};
use std::collections::HashMap;

/// Width of every column, in characters.
pub const CELL_WIDTH: usize = 8;
const SEPARATOR: &str = "  ";

const FROM_BOTH_SIDES: &str = "←----→";
const FROM_LOWER_BOX: &str = "←-----";
const FROM_HIGHER_BOX: &str = "-----→";
const CONTEST: &str = "  ↔";

/// Render the box-by-box collision map: box labels, names, style glyphs and
/// interference arrows, one column per box in box order.
///
/// Only visualises `edges`; nothing is re-estimated here.
pub fn render_collision_map(ranked: &[RankedCompetitor], edges: &[Interference]) -> String {
    let by_lane: HashMap<u8, &RankedCompetitor> = ranked.iter().map(|c| (c.lane(), c)).collect();
    let slots = ranked.iter().map(|c| c.lane()).max().unwrap_or(0);

    let mut boxes = Vec::with_capacity(usize::from(slots));
    let mut names = Vec::with_capacity(usize::from(slots));
    let mut styles = Vec::with_capacity(usize::from(slots));
    let mut arrows = Vec::with_capacity(usize::from(slots));

    for lane in 1..=slots {
        let competitor = by_lane.get(&lane);
        boxes.push(format!("Box {lane}"));
        names.push(
            competitor
                .map(|c| c.name().chars().take(CELL_WIDTH).collect())
                .unwrap_or_default(),
        );
        styles.push(
            competitor
                .map(|c| format!("[{}]", c.enriched.style().glyph()))
                .unwrap_or_default(),
        );
        arrows.push(arrow_for(lane, edges).to_owned());
    }

    [boxes, names, styles, arrows]
        .iter()
        .map(|row| join_cells(row))
        .collect::<Vec<_>>()
        .join("\n")
}

fn arrow_for(lane: u8, edges: &[Interference]) -> &'static str {
    let inward = edges.iter().filter(|e| e.is_inward() && e.to == lane);
    let (mut lower, mut higher) = (false, false);
    for edge in inward {
        if edge.from < lane {
            lower = true;
        } else {
            higher = true;
        }
    }
    let contest = edges
        .iter()
        .any(|e| e.kind == InterferenceKind::Contest && (e.from == lane || e.to == lane));

    match (lower, higher, contest) {
        (true, true, _) => FROM_BOTH_SIDES,
        (true, false, _) => FROM_LOWER_BOX,
        (false, true, _) => FROM_HIGHER_BOX,
        (false, false, true) => CONTEST,
        (false, false, false) => "",
    }
}

fn join_cells(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| format!("{cell:<width$}", width = CELL_WIDTH))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_owned()
}
