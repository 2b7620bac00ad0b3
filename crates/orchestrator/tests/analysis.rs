#![forbid(unsafe_code)]

use config::{BiasCategory, Config, ImputationPolicy, TrackProfile};
use kernel::{Competitor, EffectiveSplit, InterferenceKind, QualityFlags, RankingError, Roster};
use orchestrator::{Analyzer, Error, Pick};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn analyzer(policy: ImputationPolicy) -> Analyzer {
    let mut config = Config::default();
    config.scoring.policy = policy;
    Analyzer::from_config(config)
}

#[test]
fn faster_railer_beats_slower_wide_runner() {
    let roster: Roster = [
        Competitor::new("Rail Rocket", 1).with_split(5.00).with_style("E R"),
        Competitor::new("Wide Load", 2).with_split(5.20).with_style("G W"),
    ]
    .into_iter()
    .collect();

    let analysis = analyzer(ImputationPolicy::ConservativeDefault)
        .analyze(&roster, None)
        .unwrap();

    let first = analysis.get(1).unwrap();
    let second = analysis.get(2).unwrap();
    assert_eq!(first.rank, Some(1));
    assert!(first.composite_score < second.composite_score);
    assert!(first.win_probability > second.win_probability);
    assert_eq!(
        analysis.top_pick,
        Pick {
            name: "Rail Rocket".into(),
            lane: 1,
        }
    );
    assert_eq!(analysis.fastest.lane, 1);
}

#[test]
fn collision_risk_is_asymmetric() {
    let roster: Roster = [
        Competitor::new("Railer", 1).with_split(5.10).with_style("G R"),
        Competitor::new("Plodder", 2).with_split(5.90).with_style("G M"),
        Competitor::new("Drifter", 3).with_split(5.40).with_style("G W"),
    ]
    .into_iter()
    .collect();

    let analysis = analyzer(ImputationPolicy::ConservativeDefault)
        .analyze(&roster, None)
        .unwrap();

    assert_eq!(analysis.get(3).unwrap().collision_risk, 1);
    assert_eq!(analysis.get(1).unwrap().collision_risk, 0);
    let inward: Vec<_> = analysis
        .interference
        .iter()
        .filter(|edge| edge.is_inward())
        .collect();
    assert_eq!(inward.len(), 1);
    assert_eq!((inward[0].from, inward[0].to), (1, 3));
    assert_eq!(inward[0].kind, InterferenceKind::FromInside);
}

#[test]
fn blank_split_is_excluded_without_failing() {
    let roster: Roster = [
        Competitor::new("Alpha", 1).with_split(5.30).with_style("F M"),
        Competitor::new("Blank", 2).with_split_text("").with_style("E W"),
        Competitor::new("Charlie", 3).with_split(5.35).with_style("F R"),
    ]
    .into_iter()
    .collect();

    let analysis = analyzer(ImputationPolicy::ExcludeFromRanking)
        .analyze(&roster, None)
        .unwrap();

    let blank = analysis.get(2).unwrap();
    assert_eq!(blank.effective_split(), EffectiveSplit::Excluded);
    assert!(blank.enriched.flags.contains(QualityFlags::EXCLUDED));
    assert_eq!(blank.rank, None);
    assert_eq!(blank.win_probability, 0.0);
    assert_eq!(analysis.ranked.last().unwrap().name(), "Blank");
    assert!(
        analysis
            .interference
            .iter()
            .all(|edge| edge.from != 2 && edge.to != 2)
    );
}

#[test]
fn duplicate_lanes_fail_before_scoring() {
    let roster: Roster = [
        Competitor::new("Alpha", 3).with_split(5.10),
        Competitor::new("Bravo", 3).with_split(5.20),
    ]
    .into_iter()
    .collect();

    let err = analyzer(ImputationPolicy::ConservativeDefault)
        .analyze(&roster, None)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Ranking(RankingError::DuplicateLane { lane: 3, .. })
    ));
}

#[test]
fn empty_roster_fails() {
    let err = analyzer(ImputationPolicy::EstimateSimilar)
        .analyze(&Roster::default(), None)
        .unwrap_err();
    assert_eq!(err, Error::Ranking(RankingError::EmptyRoster));
}

#[test]
fn track_profile_changes_box_bias() {
    let mut config = Config::default();
    config.tracks.profiles.insert(
        "Lakeside".into(),
        TrackProfile {
            bias: Some(vec![BiasCategory::Risky, BiasCategory::Good]),
            ..TrackProfile::default()
        },
    );
    let analyzer = Analyzer::from_config(config);
    let roster: Roster = [
        Competitor::new("Inside", 1).with_split(5.20).with_style("F M"),
        Competitor::new("Outside", 2).with_split(5.20).with_style("F M"),
    ]
    .into_iter()
    .collect();

    let default_track = analyzer.analyze(&roster, None).unwrap();
    let lakeside = analyzer.analyze(&roster, Some("lakeside")).unwrap();

    assert_eq!(default_track.top_pick.lane, 1);
    assert_eq!(lakeside.top_pick.lane, 2);
    assert_eq!(lakeside.get(1).unwrap().enriched.bias, BiasCategory::Risky);
}

#[test]
fn analysis_is_idempotent() {
    let roster: Roster = [
        Competitor::new("Alpha", 1).with_split_text("n/a").with_style("NBT"),
        Competitor::new("Bravo", 2).with_split(5.41).with_style("S W"),
        Competitor::new("Charlie", 3)
            .with_split(5.38)
            .with_style("G R")
            .with_recency("Last 5 Starts"),
    ]
    .into_iter()
    .collect();
    let analyzer = analyzer(ImputationPolicy::EstimateSimilar);

    let first = analyzer.analyze(&roster, Some("Nowra")).unwrap();
    let second = analyzer.analyze(&roster, Some("Nowra")).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.get(1).unwrap().enriched.flags,
        QualityFlags::DECODE_DEFAULT | QualityFlags::IMPUTATION_APPLIED
    );
}

#[test]
fn collision_map_has_one_column_per_box() {
    let analysis = analyzer(ImputationPolicy::ConservativeDefault)
        .analyze(&Roster::placeholder(8), None)
        .unwrap();

    let header = analysis.collision_map.lines().next().unwrap();
    assert!(header.starts_with("Box 1"));
    assert!(header.ends_with("Box 8"));
    assert_eq!(analysis.collision_map.lines().count(), 4);
}

fn arbitrary_roster() -> impl Strategy<Value = Roster> {
    let row = (
        prop::option::of(4.8f64..6.2),
        prop::sample::select(vec!["E R", "G W", "F M", "S S", "R W", "NBT", "", "G"]),
        prop::option::of(prop::sample::select(vec![
            "Last Start",
            "Never",
            "Last 10 Starts",
        ])),
    );
    prop::collection::vec(row, 1..=8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(ix, (split, style, recency))| {
                let lane = ix as u8 + 1;
                let mut competitor =
                    Competitor::new(format!("Dog {lane}"), lane).with_style(style);
                if let Some(split) = split {
                    competitor = competitor.with_split(split);
                }
                if let Some(recency) = recency {
                    competitor = competitor.with_recency(recency);
                }
                competitor
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn ranks_and_probabilities_are_well_formed(roster in arbitrary_roster()) {
        let analysis = analyzer(ImputationPolicy::EstimateSimilar)
            .analyze(&roster, None)
            .unwrap();
        let n = roster.len() as u32;

        let total: f64 = analysis.ranked.iter().map(|c| c.win_probability).sum();
        prop_assert!((total - 100.0).abs() <= 0.1);

        for c in &analysis.ranked {
            prop_assert!(c.win_probability >= 0.0);
            prop_assert!((1..=n).contains(&c.rank.unwrap()));
            prop_assert!((1..=n).contains(&c.speed_rank.unwrap()));
        }
        for pair in analysis.ranked.windows(2) {
            prop_assert!(pair[0].rank <= pair[1].rank);
            prop_assert!(pair[0].composite_score <= pair[1].composite_score);
        }
    }
}
