#![forbid(unsafe_code)]

use crate::bias_category::BiasCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const LIVE_TIMING_TRACKS: [&str; 9] = [
    "Wagga",
    "Nowra",
    "Maitland",
    "Angle Park",
    "Lakeside",
    "Richmond",
    "Taree",
    "Broken Hill",
    "Rockhampton",
];

const DEFAULT_BIAS: [BiasCategory; 8] = [
    BiasCategory::Good,
    BiasCategory::Fair,
    BiasCategory::Fair,
    BiasCategory::Risky,
    BiasCategory::Risky,
    BiasCategory::Fair,
    BiasCategory::Good,
    BiasCategory::Good,
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Tracks {
    /// Tracks publishing R/T timing for today's meeting.
    pub live_timing: Vec<String>,

    /// Box bias for tracks without a profile of their own, indexed by box - 1.
    pub default_bias: Vec<BiasCategory>,

    pub profiles: BTreeMap<String, TrackProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackProfile {
    /// Box bias, indexed by box - 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias: Option<Vec<BiasCategory>>,

    /// Race number (as a string key) to advertised distance, e.g. `"1" = "515m"`.
    pub distances: BTreeMap<String, String>,
}

impl Default for Tracks {
    fn default() -> Self {
        Self {
            live_timing: LIVE_TIMING_TRACKS.iter().map(|t| t.to_string()).collect(),
            default_bias: DEFAULT_BIAS.to_vec(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Tracks {
    /// Find a track profile, ignoring ASCII case.
    pub fn profile(&self, track: &str) -> Option<&TrackProfile> {
        self.profiles
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(track.trim()))
            .map(|(_, profile)| profile)
    }

    /// Box bias for `track`, falling back to the default layout.
    pub fn bias_for(&self, track: Option<&str>) -> &[BiasCategory] {
        track
            .and_then(|track| self.profile(track))
            .and_then(|profile| profile.bias.as_deref())
            .unwrap_or(&self.default_bias)
    }

    pub fn distance(&self, track: &str, race: u8) -> Option<&str> {
        self.profile(track)?
            .distances
            .get(&race.to_string())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_falls_back_to_default_layout() {
        let mut tracks = Tracks::default();
        tracks.profiles.insert(
            "Wagga".into(),
            TrackProfile {
                bias: Some(vec![BiasCategory::WideBias; 8]),
                distances: BTreeMap::new(),
            },
        );

        assert_eq!(tracks.bias_for(Some("wagga"))[0], BiasCategory::WideBias);
        assert_eq!(tracks.bias_for(Some("Nowra")), DEFAULT_BIAS.as_slice());
        assert_eq!(tracks.bias_for(None), DEFAULT_BIAS.as_slice());
    }

    #[test]
    fn distance_is_keyed_by_race_number() {
        let mut tracks = Tracks::default();
        let mut profile = TrackProfile::default();
        profile.distances.insert("3".into(), "515m".into());
        tracks.profiles.insert("Angle Park".into(), profile);

        assert_eq!(tracks.distance("angle park", 3), Some("515m"));
        assert_eq!(tracks.distance("Angle Park", 4), None);
        assert_eq!(tracks.distance("Nowra", 3), None);
    }
}
