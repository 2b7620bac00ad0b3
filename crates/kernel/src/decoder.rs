#![forbid(unsafe_code)]

use config::{DecoderTables, RunningStyle};
use std::collections::HashMap;

const NEUTRAL_RATING: u8 = 3;
const SENTINELS: [&str; 3] = ["NBT", "SCR", "N/A"];

/// Result of decoding an R/T code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// 1 (best) to 5.
    pub rating: u8,
    pub style: RunningStyle,
    /// The code was absent or unusable and the neutral default was substituted.
    pub defaulted: bool,
}

impl Decoded {
    pub const NEUTRAL: Decoded = Decoded {
        rating: NEUTRAL_RATING,
        style: RunningStyle::Middle,
        defaulted: true,
    };
}

/// Decodes two-token R/T codes (`"G W"`) using injected letter tables.
#[derive(Debug, Clone)]
pub struct TraitDecoder {
    ratings: HashMap<char, u8>,
    positions: HashMap<char, RunningStyle>,
}

impl TraitDecoder {
    pub fn new(tables: &DecoderTables) -> Self {
        Self {
            ratings: letter_map(&tables.ratings, |rating| rating.clamp(1, 5)),
            positions: letter_map(&tables.positions, |style| style),
        }
    }

    /// Decode `code`. Never fails; anything unusable yields [`Decoded::NEUTRAL`].
    pub fn decode(&self, code: Option<&str>) -> Decoded {
        code.and_then(|code| self.try_decode(code))
            .unwrap_or(Decoded::NEUTRAL)
    }

    fn try_decode(&self, code: &str) -> Option<Decoded> {
        let code = code.trim().to_ascii_uppercase();
        if SENTINELS.contains(&code.as_str()) {
            return None;
        }

        let mut tokens = code.split_whitespace();
        let (Some(rating), Some(position), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return None;
        };

        Some(Decoded {
            rating: *self.ratings.get(&single_letter(rating)?)?,
            style: *self.positions.get(&single_letter(position)?)?,
            defaulted: false,
        })
    }
}

impl Default for TraitDecoder {
    fn default() -> Self {
        Self::new(&DecoderTables::default())
    }
}

fn single_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}

fn letter_map<T: Copy>(
    table: &std::collections::BTreeMap<String, T>,
    fix: impl Fn(T) -> T,
) -> HashMap<char, T> {
    table
        .iter()
        .filter_map(|(key, value)| {
            let letter = single_letter(key.trim())?.to_ascii_uppercase();
            Some((letter, fix(*value)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decodes_rating_and_position() {
        let decoder = TraitDecoder::default();

        let decoded = decoder.decode(Some("G W"));
        assert_eq!(decoded.rating, 2);
        assert_eq!(decoded.style, RunningStyle::Wide);
        assert!(!decoded.defaulted);

        assert_eq!(decoder.decode(Some("E R")).style, RunningStyle::Railer);
        assert_eq!(decoder.decode(Some("R M")).rating, 5);
        assert_eq!(decoder.decode(Some("S S")).style, RunningStyle::Straight);
    }

    #[test]
    fn ignores_case_and_padding() {
        let decoder = TraitDecoder::default();
        let decoded = decoder.decode(Some("  f\tr "));
        assert_eq!((decoded.rating, decoded.style), (3, RunningStyle::Railer));
        assert!(!decoded.defaulted);
    }

    #[test]
    fn sentinels_and_garbage_fall_back_to_neutral() {
        let decoder = TraitDecoder::default();
        for code in [
            None,
            Some(""),
            Some("NBT"),
            Some("scr"),
            Some("N/A"),
            Some("GW"),
            Some("G"),
            Some("G W X"),
            Some("X W"),
            Some("G Q"),
            Some("GG W"),
        ] {
            assert_eq!(decoder.decode(code), Decoded::NEUTRAL, "code {code:?}");
        }
    }

    #[test]
    fn injected_tables_replace_defaults() {
        let mut tables = DecoderTables::default();
        tables.positions.insert("S".into(), RunningStyle::Middle);
        tables.ratings.insert("e".into(), 9);
        let decoder = TraitDecoder::new(&tables);

        let decoded = decoder.decode(Some("E S"));
        assert_eq!(decoded.style, RunningStyle::Middle);
        assert_eq!(decoded.rating, 5);
    }

    proptest! {
        #[test]
        fn decode_is_total(code in ".*") {
            let decoded = TraitDecoder::default().decode(Some(&code));
            prop_assert!((1..=5).contains(&decoded.rating));
            if decoded.defaulted {
                prop_assert_eq!(decoded, Decoded::NEUTRAL);
            }
        }

        #[test]
        fn valid_codes_decode(
            rating in "[EGFSRegfsr]",
            position in "[RMWSrmws]",
            gap in "[ \t]{1,3}",
        ) {
            let decoded = TraitDecoder::default().decode(Some(&format!("{rating}{gap}{position}")));
            prop_assert!(!decoded.defaulted);
            prop_assert!((1..=5).contains(&decoded.rating));
        }
    }
}
