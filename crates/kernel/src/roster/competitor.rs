#![forbid(unsafe_code)]

use serde::Deserialize;

/// A split as it arrived from the roster: a number, or whatever text the user typed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordedSplit {
    Seconds(f64),
    Text(String),
}

/// One raw roster row. Never modified once it enters the pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Competitor {
    pub name: String,

    /// Starting box, `1..=N`.
    #[serde(alias = "box")]
    pub lane: u8,

    #[serde(default, alias = "split")]
    pub recorded_split: Option<RecordedSplit>,

    /// Two-token R/T code such as `"G W"`.
    #[serde(default, alias = "rt")]
    pub style_code: Option<String>,

    /// Label such as `"Last Start"` or `"Never"`.
    #[serde(default, alias = "last_win")]
    pub recency_code: Option<String>,
}

impl Competitor {
    pub fn new(name: impl Into<String>, lane: u8) -> Self {
        Self {
            name: name.into(),
            lane,
            recorded_split: None,
            style_code: None,
            recency_code: None,
        }
    }

    pub fn with_split(mut self, seconds: f64) -> Self {
        self.recorded_split = Some(RecordedSplit::Seconds(seconds));
        self
    }

    pub fn with_split_text(mut self, text: impl Into<String>) -> Self {
        self.recorded_split = Some(RecordedSplit::Text(text.into()));
        self
    }

    pub fn with_style(mut self, code: impl Into<String>) -> Self {
        self.style_code = Some(code.into());
        self
    }

    pub fn with_recency(mut self, code: impl Into<String>) -> Self {
        self.recency_code = Some(code.into());
        self
    }
}
