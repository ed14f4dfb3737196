//! Result sentences shown above the breakdown table.
//!
//! Sentences are returned as segments so the caller decides how emphasis
//! looks (bold HTML, plain text, JSON).

use livingcost_shared::types::Money;
use serde::Serialize;

use super::format::{format_amount, format_rate};
use crate::currency::CurrencyPair;
use crate::expense::{CostBreakdown, benchmark_total};

/// Piece of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    /// Ordinary text.
    Plain(String),
    /// Highlighted value.
    Emphasis(String),
}

impl Segment {
    /// Text of the segment without styling.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Emphasis(text) => text,
        }
    }
}

/// A sentence made of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Segments in reading order.
    pub segments: Vec<Segment>,
}

impl Sentence {
    fn plain(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Plain(text.into()));
        self
    }

    fn emphasis(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Emphasis(text.into()));
        self
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text())?;
        }
        Ok(())
    }
}

/// All result sentences for one breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Minimum living expense in the base currency.
    pub minimum: Sentence,
    /// Same total in the converted currency, with the rate used.
    pub converted: Sentence,
    /// Converted total with the fixed benchmark margin.
    pub benchmark: Sentence,
    /// Converted total with the user's margin.
    pub adjusted: Sentence,
}

/// Builds the result sentences.
#[must_use]
pub fn summarize(breakdown: &CostBreakdown, pair: CurrencyPair, benchmark_percent: u8) -> Summary {
    let input = &breakdown.input;
    let total_base = Money::new(breakdown.total.base, pair.base);
    let total_converted = Money::new(breakdown.total.converted, pair.converted);
    let benchmark = Money::new(benchmark_total(breakdown, benchmark_percent), pair.converted);
    let adjusted = Money::new(breakdown.total.with_margin, pair.converted);

    Summary {
        minimum: Sentence::default()
            .plain("Your minimum living expenses for ")
            .emphasis(input.duration_months.to_string())
            .plain(format!(" months will be {} ", total_base.currency))
            .emphasis(format_amount(total_base.amount)),
        converted: Sentence::default()
            .plain(format!("({}: ", total_converted.currency))
            .emphasis(format_amount(total_converted.amount))
            .plain(" at the exchange rate of ")
            .emphasis(format_rate(input.exchange_rate))
            .plain(")"),
        benchmark: Sentence::default()
            .plain(format!(
                "If you need to keep an extra {benchmark_percent}% in your bank, the final balance will be {} ",
                benchmark.currency
            ))
            .emphasis(format_amount(benchmark.amount))
            .plain("."),
        adjusted: Sentence::default()
            .plain(format!(
                "Your expected bank balance with extra {}% added to the minimum living cost {}: ",
                input.margin_percent, adjusted.currency
            ))
            .emphasis(format_amount(adjusted.amount))
            .plain("."),
    }
}
