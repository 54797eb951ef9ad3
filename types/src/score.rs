//! Answer records and result summarization.

use serde::Deserialize;

use crate::deck::Deck;

/// The per-question answer record, parallel to its deck.
///
/// Invariant: length always equals the deck length. A slot is `None` until the
/// engine accepts a selection for that question; slots are only ever written
/// at the index currently being presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    slots: Vec<Option<usize>>,
}

impl AnswerSheet {
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The selected option index for a question, if answered.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.slots.get(index).copied().flatten()
    }

    pub fn record(&mut self, index: usize, choice: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(choice);
        }
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.slots.iter().copied()
    }
}

/// One threshold rule: percentages at or above `min_percent` earn `label`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Band {
    pub min_percent: u8,
    pub label: String,
}

/// An ordered threshold table mapping a percent score to a qualitative label.
///
/// Rules are kept sorted by descending threshold; lookup takes the first rule
/// whose threshold the percent meets, falling back to the lowest rule. Both
/// shipped variants (80/50 resilience tiers, perfect/over-half trivia tiers)
/// are instances of this table; there are no hard-coded band branches anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandTable {
    rules: Vec<Band>,
}

impl BandTable {
    /// Build a table from rules in any order. Returns `None` for an empty list.
    #[must_use]
    pub fn from_rules(mut rules: Vec<Band>) -> Option<Self> {
        if rules.is_empty() {
            return None;
        }
        rules.sort_by(|a, b| b.min_percent.cmp(&a.min_percent));
        Some(Self { rules })
    }

    #[must_use]
    pub fn label_for(&self, percent: u8) -> &str {
        self.rules
            .iter()
            .find(|band| percent >= band.min_percent)
            .unwrap_or_else(|| &self.rules[self.rules.len() - 1])
            .label
            .as_str()
    }

    #[must_use]
    pub fn rules(&self) -> &[Band] {
        &self.rules
    }
}

/// The scored outcome of a completed sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
    pub percent: u8,
    pub band: String,
}

/// Integer round-half-up percentage of `part` in `whole`.
///
/// `whole` must be non-zero; deck validation guarantees that for every caller.
#[must_use]
pub fn percent_of(part: usize, whole: usize) -> u8 {
    ((part * 200 + whole) / (2 * whole)) as u8
}

/// Score a sheet against its deck and classify the result.
///
/// Pure over its inputs: a slot counts iff it is answered and the chosen
/// option carries the `correct` flag. Unanswered slots contribute zero
/// regardless of any option's flags.
#[must_use]
pub fn summarize(deck: &Deck, sheet: &AnswerSheet, bands: &BandTable) -> ScoreSummary {
    let score = sheet
        .iter()
        .enumerate()
        .filter(|(index, slot)| {
            slot.and_then(|choice| deck.question(*index)?.options.get(choice))
                .is_some_and(|option| option.correct)
        })
        .count();

    let total = deck.len();
    let percent = percent_of(score, total);
    ScoreSummary {
        score,
        total,
        percent,
        band: bands.label_for(percent).to_string(),
    }
}
