//! Summarizer properties over the answer sheet.

use attune_types::{AnswerSheet, Band, BandTable, Deck, summarize};

use crate::common::{question, three_question_deck, tier_table};

#[test]
fn score_counts_only_answered_correct_slots() {
    let deck = three_question_deck();
    let mut sheet = AnswerSheet::blank(deck.len());
    sheet.record(0, 0); // correct
    sheet.record(2, 1); // incorrect; index 1 stays unanswered

    let summary = summarize(&deck, &sheet, &tier_table());
    assert_eq!(summary.score, 1);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.percent, 33);
    assert_eq!(summary.band, "needs attention");
}

#[test]
fn blank_sheet_scores_zero() {
    let deck = three_question_deck();
    let sheet = AnswerSheet::blank(deck.len());

    let summary = summarize(&deck, &sheet, &tier_table());
    assert_eq!(summary.score, 0);
    assert_eq!(summary.percent, 0);
}

#[test]
fn fully_correct_sheet_scores_one_hundred() {
    let deck = three_question_deck();
    let mut sheet = AnswerSheet::blank(deck.len());
    for i in 0..deck.len() {
        sheet.record(i, 0);
    }

    let summary = summarize(&deck, &sheet, &tier_table());
    assert_eq!(summary.score, 3);
    assert_eq!(summary.percent, 100);
    assert_eq!(summary.band, "strong");
}

#[test]
fn ungraded_deck_always_lands_in_the_floor_band() {
    // No option carries the correct flag: every answer is ungraded.
    let deck = Deck::new(vec![
        question(1, "a?", &["x", "y"], None),
        question(2, "b?", &["x", "y"], None),
    ])
    .expect("valid deck");

    let mut sheet = AnswerSheet::blank(deck.len());
    sheet.record(0, 0);
    sheet.record(1, 1);

    let summary = summarize(&deck, &sheet, &tier_table());
    assert_eq!(summary.score, 0);
    assert_eq!(summary.band, "needs attention");
}

#[test]
fn trivia_style_table_is_just_another_band_table() {
    let table = BandTable::from_rules(vec![
        Band {
            min_percent: 100,
            label: "Perfect! You aced it.".to_string(),
        },
        Band {
            min_percent: 51,
            label: "Nice work, you did well!".to_string(),
        },
        Band {
            min_percent: 0,
            label: "Keep practicing, you'll get it!".to_string(),
        },
    ])
    .expect("non-empty table");

    let deck = three_question_deck();
    let mut sheet = AnswerSheet::blank(deck.len());
    sheet.record(0, 0);
    sheet.record(1, 0);

    // 2/3 correct: 67%, over half but not perfect.
    let summary = summarize(&deck, &sheet, &table);
    assert_eq!(summary.band, "Nice work, you did well!");

    sheet.record(2, 0);
    let summary = summarize(&deck, &sheet, &table);
    assert_eq!(summary.band, "Perfect! You aced it.");
}
