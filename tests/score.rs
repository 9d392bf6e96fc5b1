//! Hand scoring integration tests.

use handscore::{
    BLACKJACK, BlackjackRules, Card, CardError, FaceValueRules, Hand, ScoreResolver,
    ScoringRules, Suit, ValueRange, select_best,
};

const fn card(suit: Suit, face: u8) -> Card {
    Card::new(suit, face)
}

fn spades(faces: &[u8]) -> Hand {
    faces.iter().map(|&face| card(Suit::Spade, face)).collect()
}

#[test]
fn suit_parsing_accepts_only_known_tokens() {
    for suit in Suit::ALL {
        assert_eq!(suit.as_str().parse::<Suit>(), Ok(suit));
    }

    assert_eq!(
        "Joker".parse::<Suit>(),
        Err(CardError::InvalidSuit("Joker".to_string()))
    );
    assert!("spade".parse::<Suit>().is_err());
    assert!(Card::parse("", 4).is_err());

    let parsed = Card::parse("Diamond", 10).unwrap();
    assert_eq!(parsed, card(Suit::Diamond, 10));
    assert_eq!(parsed.to_string(), "10 of Diamond");
    assert_eq!(
        CardError::InvalidSuit("Star".to_string()).to_string(),
        "unable to recognize suit type: Star"
    );
}

#[test]
fn card_value_ranges() {
    let ace = card(Suit::Heart, 1);
    assert!(ace.is_ace());
    assert!(ace.is_flexible());
    assert_eq!((ace.min_value(), ace.max_value()), (1, 11));

    for face in 2..=13 {
        let plain = card(Suit::Club, face);
        assert!(!plain.is_flexible());
        assert_eq!(plain.min_value(), u32::from(face));
        assert_eq!(plain.max_value(), u32::from(face));
    }

    assert_eq!(ValueRange::new(11, 1), ValueRange::new(1, 11));
    assert!(!ValueRange::fixed(5).is_flexible());
}

#[test]
fn receive_card_appends_in_order() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());

    hand.receive_card(card(Suit::Heart, 4));
    hand.receive_card(card(Suit::Club, 4));
    hand.receive_card(card(Suit::Heart, 4));

    assert_eq!(hand.len(), 3);
    assert_eq!(
        hand.cards(),
        &[
            card(Suit::Heart, 4),
            card(Suit::Club, 4),
            card(Suit::Heart, 4)
        ]
    );

    hand.clear();
    assert!(hand.is_empty());
}

#[test]
fn scenario_all_combinations_bust() {
    let hand = spades(&[1, 3, 5, 7, 11, 4]);
    assert_eq!(hand.unique_possible_scores(), vec![31, 41]);
    assert_eq!(hand.score(), 31);
    assert!(hand.is_bust());
}

#[test]
fn scenario_highest_under_target() {
    let hand = spades(&[1, 1, 5, 7]);
    assert_eq!(hand.unique_possible_scores(), vec![14, 24, 34]);
    assert_eq!(hand.score(), 14);
    assert!(!hand.is_soft());
}

#[test]
fn scenario_exact_target() {
    let hand = spades(&[1, 1, 2, 7]);
    assert_eq!(hand.unique_possible_scores(), vec![11, 21, 31]);
    assert_eq!(hand.score(), 21);
    assert!(hand.is_soft());
}

#[test]
fn scenario_soft_nineteen() {
    let hand = spades(&[1, 1, 2, 5]);
    assert_eq!(hand.unique_possible_scores(), vec![9, 19, 29]);
    assert_eq!(hand.score(), 19);
    assert!(hand.is_soft());
    assert!(!hand.is_bust());
}

#[test]
fn empty_hand_scores_zero() {
    let hand = Hand::new();
    assert_eq!(hand.unique_possible_scores(), vec![0]);
    assert_eq!(hand.score(), 0);
    assert!(!hand.is_bust());
    assert!(!hand.is_soft());
}

#[test]
fn score_is_always_a_possible_score() {
    let hands = [
        spades(&[]),
        spades(&[1]),
        spades(&[1, 1, 1, 1]),
        spades(&[13, 12, 1]),
        spades(&[10, 10, 10]),
        spades(&[1, 13, 13, 1]),
    ];

    for hand in &hands {
        let scores = hand.unique_possible_scores();
        let score = hand.score();
        assert!(scores.contains(&score), "{score} not in {scores:?}");
        assert_eq!(hand.score(), score);

        if scores.contains(&BLACKJACK) {
            assert_eq!(score, BLACKJACK);
        } else if let Some(&best) = scores.iter().filter(|&&s| s <= BLACKJACK).max() {
            assert_eq!(score, best);
        } else {
            assert_eq!(Some(&score), scores.iter().min());
        }
    }
}

#[test]
fn duplicate_aces_collapse_branches() {
    // 2^4 raw combinations, only five distinct totals.
    let hand = spades(&[1, 1, 1, 1]);
    assert_eq!(hand.unique_possible_scores(), vec![4, 14, 24, 34, 44]);
    assert_eq!(hand.score(), 14);
}

#[test]
fn blackjack_detection() {
    let natural = Hand::from_cards([card(Suit::Heart, 1), card(Suit::Club, 10)]);
    assert!(natural.is_blackjack());

    let three_card = spades(&[1, 3, 7]);
    assert_eq!(three_card.score(), 21);
    assert!(!three_card.is_blackjack());

    // A king counts 13 under the standard rules.
    let ace_king = Hand::from_cards([card(Suit::Heart, 1), card(Suit::Club, 13)]);
    assert!(!ace_king.is_blackjack());
    assert_eq!(ace_king.score(), 14);
}

#[test]
fn face_cards_count_ten_rules() {
    let rules = BlackjackRules::default().with_face_cards_count_ten(true);
    let hand = Hand::from_cards([card(Suit::Heart, 1), card(Suit::Club, 13)]);

    assert_eq!(hand.score_with(rules), 21);
    assert_eq!(hand.unique_possible_scores_with(rules), vec![11, 21]);
    assert_eq!(hand.face_total(), 14);
}

#[test]
fn custom_target_and_ace_values() {
    let rules = BlackjackRules::default()
        .with_target(31)
        .with_ace_values(14, 1);
    assert_eq!((rules.ace_low, rules.ace_high), (1, 14));

    let hand = spades(&[1, 1, 5]);
    assert_eq!(hand.unique_possible_scores_with(rules), vec![7, 20, 33]);
    assert_eq!(hand.score_with(rules), 20);
    assert_eq!(hand.score_with(&rules.with_target(7)), 7);
}

#[test]
fn face_value_rules_have_no_flexible_cards() {
    let hand = spades(&[1, 1, 5, 7]);
    let rules = FaceValueRules::default();

    assert_eq!(hand.unique_possible_scores_with(rules), vec![14]);
    assert_eq!(hand.score_with(rules), hand.face_total());
}

#[test]
fn boxed_rules_plug_into_the_resolver() {
    let rules: Box<dyn ScoringRules> = Box::new(FaceValueRules { target: 10 });
    let resolver = ScoreResolver::new(rules);
    let cards = [card(Suit::Club, 1), card(Suit::Club, 13)];

    assert_eq!(resolver.rules().target(), 10);
    assert_eq!(resolver.resolve(&cards), 14);
    assert!(resolver.is_bust(&cards));
}

#[test]
fn select_best_orders_candidates() {
    assert_eq!(select_best([30, 21, 5], 21), Some(21));
    assert_eq!(select_best([5, 20, 22], 21), Some(20));
    assert_eq!(select_best([40, 22, 30], 21), Some(22));
    assert_eq!(select_best([0], 21), Some(0));
    assert_eq!(select_best([25, 3], 0), Some(3));
    assert_eq!(select_best([0, 3], 0), Some(0));
    assert_eq!(select_best(Vec::new(), 21), None);
}
