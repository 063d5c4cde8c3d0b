use dice_engine::domain::{GameMode, Score};
use dice_engine::eval::{score_roll, FaceTally};

//
// tally.rs
//

#[test]
fn tally_counts_faces_and_pair_groups() {
    let tally = FaceTally::from_faces(&[2, 2, 2, 5, 5]);

    assert_eq!(tally.count_of(2), 3);
    assert_eq!(tally.count_of(5), 2);
    assert_eq!(tally.count_of(6), 0);
    assert_eq!(tally.distinct(), 2);

    // Тройка считается группой-парой: всего две группы.
    assert_eq!(tally.pair_groups(), 2);
    assert!(tally.has_at_least(3));
    assert!(!tally.has_at_least(4));
    assert!(tally.has_exactly(2));
    assert!(!tally.has_exactly(5));
}

#[test]
fn tally_of_distinct_faces_has_no_groups() {
    let tally = FaceTally::from_faces(&[1, 2, 3, 4]);
    assert_eq!(tally.pair_groups(), 0);
    assert!(!tally.has_at_least(2));
}

//
// classic
//

#[test]
fn classic_delta_is_plain_sum() {
    // Сценарий: d6 x2, выпало [3,4] — дельта 7.
    assert_eq!(score_roll(GameMode::Classic, &[3, 4], 0), Score(7));
    assert_eq!(score_roll(GameMode::Classic, &[1], 5), Score(1));
    assert_eq!(score_roll(GameMode::Classic, &[6, 6, 6, 6, 6], 2), Score(30));
}

//
// poker
//

#[test]
fn poker_five_of_a_kind_pays_100() {
    assert_eq!(score_roll(GameMode::Poker, &[4, 4, 4, 4, 4], 0), Score(100));
}

#[test]
fn poker_four_of_a_kind_pays_50() {
    assert_eq!(score_roll(GameMode::Poker, &[3, 3, 3, 3, 2], 0), Score(50));
}

#[test]
fn poker_full_house_pays_40() {
    // Тройка плюс пара — две группы-пары вместе с тройкой.
    assert_eq!(score_roll(GameMode::Poker, &[2, 2, 2, 5, 5], 0), Score(40));
}

#[test]
fn poker_three_of_a_kind_pays_30() {
    assert_eq!(score_roll(GameMode::Poker, &[6, 6, 6, 2, 4], 0), Score(30));
}

#[test]
fn poker_two_pairs_pay_20() {
    assert_eq!(score_roll(GameMode::Poker, &[1, 1, 4, 4, 6], 0), Score(20));
    // Три пары — всё равно «две и более».
    assert_eq!(score_roll(GameMode::Poker, &[1, 1, 4, 4, 6, 6], 0), Score(20));
}

#[test]
fn poker_one_pair_pays_10() {
    assert_eq!(score_roll(GameMode::Poker, &[5, 5, 1, 2, 3], 0), Score(10));
}

#[test]
fn poker_without_combination_falls_back_to_sum() {
    assert_eq!(score_roll(GameMode::Poker, &[1, 2, 4, 5, 6], 0), Score(18));
}

#[test]
fn poker_checks_ranks_in_descending_order() {
    // Пять одинаковых — это одновременно каре и тройка;
    // выигрывает старшая комбинация.
    assert_eq!(score_roll(GameMode::Poker, &[2, 2, 2, 2, 2], 0), Score(100));
    // Каре — это и тройка тоже, но платим за каре.
    assert_eq!(score_roll(GameMode::Poker, &[5, 5, 5, 5, 1], 0), Score(50));
}

#[test]
fn poker_single_die_never_makes_a_combination() {
    assert_eq!(score_roll(GameMode::Poker, &[5], 0), Score(5));
}

//
// generala
//

#[test]
fn generala_servida_pays_1000() {
    assert_eq!(score_roll(GameMode::Generala, &[6, 6, 6, 6, 6], 0), Score(1000));
    assert_eq!(score_roll(GameMode::Generala, &[1, 1, 1, 1, 1], 0), Score(1000));
}

#[test]
fn generala_straight_pays_500() {
    assert_eq!(score_roll(GameMode::Generala, &[1, 2, 3, 4, 5], 0), Score(500));
    assert_eq!(score_roll(GameMode::Generala, &[2, 3, 4, 5, 6], 0), Score(500));
    // Порядок граней в броске не важен.
    assert_eq!(score_roll(GameMode::Generala, &[4, 2, 5, 3, 6], 0), Score(500));
}

#[test]
fn generala_requires_exactly_five_of_a_kind() {
    // Шесть одинаковых — это не «ровно пять», остаётся сумма.
    assert_eq!(
        score_roll(GameMode::Generala, &[4, 4, 4, 4, 4, 4], 0),
        Score(24)
    );
}

#[test]
fn generala_repeats_break_the_straight() {
    assert_eq!(score_roll(GameMode::Generala, &[1, 2, 2, 3, 4], 0), Score(12));
}

#[test]
fn generala_single_die_is_not_a_straight() {
    assert_eq!(score_roll(GameMode::Generala, &[3], 0), Score(3));
}

#[test]
fn generala_without_combination_falls_back_to_sum() {
    assert_eq!(score_roll(GameMode::Generala, &[1, 1, 3, 5, 6], 0), Score(16));
}

//
// blackjack
//

#[test]
fn blackjack_natural_21_on_first_roll_gets_bonus() {
    // Сценарий: первый бросок участника, сумма ровно 21 — дельта 71.
    assert_eq!(
        score_roll(GameMode::Blackjack, &[6, 6, 6, 3], 0),
        Score(71)
    );
}

#[test]
fn blackjack_21_on_later_rolls_is_plain_sum() {
    assert_eq!(
        score_roll(GameMode::Blackjack, &[6, 6, 6, 3], 1),
        Score(21)
    );
}

#[test]
fn blackjack_bust_is_flat_minus_20() {
    // Перебор даёт -20 независимо от фактической суммы.
    assert_eq!(score_roll(GameMode::Blackjack, &[6, 6, 6, 4], 1), Score(-20));
    assert_eq!(score_roll(GameMode::Blackjack, &[20, 20, 20], 0), Score(-20));
}

#[test]
fn blackjack_under_21_is_plain_sum() {
    assert_eq!(score_roll(GameMode::Blackjack, &[5, 6], 0), Score(11));
    assert_eq!(score_roll(GameMode::Blackjack, &[5, 6], 7), Score(11));
}

//
// truco
//

#[test]
fn truco_remaps_faces_through_card_values() {
    // 1→11, 2→10, 3→9: без пар просто сумма значений.
    assert_eq!(score_roll(GameMode::Truco, &[1, 2, 3], 0), Score(30));
    assert_eq!(score_roll(GameMode::Truco, &[6], 0), Score(6));
}

#[test]
fn truco_pair_adds_envido_bonus() {
    // Сценарий: [1,1] — 11+11 плюс 10 за пару.
    assert_eq!(score_roll(GameMode::Truco, &[1, 1], 0), Score(32));
    // [6,6]: 6+6 плюс 10.
    assert_eq!(score_roll(GameMode::Truco, &[6, 6], 0), Score(22));
}

#[test]
fn truco_each_pair_group_adds_10() {
    // Две пары: (11+11) + (10+10) + 2*10.
    assert_eq!(score_roll(GameMode::Truco, &[1, 1, 2, 2], 0), Score(62));
}

#[test]
fn truco_unmapped_faces_count_at_face_value() {
    // d8: грани 7 и 8 вне таблицы, считаются по номиналу.
    assert_eq!(score_roll(GameMode::Truco, &[7, 8], 0), Score(15));
    assert_eq!(score_roll(GameMode::Truco, &[7, 7], 0), Score(24));
}
