// src/logic/field_tests.rs
//! Field のテストだよ。配った直後の状態と、8種類の手をひとつずつ確かめる。

use super::*;
use crate::components::card::{Rank, Suit, ALL_RANKS};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::convert::TryFrom;

// --- テスト用ヘルパー ---

fn id(rank: u8, suit: u8) -> CardId {
    CardId::from_raw(rank, suit).unwrap()
}

fn make(rank: u8, suit: u8, place: CardPlace, hidden: bool, interactable: bool) -> Card {
    Card {
        rank: Rank::try_from(rank).unwrap(),
        suit: Suit::try_from(suit).unwrap(),
        place,
        hidden,
        interactable,
    }
}

/// 場札の裏向きカード
fn down(rank: u8, suit: u8) -> Card {
    make(rank, suit, CardPlace::Tableau, true, false)
}

/// 場札の表向きカード
fn up(rank: u8, suit: u8) -> Card {
    make(rank, suit, CardPlace::Tableau, false, true)
}

fn waste_card(rank: u8, suit: u8, top: bool) -> Card {
    make(rank, suit, CardPlace::Waste, false, top)
}

fn stock_card(rank: u8, suit: u8, top: bool) -> Card {
    make(rank, suit, CardPlace::Stock, true, top)
}

/// 好きな並びの場を直接組み立てる。
fn layout(stock: Vec<Card>, waste: Vec<Card>, tableau: Vec<Vec<Card>>) -> Field {
    Field {
        settings: FieldSettings {
            tableau_heights: tableau.iter().map(|c| c.len().max(1)).collect(),
            draw_count: 1,
        },
        stock,
        waste,
        tableau,
        foundation: Default::default(),
    }
}

fn ids(cards: &[Card]) -> Vec<CardId> {
    cards.iter().map(Card::id).collect()
}

// --- 配り方 ---

#[test]
fn deal_invariant_default_heights() {
    let settings = FieldSettings::default();
    let field = Field::with_rng(&settings, &mut StdRng::seed_from_u64(99)).unwrap();

    assert_eq!(field.cards().count(), 52);
    assert!(field.cards().map(Card::id).all_unique(), "同じカードが2枚ある！");
    assert_eq!(field.stock().len(), 24);
    assert!(field.waste().is_empty());
    assert!(field.foundation().iter().all(Vec::is_empty));

    for (i, column) in field.tableau().iter().enumerate() {
        assert_eq!(column.len(), i + 1);
        let (last, rest) = column.split_last().unwrap();
        assert!(!last.hidden && last.interactable, "列 {} の最後が表向きじゃない", i);
        assert!(rest.iter().all(|c| c.hidden && !c.interactable));
        assert!(column.iter().all(|c| c.place == CardPlace::Tableau));
    }

    let (top, below) = field.stock().split_last().unwrap();
    assert!(top.interactable && top.hidden);
    assert!(below.iter().all(|c| c.hidden && !c.interactable && c.place == CardPlace::Stock));
}

#[test]
fn deal_invariant_other_heights() {
    for heights in [vec![3], vec![5, 1, 5], vec![13, 13, 13, 13], vec![1; 10]] {
        let settings = FieldSettings {
            tableau_heights: heights.clone(),
            draw_count: 1,
        };
        let field = Field::new(&settings).unwrap();
        assert_eq!(field.cards().count(), 52);
        assert!(field.cards().map(Card::id).all_unique());
        assert_eq!(field.stock().len(), 52 - heights.iter().sum::<usize>());
        for (column, &height) in field.tableau().iter().zip(heights.iter()) {
            assert_eq!(column.len(), height);
            assert!(!column[height - 1].hidden && column[height - 1].interactable);
        }
    }
}

#[test]
fn full_deal_leaves_empty_stock() {
    let settings = FieldSettings {
        tableau_heights: vec![13, 13, 13, 13],
        draw_count: 1,
    };
    let field = Field::new(&settings).unwrap();
    assert!(field.stock().is_empty());
}

#[test]
fn from_deck_deals_columns_first_then_stock() {
    let settings = FieldSettings {
        tableau_heights: vec![1, 2],
        draw_count: 1,
    };
    let deck = create_standard_deck();
    let expected = ids(&deck);
    let field = Field::from_deck(&settings, deck).unwrap();

    assert_eq!(ids(&field.tableau()[0]), expected[0..1].to_vec());
    assert_eq!(ids(&field.tableau()[1]), expected[1..3].to_vec());
    assert_eq!(ids(field.stock()), expected[3..].to_vec());
    assert!(field.tableau()[1][0].hidden);
}

#[test]
fn bad_settings_are_rejected() {
    let settings = FieldSettings {
        tableau_heights: vec![30, 30],
        draw_count: 1,
    };
    assert!(matches!(
        Field::new(&settings),
        Err(ConfigError::TooManyCards { requested: 60, .. })
    ));
}

#[test]
fn from_deck_rejects_decks_that_are_not_one_of_each_card() {
    let settings = FieldSettings::default();

    // 足りない
    assert!(matches!(
        Field::from_deck(&settings, create_standard_deck()[..10].to_vec()),
        Err(ConfigError::InvalidDeck { len: 10, distinct: 10 })
    ));

    // 同じカードばっかり
    let aces = vec![Card::new(Rank::Ace, Suit::Heart); 52];
    assert!(matches!(
        Field::from_deck(&settings, aces),
        Err(ConfigError::InvalidDeck { len: 52, distinct: 1 })
    ));

    // 52枚だけど1枚かぶっている
    let mut deck = create_standard_deck();
    deck[51] = deck[0].clone();
    assert!(matches!(
        Field::from_deck(&settings, deck),
        Err(ConfigError::InvalidDeck { len: 52, distinct: 51 })
    ));

    // 多すぎる
    let mut deck = create_standard_deck();
    deck.push(Card::new(Rank::King, Suit::Spade));
    assert!(matches!(
        Field::from_deck(&settings, deck),
        Err(ConfigError::InvalidDeck { len: 53, distinct: 52 })
    ));
}

// --- 山札 → 捨て札 ---

#[test]
fn stock_to_waste_moves_top_card() {
    let mut field = layout(
        vec![stock_card(3, 1, false), stock_card(8, 2, true)],
        vec![waste_card(5, 4, true)],
        vec![vec![up(0, 3)]],
    );
    assert!(field.apply_move(&Move::StockToWaste));

    assert_eq!(ids(field.stock()), vec![id(3, 1)]);
    assert!(field.stock()[0].interactable);
    assert_eq!(ids(field.waste()), vec![id(5, 4), id(8, 2)]);
    assert!(!field.waste()[0].interactable, "古い捨て札の一番上は操作不可になる");
    let top = &field.waste()[1];
    assert!(!top.hidden && top.interactable);
    assert_eq!(top.place, CardPlace::Waste);
}

#[test]
fn stock_to_waste_on_empty_stock_is_a_successful_no_op() {
    let mut field = layout(vec![], vec![waste_card(5, 4, true)], vec![vec![up(0, 3)]]);
    let before = field.clone();
    assert!(field.apply_move(&Move::StockToWaste));
    assert_eq!(field, before);
}

// --- 組札へ ---

#[test]
fn waste_to_foundation_needs_matching_rank() {
    let mut field = layout(
        vec![],
        vec![waste_card(1, 1, false), waste_card(0, 1, true)],
        vec![vec![up(4, 2)]],
    );
    // A は空の山に置ける
    assert!(field.apply_move(&Move::WasteToFoundation));
    assert_eq!(ids(&field.foundation()[0]), vec![id(0, 1)]);
    assert_eq!(field.foundation()[0][0].place, CardPlace::Foundation);
    assert!(field.waste()[0].interactable, "次の捨て札が操作可能になる");

    // 続けて 2
    assert!(field.apply_move(&Move::WasteToFoundation));
    assert_eq!(field.foundation()[0].len(), 2);
    assert!(field.waste().is_empty());

    // 空の捨て札からは動かせない
    assert!(!field.apply_move(&Move::WasteToFoundation));
}

#[test]
fn waste_to_foundation_rejects_wrong_rank() {
    let mut field = layout(vec![], vec![waste_card(2, 3, true)], vec![vec![up(4, 2)]]);
    let before = field.clone();
    assert!(!field.apply_move(&Move::WasteToFoundation));
    assert_eq!(field, before);
}

#[test]
fn tableau_to_foundation_reveals_new_column_top() {
    let mut field = layout(vec![], vec![], vec![vec![down(9, 2), up(0, 4)]]);
    assert!(field.apply_move(&Move::TableauToFoundation { source: id(0, 4) }));
    assert_eq!(ids(&field.foundation()[3]), vec![id(0, 4)]);
    let new_top = &field.tableau()[0][0];
    assert!(!new_top.hidden && new_top.interactable);
}

#[test]
fn tableau_to_foundation_requires_last_card() {
    // A の上に表向きのカードが重なっている
    let mut field = layout(vec![], vec![], vec![vec![up(0, 2), up(8, 1)]]);
    let before = field.clone();
    assert!(!field.apply_move(&Move::TableauToFoundation { source: id(0, 2) }));
    assert_eq!(field, before);

    // 2 はまだ置けない
    let mut field = layout(vec![], vec![], vec![vec![up(1, 2)]]);
    assert!(!field.apply_move(&Move::TableauToFoundation { source: id(1, 2) }));
}

// --- 場札へ ---

#[test]
fn waste_to_tableau_places_on_column_top() {
    let mut field = layout(
        vec![],
        vec![waste_card(7, 2, false), waste_card(5, 1, true)],
        vec![vec![down(0, 1), up(6, 2)], vec![up(6, 4)]],
    );
    // 5 (赤) → 6 (黒)
    assert!(field.apply_move(&Move::WasteToTableau { target: id(6, 2) }));
    assert_eq!(ids(&field.tableau()[0]), vec![id(0, 1), id(6, 2), id(5, 1)]);
    assert_eq!(field.tableau()[0][2].place, CardPlace::Tableau);
    assert!(field.waste()[0].interactable);

    // 7 は 6 の上に置けない
    assert!(!field.apply_move(&Move::WasteToTableau { target: id(6, 4) }));
}

#[test]
fn waste_to_tableau_target_must_be_column_top() {
    let mut field = layout(
        vec![],
        vec![waste_card(5, 1, true)],
        vec![vec![up(6, 2), up(5, 3)]],
    );
    assert!(!field.apply_move(&Move::WasteToTableau { target: id(6, 2) }));
    // 場札にないカードを指しても失敗するだけ
    assert!(!field.apply_move(&Move::WasteToTableau { target: id(9, 4) }));
}

#[test]
fn tableau_to_tableau_moves_the_whole_run() {
    let mut field = layout(
        vec![],
        vec![],
        vec![
            vec![down(12, 1), down(3, 3), up(9, 1), up(8, 2), up(7, 3)],
            vec![down(2, 2), up(10, 4)],
        ],
    );
    // 9 (赤) とその下の 8, 7 を 10 (黒) の列へ
    assert!(field.apply_move(&Move::TableauToTableau {
        source: id(9, 1),
        target: id(10, 4),
    }));
    assert_eq!(
        ids(&field.tableau()[1]),
        vec![id(2, 2), id(10, 4), id(9, 1), id(8, 2), id(7, 3)]
    );
    assert_eq!(ids(&field.tableau()[0]), vec![id(12, 1), id(3, 3)]);
    let revealed = &field.tableau()[0][1];
    assert!(!revealed.hidden && revealed.interactable);
    assert!(field.tableau()[0][0].hidden);
}

#[test]
fn tableau_to_tableau_rejections() {
    let mut field = layout(
        vec![],
        vec![],
        vec![
            vec![down(5, 3), up(12, 4), up(11, 1)],
            vec![up(10, 4), up(9, 3)],
            vec![up(12, 3)],
            vec![up(12, 2)],
        ],
    );
    let before = field.clone();
    // 裏向きのカードは動かせない
    assert!(!field.apply_move(&Move::TableauToTableau { source: id(5, 3), target: id(9, 3) }));
    // ターゲットが列の最後じゃない
    assert!(!field.apply_move(&Move::TableauToTableau { source: id(9, 3), target: id(10, 4) }));
    // 同じ列の中
    assert!(!field.apply_move(&Move::TableauToTableau { source: id(11, 1), target: id(12, 4) }));
    // 色が同じ (ハートとダイヤ)
    assert!(!field.apply_move(&Move::TableauToTableau { source: id(11, 1), target: id(12, 3) }));
    assert_eq!(field, before);

    // Q (赤) → K (黒) は OK
    assert!(field.apply_move(&Move::TableauToTableau { source: id(11, 1), target: id(12, 2) }));
}

#[test]
fn tableau_to_starter_moves_king_run_into_empty_column() {
    let mut field = layout(
        vec![],
        vec![],
        vec![vec![down(4, 4), up(12, 1), up(11, 2)], vec![]],
    );
    assert!(field.apply_move(&Move::TableauToStarter { source: id(12, 1), column: 1 }));
    assert_eq!(ids(&field.tableau()[1]), vec![id(12, 1), id(11, 2)]);
    assert_eq!(ids(&field.tableau()[0]), vec![id(4, 4)]);
    assert!(!field.tableau()[0][0].hidden);
}

#[test]
fn tableau_to_starter_rejections() {
    let mut field = layout(
        vec![],
        vec![],
        vec![vec![up(11, 1)], vec![], vec![up(12, 4)], vec![up(3, 3)]],
    );
    let before = field.clone();
    // Q は空いた列に置けない
    assert!(!field.apply_move(&Move::TableauToStarter { source: id(11, 1), column: 1 }));
    // 空いてない列
    assert!(!field.apply_move(&Move::TableauToStarter { source: id(12, 4), column: 3 }));
    // 範囲外の列
    assert!(!field.apply_move(&Move::TableauToStarter { source: id(12, 4), column: 9 }));
    assert_eq!(field, before);
}

#[test]
fn waste_to_starter() {
    let mut field = layout(
        vec![],
        vec![waste_card(4, 1, false), waste_card(12, 3, true)],
        vec![vec![up(0, 2)], vec![]],
    );
    assert!(!field.apply_move(&Move::WasteToStarter { column: 0 }));
    assert!(field.apply_move(&Move::WasteToStarter { column: 1 }));
    assert_eq!(ids(&field.tableau()[1]), vec![id(12, 3)]);
    assert_eq!(field.tableau()[1][0].place, CardPlace::Tableau);
    assert!(field.waste()[0].interactable);

    // 次の捨て札は K じゃない
    let mut field = layout(vec![], vec![waste_card(4, 1, true)], vec![vec![]]);
    assert!(!field.apply_move(&Move::WasteToStarter { column: 0 }));
}

// --- 山札を戻す ---

#[test]
fn restore_stock_fails_while_stock_has_cards() {
    let mut field = layout(
        vec![stock_card(1, 1, true)],
        vec![waste_card(2, 2, true)],
        vec![vec![up(0, 3)]],
    );
    let before = field.clone();
    assert!(!field.apply_move(&Move::RestoreStock));
    assert_eq!(field, before);
}

#[test]
fn restore_stock_reverses_waste() {
    let mut field = layout(
        vec![],
        vec![waste_card(1, 1, false), waste_card(2, 2, false), waste_card(3, 3, true)],
        vec![vec![up(0, 3)]],
    );
    assert!(field.apply_move(&Move::RestoreStock));
    assert!(field.waste().is_empty());
    assert_eq!(ids(field.stock()), vec![id(3, 3), id(2, 2), id(1, 1)]);

    let (top, below) = field.stock().split_last().unwrap();
    assert_eq!(top.id(), id(1, 1), "捨て札の一番下が山札の一番上になる");
    assert!(top.interactable && top.hidden);
    assert!(below.iter().all(|c| c.hidden && !c.interactable));
    assert!(field.stock().iter().all(|c| c.place == CardPlace::Stock));
}

#[test]
fn draw_and_restore_cycle_returns_original_stock_order() {
    let mut field = Field::with_rng(&FieldSettings::default(), &mut StdRng::seed_from_u64(5)).unwrap();
    let original = ids(field.stock());
    for _ in 0..original.len() {
        assert!(field.apply_move(&Move::StockToWaste));
    }
    assert!(field.stock().is_empty());
    assert_eq!(field.waste().len(), original.len());
    assert!(field.apply_move(&Move::RestoreStock));
    assert_eq!(ids(field.stock()), original);
}

// --- そのほか ---

#[test]
fn end_to_end_failed_foundation_move_changes_nothing() {
    // 並びが決まったデッキなら、山札の一番上はスペードの K
    let mut field = Field::from_deck(&FieldSettings::default(), create_standard_deck()).unwrap();
    assert!(field.apply_move(&Move::StockToWaste));
    let waste_before = field.waste().to_vec();
    assert_ne!(waste_before[0].rank, Rank::Ace);

    assert!(!field.apply_move(&Move::WasteToFoundation));
    assert_eq!(field.waste(), &waste_before[..]);
    assert!(field.foundation().iter().all(Vec::is_empty));
}

#[test]
fn snapshot_is_independent() {
    let mut field = Field::with_rng(&FieldSettings::default(), &mut StdRng::seed_from_u64(3)).unwrap();
    let snapshot = field.snapshot();
    assert_eq!(snapshot, field);

    assert!(field.apply_move(&Move::StockToWaste));
    assert_ne!(snapshot, field);
    assert_eq!(snapshot.stock().len(), 24);
    assert!(snapshot.waste().is_empty());
    assert!(snapshot.stock().iter().all(|c| c.hidden));
}

#[test]
fn find_helpers() {
    let field = layout(
        vec![stock_card(1, 1, true)],
        vec![],
        vec![vec![down(4, 4), up(7, 2)], vec![up(9, 3)]],
    );
    assert_eq!(field.find_column(id(7, 2)), Some((0, 1)));
    assert_eq!(field.find_column(id(9, 3)), Some((1, 0)));
    assert_eq!(field.find_column(id(1, 1)), None);
    assert_eq!(field.find_card(id(1, 1)).map(|c| c.place), Some(CardPlace::Stock));
    assert!(field.find_card(id(0, 4)).is_none());
}

#[test]
fn victory_only_with_full_foundation() {
    let mut field = layout(vec![], vec![], vec![vec![]]);
    for (pile, suit) in field.foundation.iter_mut().zip(crate::components::card::ALL_SUITS) {
        pile.extend(ALL_RANKS.iter().map(|&rank| Card::new(rank, suit)));
    }
    assert!(field.is_victory());
    field.foundation[2].pop();
    assert!(!field.is_victory());
}
