//! Supermove scenarios: capacity formula, bound exactness, and the
//! asymmetric destination-column exclusion.

use freecell_core::{
    move_capacity, run_onto_card, run_to_empty, Board, Card, Game, IntentOutcome, Rank, Spot, Suit,
};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Three empty cells (one holds an ace), one empty column, and a 3-card
/// alternating run staged behind a fitting landing card.
fn staged_scenario() -> Board {
    let mut board = Board::new();
    board.put_cell(2, card(Rank::Ace, Suit::Clubs));

    board.push_column(0, card(Rank::King, Suit::Spades));
    board.push_column(0, card(Rank::Six, Suit::Spades));

    board.push_column(1, card(Rank::King, Suit::Hearts));
    board.push_column(1, card(Rank::Five, Suit::Hearts));
    board.push_column(1, card(Rank::Four, Suit::Spades));
    board.push_column(1, card(Rank::Three, Suit::Diamonds));

    // column 2 stays empty; keep the rest occupied
    for (i, filler) in [
        card(Rank::King, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Queen, Suit::Diamonds),
    ]
    .into_iter()
    .enumerate()
    {
        board.push_column(3 + i, filler);
    }
    board
}

#[test]
fn test_three_card_run_with_capacity_eight() {
    let mut board = staged_scenario();
    // (3 empty cells + 1) * 2^1 empty column
    assert_eq!(move_capacity(&board, false), 8);
    assert_eq!(run_onto_card(&board, 1, 0), Some(3));

    assert_eq!(freecell_core::move_run_onto_card(&mut board, 1, 0), Some(3));
    let rendered: Vec<String> = board.column(0).iter().map(Card::to_string).collect();
    assert_eq!(rendered, ["KS", "6S", "5H", "4S", "3D"]);
}

#[test]
fn test_same_run_with_capacity_one_moves_singly() {
    let mut board = staged_scenario();
    // occupy every cell and the empty column
    board.put_cell(0, card(Rank::Ten, Suit::Hearts));
    board.put_cell(1, card(Rank::Ten, Suit::Spades));
    board.put_cell(3, card(Rank::Ten, Suit::Diamonds));
    board.push_column(2, card(Rank::Ten, Suit::Clubs));

    assert_eq!(move_capacity(&board, false), 1);
    // the 3-card run no longer reaches its landing
    assert_eq!(run_onto_card(&board, 1, 0), None);
    // but a directly-stackable exposed card still moves as a run of one
    board.push_column(2, card(Rank::Two, Suit::Spades));
    assert_eq!(run_onto_card(&board, 2, 1), Some(1));
}

#[test]
fn test_destination_exclusion_is_asymmetric() {
    let mut board = staged_scenario();
    // make a second column empty
    board.pop_exposed(7);
    assert_eq!(board.empty_columns(), 2);

    // onto a card: both empty columns count
    assert_eq!(move_capacity(&board, false), 16);
    // into an empty column: the destination excludes itself
    assert_eq!(move_capacity(&board, true), 8);
}

#[test]
fn test_empty_column_run_is_capped_by_reduced_capacity() {
    let mut board = staged_scenario();
    // fill all cells: capacity into the empty column is (0+1) * 2^0 = 1
    board.put_cell(0, card(Rank::Ten, Suit::Hearts));
    board.put_cell(1, card(Rank::Ten, Suit::Spades));
    board.put_cell(3, card(Rank::Ten, Suit::Diamonds));

    assert_eq!(move_capacity(&board, true), 1);
    // the walk cannot assemble two cards, so no supermove exists
    assert_eq!(run_to_empty(&board, 1, 2), None);
}

#[test]
fn test_run_to_empty_moves_maximal_prefix_of_capacity() {
    let mut board = staged_scenario();
    // one cell left empty: capacity into the empty column is (1+1) * 1 = 2,
    // shorter than the 3-card run
    board.put_cell(0, card(Rank::Ten, Suit::Hearts));
    board.put_cell(1, card(Rank::Ten, Suit::Spades));

    assert_eq!(run_to_empty(&board, 1, 2), Some(2));
    assert_eq!(freecell_core::move_run_to_empty(&mut board, 1, 2), Some(2));
    let rendered: Vec<String> = board.column(2).iter().map(Card::to_string).collect();
    assert_eq!(rendered, ["4S", "3D"]);
    assert_eq!(
        board.exposed(1),
        Some(card(Rank::Five, Suit::Hearts))
    );
}

#[test]
fn test_no_supermove_exists_at_game_1_start() {
    let mut game = Game::new();
    game.deal(1);

    // holding 6S, every other column tap is an illegal target
    assert_eq!(game.select_or_target(Spot::Column(0)), IntentOutcome::Selected);
    for col in [1, 2, 4, 5, 6] {
        assert_eq!(game.select_or_target(Spot::Column(col)), IntentOutcome::Ignored);
    }
    assert_eq!(game.selection(), Some(Spot::Column(0)));
}
