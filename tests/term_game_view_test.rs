use memory_match::core::{GameSettings, Round};
use memory_match::term::{AnchorY, FrameBuffer, GameView, Viewport};
use memory_match::types::{GameAction, GridSize};

const BOARD: [u32; 16] = [7, 7, 3, 3, 1, 1, 2, 2, 4, 4, 5, 5, 6, 6, 8, 8];

fn round(players: u8) -> Round {
    let settings = GameSettings::new(GridSize::Four, players).unwrap();
    Round::with_values(settings, &BOARD, 1).unwrap()
}

fn all_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // 4 cards of 6 columns, 3 gaps and 2 padding columns => 29 + border = 31.
    // 4 cards of 3 rows => 12 + border = 14.
    let fb = view.render(&round(1), None, Viewport::new(31, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(30, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(30, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_places_cards_on_a_grid() {
    let view = GameView::default();
    let fb = view.render(&round(1), None, Viewport::new(31, 14));

    // Card 0 at (2,1); card 5 is one column and one row further.
    assert_eq!(fb.get(2, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(9, 4).unwrap().ch, '┌');
    for x in 3..7 {
        assert_eq!(fb.get(x, 2).unwrap().ch, '░');
    }
}

#[test]
fn term_view_shows_revealed_value_centred() {
    let view = GameView::default();
    let revealed = round(1).transition(GameAction::RevealCard(0));
    let fb = view.render(&revealed, None, Viewport::new(31, 14));

    assert_eq!(fb.get(3, 2).unwrap().ch, ' ');
    assert_eq!(fb.get(4, 2).unwrap().ch, '7');
}

#[test]
fn term_view_dims_matched_cards() {
    let view = GameView::default();
    let matched = round(1)
        .transition(GameAction::RevealCard(0))
        .transition(GameAction::RevealCard(1));
    let fb = view.render(&matched, None, Viewport::new(31, 14));

    let cell = fb.get(4, 2).unwrap();
    assert_eq!(cell.ch, '7');
    assert!(cell.style.dim);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let view = GameView::default();
    let narrow = view.render(&round(1), None, Viewport::new(31, 14));
    let wide = view.render(&round(1), None, Viewport::new(60, 14));

    assert!(!all_text(&narrow).contains("MOVES"));
    assert!(all_text(&wide).contains("MOVES"));
    assert!(all_text(&wide).contains("TIME"));
}

#[test]
fn term_view_lists_players_in_multiplayer() {
    let view = GameView::default();
    let text = all_text(&view.render(&round(4), None, Viewport::new(60, 14)));

    assert!(text.contains("PLAYERS"));
    assert!(text.contains("▶ P1"));
    for label in ["P2", "P3", "P4"] {
        assert!(text.contains(label));
    }
    assert!(!text.contains("TIME"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let view = GameView::default();
    let fb = view.render(&round(1), None, Viewport::new(31, 30));

    // start_y = (30 - 14) / 2 = 8.
    assert_eq!(fb.get(0, 8).unwrap().ch, '┌');

    let top = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = top.render(&round(1), None, Viewport::new(31, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_six_by_six_fits_standard_terminal() {
    let settings = GameSettings::new(GridSize::Six, 1).unwrap();
    let round = Round::new(settings, 5);
    let fb = GameView::default().render(&round, Some(35), Viewport::new(80, 24));
    let text = all_text(&fb);

    assert_eq!(text.matches('┌').count(), 37);
    assert!(text.contains("MOVES"));
}

#[test]
fn term_view_announces_tie() {
    let mut round = round(2);
    for i in 0..16 {
        round.apply(GameAction::RevealCard(i));
    }
    let text = all_text(&GameView::default().render(&round, None, Viewport::new(80, 24)));

    assert!(text.contains("It's a tie!"));
    assert!(text.contains("P1  4 pairs"));
    assert!(text.contains("P2  4 pairs"));
}
