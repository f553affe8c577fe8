//! End-to-end gameplay tests driven through the `GameScreen` entry
//! points, the way the host loop would: pointer callbacks, key
//! callbacks, and the per-frame update.

use card_pickup::{
    GameConfig, GameScreen, Key, Rank, ReleaseOutcome, SceneEffect, SceneNode, ScreenRequest, Suit,
    Vec2,
};

/// Drag a card by its center so its bottom-left corner lands at `to`,
/// then release. Mirrors a real pointer gesture.
fn drag_to(screen: &mut GameScreen, rank: Rank, suit: Suit, to: Vec2) -> Option<ReleaseOutcome> {
    let id = screen.arena().find(rank, suit).unwrap();

    let grab = screen.arena().get(id).origin;
    let stage = screen.arena().get(id).rect.pos + grab;
    assert!(screen.pointer_down(id, grab, stage), "card not draggable");

    let delta = to - screen.arena().get(id).rect.pos;
    screen.pointer_move(id, grab + delta);

    screen.pointer_up(id)
}

/// Corner position that drops a card onto pile `n` dead center.
fn onto_pile(screen: &GameScreen, n: usize) -> Vec2 {
    let pile = &screen.piles()[n];
    let card_size = screen.config().card_size;
    pile.rect.center() - Vec2::new(card_size.x / 2.0, card_size.y / 2.0)
}

/// Pile index whose top card has the given suit.
fn pile_of_suit(screen: &GameScreen, suit: Suit) -> usize {
    screen
        .piles()
        .iter()
        .position(|p| p.top_suit(screen.arena()) == Some(suit))
        .unwrap()
}

// =============================================================================
// Placement scenarios
// =============================================================================

/// The Two of Hearts dropped on the Ace of Hearts pile is accepted:
/// depth grows, the card locks, and it snaps origin-to-origin.
#[test]
fn test_next_rank_drop_is_accepted() {
    let mut screen = GameScreen::new(GameConfig::default(), 42);
    let n = pile_of_suit(&screen, Suit::Hearts);

    let to = onto_pile(&screen, n);
    let outcome = drag_to(&mut screen, Rank::Two, Suit::Hearts, to);
    assert_eq!(outcome, Some(ReleaseOutcome::Placed(screen.piles()[n].id)));

    let pile = &screen.piles()[n];
    assert_eq!(pile.depth(), 2);
    assert_eq!(pile.top_rank(screen.arena()), Some(Rank::Two));

    let two = screen.arena().find(Rank::Two, Suit::Hearts).unwrap();
    let card = screen.arena().get(two);
    assert!(!card.draggable);
    assert_eq!(card.rect.pos, pile.rect.pos + pile.origin - card.origin);
}

/// A rank gap of two is rejected: the pile is untouched and the card
/// glides back to where the drag started.
#[test]
fn test_rank_gap_drop_returns() {
    let mut screen = GameScreen::new(GameConfig::default(), 42);
    let n = pile_of_suit(&screen, Suit::Clubs);

    let three = screen.arena().find(Rank::Three, Suit::Clubs).unwrap();
    let start = screen.arena().get(three).rect.pos;

    let to = onto_pile(&screen, n);
    let outcome = drag_to(&mut screen, Rank::Three, Suit::Clubs, to);
    assert_eq!(outcome, Some(ReleaseOutcome::Returned));

    assert_eq!(screen.piles()[n].depth(), 1);
    let card = screen.arena().get(three);
    assert!(card.draggable);
    assert_eq!(card.rect.pos, start);
}

/// Same rank, wrong suit: rejected the same way.
#[test]
fn test_wrong_suit_drop_returns() {
    let mut screen = GameScreen::new(GameConfig::default(), 42);
    let n = pile_of_suit(&screen, Suit::Hearts);

    let to = onto_pile(&screen, n);
    let outcome = drag_to(&mut screen, Rank::Two, Suit::Spades, to);
    assert_eq!(outcome, Some(ReleaseOutcome::Returned));
    assert_eq!(screen.piles()[n].depth(), 1);
}

/// A release outside every pile and past the world's left edge is
/// clamped to x = 0, with no animation scheduled.
#[test]
fn test_out_of_bounds_drop_clamps() {
    let mut screen = GameScreen::new(GameConfig::default(), 42);
    screen.drain_effects();

    let outcome = drag_to(
        &mut screen,
        Rank::Seven,
        Suit::Diamonds,
        Vec2::new(-15.0, 100.0),
    );
    assert_eq!(outcome, Some(ReleaseOutcome::Dropped));

    let seven = screen.arena().find(Rank::Seven, Suit::Diamonds).unwrap();
    assert_eq!(screen.arena().get(seven).rect.pos, Vec2::new(0.0, 100.0));

    let effects = screen.drain_effects();
    assert!(effects
        .iter()
        .all(|e| !matches!(e, SceneEffect::Animate { .. })));
}

/// A placed card no longer consumes pointer-down, so the touch falls
/// through to whatever is underneath.
#[test]
fn test_placed_card_ignores_touches() {
    let mut screen = GameScreen::new(GameConfig::default(), 42);
    let n = pile_of_suit(&screen, Suit::Hearts);
    let to = onto_pile(&screen, n);
    drag_to(&mut screen, Rank::Two, Suit::Hearts, to);

    let two = screen.arena().find(Rank::Two, Suit::Hearts).unwrap();
    assert!(!screen.pointer_down(two, Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)));
}

// =============================================================================
// Full game
// =============================================================================

/// Sorting all 48 scattered cards in sequence completes the game.
#[test]
fn test_sorting_everything_completes_the_game() {
    let mut screen = GameScreen::new(GameConfig::default(), 42);
    assert!(!screen.is_complete());

    for suit in Suit::ALL {
        let n = pile_of_suit(&screen, suit);
        for rank in Rank::ALL.into_iter().skip(1) {
            let to = onto_pile(&screen, n);
            let outcome = drag_to(&mut screen, rank, suit, to);
            assert_eq!(
                outcome,
                Some(ReleaseOutcome::Placed(screen.piles()[n].id)),
                "{rank:?} of {suit:?} should place"
            );
        }
        assert_eq!(screen.piles()[n].depth(), 13);
        assert_eq!(screen.piles()[n].top_rank(screen.arena()), Some(Rank::King));
    }

    assert!(screen.is_complete());

    // A finished board never shows a hint, no matter how long we idle.
    screen.drain_effects();
    for _ in 0..5 {
        screen.update(10.0, false);
    }
    assert!(!screen.hint().is_visible());
    assert!(screen.drain_effects().is_empty());
}

// =============================================================================
// Hint flow
// =============================================================================

/// After three idle seconds the first draggable card (creation order:
/// the Two of Clubs, right after the seeded Aces) gets the glow.
#[test]
fn test_idle_shows_hint_on_first_movable_card() {
    let mut screen = GameScreen::new(GameConfig::default(), 42);
    screen.drain_effects();

    // 3.0s exactly is not past the threshold.
    screen.update(3.0, false);
    assert!(!screen.hint().is_visible());

    screen.update(0.2, false);
    assert!(screen.hint().is_visible());

    let two_of_clubs = screen.arena().find(Rank::Two, Suit::Clubs).unwrap();
    assert_eq!(screen.hint().target(), Some(two_of_clubs));

    let effects = screen.drain_effects();
    let center = screen.arena().get(two_of_clubs).rect.center();
    assert!(effects.contains(&SceneEffect::HintVisible(true)));
    assert!(effects.contains(&SceneEffect::CenterHint { on: center }));
    assert!(effects.contains(&SceneEffect::Raise {
        node: SceneNode::Hint
    }));
    assert!(effects.contains(&SceneEffect::Raise {
        node: SceneNode::Card(two_of_clubs)
    }));
}

/// Touching the screen hides the hint and restarts the idle clock.
#[test]
fn test_touch_dismisses_hint() {
    let mut screen = GameScreen::new(GameConfig::default(), 42);
    screen.update(3.5, false);
    assert!(screen.hint().is_visible());
    screen.drain_effects();

    screen.update(0.016, true);
    assert!(!screen.hint().is_visible());
    assert_eq!(screen.hint().idle_time(), 0.0);
    assert!(screen
        .drain_effects()
        .contains(&SceneEffect::HintVisible(false)));

    // The clock really did restart.
    screen.update(2.9, false);
    assert!(!screen.hint().is_visible());
}

// =============================================================================
// Keys and session lifecycle
// =============================================================================

/// P pauses (freezing the hint clock), R asks the host for a fresh
/// screen rather than resetting in place.
#[test]
fn test_key_handling() {
    let mut screen = GameScreen::new(GameConfig::default(), 42);

    assert_eq!(screen.key_down(Key::P), None);
    assert!(screen.is_paused());
    screen.update(100.0, false);
    assert!(!screen.hint().is_visible());

    assert_eq!(screen.key_down(Key::P), None);
    assert!(!screen.is_paused());

    assert_eq!(screen.key_down(Key::R), Some(ScreenRequest::Restart));

    // The restarted session is a brand new deal, not a mutation.
    let fresh = GameScreen::new(GameConfig::default(), 99);
    assert!(!fresh.is_complete());
    assert_eq!(fresh.piles().len(), 4);
}
