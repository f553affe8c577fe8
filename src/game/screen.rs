//! The game screen: session state and host entry points.
//!
//! `GameScreen` owns the whole game for one session: the card arena, the
//! four foundation piles, the hint controller, and the pending scene
//! effects. The host drives it through exactly two kinds of entry point,
//! never concurrently: discrete input callbacks (pointer and key events)
//! and the per-frame `update`.
//!
//! There is no in-place reset. Restarting discards the screen and
//! constructs a fresh one, which is what [`ScreenRequest::Restart`] asks
//! the host to do.

use crate::board::Pile;
use crate::cards::{CardArena, Rank};
use crate::core::config::GameConfig;
use crate::core::entity::{CardId, PileId};
use crate::core::geom::Vec2;
use crate::core::rng::GameRng;
use crate::drag::{self, ReleaseOutcome};
use crate::hint::HintController;
use crate::rules;
use crate::scene::SceneEffect;

/// Discrete keys the screen reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Toggle pause.
    P,
    /// Restart the game.
    R,
}

/// A request the screen hands back to the application shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenRequest {
    /// Discard this screen and construct a fresh one.
    Restart,
}

/// One game session.
pub struct GameScreen {
    config: GameConfig,
    arena: CardArena,
    piles: Vec<Pile>,
    hint: HintController,
    paused: bool,
    pending: Vec<SceneEffect>,
}

impl GameScreen {
    /// Set up a new game: full deck, Aces seeded onto the piles, every
    /// other card scattered over the lower board.
    ///
    /// The same `seed` always produces the same deal.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut arena = CardArena::full_deck(config.card_size);

        let mut piles: Vec<Pile> = (0..config.pile_count)
            .map(|n| Pile::new(PileId::new(n), config.pile_pos(n), config.pile_size))
            .collect();

        // Aces go to the first empty pile each, snap-aligned and locked;
        // everything else lands at a random spot below the pile row.
        for id in arena.ids().collect::<Vec<_>>() {
            if arena.get(id).rank() == Rank::Ace {
                if let Some(pile) = piles.iter_mut().find(|p| p.is_empty()) {
                    let target = rules::snap_target(arena.get(id), pile);
                    let card = arena.get_mut(id);
                    card.rect.pos = target;
                    card.draggable = false;
                    pile.add_card(id);
                }
            } else {
                let pos = Vec2::new(
                    rng.gen_range(0.0..=config.scatter_max.x),
                    rng.gen_range(0.0..=config.scatter_max.y),
                );
                arena.get_mut(id).rect.pos = pos;
            }
        }

        Self {
            config,
            arena,
            piles,
            hint: HintController::new(),
            paused: false,
            pending: Vec::new(),
        }
    }

    /// Pointer-down on a card. Returns `true` if consumed; a card
    /// already placed on a pile lets the touch fall through.
    pub fn pointer_down(&mut self, card: CardId, local: Vec2, stage: Vec2) -> bool {
        drag::pointer_down(&mut self.arena, card, local, stage, &mut self.pending)
    }

    /// Pointer moved while dragging a card.
    pub fn pointer_move(&mut self, card: CardId, local: Vec2) {
        drag::pointer_move(&mut self.arena, card, local, &mut self.pending);
    }

    /// Pointer released over a card. Returns how the release settled,
    /// or `None` if no drag was in progress.
    pub fn pointer_up(&mut self, card: CardId) -> Option<ReleaseOutcome> {
        drag::pointer_up(
            &mut self.arena,
            &mut self.piles,
            card,
            &self.config,
            &mut self.pending,
        )
    }

    /// Per-frame update. `dt` is elapsed seconds, `touch_active` the
    /// input collaborator's "any pointer down" query. A paused screen
    /// ignores the frame entirely.
    pub fn update(&mut self, dt: f32, touch_active: bool) {
        if self.paused {
            return;
        }
        self.hint.update(
            dt,
            touch_active,
            self.config.hint_delay,
            &self.arena,
            &mut self.pending,
        );
    }

    /// Discrete key press.
    pub fn key_down(&mut self, key: Key) -> Option<ScreenRequest> {
        match key {
            Key::P => {
                self.paused = !self.paused;
                None
            }
            Key::R => Some(ScreenRequest::Restart),
        }
    }

    /// Take all scene effects queued since the last drain. The host
    /// applies them to its scene graph in order.
    pub fn drain_effects(&mut self) -> Vec<SceneEffect> {
        std::mem::take(&mut self.pending)
    }

    /// Every card sorted onto a pile?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.arena.iter().all(|c| !c.draggable)
    }

    /// Is the screen paused?
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The card arena.
    #[must_use]
    pub fn arena(&self) -> &CardArena {
        &self.arena
    }

    /// The foundation piles, creation order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// The hint controller.
    #[must_use]
    pub fn hint(&self) -> &HintController {
        &self.hint
    }

    /// The configuration this screen was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
