//! The battle engine: every match-state transition lives here.
//!
//! The engine is a pure transition function over `BattleMatch` values.
//! Each action validates its constraints, clones the incoming value,
//! applies one atomic resolution, appends log events, and returns the
//! new value or a typed `EngineError`. The engine holds no state
//! between matches; callers own call serialization per match.
//!
//! ```
//! use duelforge::battle::BattleEngine;
//! use duelforge::cards::{Catalog, Deck};
//! use duelforge::core::BattleRng;
//!
//! let mut rng = BattleRng::new(1);
//! let catalog = Catalog::standard(&mut rng);
//! let player = catalog.random_deck(&mut rng, "Player Deck", 20);
//! let opponent = catalog.random_deck(&mut rng, "Opponent Deck", 20);
//!
//! let engine = BattleEngine::new();
//! let mat = engine.start_match(&player, &opponent, 42).unwrap();
//! assert_eq!(mat.participant(duelforge::core::Side::Player).hand.len(), 5);
//! ```

use super::log::BattleEvent;
use super::participant::{BattleParticipant, BoardCreature};
use super::state::{BattleMatch, BattleStatus, WinReason};
use crate::cards::{AbilityEffect, Card, CardId, CardKind, Deck};
use crate::core::{BattleConfig, BattleRng, DeckError, EngineError, Side, SideMap};

/// The match lifecycle driver.
///
/// Carries only the rule constants; all match state lives in the
/// `BattleMatch` values passed through it.
#[derive(Clone, Copy, Debug, Default)]
pub struct BattleEngine {
    config: BattleConfig,
}

impl BattleEngine {
    /// Engine with the shipped rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom rules (tests, game modes).
    #[must_use]
    pub fn with_config(config: BattleConfig) -> Self {
        Self { config }
    }

    /// The rule constants this engine runs on.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Start a match between two decks.
    ///
    /// Both decks are copied: each is shuffled deterministically from
    /// `seed` into a draw pile, and the opening hand is dealt from the
    /// top. The player acts first. The log starts empty.
    ///
    /// ## Errors
    ///
    /// `EngineError::InvalidDeck` when either deck is empty.
    pub fn start_match(
        &self,
        player_deck: &Deck,
        opponent_deck: &Deck,
        seed: u64,
    ) -> Result<BattleMatch, EngineError> {
        for deck in [player_deck, opponent_deck] {
            if deck.is_empty() {
                return Err(EngineError::InvalidDeck {
                    name: deck.name.clone(),
                    source: DeckError::Empty,
                });
            }
        }

        let mut rng = BattleRng::new(seed);
        let player = self.deal_in(player_deck, &mut rng);
        let opponent = self.deal_in(opponent_deck, &mut rng);

        Ok(BattleMatch {
            participants: SideMap::from_parts(player, opponent),
            turn: Side::Player,
            turn_count: 1,
            log: im::Vector::new(),
            status: BattleStatus::InProgress,
            rng,
        })
    }

    fn deal_in(&self, deck: &Deck, rng: &mut BattleRng) -> BattleParticipant {
        let mut pile = deck.cards.clone();
        rng.shuffle(&mut pile);

        let mut participant = BattleParticipant::new(&self.config, pile);
        for _ in 0..self.config.opening_hand_size {
            participant.draw_to_hand();
        }
        participant
    }

    /// Play a card from the acting side's hand.
    ///
    /// Resolution is atomic: cost deduction, hand removal, kind-specific
    /// effects, log entries, and the win check all land in the returned
    /// value or not at all.
    ///
    /// ## Errors
    ///
    /// - `MatchAlreadyEnded` when the match is over
    /// - `IllegalAction` when it is not `side`'s turn
    /// - `CardNotInHand` when `card` is not in that side's hand
    /// - `InsufficientEnergy` when the cost exceeds available energy
    pub fn play_card(
        &self,
        mat: &BattleMatch,
        side: Side,
        card: CardId,
    ) -> Result<BattleMatch, EngineError> {
        ensure_in_progress(mat)?;
        if mat.turn != side {
            return Err(EngineError::IllegalAction { side });
        }

        let acting = mat.participant(side);
        let index = acting
            .hand_position(card)
            .ok_or(EngineError::CardNotInHand { side, card })?;
        let cost = acting.hand[index].cost;
        if cost > acting.energy {
            return Err(EngineError::InsufficientEnergy {
                have: acting.energy,
                need: cost,
            });
        }

        let mut next = mat.clone();
        let played = next.participants[side].hand.remove(index);
        next.participants[side].energy -= cost;
        next.push_event(BattleEvent::CardPlayed {
            side,
            card: played.id,
            name: played.name.clone(),
            cost,
        });

        match played.kind {
            CardKind::Creature => self.resolve_creature(&mut next, side, played),
            CardKind::Spell => self.resolve_spell(&mut next, side, &played),
            CardKind::Artifact => self.resolve_artifact(&mut next, side, played),
        }

        Ok(next)
    }

    /// Summon: place on the board, deal rush damage, then apply cast
    /// effects. There is no summoning sickness and no blocking phase.
    fn resolve_creature(&self, next: &mut BattleMatch, side: Side, card: Card) {
        let name = card.name.clone();
        let attack = card.attack;
        let health = card.health;
        let abilities = card.abilities.clone();

        next.participants[side].board.push_back(BoardCreature::summon(card));
        next.push_event(BattleEvent::CreatureSummoned {
            side,
            name: name.clone(),
            attack,
            health,
        });

        if attack > 0 && self.deal_damage(next, side, &name, attack) {
            return;
        }

        self.apply_cast_effects(next, side, &name, &abilities, true);
    }

    /// Spells apply their abilities, then are discarded.
    fn resolve_spell(&self, next: &mut BattleMatch, side: Side, card: &Card) {
        self.apply_cast_effects(next, side, &card.name, &card.abilities, false);
    }

    /// Artifacts join the standing effect bag. Their keywords are
    /// logged; nothing else fires on cast.
    fn resolve_artifact(&self, next: &mut BattleMatch, side: Side, card: Card) {
        let name = card.name.clone();
        next.push_event(BattleEvent::ArtifactEquipped {
            side,
            name: name.clone(),
        });

        for ability in card.abilities.clone() {
            match ability.effect() {
                AbilityEffect::Passive(keyword) => {
                    next.push_event(BattleEvent::KeywordGained {
                        side,
                        source: name.clone(),
                        keyword,
                    });
                }
                _ => {
                    next.push_event(BattleEvent::AbilityIgnored {
                        side,
                        source: name.clone(),
                        tag: ability.tag(),
                    });
                }
            }
        }

        next.participants[side].artifacts.push_back(card);
    }

    /// Apply ability effects on cast. Resolution stops as soon as the
    /// match ends. When `passives_persist`, keywords ride on the board
    /// entity and are logged as gained; otherwise (spells) a keyword
    /// has nothing to attach to and is logged as a no-op, the same way
    /// unknown tags always are - never dropped.
    fn apply_cast_effects(
        &self,
        next: &mut BattleMatch,
        side: Side,
        source: &str,
        abilities: &[crate::cards::Ability],
        passives_persist: bool,
    ) {
        for ability in abilities {
            match ability.effect() {
                AbilityEffect::Heal(amount) => {
                    let health =
                        next.participants[side].heal(amount, self.config.starting_health);
                    next.push_event(BattleEvent::Healed {
                        side,
                        source: source.to_string(),
                        amount,
                        health,
                    });
                }
                AbilityEffect::Burn(amount) => {
                    if self.deal_damage(next, side, source, amount) {
                        return;
                    }
                }
                AbilityEffect::Passive(keyword) if passives_persist => {
                    next.push_event(BattleEvent::KeywordGained {
                        side,
                        source: source.to_string(),
                        keyword,
                    });
                }
                AbilityEffect::Passive(_) | AbilityEffect::Unknown => {
                    next.push_event(BattleEvent::AbilityIgnored {
                        side,
                        source: source.to_string(),
                        tag: ability.tag(),
                    });
                }
            }
        }
    }

    /// Damage the opposing side. Returns true when the hit ends the
    /// match, in which case resolution must stop.
    fn deal_damage(&self, next: &mut BattleMatch, side: Side, source: &str, amount: i64) -> bool {
        let target = side.opposite();
        let remaining = next.participants[target].take_damage(amount);
        next.push_event(BattleEvent::DamageDealt {
            side,
            target,
            source: source.to_string(),
            amount,
            remaining,
        });

        if remaining <= 0 {
            next.status = BattleStatus::Ended {
                winner: side,
                reason: WinReason::Knockout,
            };
            next.push_event(BattleEvent::MatchEnded {
                winner: side,
                reason: WinReason::Knockout,
            });
            true
        } else {
            false
        }
    }

    /// Pass the turn to the other side.
    ///
    /// The new acting side gains energy up to the cap and draws a card
    /// if their pile allows. `turn_count` increments when play returns
    /// to the player.
    ///
    /// ## Errors
    ///
    /// `MatchAlreadyEnded` when the match is over.
    pub fn end_turn(&self, mat: &BattleMatch) -> Result<BattleMatch, EngineError> {
        ensure_in_progress(mat)?;

        let mut next = mat.clone();
        let up = next.turn.opposite();
        next.turn = up;
        if up == Side::Player {
            next.turn_count += 1;
        }

        let energy = next.participants[up]
            .gain_energy(self.config.energy_per_turn, self.config.energy_cap);
        next.push_event(BattleEvent::TurnEnded {
            next: up,
            turn_count: next.turn_count,
            energy,
        });

        for _ in 0..self.config.draw_per_turn {
            if next.participants[up].draw_to_hand() {
                let remaining = next.participants[up].draw_pile.len();
                next.push_event(BattleEvent::CardDrawn { side: up, remaining });
            }
        }

        Ok(next)
    }

    /// Turn-timer entry point.
    ///
    /// The engine is not time-aware; when the presentation layer's
    /// countdown expires, its timer calls this. Identical to
    /// [`BattleEngine::end_turn`].
    pub fn force_end_turn(&self, mat: &BattleMatch) -> Result<BattleMatch, EngineError> {
        self.end_turn(mat)
    }

    /// Concede the match for `side`, regardless of health values.
    ///
    /// The other side wins with reason `Surrender`, which the caller's
    /// reward policy distinguishes from a knockout loss.
    ///
    /// ## Errors
    ///
    /// `MatchAlreadyEnded` when the match is over.
    pub fn surrender(&self, mat: &BattleMatch, side: Side) -> Result<BattleMatch, EngineError> {
        ensure_in_progress(mat)?;

        let winner = side.opposite();
        let mut next = mat.clone();
        next.status = BattleStatus::Ended {
            winner,
            reason: WinReason::Surrender,
        };
        next.push_event(BattleEvent::MatchEnded {
            winner,
            reason: WinReason::Surrender,
        });
        Ok(next)
    }
}

fn ensure_in_progress(mat: &BattleMatch) -> Result<(), EngineError> {
    if mat.status.is_terminal() {
        return Err(EngineError::MatchAlreadyEnded);
    }
    Ok(())
}
