use crate::game::snapshot::MatchSnapshot;
use crate::model::card::Card;
use crate::model::color::Color;
use crate::model::deck::Deck;
use crate::model::rank::Rank;
use crate::model::score::Scoreboard;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

pub const HAND_SIZE: usize = 7;
pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn flipped(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// One Uno game: hands, draw pile, play history and turn bookkeeping.
///
/// The state machine validates every mutation; a rejected call is a bug in
/// the driver, not a recoverable condition.
#[derive(Debug, Clone)]
pub struct GameState {
    hands: Vec<Vec<Card>>,
    draw_pile: Vec<Card>,
    played: Vec<Card>,
    called_color: Option<Color>,
    called_by_seat: Vec<Option<Color>>,
    current: usize,
    direction: Direction,
    winner: Option<usize>,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    WentOut,
}

impl GameState {
    /// Shuffle a fresh deck, deal seven cards per seat and flip the first
    /// non-wild card as the starting upcard.
    pub fn deal(seats: usize, seed: u64) -> Result<Self, GameError> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
            return Err(GameError::SeatCount { found: seats });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut draw_pile = Deck::shuffled(&mut rng).into_cards();

        let mut hands = vec![Vec::with_capacity(HAND_SIZE); seats];
        for _ in 0..HAND_SIZE {
            for hand in hands.iter_mut() {
                let card = draw_pile.pop().expect("deck covers the opening deal");
                hand.push(card);
            }
        }

        // A wild cannot open the discard pile; rotate wilds to the bottom
        // until a colored card comes up.
        let upcard = loop {
            let card = draw_pile.pop().expect("deck covers the opening upcard");
            if !card.rank.is_wild() {
                break card;
            }
            draw_pile.insert(0, card);
        };

        Ok(Self {
            hands,
            draw_pile,
            played: vec![upcard],
            called_color: None,
            called_by_seat: vec![None; seats],
            current: 0,
            direction: Direction::Forward,
            winner: None,
            rng,
        })
    }

    /// Build a game from explicit hands and pile contents. Intended for
    /// tests and replay tooling; the same validation applies afterwards.
    pub fn from_hands(
        hands: Vec<Vec<Card>>,
        draw_pile: Vec<Card>,
        upcard: Card,
        seed: u64,
    ) -> Result<Self, GameError> {
        let seats = hands.len();
        if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
            return Err(GameError::SeatCount { found: seats });
        }
        Ok(Self {
            hands,
            draw_pile,
            played: vec![upcard],
            called_color: None,
            called_by_seat: vec![None; seats],
            current: 0,
            direction: Direction::Forward,
            winner: None,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn seats(&self) -> usize {
        self.hands.len()
    }

    pub fn current_player(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn upcard(&self) -> Card {
        *self.played.last().expect("discard pile is never empty")
    }

    pub fn called_color(&self) -> Option<Color> {
        self.called_color
    }

    pub fn hand(&self, seat: usize) -> &[Card] {
        &self.hands[seat]
    }

    pub fn played_cards(&self) -> &[Card] {
        &self.played
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Game points the winning seat collects: the summed forfeit cost of
    /// every card left in the other hands.
    pub fn forfeit_total_against(&self, winner: usize) -> u32 {
        self.hands
            .iter()
            .enumerate()
            .filter(|(seat, _)| *seat != winner)
            .flat_map(|(_, hand)| hand.iter())
            .map(|card| card.forfeit_cost())
            .sum()
    }

    /// Snapshot of the match as seen from `seat`, with per-seat data rotated
    /// so that offset 0 is the seat playing next in the current direction.
    pub fn snapshot_for(&self, seat: usize, scores: &Scoreboard) -> MatchSnapshot {
        let seats = self.seats();
        let mut hand_sizes = Vec::with_capacity(seats - 1);
        let mut called_colors = Vec::with_capacity(seats - 1);
        let mut total_scores = Vec::with_capacity(seats - 1);

        for step in 1..seats {
            let upcoming = self.seat_after(seat, step);
            hand_sizes.push(self.hands[upcoming].len());
            called_colors.push(self.called_by_seat[upcoming]);
            total_scores.push(scores.score(upcoming));
        }

        MatchSnapshot {
            played_cards: self.played.clone(),
            hand_sizes,
            called_colors,
            total_scores,
        }
    }

    /// Play `index` from `seat`'s hand. Wild plays must carry a declared
    /// color; colored plays must not. Card effects (skip, reverse, draw
    /// penalties) are applied before the turn advances.
    pub fn play_from_hand(
        &mut self,
        seat: usize,
        index: usize,
        called: Option<Color>,
    ) -> Result<PlayOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if seat != self.current {
            return Err(GameError::OutOfTurn {
                expected: self.current,
                actual: seat,
            });
        }
        let hand_len = self.hands[seat].len();
        if index >= hand_len {
            return Err(GameError::CardIndex {
                index,
                len: hand_len,
            });
        }

        let card = self.hands[seat][index];
        let up_card = self.upcard();
        if !card.can_play_on(up_card, self.called_color) {
            return Err(GameError::IllegalPlay { card, up_card });
        }
        if card.rank.is_wild() && called.is_none() {
            return Err(GameError::MissingColorCall);
        }
        if !card.rank.is_wild() && called.is_some() {
            return Err(GameError::ColorCallOnColoredCard);
        }

        self.hands[seat].remove(index);
        self.played.push(card);
        if card.rank.is_wild() {
            self.called_color = called;
            self.called_by_seat[seat] = called;
        } else {
            self.called_color = None;
        }

        let advance = match card.rank {
            Rank::Number(_) | Rank::Wild => 1,
            Rank::Skip => 2,
            Rank::Reverse => {
                if self.seats() == 2 {
                    // Two-handed reverse acts as a skip.
                    2
                } else {
                    self.direction = self.direction.flipped();
                    1
                }
            }
            Rank::DrawTwo => {
                let target = self.seat_after(seat, 1);
                self.penalize(target, 2);
                2
            }
            Rank::WildDrawFour => {
                let target = self.seat_after(seat, 1);
                self.penalize(target, 4);
                2
            }
        };

        if self.hands[seat].is_empty() {
            self.winner = Some(seat);
            return Ok(PlayOutcome::WentOut);
        }

        self.current = self.seat_after(seat, advance);
        Ok(PlayOutcome::Played)
    }

    /// Draw one card into `seat`'s hand. The turn does not advance; callers
    /// either play the drawn card or pass.
    pub fn take_draw(&mut self, seat: usize) -> Result<Card, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if seat != self.current {
            return Err(GameError::OutOfTurn {
                expected: self.current,
                actual: seat,
            });
        }
        let card = self.draw_one().ok_or(GameError::DrawPileExhausted)?;
        self.hands[seat].push(card);
        Ok(card)
    }

    pub fn pass_turn(&mut self, seat: usize) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if seat != self.current {
            return Err(GameError::OutOfTurn {
                expected: self.current,
                actual: seat,
            });
        }
        self.current = self.seat_after(seat, 1);
        Ok(())
    }

    fn seat_after(&self, from: usize, steps: usize) -> usize {
        let seats = self.seats();
        match self.direction {
            Direction::Forward => (from + steps) % seats,
            Direction::Backward => (from + (seats - 1) * steps) % seats,
        }
    }

    fn penalize(&mut self, seat: usize, cards: usize) {
        for _ in 0..cards {
            match self.draw_one() {
                Some(card) => self.hands[seat].push(card),
                None => break,
            }
        }
    }

    fn draw_one(&mut self) -> Option<Card> {
        if self.draw_pile.is_empty() && self.played.len() > 1 {
            // Recycle everything under the live upcard. The recycled cards
            // drop out of the play history: they are unseen again.
            let upcard = self.played.pop().expect("discard pile is never empty");
            self.draw_pile.append(&mut self.played);
            self.played.push(upcard);
            self.draw_pile.shuffle(&mut self.rng);
        }
        self.draw_pile.pop()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a game seats {MIN_SEATS}-{MAX_SEATS} players, got {found}")]
    SeatCount { found: usize },
    #[error("seat {actual} acted out of turn (expected seat {expected})")]
    OutOfTurn { expected: usize, actual: usize },
    #[error("card index {index} out of range for a hand of {len}")]
    CardIndex { index: usize, len: usize },
    #[error("{card} cannot be played on {up_card}")]
    IllegalPlay { card: Card, up_card: Card },
    #[error("a wild play must declare a color")]
    MissingColorCall,
    #[error("a color call is only valid on a wild play")]
    ColorCallOnColoredCard,
    #[error("draw pile exhausted")]
    DrawPileExhausted,
    #[error("the game is already over")]
    GameOver,
}
