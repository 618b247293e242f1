use crate::model::card::Card;
use crate::model::color::Color;
use crate::model::rank::{Rank, RankKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const DECK_SIZE: usize = 108;

/// Baseline used by card-counting trackers: 19 colored number cards per
/// color. Colored action cards are not folded into the per-color table;
/// the original strategy counted colors this way and the tracker preserves
/// that behavior.
pub const COLOR_BASELINE: u8 = 19;

/// Per-rank baseline for card-counting trackers: 36 for numbers (one slot
/// per non-zero value per color), 8 of each colored action rank and 4 of
/// each wild rank. Action and wild baselines match the physical deck.
pub const fn rank_baseline(kind: RankKind) -> u8 {
    match kind {
        RankKind::Number => 36,
        RankKind::Skip | RankKind::Reverse | RankKind::DrawTwo => 8,
        RankKind::Wild | RankKind::WildDrawFour => 4,
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The standard 108-card deck: per color one 0, two each of 1-9 and two
    /// of each action rank, plus four of each wild rank.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for color in Color::ALL.iter().copied() {
            cards.push(Card::number(color, 0));
            for value in 1..=9 {
                cards.push(Card::number(color, value));
                cards.push(Card::number(color, value));
            }
            for rank in [Rank::Skip, Rank::Reverse, Rank::DrawTwo] {
                cards.push(Card::action(color, rank));
                cards.push(Card::action(color, rank));
            }
        }
        for _ in 0..4 {
            cards.push(Card::wild());
            cards.push(Card::wild_draw_four());
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
