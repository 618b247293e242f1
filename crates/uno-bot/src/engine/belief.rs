use uno_core::model::card::Card;
use uno_core::model::color::Color;
use uno_core::model::deck::{COLOR_BASELINE, rank_baseline};
use uno_core::model::rank::RankKind;

/// Upper bound on tracked seats; smaller games leave the tail unused.
pub const MAX_SEATS: usize = 4;

/// What the engine believes about unseen cards and opponent color calls.
///
/// Remaining counts are rebuilt wholesale on every refresh from the full
/// play history, so the tracker never drifts out of sync with the game it
/// observes. Call bookkeeping is cumulative across refreshes.
#[derive(Debug, Clone)]
pub struct BeliefState {
    color_remaining: [u8; Color::ALL.len()],
    rank_remaining: [u8; RankKind::COUNT],
    last_called: [Option<Color>; MAX_SEATS],
    call_frequency: [u32; MAX_SEATS],
}

impl Default for BeliefState {
    fn default() -> Self {
        Self::new()
    }
}

impl BeliefState {
    pub fn new() -> Self {
        let mut color_remaining = [0; Color::ALL.len()];
        for color in Color::ALL {
            color_remaining[color.index()] = COLOR_BASELINE;
        }
        let mut rank_remaining = [0; RankKind::COUNT];
        for kind in RankKind::ALL {
            rank_remaining[kind.index()] = rank_baseline(kind);
        }
        Self {
            color_remaining,
            rank_remaining,
            last_called: [None; MAX_SEATS],
            call_frequency: [0; MAX_SEATS],
        }
    }

    /// Rebuild remaining counts from the play history and fold in the
    /// latest per-seat color calls.
    ///
    /// `called` holds the last declared color per observed seat. An empty
    /// slice leaves previous calls untouched; seats past the slice are
    /// cleared. A seat with an active call also bumps its call counter, so
    /// frequent callers accumulate weight over the course of a game.
    pub fn refresh(&mut self, played: &[Card], called: &[Option<Color>]) {
        for color in Color::ALL {
            self.color_remaining[color.index()] = COLOR_BASELINE;
        }
        for kind in RankKind::ALL {
            self.rank_remaining[kind.index()] = rank_baseline(kind);
        }
        for card in played {
            if let Some(color) = card.color {
                let slot = &mut self.color_remaining[color.index()];
                *slot = slot.saturating_sub(1);
            }
            let slot = &mut self.rank_remaining[card.rank.kind().index()];
            *slot = slot.saturating_sub(1);
        }

        if called.is_empty() {
            return;
        }
        for seat in 0..MAX_SEATS {
            let declared = called.get(seat).copied().flatten();
            self.last_called[seat] = declared;
            if declared.is_some() {
                self.call_frequency[seat] += 1;
            }
        }
    }

    pub fn color_remaining(&self, color: Color) -> u8 {
        self.color_remaining[color.index()]
    }

    pub fn rank_remaining(&self, kind: RankKind) -> u8 {
        self.rank_remaining[kind.index()]
    }

    pub fn last_called(&self) -> &[Option<Color>; MAX_SEATS] {
        &self.last_called
    }

    /// Total color calls recorded across every seat.
    pub fn call_total(&self) -> u32 {
        self.call_frequency.iter().sum()
    }

    /// Seats whose most recent wild call named `color`.
    pub fn callers_of(&self, color: Color) -> usize {
        self.last_called
            .iter()
            .filter(|declared| **declared == Some(color))
            .count()
    }
}
