use crate::model::color::Color;
use crate::model::rank::Rank;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A single Uno card. `color` is `None` exactly for the two wild ranks;
/// the constructors are the only way the invariant is established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Option<Color>,
    pub rank: Rank,
}

impl Card {
    pub fn number(color: Color, value: u8) -> Self {
        debug_assert!(value <= 9, "number cards carry a face value of 0-9");
        Self {
            color: Some(color),
            rank: Rank::Number(value),
        }
    }

    pub fn action(color: Color, rank: Rank) -> Self {
        debug_assert!(rank.is_action(), "action constructor takes S/V/+2 ranks");
        Self {
            color: Some(color),
            rank,
        }
    }

    pub const fn wild() -> Self {
        Self {
            color: None,
            rank: Rank::Wild,
        }
    }

    pub const fn wild_draw_four() -> Self {
        Self {
            color: None,
            rank: Rank::WildDrawFour,
        }
    }

    /// Legality against the discard top: wilds always play; otherwise the
    /// card must match the effective color (the called color when the upcard
    /// is wild), the exact number, or the action rank.
    pub fn can_play_on(self, up_card: Card, called_color: Option<Color>) -> bool {
        if self.rank.is_wild() {
            return true;
        }

        let target_color = if up_card.rank.is_wild() {
            called_color
        } else {
            up_card.color
        };
        if self.color.is_some() && self.color == target_color {
            return true;
        }

        match (self.rank, up_card.rank) {
            (Rank::Number(a), Rank::Number(b)) => a == b,
            (a, b) => a == b && a.is_action(),
        }
    }

    /// Point value forfeited to the winner when this card is still in hand
    /// at the end of a game.
    pub const fn forfeit_cost(self) -> u32 {
        match self.rank {
            Rank::Number(value) => value as u32,
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => 20,
            Rank::Wild | Rank::WildDrawFour => 50,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{}{}", color, self.rank),
            None => write!(f, "{}", self.rank),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Color, Rank};

    #[test]
    fn color_match_is_playable() {
        let card = Card::number(Color::Red, 3);
        let up = Card::number(Color::Red, 8);
        assert!(card.can_play_on(up, None));
    }

    #[test]
    fn number_match_crosses_colors() {
        let card = Card::number(Color::Red, 5);
        let up = Card::number(Color::Blue, 5);
        assert!(card.can_play_on(up, None));
        assert!(!Card::number(Color::Red, 4).can_play_on(up, None));
    }

    #[test]
    fn action_rank_match_crosses_colors() {
        let card = Card::action(Color::Green, Rank::Skip);
        let up = Card::action(Color::Yellow, Rank::Skip);
        assert!(card.can_play_on(up, None));
        assert!(!Card::action(Color::Green, Rank::Reverse).can_play_on(up, None));
    }

    #[test]
    fn wilds_always_play() {
        let up = Card::number(Color::Blue, 1);
        assert!(Card::wild().can_play_on(up, None));
        assert!(Card::wild_draw_four().can_play_on(up, None));
    }

    #[test]
    fn called_color_governs_wild_upcard() {
        let up = Card::wild();
        let green = Card::number(Color::Green, 2);
        assert!(green.can_play_on(up, Some(Color::Green)));
        assert!(!green.can_play_on(up, Some(Color::Blue)));
        assert!(!green.can_play_on(up, None));
    }

    #[test]
    fn forfeit_costs_follow_standard_scoring() {
        assert_eq!(Card::number(Color::Red, 9).forfeit_cost(), 9);
        assert_eq!(Card::action(Color::Red, Rank::DrawTwo).forfeit_cost(), 20);
        assert_eq!(Card::wild().forfeit_cost(), 50);
        assert_eq!(Card::wild_draw_four().forfeit_cost(), 50);
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Card::number(Color::Green, 0).to_string(), "G0");
        assert_eq!(Card::action(Color::Blue, Rank::DrawTwo).to_string(), "B+2");
        assert_eq!(Card::wild_draw_four().to_string(), "W+4");
    }
}
