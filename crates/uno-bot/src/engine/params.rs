/// Tunable weights for the card evaluator.
///
/// Scores are additive; a card's final value is the sum of every term that
/// applies. The defaults are the hand-tuned values the engine ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalParams {
    /// Flat bonus for holding a Wild Draw Four (default 50).
    pub wd4_base: i32,
    /// Multiplier per card held across the upcoming seats on the WD4
    /// bonus (default 10).
    pub wd4_hand_size_mult: i32,
    /// Per-recorded-color-call multiplier on the WD4 bonus (default 20).
    pub wd4_call_freq_mult: i32,
    /// Extra WD4 bonus when the next seat is about to go out (default 100).
    pub wd4_near_win_bonus: i32,
    /// Next seat counts as "about to go out" at or below this many cards
    /// (default 2).
    pub wd4_near_win_hand_max: usize,
    /// Own hand counts as "near winning" at or below this many cards
    /// (default 3).
    pub near_win_hand_max: usize,
    /// Endgame sprint bonus when the hand is near winning (default 30).
    pub near_win_bonus: i32,
    /// Sprint discount per opponent beyond the first (default 5).
    pub near_win_rival_discount: i32,
    /// Flat bonus for Skip, Reverse and Draw Two (default 20).
    pub disruption_base: i32,
    /// Per-opponent-card multiplier on the disruption bonus (default 5).
    pub disruption_hand_size_mult: i32,
    /// Bonus for matching the upcard's color (default 15).
    pub color_match_bonus: i32,
    /// Bonus for matching the upcard's rank on any non-number rank,
    /// wilds included (default 12).
    pub rank_match_bonus: i32,
    /// Bonus for matching the upcard's number (default 10).
    pub number_match_bonus: i32,
    /// Bonus for matching the color called on a wild upcard (default 12).
    pub called_color_bonus: i32,
    /// A color counts as scarce at or below this many unseen cards
    /// (default 5).
    pub scarcity_threshold: u8,
    /// Bonus for playing into a scarce color (default 15).
    pub scarcity_bonus: i32,
    /// Penalty per opponent whose last wild call named the card's color
    /// (default 8).
    pub declared_color_penalty: i32,
    /// Match score at which loss aversion kicks in (default 400).
    pub late_game_score_threshold: u32,
    /// Per-forfeit-point penalty once loss aversion is active (default 2).
    pub loss_aversion_mult: i32,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            wd4_base: 50,
            wd4_hand_size_mult: 10,
            wd4_call_freq_mult: 20,
            wd4_near_win_bonus: 100,
            wd4_near_win_hand_max: 2,
            near_win_hand_max: 3,
            near_win_bonus: 30,
            near_win_rival_discount: 5,
            disruption_base: 20,
            disruption_hand_size_mult: 5,
            color_match_bonus: 15,
            rank_match_bonus: 12,
            number_match_bonus: 10,
            called_color_bonus: 12,
            scarcity_threshold: 5,
            scarcity_bonus: 15,
            declared_color_penalty: 8,
            late_game_score_threshold: 400,
            loss_aversion_mult: 2,
        }
    }
}
