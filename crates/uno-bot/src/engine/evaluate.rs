use crate::engine::belief::BeliefState;
use crate::engine::params::EvalParams;
use uno_core::game::snapshot::MatchSnapshot;
use uno_core::model::card::Card;
use uno_core::model::color::Color;
use uno_core::model::rank::Rank;

/// Score a single candidate play. Higher is better; the value has no
/// meaning outside a comparison against the other cards in the same hand.
///
/// A Wild Draw Four is scored on its own scale and skips every other term:
/// its value grows with the cards the other seats are holding and the
/// table's appetite for wild calls, plus a large bump when the next seat is
/// about to go out.
pub fn evaluate(
    card: Card,
    up_card: Card,
    called_color: Option<Color>,
    snapshot: &MatchSnapshot,
    hand: &[Card],
    belief: &BeliefState,
    params: &EvalParams,
) -> i32 {
    if card.rank == Rank::WildDrawFour {
        let upcoming_cards: usize = snapshot.hand_sizes.iter().sum();
        let mut score = params.wd4_base
            + params.wd4_hand_size_mult * upcoming_cards as i32
            + params.wd4_call_freq_mult * belief.call_total() as i32;
        if snapshot
            .hand_sizes
            .first()
            .is_some_and(|next| *next <= params.wd4_near_win_hand_max)
        {
            score += params.wd4_near_win_bonus;
        }
        return score;
    }

    let opponents = snapshot.upcoming_count();
    let mut score = 0;

    // Endgame sprint: close to going out, any legal play is valuable, less
    // so the more rivals can interfere before the next turn.
    if hand.len() <= params.near_win_hand_max {
        score += params.near_win_bonus
            - params.near_win_rival_discount * opponents.saturating_sub(1) as i32;
    }

    // Disruption: skips, reverses and draw twos hurt more the more cards
    // the opposition is sitting on.
    if card.rank.is_action() {
        let opponent_cards: usize = snapshot.hand_sizes.iter().sum();
        score += params.disruption_base
            + params.disruption_hand_size_mult * opponent_cards as i32;
    }

    // Match bonuses against the live upcard.
    if let (Some(own), Some(up)) = (card.color, up_card.color) {
        if own == up {
            score += params.color_match_bonus;
        }
    }
    // Wild Draw Four never reaches the second arm; it returned above.
    match (card.rank, up_card.rank) {
        (Rank::Number(a), Rank::Number(b)) if a == b => score += params.number_match_bonus,
        (a, b) if a == b && !matches!(a, Rank::Number(_)) => score += params.rank_match_bonus,
        _ => {}
    }
    if up_card.rank.is_wild() {
        if let (Some(own), Some(called)) = (card.color, called_color) {
            if own == called {
                score += params.called_color_bonus;
            }
        }
    }

    if let Some(own) = card.color {
        // Color depth: one point per card of this color the tracker still
        // counts as unseen.
        score += belief.color_remaining(own) as i32;

        // Scarcity: a color nearly exhausted is hard for anyone to answer,
        // unless opponents have been calling it on their wilds.
        if belief.color_remaining(own) <= params.scarcity_threshold {
            score += params.scarcity_bonus;
            score -= params.declared_color_penalty * belief.callers_of(own) as i32;
        }
    }

    // Loss aversion: once any rival's match score is deep into the late
    // game, expensive cards held at the horn cost dearly, so shed them.
    let max_rival_score = snapshot.total_scores.iter().copied().max().unwrap_or(0);
    if max_rival_score >= params.late_game_score_threshold {
        score -= params.loss_aversion_mult * card.forfeit_cost() as i32;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::engine::belief::BeliefState;
    use crate::engine::params::EvalParams;
    use uno_core::game::snapshot::MatchSnapshot;
    use uno_core::model::card::Card;
    use uno_core::model::color::Color;
    use uno_core::model::rank::Rank;

    fn snapshot(hand_sizes: Vec<usize>) -> MatchSnapshot {
        let seats = hand_sizes.len();
        MatchSnapshot {
            played_cards: Vec::new(),
            hand_sizes,
            called_colors: vec![None; seats],
            total_scores: vec![0; seats],
        }
    }

    #[test]
    fn wild_draw_four_scores_on_its_own_scale() {
        let params = EvalParams::default();
        let belief = BeliefState::new();
        let hand = vec![Card::wild_draw_four(), Card::number(Color::Red, 5)];
        let snap = snapshot(vec![6, 6, 6]);

        // The multiplier runs over the cards the upcoming seats hold, not
        // the acting hand.
        let score = evaluate(
            Card::wild_draw_four(),
            Card::number(Color::Blue, 3),
            None,
            &snap,
            &hand,
            &belief,
            &params,
        );
        assert_eq!(score, 50 + 10 * 18);
    }

    #[test]
    fn wild_draw_four_spikes_when_next_seat_is_nearly_out() {
        let params = EvalParams::default();
        let belief = BeliefState::new();
        let hand = vec![Card::wild_draw_four(), Card::number(Color::Red, 5)];
        let snap = snapshot(vec![2, 6, 6]);

        let score = evaluate(
            Card::wild_draw_four(),
            Card::number(Color::Blue, 3),
            None,
            &snap,
            &hand,
            &belief,
            &params,
        );
        assert_eq!(score, 50 + 10 * 14 + 100);
    }

    #[test]
    fn endgame_sprint_discounts_extra_rivals() {
        let params = EvalParams::default();
        let belief = BeliefState::new();
        let card = Card::number(Color::Green, 4);
        let hand = vec![card, Card::number(Color::Green, 8)];

        let one_rival = evaluate(
            card,
            Card::number(Color::Blue, 3),
            None,
            &snapshot(vec![6]),
            &hand,
            &belief,
            &params,
        );
        let three_rivals = evaluate(
            card,
            Card::number(Color::Blue, 3),
            None,
            &snapshot(vec![6, 6, 6]),
            &hand,
            &belief,
            &params,
        );
        assert_eq!(one_rival - three_rivals, 10);
    }

    #[test]
    fn disruption_grows_with_opponent_hands() {
        let params = EvalParams::default();
        let belief = BeliefState::new();
        let card = Card::action(Color::Blue, Rank::Skip);
        let hand = vec![card; 5];

        let light = evaluate(
            card,
            Card::number(Color::Blue, 3),
            None,
            &snapshot(vec![2, 2]),
            &hand,
            &belief,
            &params,
        );
        let heavy = evaluate(
            card,
            Card::number(Color::Blue, 3),
            None,
            &snapshot(vec![8, 8]),
            &hand,
            &belief,
            &params,
        );
        assert_eq!(heavy - light, 5 * 12);
    }

    #[test]
    fn match_bonuses_stack() {
        let params = EvalParams::default();
        let belief = BeliefState::new();
        let card = Card::number(Color::Red, 5);
        let hand = vec![card];
        let snap = snapshot(vec![6, 6]);

        // Same color and same number on a color-and-number match.
        let both = evaluate(
            card,
            Card::number(Color::Red, 5),
            None,
            &snap,
            &hand,
            &belief,
            &params,
        );
        let color_only = evaluate(
            card,
            Card::number(Color::Red, 9),
            None,
            &snap,
            &hand,
            &belief,
            &params,
        );
        assert_eq!(both - color_only, 10);
    }

    #[test]
    fn action_rank_match_beats_number_match() {
        let params = EvalParams::default();
        let belief = BeliefState::new();
        let snap = snapshot(vec![6, 6]);
        let skip = Card::action(Color::Red, Rank::Skip);
        let five = Card::number(Color::Red, 5);

        let rank_match = evaluate(
            skip,
            Card::action(Color::Blue, Rank::Skip),
            None,
            &snap,
            &[skip],
            &belief,
            &params,
        );
        let number_match = evaluate(
            five,
            Card::number(Color::Blue, 5),
            None,
            &snap,
            &[five],
            &belief,
            &params,
        );
        // Isolate the match term: strip the shared disruption term.
        assert_eq!(rank_match - (20 + 5 * 12) - number_match, 2);
    }

    #[test]
    fn called_color_counts_on_a_wild_upcard() {
        let params = EvalParams::default();
        let belief = BeliefState::new();
        let card = Card::number(Color::Green, 4);
        let hand = vec![card];
        let snap = snapshot(vec![6, 6]);

        let on_call = evaluate(
            card,
            Card::wild(),
            Some(Color::Green),
            &snap,
            &hand,
            &belief,
            &params,
        );
        let off_call = evaluate(
            card,
            Card::wild(),
            Some(Color::Blue),
            &snap,
            &hand,
            &belief,
            &params,
        );
        assert_eq!(on_call - off_call, 12);
    }

    #[test]
    fn color_depth_follows_the_remaining_count() {
        let params = EvalParams::default();
        let mut belief = BeliefState::new();
        // Nine yellow cards seen: ten remain against green's nineteen.
        let played: Vec<Card> = (0..9).map(|n| Card::number(Color::Yellow, n)).collect();
        belief.refresh(&played, &[]);
        assert_eq!(belief.color_remaining(Color::Yellow), 10);

        let hand = vec![
            Card::number(Color::Yellow, 9),
            Card::number(Color::Green, 9),
        ];
        let snap = snapshot(vec![6, 6]);
        let yellow = evaluate(
            hand[0],
            Card::number(Color::Blue, 9),
            None,
            &snap,
            &hand,
            &belief,
            &params,
        );
        let green = evaluate(
            hand[1],
            Card::number(Color::Blue, 9),
            None,
            &snap,
            &hand,
            &belief,
            &params,
        );
        assert_eq!(green - yellow, 9);
    }

    #[test]
    fn wild_on_wild_collects_the_rank_match() {
        let params = EvalParams::default();
        let belief = BeliefState::new();
        let hand = vec![Card::wild()];
        let snap = snapshot(vec![6, 6]);

        let on_wild = evaluate(
            Card::wild(),
            Card::wild(),
            Some(Color::Blue),
            &snap,
            &hand,
            &belief,
            &params,
        );
        let on_number = evaluate(
            Card::wild(),
            Card::number(Color::Blue, 3),
            None,
            &snap,
            &hand,
            &belief,
            &params,
        );
        assert_eq!(on_wild - on_number, 12);
    }

    #[test]
    fn scarcity_bonus_and_declared_color_penalty() {
        let params = EvalParams::default();
        let mut belief = BeliefState::new();
        // Fifteen red cards seen: four remain, under the threshold.
        let mut played: Vec<Card> = (0..9).map(|n| Card::number(Color::Red, n)).collect();
        played.extend((1..7).map(|n| Card::number(Color::Red, n)));
        belief.refresh(&played, &[]);
        assert_eq!(belief.color_remaining(Color::Red), 4);

        let card = Card::number(Color::Red, 9);
        let hand = vec![card];
        let snap = snapshot(vec![6, 6]);
        let quiet = evaluate(
            card,
            Card::number(Color::Red, 9),
            None,
            &snap,
            &hand,
            &belief,
            &params,
        );

        belief.refresh(&played, &[Some(Color::Red), Some(Color::Red)]);
        let contested = evaluate(
            card,
            Card::number(Color::Red, 9),
            None,
            &snap,
            &hand,
            &belief,
            &params,
        );
        assert_eq!(quiet - contested, 8 * 2);
    }

    #[test]
    fn loss_aversion_triggers_on_the_highest_rival_score() {
        let params = EvalParams::default();
        let belief = BeliefState::new();
        let card = Card::action(Color::Red, Rank::Skip);
        let hand = vec![card; 5];
        let mut snap = snapshot(vec![6, 6]);

        let early = evaluate(
            card,
            Card::number(Color::Red, 3),
            None,
            &snap,
            &hand,
            &belief,
            &params,
        );
        snap.total_scores = vec![120, 410];
        let late = evaluate(
            card,
            Card::number(Color::Red, 3),
            None,
            &snap,
            &hand,
            &belief,
            &params,
        );
        assert_eq!(early - late, 2 * 20);
    }
}
