use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    pub const fn kind(self) -> RankKind {
        match self {
            Rank::Number(_) => RankKind::Number,
            Rank::Skip => RankKind::Skip,
            Rank::Reverse => RankKind::Reverse,
            Rank::DrawTwo => RankKind::DrawTwo,
            Rank::Wild => RankKind::Wild,
            Rank::WildDrawFour => RankKind::WildDrawFour,
        }
    }

    pub const fn is_wild(self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }

    /// Skip, Reverse and DrawTwo: the colored ranks that disrupt the next seat.
    pub const fn is_action(self) -> bool {
        matches!(self, Rank::Skip | Rank::Reverse | Rank::DrawTwo)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(value) => write!(f, "{value}"),
            Rank::Skip => f.write_str("S"),
            Rank::Reverse => f.write_str("V"),
            Rank::DrawTwo => f.write_str("+2"),
            Rank::Wild => f.write_str("W"),
            Rank::WildDrawFour => f.write_str("W+4"),
        }
    }
}

/// Fieldless companion of [`Rank`], used to index per-rank count tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RankKind {
    Number = 0,
    Skip = 1,
    Reverse = 2,
    DrawTwo = 3,
    Wild = 4,
    WildDrawFour = 5,
}

impl RankKind {
    pub const COUNT: usize = 6;

    pub const ALL: [RankKind; RankKind::COUNT] = [
        RankKind::Number,
        RankKind::Skip,
        RankKind::Reverse,
        RankKind::DrawTwo,
        RankKind::Wild,
        RankKind::WildDrawFour,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::{Rank, RankKind};

    #[test]
    fn kind_collapses_number_payload() {
        assert_eq!(Rank::Number(0).kind(), RankKind::Number);
        assert_eq!(Rank::Number(9).kind(), RankKind::Number);
        assert_eq!(Rank::WildDrawFour.kind(), RankKind::WildDrawFour);
    }

    #[test]
    fn wild_and_action_predicates() {
        assert!(Rank::Wild.is_wild());
        assert!(Rank::WildDrawFour.is_wild());
        assert!(!Rank::Skip.is_wild());
        assert!(Rank::DrawTwo.is_action());
        assert!(!Rank::Number(5).is_action());
        assert!(!Rank::Wild.is_action());
    }

    #[test]
    fn kind_indices_cover_table() {
        for (i, kind) in RankKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn display_matches_symbols() {
        assert_eq!(Rank::Number(7).to_string(), "7");
        assert_eq!(Rank::DrawTwo.to_string(), "+2");
        assert_eq!(Rank::WildDrawFour.to_string(), "W+4");
    }
}
