use crate::cards::Rank;

/// Whether five faces form a straight, and its top face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from an array of 5 faces in any order.
    /// Handles both regular straights and the ace-low A-2-3-4-5.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted_ranks = *ranks;
        sorted_ranks.sort_by(|a, b| b.cmp(a));

        // Strict steps of one also rule out repeated faces
        let is_consecutive =
            (0..4).all(|i| sorted_ranks[i].value() == sorted_ranks[i + 1].value() + 1);

        if is_consecutive {
            return StraightInfo { is_straight: true, top_rank: Some(sorted_ranks[0]) };
        }

        // Ace plays low: A-5-4-3-2
        if sorted_ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return StraightInfo { is_straight: true, top_rank: Some(Rank::Five) };
        }

        StraightInfo { is_straight: false, top_rank: None }
    }

    /// True only for 10-J-Q-K-A; the ace-low straight tops out at Five.
    pub fn is_broadway(&self) -> bool {
        self.top_rank == Some(Rank::Ace)
    }
}
