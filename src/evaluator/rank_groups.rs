use crate::cards::Rank;

/// Groups faces by how often they appear, sorted by (count desc, face desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a face count array indexed by face value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Number of distinct faces.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    /// Multiplicity of the most frequent face.
    pub fn max_count(&self) -> u8 {
        self.groups.first().map_or(0, |&(_, count)| count)
    }

    /// Returns the face of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 3).map(|(rank, _)| *rank)
    }

    /// Returns all paired faces, in descending order.
    #[cfg(test)]
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank).collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(u8, u8)]) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &(rank_val, count) in pairs {
            counts[rank_val as usize] = count;
        }
        counts
    }

    #[test]
    fn quads_have_two_faces() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 4), (13, 1)])); // AAAAK
        assert_eq!(groups.distinct(), 2);
        assert_eq!(groups.max_count(), 4);
        assert_eq!(groups.trips(), None);
    }

    #[test]
    fn full_house_has_two_faces() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 3), (13, 2)])); // AAAKK
        assert_eq!(groups.distinct(), 2);
        assert_eq!(groups.max_count(), 3);
        assert_eq!(groups.trips(), Some(Rank::Ace));
        assert_eq!(groups.pairs(), vec![Rank::King]);
    }

    #[test]
    fn trips_and_two_pair_have_three_faces() {
        let trips = RankGroups::from_counts(&make_counts(&[(10, 3), (5, 1), (3, 1)]));
        assert_eq!(trips.distinct(), 3);
        assert_eq!(trips.trips(), Some(Rank::Ten));

        let two_pair = RankGroups::from_counts(&make_counts(&[(14, 2), (13, 2), (10, 1)]));
        assert_eq!(two_pair.distinct(), 3);
        assert_eq!(two_pair.trips(), None);
        assert_eq!(two_pair.pairs(), vec![Rank::Ace, Rank::King]);
    }

    #[test]
    fn empty_counts() {
        let groups = RankGroups::from_counts(&[0u8; 15]);
        assert_eq!(groups.distinct(), 0);
        assert_eq!(groups.max_count(), 0);
    }

    #[test]
    fn sorted_by_count_then_face() {
        let groups = RankGroups::from_counts(&make_counts(&[(5, 1), (14, 1), (10, 2)]));
        let ranks: Vec<Rank> = groups.groups().iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![Rank::Ten, Rank::Ace, Rank::Five]);
    }
}
