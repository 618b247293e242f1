/// Cumulative game points per seat across one simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    totals: Vec<u32>,
}

impl Scoreboard {
    pub fn new(seats: usize) -> Self {
        Self {
            totals: vec![0; seats],
        }
    }

    pub fn record_game(&mut self, seat: usize, points: u32) {
        self.totals[seat] += points;
    }

    pub fn score(&self, seat: usize) -> u32 {
        self.totals[seat]
    }

    pub fn standings(&self) -> &[u32] {
        &self.totals
    }

    pub fn seats(&self) -> usize {
        self.totals.len()
    }

    /// Seat with the highest total; the earliest seat wins ties.
    pub fn winner(&self) -> usize {
        let mut best = 0;
        for (seat, &total) in self.totals.iter().enumerate() {
            if total > self.totals[best] {
                best = seat;
            }
        }
        best
    }
}
