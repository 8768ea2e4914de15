pub trait Stats {
    fn record_state_scored(&mut self);
    fn record_terminal(&mut self, depth: u8);
}

#[derive(Debug, Default)]
pub struct NullStats;

impl Stats for NullStats {
    fn record_state_scored(&mut self) {}
    fn record_terminal(&mut self, _depth: u8) {}
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct SimpleStats {
    pub state_scored_count: u64,
    pub terminal_count: u64,
    pub max_depth: u8,
}

impl Stats for SimpleStats {
    fn record_state_scored(&mut self) {
        self.state_scored_count += 1;
    }

    fn record_terminal(&mut self, depth: u8) {
        self.terminal_count += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

#[cfg(test)]
mod test {
    use super::{SimpleStats, Stats};

    #[test]
    fn simple_stats_track_deepest_terminal() {
        let mut stats = SimpleStats::default();
        stats.record_state_scored();
        stats.record_terminal(3);
        stats.record_state_scored();
        stats.record_terminal(1);

        assert_eq!(stats, SimpleStats { state_scored_count: 2, terminal_count: 2, max_depth: 3 });
    }
}
