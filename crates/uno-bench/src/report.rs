use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;

/// Final win tallies for a run.
#[derive(Debug, Clone, Serialize)]
pub struct WinReport {
    pub total_games: usize,
    pub standings: Vec<AgentStanding>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentStanding {
    pub name: String,
    pub wins: usize,
}

impl WinReport {
    pub fn win_percent(&self, standing: &AgentStanding) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            standing.wins as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Text bar chart of the win split, one row per agent and one block
    /// per two percentage points.
    pub fn render_bars(&self) -> String {
        let width = self
            .standings
            .iter()
            .map(|standing| standing.name.len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for standing in &self.standings {
            let percent = self.win_percent(standing);
            let _ = write!(
                out,
                "{name:width$}  {percent:5.1}%  ",
                name = standing.name
            );
            let mut drawn = 0.0;
            while drawn < percent {
                out.push('█');
                drawn += 2.0;
            }
            out.push('\n');
        }
        out
    }

    pub fn write_markdown(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        let mut rows = String::new();
        rows.push_str("# Win Rate Summary\n\n");
        rows.push_str(&format!("Games played: {}\n\n", self.total_games));
        rows.push_str("| Agent | Wins | Win % |\n");
        rows.push_str("|-------|------|-------|\n");
        for standing in &self.standings {
            rows.push_str(&format!(
                "| {name} | {wins} | {percent:.1}% |\n",
                name = standing.name,
                wins = standing.wins,
                percent = self.win_percent(standing),
            ));
        }
        rows.push_str("\n```\n");
        rows.push_str(&self.render_bars());
        rows.push_str("```\n");
        fs::write(path, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::{AgentStanding, WinReport};

    fn report() -> WinReport {
        WinReport {
            total_games: 100,
            standings: vec![
                AgentStanding {
                    name: "skula".to_string(),
                    wins: 61,
                },
                AgentStanding {
                    name: "rando".to_string(),
                    wins: 39,
                },
            ],
        }
    }

    #[test]
    fn bars_scale_one_block_per_two_points() {
        let bars = report().render_bars();
        let lines: Vec<&str> = bars.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('█').count(), 31);
        assert_eq!(lines[1].matches('█').count(), 20);
        assert!(lines[0].contains("61.0%"));
    }

    #[test]
    fn zero_games_render_empty_bars() {
        let report = WinReport {
            total_games: 0,
            standings: vec![AgentStanding {
                name: "skula".to_string(),
                wins: 0,
            }],
        };
        let bars = report.render_bars();
        assert_eq!(bars.lines().next().unwrap().matches('█').count(), 0);
    }
}
