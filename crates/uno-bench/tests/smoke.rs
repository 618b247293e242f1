use std::fs;

use uno_bench::config::BenchConfig;
use uno_bench::simulation::SimulationRunner;

fn config_yaml(dir: &std::path::Path) -> String {
    format!(
        r#"
run_id: "smoke"
simulation:
  seed: 99
  simulations: 2
  games_per_simulation: 5
agents:
  - name: "skula"
    kind: "engine"
  - name: "rando"
    kind: "first_legal"
outputs:
  jsonl: "{dir}/{{run_id}}/games.jsonl"
  summary_md: "{dir}/{{run_id}}/summary.md"
"#,
        dir = dir.display()
    )
}

#[test]
fn small_run_writes_rows_and_summary() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut config: BenchConfig =
        serde_yaml::from_str(&config_yaml(tmp.path())).expect("parse config");
    config.validate().expect("valid config");
    let outputs = config.resolved_outputs();

    let runner = SimulationRunner::new(config, outputs.clone());
    let summary = runner.run().expect("run completes");

    assert_eq!(summary.rows_written, 10);
    assert_eq!(summary.report.total_games, 10);
    let total_wins: usize = summary
        .report
        .standings
        .iter()
        .map(|standing| standing.wins)
        .sum();
    assert_eq!(total_wins, 10, "every game credits exactly one leader");

    let jsonl = fs::read_to_string(&outputs.jsonl).expect("jsonl exists");
    assert_eq!(jsonl.lines().count(), 10);
    let first: serde_json::Value = serde_json::from_str(jsonl.lines().next().unwrap()).unwrap();
    assert_eq!(first["run_id"], "smoke");
    assert_eq!(first["game_id"], "S000_G00000");

    let markdown = fs::read_to_string(&outputs.summary_md).expect("summary exists");
    assert!(markdown.contains("| skula |"));
    assert!(markdown.contains("Games played: 10"));
}

#[test]
fn identical_seeds_reproduce_the_report() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut wins = Vec::new();
    for run in 0..2 {
        let yaml = config_yaml(&tmp.path().join(format!("r{run}")));
        let mut config: BenchConfig = serde_yaml::from_str(&yaml).expect("parse config");
        config.validate().expect("valid config");
        let outputs = config.resolved_outputs();
        let summary = SimulationRunner::new(config, outputs).run().expect("run");
        wins.push(
            summary
                .report
                .standings
                .iter()
                .map(|standing| standing.wins)
                .collect::<Vec<_>>(),
        );
    }
    assert_eq!(wins[0], wins[1]);
}
