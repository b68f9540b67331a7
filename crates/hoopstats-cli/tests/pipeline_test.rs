// End-to-end runs of the pipeline over fixture files.

use std::path::Path;

use hoopstats_cli::pipeline;
use hoopstats_core::config::{self, Config};

/// Fixture directory path (relative to the crate root, which is the cwd for
/// `cargo test`).
const FIXTURES: &str = "tests/fixtures";

fn config_for(input: &str, output_dir: &Path, top_n: usize) -> Config {
    Config {
        input_path: Path::new(FIXTURES).join(input),
        output_path: output_dir.join("Top_100_Lists.txt"),
        top_n,
    }
}

/// Split the report file into (title, rows) blocks.
fn parse_report(body: &str) -> Vec<(String, Vec<(String, String, f64)>)> {
    body.split("\n\n")
        .map(|block| {
            let mut lines = block.lines();
            let title = lines.next().expect("block has a title").to_string();
            let rows = lines
                .map(|line| {
                    let fields: Vec<&str> = line.split('\t').collect();
                    assert_eq!(fields.len(), 3, "bad row {line:?}");
                    let value: f64 = fields[2].parse().expect("numeric value");
                    (fields[0].to_string(), fields[1].to_string(), value)
                })
                .collect();
            (title, rows)
        })
        .collect()
}

fn players(rows: &[(String, String, f64)]) -> Vec<&str> {
    rows.iter().map(|(p, _, _)| p.as_str()).collect()
}

#[test]
fn full_run_writes_eight_ranked_blocks() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_for("player_stats.tsv", tmp.path(), 100);

    let mut console = Vec::new();
    let summary = pipeline::run(&config, &mut console).expect("run should succeed");

    assert_eq!(summary.records, 6);
    assert_eq!(summary.lists, 8);
    assert_eq!(summary.output_path, config.output_path);

    let body = std::fs::read_to_string(&config.output_path).unwrap();
    let blocks = parse_report(&body);
    let titles: Vec<&str> = blocks.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Top 100 Field Goal Accuracy",
            "Top 100 Three Point Accuracy",
            "Top 100 Free Throw Accuracy",
            "Top 100 Points Per Minute",
            "Top 100 Points Per Game",
            "Top 100 Overall Shooting Accuracy",
            "Top 100 Blocks Per Game",
            "Top 100 Steals Per Game",
        ]
    );

    // Fewer records than N: every list holds every record.
    for (title, rows) in &blocks {
        assert_eq!(rows.len(), 6, "{title}");
        assert!(rows.windows(2).all(|w| w[0].2 >= w[1].2), "{title} not descending");
        assert!(rows.iter().all(|(_, _, v)| v.is_finite() && *v >= 0.0), "{title}");
    }

    assert_eq!(
        players(&blocks[0].1),
        vec!["Fay Lund", "Dee Mills", "Ava Cole", "Ben Ortiz", "Eli Ward", "Cy Park"]
    );
    // Ava and Cy both score 0 from 0/0; load order breaks the tie.
    assert_eq!(
        players(&blocks[1].1),
        vec!["Fay Lund", "Eli Ward", "Ben Ortiz", "Dee Mills", "Ava Cole", "Cy Park"]
    );
    assert_eq!(
        players(&blocks[4].1),
        vec!["Ben Ortiz", "Eli Ward", "Ava Cole", "Dee Mills", "Fay Lund", "Cy Park"]
    );
    assert_eq!(
        players(&blocks[6].1),
        vec!["Dee Mills", "Ava Cole", "Ben Ortiz", "Eli Ward", "Cy Park", "Fay Lund"]
    );

    let ava_ppg = blocks[4].1.iter().find(|(p, _, _)| p == "Ava Cole").unwrap();
    assert_eq!(ava_ppg.1, "2018-19");
    assert!((ava_ppg.2 - 20.0).abs() < f64::EPSILON);

    let cy_ppg = blocks[4].1.iter().find(|(p, _, _)| p == "Cy Park").unwrap();
    assert_eq!(cy_ppg.2, 0.0);
}

#[test]
fn console_mirrors_report_file() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_for("player_stats.tsv", tmp.path(), 100);

    let mut console = Vec::new();
    pipeline::run(&config, &mut console).unwrap();
    let console = String::from_utf8(console).unwrap();
    let body = std::fs::read_to_string(&config.output_path).unwrap();

    // Same content; the console uses spaces and leads each block with a blank line.
    let expected: String = body
        .split("\n\n")
        .map(|block| format!("\n{}\n", block.replace('\t', " ")))
        .collect();
    assert_eq!(console, expected);
}

#[test]
fn top_n_limits_every_list() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_for("player_stats.tsv", tmp.path(), 3);

    let mut console = Vec::new();
    pipeline::run(&config, &mut console).unwrap();

    let body = std::fs::read_to_string(&config.output_path).unwrap();
    let blocks = parse_report(&body);
    assert_eq!(blocks.len(), 8);
    assert_eq!(blocks[0].0, "Top 3 Field Goal Accuracy");
    assert!(blocks.iter().all(|(_, rows)| rows.len() == 3));
}

#[test]
fn existing_report_is_overwritten() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_for("player_stats.tsv", tmp.path(), 100);
    std::fs::write(&config.output_path, "old report\n".repeat(500)).unwrap();

    let mut console = Vec::new();
    pipeline::run(&config, &mut console).unwrap();

    let body = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(body.starts_with("Top 100 Field Goal Accuracy\n"));
    assert!(!body.contains("old report"));
}

#[test]
fn malformed_input_fails_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_for("malformed_stats.tsv", tmp.path(), 100);

    let mut console = Vec::new();
    let err = pipeline::run(&config, &mut console).unwrap_err();

    let chain = format!("{err:#}");
    assert!(chain.contains("failed to load player-season records"), "{chain}");
    assert!(chain.contains("malformed_stats.tsv"), "{chain}");
    assert!(console.is_empty());
    assert!(!config.output_path.exists());
}

#[test]
fn missing_input_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_for("does_not_exist.tsv", tmp.path(), 100);

    let mut console = Vec::new();
    let err = pipeline::run(&config, &mut console).unwrap_err();
    assert!(format!("{err:#}").contains("does_not_exist.tsv"));
    assert!(!config.output_path.exists());
}

#[test]
fn unwritable_output_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        output_path: tmp.path().join("missing_dir").join("report.txt"),
        ..config_for("player_stats.tsv", tmp.path(), 100)
    };

    let mut console = Vec::new();
    let err = pipeline::run(&config, &mut console).unwrap_err();
    assert!(format!("{err:#}").contains("failed to write report file"));
}

#[test]
fn config_file_drives_a_run() {
    let tmp = tempfile::tempdir().unwrap();
    let data_dir = tmp.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::copy(
        Path::new(FIXTURES).join("player_stats.tsv"),
        data_dir.join("stats.tsv"),
    )
    .unwrap();
    std::fs::create_dir_all(tmp.path().join("config")).unwrap();
    std::fs::write(
        tmp.path().join("config/hoopstats.toml"),
        "[data]\ninput = \"data/stats.tsv\"\n\n[report]\noutput = \"leaders.txt\"\ntop_n = 2\n",
    )
    .unwrap();

    let config = config::load_config_from(tmp.path()).unwrap();
    let mut console = Vec::new();
    let summary = pipeline::run(&config, &mut console).unwrap();

    assert_eq!(summary.output_path, tmp.path().join("leaders.txt"));
    let body = std::fs::read_to_string(tmp.path().join("leaders.txt")).unwrap();
    let blocks = parse_report(&body);
    assert!(blocks.iter().all(|(_, rows)| rows.len() == 2));
}
