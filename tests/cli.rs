use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const FRUIT_CSV: &str = "fruit,count,weight,shop\napple,3,1.5,north\npear,7,2.0,south\nplum,2,0.5,north\n";

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("c3plot").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("normalize"))
        .stdout(predicate::str::contains("plot"));
}

#[test]
fn cli_normalize_from_stdin() {
    let mut cmd = Command::cargo_bin("c3plot").unwrap();
    cmd.arg("normalize")
        .write_stdin(r#"{"plotKind": "pie", "labels": ["a", "b"], "values": [3, 7]}"#);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""json":{"a":3.0,"b":7.0}"#))
        .stdout(predicate::str::contains(r#""colors":{}"#));
}

#[test]
fn cli_normalize_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"plotKind": "bar", "height": [1, 2], "ylab": "n"}}"#).unwrap();

    let mut cmd = Command::cargo_bin("c3plot").unwrap();
    cmd.args(["normalize", "--pretty", "--input"]).arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"bar\""));
}

#[test]
fn cli_normalize_rejects_bad_request() {
    let mut cmd = Command::cargo_bin("c3plot").unwrap();
    cmd.arg("normalize")
        .write_stdin(r#"{"plotKind": "pie", "labels": ["a", "b"], "values": [3]}"#);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("shape mismatch"));
}

#[test]
fn cli_plot_grouped_csv() {
    let mut cmd = Command::cargo_bin("c3plot").unwrap();
    cmd.args([
        "plot",
        r#"scatter(x: weight, y: count, group: shop) | legend(title: "Shop")"#,
    ])
    .write_stdin(FRUIT_CSV);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""xs":{"north":"x0","south":"x1"}"#))
        .stdout(predicate::str::contains(r#""kind":"legendTitle""#));
}

#[test]
fn cli_plot_json_data_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"[{{"fruit": "apple", "count": 3}}, {{"fruit": "pear", "count": 7}}]"#).unwrap();

    let mut cmd = Command::cargo_bin("c3plot").unwrap();
    cmd.args(["plot", "bar(y: count, x: fruit)", "--json", "--data"])
        .arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""categories":["apple","pear"]"#));
}

#[test]
fn cli_plot_requires_one_geom() {
    let mut cmd = Command::cargo_bin("c3plot").unwrap();
    cmd.args(["plot", r#"labs(title: "nothing")"#]).write_stdin(FRUIT_CSV);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exactly one chart command"));
}

#[test]
fn cli_plot_unknown_column() {
    let mut cmd = Command::cargo_bin("c3plot").unwrap();
    cmd.args(["plot", "scatter(x: weight, y: price)"]).write_stdin(FRUIT_CSV);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Column 'price' not found"));
}
