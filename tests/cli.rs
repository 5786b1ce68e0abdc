use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "crystal";

fn crystal(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("CRYSTAL_BUDGET_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(data_dir: &TempDir, args: &[&str]) {
    crystal(data_dir).args(args).assert().success();
}

/// Salary (expected 3000) paid 4000 in January; Food takes 20% and spends 700
fn seeded_budget() -> TempDir {
    let data_dir = TempDir::new().unwrap();
    run(&data_dir, &["init"]);
    run(&data_dir, &["source", "add", "Salary", "--expected", "3000"]);
    run(&data_dir, &["category", "add", "Food", "--alloc", "Salary:20%"]);
    run(&data_dir, &["income", "add", "salary", "4000", "--date", "2025-01-05"]);
    run(&data_dir, &["expense", "add", "food", "700", "--date", "2025-01-15"]);
    data_dir
}

#[test]
fn init_creates_settings_and_snapshot() {
    let data_dir = TempDir::new().unwrap();

    crystal(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialized CrystalBudget"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("data").join("snapshot.json").exists());

    crystal(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already initialized"));
}

#[test]
fn overview_shows_allocated_and_spent() {
    let data_dir = seeded_budget();

    crystal(&data_dir)
        .args(["budget", "overview", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("January 2025"))
        .stdout(contains("Food"))
        .stdout(contains("$800.00"))
        .stdout(contains("$700.00"));
}

#[test]
fn sources_fall_back_to_expected_amount() {
    let data_dir = seeded_budget();

    crystal(&data_dir)
        .args(["budget", "sources", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("$4,000.00").and(contains("$3,200.00")));

    crystal(&data_dir)
        .args(["budget", "sources", "--period", "2025-02"])
        .assert()
        .success()
        .stdout(contains("$3,000.00 (expected)"));
}

#[test]
fn carryover_sums_earlier_months() {
    let data_dir = seeded_budget();

    crystal(&data_dir)
        .args(["budget", "carryover", "--period", "2025-02"])
        .assert()
        .success()
        .stdout(contains("Carry-over into February 2025: $3,300.00"));
}

#[test]
fn export_csv_writes_one_row_per_category() {
    let data_dir = seeded_budget();

    crystal(&data_dir)
        .args(["export", "csv", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("Period,Category,Icon,Allocated,Spent,Remaining,Used %,Status"))
        .stdout(contains("2025-01,Food,📦,800.00,700.00,100.00,87.5,attention"));
}

#[test]
fn export_json_to_file() {
    let data_dir = seeded_budget();
    let output = data_dir.path().join("january.json");

    crystal(&data_dir)
        .args(["export", "json", "--period", "2025-01", "--output"])
        .arg(&output)
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["overview"]["balance"]["month_income"], 400000);
    assert_eq!(value["overview"]["categories"][0]["spent"], 70000);
}

#[test]
fn unknown_references_fail() {
    let data_dir = seeded_budget();

    crystal(&data_dir)
        .args(["expense", "add", "Travel", "50", "--date", "2025-01-20"])
        .assert()
        .failure()
        .stderr(contains("Category not found: Travel"));

    crystal(&data_dir)
        .args(["category", "add", "Fun", "--alloc", "Bonus:10%"])
        .assert()
        .failure()
        .stderr(contains("Income source not found: Bonus"));
}

#[test]
fn duplicate_source_names_are_rejected() {
    let data_dir = seeded_budget();

    crystal(&data_dir)
        .args(["source", "add", "SALARY"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn out_of_range_period_is_rejected() {
    let data_dir = seeded_budget();

    crystal(&data_dir)
        .args(["budget", "overview", "--period", "300000-01"])
        .assert()
        .failure()
        .stderr(contains("Year out of range").and(contains("panicked").not()));

    crystal(&data_dir)
        .args(["expense", "list", "--period", "March 999999"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn huge_amounts_do_not_overflow() {
    let data_dir = seeded_budget();
    run(&data_dir, &["expense", "add", "food", "90000000000000000", "--date", "2025-01-16"]);
    run(&data_dir, &["expense", "add", "food", "90000000000000000", "--date", "2025-01-17"]);

    crystal(&data_dir)
        .args(["budget", "overview", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("92,233,720,368,547,758.07"));
}

#[test]
fn unusable_date_format_fails_at_startup() {
    let data_dir = seeded_budget();
    std::fs::write(
        data_dir.path().join("config.json"),
        r#"{"date_format": "%H:%M"}"#,
    )
    .unwrap();

    crystal(&data_dir)
        .args(["expense", "list", "--period", "2025-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format '%H:%M'").and(contains("panicked").not()));
}

#[test]
fn signed_and_sub_cent_amounts_are_checked() {
    let data_dir = seeded_budget();

    crystal(&data_dir)
        .args(["expense", "add", "food", "1.999", "--date", "2025-01-20"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    crystal(&data_dir)
        .args(["expense", "add", "food", "$-10.50", "--date", "2025-01-20"])
        .assert()
        .failure()
        .stderr(contains("cannot be negative"));
}
