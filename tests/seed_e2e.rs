//! End-to-end seeding tests.
//!
//! Each test seeds a fresh database file in a temporary directory and checks
//! the resulting tables directly with rusqlite.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use crm_seed::{run_seed, SeedConfig, SeedPlan};
use rusqlite::Connection;
use seed_generator::{sin_curve, TrendMode};
use seed_populate_sqlite::CrmTable;
use tempfile::TempDir;

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn config_in(dir: &TempDir) -> SeedConfig {
    SeedConfig {
        database: dir.path().join("crm.db"),
        start_date: Some(start()),
        seed: Some(42),
        ..Default::default()
    }
}

fn count(conn: &Connection, sql: &str) -> i64 {
    conn.query_row(sql, [], |row| row.get(0)).unwrap()
}

/// The classic run: 100 accounts, 365 days, constant literal trend.
#[test]
fn test_classic_run_row_counts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let config = config_in(&dir);

    let summary = run_seed(&config)?;

    let per_day = (100.0 * sin_curve(1.0, 2.0, 3.0, 2.0)).round() as u64;
    assert_eq!(per_day, 228);
    assert_eq!(summary.rows(CrmTable::Accounts), Some(100));
    assert_eq!(summary.rows(CrmTable::Leads), Some(365 * per_day));
    assert_eq!(summary.rows(CrmTable::Opportunities), None);
    assert_eq!(summary.leads_per_day, Some((per_day, per_day)));

    let conn = Connection::open(&config.database)?;
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM accounts"), 100);
    assert_eq!(
        count(&conn, "SELECT COUNT(*) FROM leads"),
        (365 * per_day) as i64
    );
    Ok(())
}

#[test]
fn test_only_accounts_and_leads_exist() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let config = SeedConfig {
        account_count: 5,
        days: 2,
        ..config_in(&dir)
    };
    run_seed(&config)?;

    let conn = Connection::open(&config.database)?;
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")?;
    let names: Vec<String> = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<_, _>>()?;
    assert_eq!(names, ["accounts", "leads"]);
    Ok(())
}

#[test]
fn test_rerun_replaces_previous_data() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let first = SeedConfig {
        account_count: 30,
        days: 3,
        extended: true,
        ..config_in(&dir)
    };
    run_seed(&first)?;

    let second = SeedConfig {
        account_count: 7,
        days: 1,
        extended: false,
        ..config_in(&dir)
    };
    let summary = run_seed(&second)?;

    assert_eq!(summary.rows(CrmTable::Accounts), Some(7));
    assert_eq!(summary.rows(CrmTable::Leads), Some(228));
    // Extended tables from the first run were dropped and not recreated.
    assert_eq!(summary.rows(CrmTable::Orders), None);
    Ok(())
}

#[test]
fn test_account_rows_are_well_formed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let config = SeedConfig {
        account_count: 40,
        days: 1,
        ..config_in(&dir)
    };
    run_seed(&config)?;

    let conn = Connection::open(&config.database)?;
    assert_eq!(
        count(
            &conn,
            "SELECT COUNT(*) FROM accounts WHERE Name = '' OR Description = '' \
             OR CreditOnHold NOT BETWEEN 0 AND 100 OR FollowEmail NOT IN (0, 1) \
             OR instr(Address, ', ') = 0"
        ),
        0
    );
    Ok(())
}

#[test]
fn test_leads_reference_accounts_and_follow_days() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let config = SeedConfig {
        account_count: 10,
        days: 5,
        ..config_in(&dir)
    };
    run_seed(&config)?;

    let conn = Connection::open(&config.database)?;
    assert_eq!(
        count(
            &conn,
            "SELECT COUNT(*) FROM leads WHERE Account_ID NOT IN (SELECT Account_ID FROM accounts)"
        ),
        0
    );

    let mut stmt = conn.prepare("SELECT Lead_ID, Date_Generated FROM leads ORDER BY Lead_ID")?;
    let rows: Vec<(i64, NaiveDateTime)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<_, _>>()?;

    for (lead_id, date) in &rows {
        // Constant volume: lead_id = day * 228 + j + 1
        let day = (lead_id - 1) / 228;
        assert_eq!(*date, start() + Duration::days(day));
    }
    assert!(rows.windows(2).all(|w| w[0].1 <= w[1].1));
    Ok(())
}

#[test]
fn test_seeded_runs_are_reproducible() -> Result<(), Box<dyn std::error::Error>> {
    let dir_a = TempDir::new()?;
    let dir_b = TempDir::new()?;
    let small = |dir: &TempDir| SeedConfig {
        account_count: 8,
        days: 2,
        ..config_in(dir)
    };

    run_seed(&small(&dir_a))?;
    run_seed(&small(&dir_b))?;

    let dump = |dir: &TempDir| -> rusqlite::Result<Vec<(String, String)>> {
        let conn = Connection::open(dir.path().join("crm.db"))?;
        let mut stmt = conn.prepare("SELECT Name, Address FROM accounts ORDER BY Account_ID")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect();
        rows
    };
    assert_eq!(dump(&dir_a)?, dump(&dir_b)?);
    Ok(())
}

#[test]
fn test_plan_fixture_extended_run() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let plan = SeedPlan::from_file("tests/fixtures/seed_plan.yaml")?;
    let mut config = SeedConfig::default().with_plan(&plan)?;
    config.database = dir.path().join("plan.db");

    assert_eq!(config.trend_mode, TrendMode::ByDay);
    let summary = run_seed(&config)?;

    let (lo, hi) = summary.leads_per_day.unwrap();
    assert!(lo < hi);
    assert_eq!(summary.rows(CrmTable::Accounts), Some(12));
    assert_eq!(summary.rows(CrmTable::Opportunities), Some(8));
    assert!(summary.rows(CrmTable::Interactions).is_some());
    assert!(summary.rows(CrmTable::Orders).is_some());

    let conn = Connection::open(&config.database)?;
    let leads = count(&conn, "SELECT COUNT(*) FROM leads");
    assert_eq!(count(&conn, "SELECT MAX(Lead_ID) FROM leads"), leads);
    Ok(())
}

#[test]
fn test_unwritable_database_fails() {
    let config = SeedConfig {
        database: "/nonexistent-dir/crm.db".into(),
        ..Default::default()
    };
    let err = run_seed(&config).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to open database"));
}
