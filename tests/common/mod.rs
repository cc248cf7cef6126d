use std::{fs, path::PathBuf};

use assert_cmd::Command;
use serde_json::{json, Value};
use tempfile::TempDir;

/// A temporary dashboard home with a data document and config directory.
pub struct ScriptEnv {
    pub dir: TempDir,
    pub data_path: PathBuf,
}

impl ScriptEnv {
    pub fn with_sample_data() -> Self {
        let env = Self::empty();
        fs::write(&env.data_path, sample_document().to_string()).expect("write data fixture");
        env
    }

    /// A home whose data file does not exist.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let data_path = dir.path().join("db.json");
        Self { dir, data_path }
    }

    pub fn write_config(&self, json: &str) {
        let config_dir = self.dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("create config dir");
        fs::write(config_dir.join("config.json"), json).expect("write config");
    }

    /// The CLI binary in script mode, pointed at this home and data file.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("spend_dashboard_cli").expect("binary");
        cmd.env("SPEND_DASHBOARD_CLI_SCRIPT", "1")
            .env("SPEND_DASHBOARD_HOME", self.dir.path())
            .env("SPEND_DASHBOARD_DATA", &self.data_path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Runs the CLI over `input` and returns its stdout.
    pub fn run(&self, input: &str) -> String {
        let output = self
            .command()
            .write_stdin(input.to_string())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(output).expect("utf8 stdout")
    }
}

fn metric(current: f64, reference: f64) -> Value {
    let absolute = current - reference;
    let percent = if reference == 0.0 {
        0.0
    } else {
        absolute / reference * 100.0
    };
    json!({
        "current": current,
        "reference": reference,
        "absoluteChange": absolute,
        "percentChange": percent
    })
}

fn record(
    location: [&str; 3],
    sector: &str,
    category: &str,
    start: &str,
    end: &str,
    current: f64,
    reference: f64,
) -> Value {
    json!({
        "country": location[0],
        "state": location[1],
        "city": location[2],
        "sector": sector,
        "category": category,
        "startDate": start,
        "endDate": end,
        "mySpend": metric(current, reference),
        "sameStoreSpend": metric(0.0, 0.0),
        "newStoreSpend": metric(0.0, 0.0),
        "lostStoreSpend": metric(0.0, 0.0)
    })
}

/// Ada: San Diego (1000 vs 500, January) and Austin (500 vs 300, February).
/// Grace: Toronto (200 vs 200, March).
pub fn sample_document() -> Value {
    json!({
        "users": [
            {"id": 1, "name": "Ada Lovelace", "email": "ada@example.com", "role": "Analyst"},
            {"id": 2, "name": "Grace Hopper", "email": "grace@example.com", "role": "Manager"}
        ],
        "data": [
            {
                "userId": 1,
                "items": [
                    record(["USA", "California", "San Diego"], "Retail", "Electronics",
                        "2024-01-01", "2024-01-31", 1000.0, 500.0),
                    record(["USA", "Texas", "Austin"], "Food", "Grocery",
                        "2024-02-01", "2024-02-29", 500.0, 300.0)
                ]
            },
            {
                "userId": 2,
                "items": [
                    record(["Canada", "Ontario", "Toronto"], "Travel", "Airline",
                        "2024-03-01", "2024-03-31", 200.0, 200.0)
                ]
            }
        ]
    })
}
