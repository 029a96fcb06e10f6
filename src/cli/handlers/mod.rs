use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::cli::commands::*;
use crate::cli::logging::{self, LOG_FILE, LogTarget};
use crate::cli::output::*;
use crate::io::ambient::TerminalAmbient;
use crate::io::config_io::{self, ConfigError};
use crate::io::state::JsonFileStore;
use crate::ops::calendar::{CalendarCursor, CalendarError, MonthGrid, format_month};
use crate::ops::theme_pref::{ThemeMode, ThemePreference};
use crate::tui::app::LaunchOptions;
use crate::util::clock::{Clock, SystemClock};

/// Error type for CLI subcommands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid month '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Launch the dashboard, logging to a file so the terminal stays clean
pub fn launch_tui(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let state_dir = config_io::resolve_state_dir(cli.state_dir.as_deref())?;
    let log_file = cli.log_file.unwrap_or_else(|| state_dir.join(LOG_FILE));
    logging::init_tracing(cli.verbose, LogTarget::File(log_file))?;

    let config = config_io::load_config(cli.config.as_deref())?;
    info!(state_dir = %state_dir.display(), "launching dashboard");
    crate::tui::run(LaunchOptions {
        config,
        state_dir,
        empty: cli.empty,
    })
}

pub fn dispatch(mut cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(command) = cli.command.take() else {
        return launch_tui(cli);
    };

    let target = match cli.log_file.clone() {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Stderr,
    };
    logging::init_tracing(cli.verbose, target)?;
    let json = cli.json;

    match command {
        Commands::Cal(args) => {
            let out = cmd_cal(&args, json, &SystemClock)?;
            print!("{}", out);
            Ok(())
        }
        Commands::Theme(args) => {
            let state_dir = config_io::resolve_state_dir(cli.state_dir.as_deref())?;
            let out = cmd_theme(&args, json, state_dir, cli.config)?;
            println!("{}", out);
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Month grid as cal(1)-style text or JSON
pub fn cmd_cal(args: &CalArgs, json: bool, clock: &dyn Clock) -> Result<String, CliError> {
    let today = clock.today();
    let cursor = match &args.month {
        Some(m) => parse_month(m)?,
        None => CalendarCursor::from_date(today),
    };
    debug!(year = cursor.year, month = cursor.month, "cal");
    let grid = MonthGrid::compute(cursor.year, cursor.month, today)?;
    if json {
        Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(&MonthJson::from(&grid))?
        ))
    } else {
        Ok(format_month(&grid))
    }
}

/// Print, set or toggle the saved theme
pub fn cmd_theme(
    args: &ThemeArgs,
    json: bool,
    state_dir: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<String, CliError> {
    let config = config_io::load_config(config_path.as_deref())?;
    let ambient = TerminalAmbient::from_env(config.ui.system_theme.clone());
    let mut pref = ThemePreference::resolve(JsonFileStore::new(state_dir), &ambient);

    let mode = match args.action {
        Some(ThemeAction::Light) => pref.set(ThemeMode::Light),
        Some(ThemeAction::Dark) => pref.set(ThemeMode::Dark),
        Some(ThemeAction::Toggle) => pref.toggle(),
        None => pref.current(),
    };

    if json {
        Ok(serde_json::to_string_pretty(&ThemeJson::from(mode))?)
    } else {
        Ok(mode.to_string())
    }
}

/// Parse `YYYY-MM` into a calendar cursor (0-based month)
pub fn parse_month(s: &str) -> Result<CalendarCursor, CliError> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| CliError::InvalidMonth(s.to_string()))?;
    Ok(CalendarCursor::from_date(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::clock::FixedClock;
    use tempfile::TempDir;

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2025, 7, 26).unwrap())
    }

    fn empty_config(tmp: &TempDir) -> Option<PathBuf> {
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "").unwrap();
        Some(path)
    }

    #[test]
    fn parse_month_is_zero_based() {
        let c = parse_month("2024-02").unwrap();
        assert_eq!((c.year, c.month), (2024, 1));
        assert!(matches!(parse_month("2024-13"), Err(CliError::InvalidMonth(_))));
        assert!(matches!(parse_month("feb"), Err(CliError::InvalidMonth(_))));
    }

    #[test]
    fn cal_defaults_to_current_month() {
        let out = cmd_cal(&CalArgs { month: None }, false, &clock()).unwrap();
        assert!(out.starts_with("     July 2025"));
        assert!(out.contains("Su Mo Tu We Th Fr Sa"));
    }

    #[test]
    fn cal_json_for_given_month() {
        let args = CalArgs {
            month: Some("2023-02".into()),
        };
        let out = cmd_cal(&args, true, &clock()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["days_in_month"], 28);
        assert_eq!(value["start_day"], 3);
        assert!(value.get("today").is_none());
    }

    #[test]
    fn theme_set_then_read_back() {
        let tmp = TempDir::new().unwrap();
        let config = empty_config(&tmp);
        let state = tmp.path().join("state");

        let set = ThemeArgs {
            action: Some(ThemeAction::Dark),
        };
        assert_eq!(cmd_theme(&set, false, state.clone(), config.clone()).unwrap(), "dark");

        let show = ThemeArgs { action: None };
        assert_eq!(cmd_theme(&show, false, state.clone(), config.clone()).unwrap(), "dark");

        let toggle = ThemeArgs {
            action: Some(ThemeAction::Toggle),
        };
        let out = cmd_theme(&toggle, true, state, config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["theme"], "light");
    }
}
