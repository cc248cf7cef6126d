use std::{env, path::PathBuf};

use spend_config::{Config, ConfigManager};
use spend_core::{Dashboard, TableSort};
use spend_storage_json::JsonSnapshotSource;
use strsim::levenshtein;

use crate::cli::commands;
use crate::cli::core::{CommandError, LoopControl};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::CommandRegistry;
use crate::errors::CliError;

pub const HOME_ENV: &str = "SPEND_DASHBOARD_HOME";
pub const DATA_ENV: &str = "SPEND_DASHBOARD_DATA";
const DEFAULT_HOME_DIR: &str = ".spend_dashboard";

/// Session state shared by every command handler.
pub struct ShellContext {
    pub registry: CommandRegistry,
    pub dashboard: Dashboard,
    pub config: Config,
    pub data_path: PathBuf,
    pub table_sort: TableSort,
    pub running: bool,
}

impl ShellContext {
    pub fn new() -> Result<Self, CliError> {
        let manager = ConfigManager::with_base_dir(resolve_home())?;
        let config = manager.load()?;

        output::set_preferences(OutputPreferences {
            color: config.ui_color_enabled && env::var_os("NO_COLOR").is_none(),
        });

        let data_path = env::var_os(DATA_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| config.resolve_data_source());
        let dashboard = Dashboard::load(&JsonSnapshotSource::new(&data_path));

        let mut context = Self::with_dashboard(config, data_path, dashboard);
        context.apply_default_user();
        if context.dashboard.users().is_empty() {
            output::warning(format!(
                "No spend data loaded from {}.",
                context.data_path.display()
            ));
        }
        Ok(context)
    }

    pub(crate) fn with_dashboard(config: Config, data_path: PathBuf, dashboard: Dashboard) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            registry,
            dashboard,
            config,
            data_path,
            table_sort: TableSort::default(),
            running: true,
        }
    }

    fn apply_default_user(&mut self) {
        let Some(id) = self.config.default_user_id else {
            return;
        };
        if let Err(err) = self.dashboard.select_user(id) {
            tracing::warn!(user = id, error = %err, "configured default user not available");
            output::warning(format!("Default user {id} is not available."));
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        match self.dashboard.current_user() {
            Some(user) => {
                let active = self.dashboard.filters().active_filter_count();
                if active > 0 {
                    format!("spend [{}|{} filters]> ", user.name, active)
                } else {
                    format!("spend [{}]> ", user.name)
                }
            }
            None => "spend> ".into(),
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Io(err) => Err(err.into()),
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }
}

fn resolve_home() -> PathBuf {
    env::var_os(HOME_ENV)
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(DEFAULT_HOME_DIR)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HOME_DIR))
}
