use spend_domain::UserId;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::{Column, TextTable};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("users", "List users, marking the current one", "users", cmd_users),
        CommandEntry::new("user", "Select the active user", "user <id>", cmd_user),
        CommandEntry::new(
            "options",
            "List sector and category values of the active user",
            "options",
            cmd_options,
        ),
    ]
}

fn cmd_users(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let users = context.dashboard.users();
    if users.is_empty() {
        output::warning("No users loaded.");
        return Ok(());
    }

    let current = context.dashboard.current_user().map(|user| user.id);
    let mut table = TextTable::new(vec![
        Column::left(""),
        Column::right("Id"),
        Column::left("Name"),
        Column::left("Email"),
        Column::left("Role"),
    ]);
    for user in users {
        let marker = if Some(user.id) == current { "*" } else { "" };
        table.push_row(vec![
            marker.into(),
            user.id.to_string(),
            user.name.clone(),
            user.email.clone(),
            user.role.clone(),
        ]);
    }
    output::section("Users");
    output::plain(table.render());
    Ok(())
}

fn cmd_user(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::usage("user <id>"));
    };
    let id: UserId = raw
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid user id `{raw}`")))?;
    let user = context.dashboard.select_user(id)?;
    output::success(format!("Selected user {} (#{}).", user.name, user.id));
    output::info(format!(
        "{} records loaded.",
        context.dashboard.records().len()
    ));
    Ok(())
}

fn cmd_options(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let options = context.dashboard.filter_options();
    output::section("Filter options");
    output::plain(format!("Sectors:    {}", join_or_none(&options.sectors)));
    output::plain(format!("Categories: {}", join_or_none(&options.categories)));
    Ok(())
}

pub(crate) fn join_or_none<S: AsRef<str>>(values: &[S]) -> String {
    if values.is_empty() {
        "(none)".into()
    } else {
        values
            .iter()
            .map(|value| value.as_ref())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}
