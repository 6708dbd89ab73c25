use crate::cli::actions::Action;
use crate::store::TableConfig;
use anyhow::Result;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let get = |name: &str| -> Result<String> {
        matches
            .get_one::<String>(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --{name}"))
    };

    let table = TableConfig::new()
        .with_table(get("table")?)
        .with_username_col(get("username-col")?)
        .with_password_col(get("password-col")?);

    Ok(Action::Upgrade {
        dsn: get("dsn")?,
        table,
    })
}
