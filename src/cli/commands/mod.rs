use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("ingresso")
        .about("Login form maintenance: hash stored plaintext passwords in place")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("dsn")
                .short('d')
                .long("dsn")
                .help("Database connection string")
                .env("INGRESSO_DSN")
                .required(true),
        )
        .arg(
            Arg::new("table")
                .short('t')
                .long("table")
                .help("Name of the user table")
                .default_value("users")
                .env("INGRESSO_TABLE"),
        )
        .arg(
            Arg::new("username-col")
                .long("username-col")
                .help("Column holding usernames")
                .default_value("username")
                .env("INGRESSO_USERNAME_COL"),
        )
        .arg(
            Arg::new("password-col")
                .long("password-col")
                .help("Column holding passwords")
                .default_value("password")
                .env("INGRESSO_PASSWORD_COL"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("INGRESSO_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "ingresso");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Login form maintenance: hash stored plaintext passwords in place"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_dsn_and_table_defaults() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "ingresso",
            "--dsn",
            "postgres://localhost:5432/app",
        ]);

        assert_eq!(
            matches.get_one::<String>("dsn").map(String::as_str),
            Some("postgres://localhost:5432/app")
        );
        assert_eq!(
            matches.get_one::<String>("table").map(String::as_str),
            Some("users")
        );
        assert_eq!(
            matches.get_one::<String>("username-col").map(String::as_str),
            Some("username")
        );
        assert_eq!(
            matches.get_one::<String>("password-col").map(String::as_str),
            Some("password")
        );
    }

    #[test]
    fn test_column_overrides() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "ingresso",
            "--dsn",
            "postgres://localhost:5432/app",
            "--table",
            "accounts",
            "--username-col",
            "login",
            "--password-col",
            "secret",
        ]);

        assert_eq!(
            matches.get_one::<String>("table").map(String::as_str),
            Some("accounts")
        );
        assert_eq!(
            matches.get_one::<String>("username-col").map(String::as_str),
            Some("login")
        );
        assert_eq!(
            matches.get_one::<String>("password-col").map(String::as_str),
            Some("secret")
        );
    }
}
