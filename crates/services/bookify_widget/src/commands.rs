// --- File: crates/services/bookify_widget/src/commands.rs ---
//! Line oriented commands driving the widget.

use bookify_contact::ContactForm;
use chrono::NaiveDate;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  next | prev                       show the next / previous week
  day YYYY-MM-DD                    pick a day
  time HH:MM                        pick a time slot
  service ID                        pick a service
  services                          list services
  show                              show the calendar
  submit name|email|phone[|notes]   send the booking request
  log | log clear                   show or clear the booking log
  theme | theme toggle              show or switch the theme
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Day(NaiveDate),
    Time(String),
    Service(String),
    Services,
    Show,
    Submit(ContactForm),
    Log,
    LogClear,
    Theme,
    ThemeToggle,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match (word.to_lowercase().as_str(), rest) {
        ("next", "") => Command::Next,
        ("prev", "") => Command::Prev,
        ("day", "") => return Err(CommandError::Usage("day YYYY-MM-DD")),
        ("day", date) => Command::Day(
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| CommandError::InvalidDate(date.to_string()))?,
        ),
        ("time", "") => return Err(CommandError::Usage("time HH:MM")),
        ("time", label) => Command::Time(label.to_string()),
        ("service", "") => return Err(CommandError::Usage("service ID")),
        ("service", id) => Command::Service(id.to_string()),
        ("services", "") => Command::Services,
        ("show", "") => Command::Show,
        ("submit", fields) => Command::Submit(parse_form(fields)?),
        ("log", "") => Command::Log,
        ("log", "clear") => Command::LogClear,
        ("theme", "") => Command::Theme,
        ("theme", "toggle") => Command::ThemeToggle,
        ("help", _) => Command::Help,
        ("quit", _) | ("exit", _) => Command::Quit,
        _ => return Err(CommandError::Unknown(line.to_string())),
    };
    Ok(Some(command))
}

fn parse_form(fields: &str) -> Result<ContactForm, CommandError> {
    let parts: Vec<&str> = fields.splitn(4, '|').map(str::trim).collect();
    match parts.as_slice() {
        [name, email, phone] => Ok(ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            notes: None,
        }),
        [name, email, phone, notes] => Ok(ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            notes: Some(notes.to_string()).filter(|n| !n.is_empty()),
        }),
        _ => Err(CommandError::Usage("submit name|email|phone[|notes]")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_command("next").unwrap(), Some(Command::Next));
        assert_eq!(parse_command("  PREV ").unwrap(), Some(Command::Prev));
        assert_eq!(parse_command("log clear").unwrap(), Some(Command::LogClear));
        assert_eq!(parse_command("theme toggle").unwrap(), Some(Command::ThemeToggle));
        assert_eq!(parse_command("").unwrap(), None);
    }

    #[test]
    fn test_arguments() {
        assert_eq!(
            parse_command("day 2026-10-22").unwrap(),
            Some(Command::Day(NaiveDate::from_ymd_opt(2026, 10, 22).unwrap()))
        );
        assert_eq!(
            parse_command("time 10:00").unwrap(),
            Some(Command::Time("10:00".to_string()))
        );
        assert_eq!(
            parse_command("day 22.10.2026").unwrap_err(),
            CommandError::InvalidDate("22.10.2026".to_string())
        );
        assert_eq!(
            parse_command("service").unwrap_err(),
            CommandError::Usage("service ID")
        );
        assert!(matches!(
            parse_command("dance").unwrap_err(),
            CommandError::Unknown(_)
        ));
    }

    #[test]
    fn test_submit_fields() {
        let command = parse_command("submit Anna Nowak | anna@example.com | 600 700 800 | a | b")
            .unwrap()
            .unwrap();
        assert_eq!(
            command,
            Command::Submit(ContactForm {
                name: "Anna Nowak".to_string(),
                email: "anna@example.com".to_string(),
                phone: "600 700 800".to_string(),
                notes: Some("a | b".to_string()),
            })
        );

        assert_eq!(
            parse_command("submit Anna|anna@example.com").unwrap_err(),
            CommandError::Usage("submit name|email|phone[|notes]")
        );
    }
}
