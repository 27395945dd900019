use crate::domain::{TaskPrio, TaskState};
use std::io::{self, BufRead, Write};

/// Print `label` without a newline and read one trimmed line from stdin.
/// Returns `None` when the input is exhausted.
pub fn read_command(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`read_command`], but exhausted input reads as an empty answer.
pub fn prompt(label: &str) -> io::Result<String> {
    Ok(read_command(label)?.unwrap_or_default())
}

/// The menu dispatch key: first character of the input, uppercased.
/// Empty input yields '\0', which no menu entry claims.
pub fn first_char(input: &str) -> char {
    input
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('\0')
}

pub fn parse_id(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

pub fn parse_prio(input: &str) -> Option<TaskPrio> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "high" => Some(TaskPrio::High),
        "m" | "medium" => Some(TaskPrio::Medium),
        "l" | "low" => Some(TaskPrio::Low),
        _ => None,
    }
}

pub fn parse_state(input: &str) -> Option<TaskState> {
    match input.trim().to_ascii_lowercase().as_str() {
        "t" | "todo" | "to do" => Some(TaskState::ToDo),
        "i" | "in progress" | "inprogress" => Some(TaskState::InProgress),
        "d" | "done" => Some(TaskState::Done),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_char_uppercases_and_handles_empty_input() {
        assert_eq!(first_char("add project"), 'A');
        assert_eq!(first_char("X"), 'X');
        assert_eq!(first_char(""), '\0');
    }

    #[test]
    fn parse_id_rejects_non_numeric_input() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("seven"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn parse_prio_accepts_short_and_long_forms() {
        assert_eq!(parse_prio("h"), Some(TaskPrio::High));
        assert_eq!(parse_prio("HIGH"), Some(TaskPrio::High));
        assert_eq!(parse_prio("medium"), Some(TaskPrio::Medium));
        assert_eq!(parse_prio("L"), Some(TaskPrio::Low));
        assert_eq!(parse_prio("urgent"), None);
    }

    #[test]
    fn parse_state_accepts_short_and_long_forms() {
        assert_eq!(parse_state("t"), Some(TaskState::ToDo));
        assert_eq!(parse_state("in progress"), Some(TaskState::InProgress));
        assert_eq!(parse_state("Done"), Some(TaskState::Done));
        assert_eq!(parse_state("later"), None);
    }
}
