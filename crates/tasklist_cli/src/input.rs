use std::io::BufRead;
use tasklist_core::error::AppError;

/// Joins the command-line words into one description, or takes the first
/// line of `reader` when there are none.
pub fn task_description<R: BufRead>(words: &[String], mut reader: R) -> Result<String, AppError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|err| AppError::io(format!("reading task from stdin: {err}")))?;

    let description = line.trim_end_matches(['\r', '\n']);
    if description.trim().is_empty() {
        return Err(AppError::blank_input("task cannot be blank"));
    }

    Ok(description.to_string())
}

#[cfg(test)]
mod tests {
    use super::task_description;
    use std::io::Cursor;

    #[test]
    fn joins_words_with_spaces() {
        let words = vec!["Buy".to_string(), "milk".to_string()];
        let description = task_description(&words, Cursor::new("ignored\n")).unwrap();
        assert_eq!(description, "Buy milk");
    }

    #[test]
    fn reads_first_line_from_stdin() {
        let description =
            task_description(&[], Cursor::new("task from STDIN\nsecond line\n")).unwrap();
        assert_eq!(description, "task from STDIN");
    }

    #[test]
    fn accepts_stdin_without_trailing_newline() {
        let description = task_description(&[], Cursor::new("no newline")).unwrap();
        assert_eq!(description, "no newline");
    }

    #[test]
    fn strips_windows_line_endings() {
        let description = task_description(&[], Cursor::new("crlf task\r\n")).unwrap();
        assert_eq!(description, "crlf task");
    }

    #[test]
    fn empty_stdin_is_blank_input() {
        let err = task_description(&[], Cursor::new("")).unwrap_err();
        assert_eq!(err.code(), "blank_input");
    }

    #[test]
    fn whitespace_line_is_blank_input() {
        let err = task_description(&[], Cursor::new("   \n")).unwrap_err();
        assert_eq!(err.code(), "blank_input");
    }
}
