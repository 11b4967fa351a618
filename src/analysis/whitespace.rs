// Comment indentation normalization

/// Strip the indentation shared by every non-blank line of `text`, keeping the
/// indentation of lines relative to each other. Leading blank lines are dropped.
/// Returns `None` when nothing but blank lines remain.
pub fn remove_leading_whitespace(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').skip_while(|l| is_blank(l)).collect();
    if lines.is_empty() {
        return None;
    }

    let indentation = lines
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| leading_spaces(l))
        .min()
        .unwrap_or(0);
    let prefix = " ".repeat(indentation);

    let stripped: Vec<&str> = lines
        .iter()
        .map(|&line| line.strip_prefix(prefix.as_str()).unwrap_or(line))
        .collect();
    Some(stripped.join("\n"))
}

/// Only spaces (a trailing `\r` from CRLF text is ignored)
fn is_blank(line: &str) -> bool {
    line.trim_end_matches('\r').bytes().all(|b| b == b' ')
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
