/// Normalize raw extracted text: CR/CRLF and form feeds become newlines,
/// remaining control characters are dropped, runs of spaces/tabs collapse to
/// one space, and runs of blank lines collapse to a single blank line.
///
/// Total over any input and idempotent: `clean(clean(x)) == clean(x)`.
pub fn clean(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace(['\r', '\x0c'], "\n");

    let mut lines: Vec<String> = Vec::new();
    for raw in normalized.lines() {
        let printable: String = raw
            .chars()
            .filter(|c| !c.is_control() || *c == '\t')
            .collect();
        let line = printable.split_whitespace().collect::<Vec<_>>().join(" ");

        if line.is_empty() {
            // at most one consecutive blank line
            if lines.last().is_some_and(|l| l.is_empty()) {
                continue;
            }
            lines.push(String::new());
        } else {
            lines.push(line);
        }
    }

    while lines.first().is_some_and(|l| l.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(clean("John  Doe\t\tEngineer"), "John Doe Engineer");
    }

    #[test]
    fn strips_control_chars() {
        assert_eq!(clean("abc\x00\x01def"), "abcdef");
    }

    #[test]
    fn form_feed_becomes_line_break() {
        assert_eq!(clean("page one\x0cpage two"), "page one\npage two");
    }

    #[test]
    fn collapses_blank_lines() {
        assert_eq!(clean("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(clean("\n\n  hello  \n\n"), "hello");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "John Doe\r\n\tEngineer  \x0c\n\n\n\nSKILLS\nPython,  SQL",
            "",
            "   \n\n\t\n",
            "plain single line",
        ];
        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn total_over_empty_and_whitespace() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("\n\n\n"), "");
    }
}
