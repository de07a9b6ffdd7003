//! Comment blanking for module source text.
//!
//! Patterns run against a copy of the source where every `// ...` and
//! `/* ... */` comment is overwritten with spaces. Byte offsets and line
//! breaks are kept, so a match in the copy can be spliced into the original.
//! String literals are skipped, so `'http://...'` stays intact.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Line,
    Block,
    Quoted(char),
}

/// `source` with comment text replaced by spaces, byte for byte.
pub fn blank_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut state = State::Code;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match (c, chars.peek()) {
                ('/', Some('/')) => {
                    chars.next();
                    out.push_str("  ");
                    state = State::Line;
                }
                ('/', Some('*')) => {
                    chars.next();
                    out.push_str("  ");
                    state = State::Block;
                }
                ('\'' | '"' | '`', _) => {
                    out.push(c);
                    state = State::Quoted(c);
                }
                _ => out.push(c),
            },
            State::Line => {
                if c == '\n' {
                    out.push(c);
                    state = State::Code;
                } else {
                    blank(&mut out, c);
                }
            }
            State::Block => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    state = State::Code;
                } else {
                    blank(&mut out, c);
                }
            }
            State::Quoted(quote) => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == quote || (c == '\n' && quote != '`') {
                    state = State::Code;
                }
            }
        }
    }

    out
}

/// Keeps line breaks so line-based offsets survive.
fn blank(out: &mut String, c: char) {
    match c {
        '\n' | '\r' => out.push(c),
        _ => out.extend(std::iter::repeat_n(' ', c.len_utf8())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_comment_is_blanked() {
        let src = "a // b\nc";
        assert_eq!(blank_comments(src), "a     \nc");
    }

    #[test]
    fn block_comment_keeps_line_breaks() {
        let src = "a /* b\r\n c */ d";
        let out = blank_comments(src);
        assert_eq!(out, "a     \r\n      d");
        assert_eq!(out.len(), src.len());
    }

    #[test]
    fn offsets_survive_multibyte_comments() {
        let src = "x // ünïcode\ny";
        let out = blank_comments(src);
        assert_eq!(out.len(), src.len());
        assert_eq!(out.find('y'), src.find('y'));
    }

    #[test]
    fn slashes_inside_strings_are_code() {
        let src = "url = 'http://x'; // gone";
        assert_eq!(blank_comments(src), "url = 'http://x';        ");
    }

    #[test]
    fn escaped_quote_does_not_end_string() {
        let src = r"s = 'it\'s // here'";
        assert_eq!(blank_comments(src), src);
    }
}
