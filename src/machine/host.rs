//! Host bridge: the escapes through which the machine reaches the
//! surrounding process environment.

use rand_core::{OsRng, RngCore};
use std::process::Command;

/// Capability surface the CPU uses for subprocess spawning and randomness.
///
/// Production code uses [`OsHost`]; the test suite substitutes deterministic
/// stand-ins.
pub trait Host {
    /// Runs `argv[0]` with the remaining elements as arguments, returning
    /// the captured stdout and stderr. Spawn failures are absorbed and
    /// yield empty output.
    fn spawn(&mut self, argv: &[String]) -> (String, String);

    /// Returns a uniform random integer in `[0, 0xFFFF)`.
    fn random_u16(&mut self) -> u16;
}

/// The real host: `std::process` and OS entropy.
pub struct OsHost;

impl Host for OsHost {
    fn spawn(&mut self, argv: &[String]) -> (String, String) {
        let Some((program, args)) = argv.split_first() else {
            return (String::new(), String::new());
        };
        match Command::new(program).args(args).output() {
            Ok(out) => (
                String::from_utf8_lossy(&out.stdout).into_owned(),
                String::from_utf8_lossy(&out.stderr).into_owned(),
            ),
            Err(_) => (String::new(), String::new()),
        }
    }

    fn random_u16(&mut self) -> u16 {
        (OsRng.next_u32() % 0xFFFF) as u16
    }
}

/// Splits a command line into argv, keeping quoted spans together.
///
/// A run of non-whitespace, non-quote characters is one token. A span inside
/// double or single quotes becomes one token with the quotes stripped.
/// Escapes are not interpreted, and adjacent tokens are never joined:
///
/// ```text
/// /bin/sh -c "ls /etc"  ->  ["/bin/sh", "-c", "ls /etc"]
/// ```
pub fn split_command(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '"' || c == '\'' {
            // Quoted span: everything up to the matching quote, or to the
            // end of input when unterminated.
            chars.next();
            let mut token = String::new();
            for ch in chars.by_ref() {
                if ch == c {
                    break;
                }
                token.push(ch);
            }
            tokens.push(token);
        } else {
            let mut token = String::new();
            while let Some(&ch) = chars.peek() {
                if ch.is_whitespace() || ch == '"' || ch == '\'' {
                    break;
                }
                token.push(ch);
                chars.next();
            }
            tokens.push(token);
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(input: &str) -> Vec<String> {
        split_command(input)
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split("ls -l /etc"), ["ls", "-l", "/etc"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(split("").is_empty());
        assert!(split("   \t ").is_empty());
    }

    #[test]
    fn double_quoted_span_is_one_token() {
        assert_eq!(split(r#"/bin/sh -c "ls /etc""#), ["/bin/sh", "-c", "ls /etc"]);
    }

    #[test]
    fn single_quoted_span_is_one_token() {
        assert_eq!(split("echo 'hello world'"), ["echo", "hello world"]);
    }

    #[test]
    fn quotes_are_stripped_not_joined() {
        // Adjacent bare and quoted text stay separate tokens.
        assert_eq!(split(r#"foo"bar baz""#), ["foo", "bar baz"]);
    }

    #[test]
    fn unterminated_quote_takes_the_rest() {
        assert_eq!(split("echo 'rest of line"), ["echo", "rest of line"]);
    }

    #[test]
    fn empty_quoted_span_is_an_empty_token() {
        assert_eq!(split(r#"echo """#), ["echo", ""]);
    }
}
