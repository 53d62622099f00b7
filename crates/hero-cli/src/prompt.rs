//! Interactive hero name input.

use std::io::{self, BufRead, Write};

use crate::report::SEARCH_PROMPT;

/// Print the search prompt and read one line.
///
/// The trailing line ending is removed. Returns `None` at end of input.
pub fn read_hero_name<R, W>(input: &mut R, prompt: &mut W) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(prompt, "{SEARCH_PROMPT}")?;
    prompt.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(chomp(&line).to_string()))
}

fn chomp(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_one_line_without_newline() {
        let mut input = "Batman\nSuperman\n".as_bytes();
        let mut prompt = Vec::new();
        let name = read_hero_name(&mut input, &mut prompt).expect("read");
        assert_eq!(name.as_deref(), Some("Batman"));
        assert_eq!(String::from_utf8(prompt).expect("utf8"), "Enter a hero's name: ");
    }

    #[test]
    fn keeps_inner_whitespace() {
        let mut input = " Spider-Man \r\n".as_bytes();
        let name = read_hero_name(&mut input, &mut io::sink()).expect("read");
        assert_eq!(name.as_deref(), Some(" Spider-Man "));
    }

    #[test]
    fn end_of_input_yields_none() {
        let mut input = "".as_bytes();
        let name = read_hero_name(&mut input, &mut io::sink()).expect("read");
        assert_eq!(name, None);
    }
}
