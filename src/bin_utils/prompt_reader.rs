use std::io::{BufRead, Result};

/// Reads a single line from `input`, dropping the line terminator.
///
/// Returns `None` once the input is exhausted.
pub fn read_line<R>(input: &mut R) -> Result<Option<String>>
where
    R: BufRead,
{
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
