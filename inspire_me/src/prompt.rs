//! Interactive save confirmation.
use std::io::{BufRead, Write};

use inspire_common::Result;
use inspire_common::answer::{Answer, parse_answer};
use log::debug;

/// Question shown before saving.
pub const QUESTION: &str = "Voulez-vous sauvegarder cette citation ? (o/n) : ";

/// Asks the question on `output` and reads one line from `input`.
///
/// End of input, an unknown word or bytes that are not UTF-8 count as a
/// refusal. Only a failing reader or writer is an error.
pub fn confirm<R, W>(input: &mut R, output: &mut W) -> Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{}", QUESTION)?;
    output.flush()?;

    let mut raw = Vec::new();
    input.read_until(b'\n', &mut raw)?;
    let line = String::from_utf8_lossy(&raw);

    match parse_answer(&line) {
        Some(answer) => {
            debug!("Save answer: {}", answer);
            Ok(answer == Answer::Yes)
        }
        None => {
            debug!("Unrecognized answer {:?}, treated as a refusal", line.trim());
            Ok(false)
        }
    }
}
