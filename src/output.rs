use std::io::Write;

use crate::error::FetchError;

/// Printed in place of titles when none could be fetched.
pub const NO_RESULT: &str = "None";

pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Result<Vec<String>, FetchError>,
) -> std::io::Result<()> {
    match outcome {
        Ok(titles) => {
            for title in titles {
                writeln!(out, "{}", title)?;
            }
        }
        Err(_) => writeln!(out, "{}", NO_RESULT)?,
    }
    out.flush()
}
