use std::io::{self, BufRead, Write};

use tracing::info;

use crate::calculator::Normalization;
use crate::display::{Controller, DisplaySurface, MemoryDisplay};
use crate::token::Token;

/// Line-oriented front end for hosts without a window.
///
/// Each line holds button labels separated by whitespace, e.g. `7 ÷ 2 =`.
/// After every line the trace and the input field are written out.
pub fn run_console<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    normalization: Normalization,
) -> io::Result<()> {
    let mut controller = Controller::new(MemoryDisplay::default(), normalization);
    info!("console calculator ready");

    for line in reader.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            match word.parse::<Token>() {
                Ok(token) => {
                    if let Err(e) = controller.press(token) {
                        writeln!(writer, "error: {}", e)?;
                    }
                }
                Err(e) => writeln!(writer, "{}", e)?,
            }
        }

        let display = controller.display();
        writeln!(writer, "{}", display.trace_text())?;
        writeln!(writer, "{}", display.input_text())?;
        writer.flush()?;
    }

    Ok(())
}
