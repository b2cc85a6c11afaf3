// mock-gemini-translate - drop-in stand-in for gemini-translate in tests
// Author: kelexine (https://github.com/kelexine)
//
// Positional arguments are accepted and ignored.

use anyhow::Result;
use gemini_image_translate::mock::mocked_output_from_env;
use gemini_image_translate::output::write_line;

fn main() -> Result<()> {
    let line = mocked_output_from_env();
    write_line(std::io::stdout().lock(), &line)?;
    Ok(())
}
