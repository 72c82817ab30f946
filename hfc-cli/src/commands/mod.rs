//! Command implementations for the hfc CLI.

pub mod compress;
pub mod decompress;
pub mod info;
pub mod test;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use info::cmd_info;
pub use test::cmd_test;

use crate::utils::{confirm_overwrite, copy_mtime};
use std::fs;
use std::path::Path;

/// Output handling shared by `compress` and `decompress`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Overwrite without asking.
    pub force: bool,
    /// Copy the input's modification time to the output.
    pub preserve_mtime: bool,
    /// Show a spinner while the codec runs.
    pub progress: bool,
}

/// Write `data` to `output`, honouring the overwrite and mtime options.
fn write_output(
    input: &Path,
    output: &Path,
    data: &[u8],
    options: WriteOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if !confirm_overwrite(output, options.force) {
        return Err(format!(
            "{} exists (use --force to overwrite)",
            output.display()
        )
        .into());
    }

    fs::write(output, data)?;
    if options.preserve_mtime {
        copy_mtime(input, output)?;
    }
    Ok(())
}
