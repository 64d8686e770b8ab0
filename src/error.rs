use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a run of the VM can fail to start or to keep running.
#[derive(Error, Debug)]
pub enum VmError {
    #[error("lc3 [image-file1] ...")]
    UsageError,

    #[error("failed to load image: {}", path.display())]
    ImageOpenError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad opcode {instruction:016b}")]
    IllegalOpcode { instruction: u16 },
}
