use lc3_vm::{Vm, VmError};

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::process;

fn main() {
    let image_paths: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = run(image_paths) {
        println!("{}", e);
        process::exit(exit_code(&e));
    }
}

/// Loads each image into the same machine, in order — later images overwrite whatever memory
/// they share with earlier ones — then runs until HALT, an illegal opcode, or SIGINT.
fn run(image_paths: Vec<String>) -> Result<(), VmError> {
    if image_paths.is_empty() {
        return Err(VmError::UsageError);
    }

    let mut vm = Vm::new();

    for path in image_paths {
        let path = PathBuf::from(path);
        File::open(&path)
            .and_then(|file| vm.load_program(file))
            .map_err(|source| VmError::ImageOpenError { path, source })?;
    }

    vm.run()
}

fn exit_code(err: &VmError) -> i32 {
    match err {
        VmError::UsageError => 2,
        VmError::ImageOpenError { .. } => 1,
        VmError::IllegalOpcode { .. } => 1,
    }
}
