mod instructions;
mod memory;
mod opcode;
mod registers;
mod utils;

use memory::Memory;
use opcode::Opcode;
use registers::Registers;

use crate::error::VmError;

use byteorder::{BigEndian, ReadBytesExt};
use std::convert::TryFrom;
use std::io::{self, Read};
use std::process;

/// A single LC-3 machine: memory, registers, and the run/halt sentinel.
///
/// Nothing here is global; a caller is free to build more than one `Vm`.
pub struct Vm {
    regs: Registers,
    mem: Memory,
    running: bool,
}

impl Vm {
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            mem: Memory::new(),
            running: false,
        }
    }

    /// Loads a big-endian object image: the first word is the origin address, the rest is
    /// placed contiguously starting there. Loading a second image after a first one overwrites
    /// whatever memory the two images have in common.
    pub fn load_program<R: Read>(&mut self, mut reader: R) -> io::Result<()> {
        let origin = reader.read_u16::<BigEndian>()?;
        for address in origin..=u16::MAX {
            match reader.read_u16::<BigEndian>() {
                Ok(instr) => self.mem.write(address, instr),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Runs until HALT, an illegal opcode, or SIGINT. Terminal raw mode is always restored
    /// before this returns, and the SIGINT handler restores it too before exiting the process.
    pub fn run(&mut self) -> Result<(), VmError> {
        let original_termios = utils::io::disable_input_buffering();

        let termios_for_handler = original_termios.clone();
        ctrlc::set_handler(move || {
            utils::io::restore_input_buffering(termios_for_handler.clone());
            process::exit(-2);
        })
        .expect("Error setting Ctrl-C handler");

        self.running = true;
        let result = self.main_loop();

        utils::io::restore_input_buffering(original_termios);

        result
    }

    pub fn abort(&mut self) {
        self.running = false;
    }

    fn main_loop(&mut self) -> Result<(), VmError> {
        while self.running {
            let instr = self.mem.read(self.regs.pc);
            self.regs.pc = self.regs.pc.wrapping_add(1);
            let (regs, mem) = (&mut self.regs, &mut self.mem);
            let opcode = Opcode::try_from(instr >> 12).unwrap();
            match opcode {
                Opcode::Br => instructions::br(instr, regs),
                Opcode::Add => instructions::add(instr, regs),
                Opcode::Ld => instructions::ld(instr, regs, mem),
                Opcode::St => instructions::st(instr, regs, mem),
                Opcode::Jsr => instructions::jsr(instr, regs),
                Opcode::And => instructions::and(instr, regs),
                Opcode::Ldr => instructions::ldr(instr, regs, mem),
                Opcode::Str => instructions::str(instr, regs, mem),
                Opcode::Rti | Opcode::Res => {
                    return Err(VmError::IllegalOpcode { instruction: instr })
                }
                Opcode::Not => instructions::not(instr, regs),
                Opcode::Ldi => instructions::ldi(instr, regs, mem),
                Opcode::Sti => instructions::sti(instr, regs, mem),
                Opcode::Jmp => instructions::jmp(instr, regs),
                Opcode::Lea => instructions::lea(instr, regs),
                Opcode::Trap => {
                    let should_halt = instructions::trap(instr, regs, mem);
                    if should_halt {
                        self.running = false;
                    }
                }
            };
        }
        Ok(())
    }
}
