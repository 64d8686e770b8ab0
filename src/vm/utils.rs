/// IO related utility functions
pub mod io {
    use std::io::{self, Read};
    use std::mem;
    use std::os::unix::io::RawFd;
    use termios::{tcsetattr, Termios};
    use termios::{
        BRKINT, ECHO, ICANON, ICRNL, IGNBRK, IGNCR, INLCR, ISTRIP, IXON, PARMRK, TCSANOW,
    };

    const STDIN_FILENO: RawFd = 0;

    pub fn read_next_byte() -> u8 {
        let mut single_byte_buffer = [0];
        io::stdin()
            .read_exact(&mut single_byte_buffer)
            .expect("Error while reading next byte from stdin");
        single_byte_buffer[0]
    }

    /// Non-blocking probe for "is a byte available on stdin right now".
    ///
    /// Backs the KBSR poll: a zero-timeout `select(2)` never blocks, so a program that spins on
    /// KBSR without typed input never hangs.
    pub fn check_key() -> bool {
        unsafe {
            let mut read_fds: libc::fd_set = mem::zeroed();
            libc::FD_ZERO(&mut read_fds);
            libc::FD_SET(STDIN_FILENO, &mut read_fds);

            let mut timeout = libc::timeval {
                tv_sec: 0,
                tv_usec: 0,
            };

            let ready = libc::select(
                STDIN_FILENO + 1,
                &mut read_fds,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                &mut timeout,
            );

            ready > 0 && libc::FD_ISSET(STDIN_FILENO, &read_fds)
        }
    }

    pub fn disable_input_buffering() -> termios::Termios {
        let original_termios = Termios::from_fd(0).unwrap();

        let mut new_termios = original_termios.clone();
        new_termios.c_iflag &= IGNBRK | BRKINT | PARMRK | ISTRIP | INLCR | IGNCR | ICRNL | IXON;
        new_termios.c_lflag &= !(ICANON | ECHO);
        tcsetattr(0, TCSANOW, &mut new_termios).unwrap();

        original_termios
    }

    pub fn restore_input_buffering(original_termios: termios::Termios) {
        tcsetattr(0, TCSANOW, &original_termios).unwrap();
    }
}

/// Bit operation utility functions
pub mod bit_ops {
    /// Sign extends `bit_count` bits of the given `value` to 16 bits
    pub fn sign_extend(value: u16, bit_count: usize) -> u16 {
        match (value >> (bit_count - 1)) & 0x1 {
            0x1 => value | (0xFFFF << bit_count),
            0x0 => value,
            _ => unreachable!(),
        }
    }
}
