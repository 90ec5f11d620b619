//! Runs a BASIC (or any monitor) ROM on a console-only single-board machine.
//!
//! ```text
//! cargo run --example simple_calc -- path/to/ehbasic.bin
//! ```
//!
//! The image is copied in at 0xC000 and must carry its own vectors at
//! 0xFFFA-0xFFFF. Characters the ROM writes to 0xF001 are printed; lines
//! typed on stdin are fed to 0xF004 one key at a time.

use std::cell::RefCell;
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;

use nmos6502::devices::board::single_board;
use nmos6502::{ConsoleDevice, CPU};

/// Where the ROM image is placed.
const ROM_BASE: u16 = 0xC000;

/// Instructions executed between checks for new input.
const INSTRUCTIONS_PER_TICK: usize = 30_000;

fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args()
        .nth(1)
        .ok_or("usage: simple_calc <rom-image>")?;
    let image = fs::read(&path)?;

    let mut console = ConsoleDevice::new();
    console.set_output_callback(|byte| {
        let mut out = io::stdout().lock();
        let _ = out.write_all(&[byte]);
        let _ = out.flush();
    });
    let console = Rc::new(RefCell::new(console));

    let memory = single_board(Rc::clone(&console), ROM_BASE, &image)?;
    let mut cpu = CPU::new(memory);

    // Stdin blocks, so it gets its own thread
    let (keys_tx, keys_rx) = mpsc::channel();
    thread::spawn(move || {
        for byte in io::stdin().lock().bytes() {
            let Ok(byte) = byte else { break };
            // Terminals send LF, the ROM expects CR
            let key = if byte == b'\n' { b'\r' } else { byte };
            if keys_tx.send(key).is_err() {
                break;
            }
        }
    });

    let mut pending: Option<u8> = None;
    loop {
        // Hand over the next key once the ROM has consumed the previous one
        if console.borrow().pending_key() == 0 {
            if let Some(key) = pending.take().or_else(|| keys_rx.try_recv().ok()) {
                console.borrow_mut().send_key(key);
            }
        } else if pending.is_none() {
            pending = keys_rx.try_recv().ok();
        }

        for _ in 0..INSTRUCTIONS_PER_TICK {
            cpu.step();
        }
    }
}
