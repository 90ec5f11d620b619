//! WASM API for the 6502 core.
//!
//! Wraps a CPU on the single-board layout (RAM plus console) for a browser
//! terminal: the page feeds keys in and receives printed characters through
//! a callback.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::devices::board::single_board;
use crate::{ConsoleDevice, MappedMemory, MemoryBus, CPU};

/// Program start used until a ROM is loaded.
const DEFAULT_START: u16 = 0x0600;

/// Error surfaced to JavaScript as a thrown object with a `message`.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// A console machine driven from JavaScript.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<MappedMemory>,
    console: Rc<RefCell<ConsoleDevice>>,
    on_output: js_sys::Function,
}

/// Vectors only: NMI, reset and IRQ all point at `DEFAULT_START`.
fn default_image() -> [u8; 6] {
    let [lo, hi] = DEFAULT_START.to_le_bytes();
    [lo, hi, lo, hi, lo, hi]
}

fn console_with_output(on_output: &js_sys::Function) -> Rc<RefCell<ConsoleDevice>> {
    let callback = on_output.clone();
    let mut console = ConsoleDevice::new();
    console.set_output_callback(move |byte| {
        let text = char::from(byte).to_string();
        let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&text));
    });
    Rc::new(RefCell::new(console))
}

fn build(
    on_output: &js_sys::Function,
    base: u16,
    image: &[u8],
) -> Result<(CPU<MappedMemory>, Rc<RefCell<ConsoleDevice>>), JsError> {
    let console = console_with_output(on_output);
    let memory = single_board(Rc::clone(&console), base, image)
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok((CPU::new(memory), console))
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator whose console prints through `on_output`.
    ///
    /// Memory is empty RAM with every vector pointing at 0x0600; use
    /// `load_program` or `load_rom` to give it something to run.
    #[wasm_bindgen(constructor)]
    pub fn new(on_output: js_sys::Function) -> Result<Emulator6502, JsError> {
        let (cpu, console) = build(&on_output, 0xFFFA, &default_image())?;
        Ok(Emulator6502 {
            cpu,
            console,
            on_output,
        })
    }

    /// Replace memory with `image` copied in at `base`, then reset.
    ///
    /// The image should carry its own vectors at 0xFFFA-0xFFFF.
    pub fn load_rom(&mut self, image: &[u8], base: u16) -> Result<(), JsError> {
        let (cpu, console) = build(&self.on_output, base, image)?;
        self.cpu = cpu;
        self.console = console;
        Ok(())
    }

    /// Copy `program` into memory at `start_addr` and point PC at it.
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        for (i, &byte) in program.iter().enumerate() {
            let addr = start_addr.wrapping_add(i as u16);
            self.cpu.memory_mut().write(addr, byte);
        }
        self.cpu.set_pc(start_addr);
    }

    /// Reset the CPU. Memory keeps its contents.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute a single instruction, returning the cycles it took
    pub fn step(&mut self) -> u32 {
        self.cpu.step()
    }

    /// Execute at least `cycles` cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.cpu.run_for_cycles(cycles as u64) as u32
    }

    /// Run `count` instructions
    pub fn run_instructions(&mut self, count: u32) {
        for _ in 0..count {
            self.cpu.step();
        }
    }

    pub fn trigger_irq(&mut self) -> u32 {
        self.cpu.trigger_irq()
    }

    pub fn trigger_nmi(&mut self) -> u32 {
        self.cpu.trigger_nmi()
    }

    /// Latch a key into the console input register
    pub fn send_key(&mut self, key: u8) {
        self.console.borrow_mut().send_key(key);
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn last_opcode(&self) -> u8 {
        self.cpu.last_opcode()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    // Memory access methods

    /// Read a single byte from memory without side effects.
    ///
    /// A pending console key stays pending.
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().peek(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// The 256 bytes of `page`, for memory viewers.
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        self.cpu.memory().peek_page(page)
    }
}
