//! Register-file I2C mock for tests.
//!
//! Behaves like an MPU-6050 register bank: a write sets the register pointer and stores
//! any following bytes, a read returns consecutive registers from the pointer. Every
//! transaction is logged, and a failure can be injected after a given number of
//! transactions.

use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
use std::vec::Vec;

use crate::{registers::Register, sample::encode_axis_pair};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    Write { addr: u8, data: Vec<u8> },
    Read { addr: u8, reg: u8, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl embedded_hal::i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Debug)]
pub struct MockI2c {
    registers: [u8; 128],
    pointer: u8,
    transactions: Vec<I2cTransaction>,
    fail_after: Option<usize>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self {
            registers: [0; 128],
            pointer: 0,
            transactions: Vec::new(),
            fail_after: None,
        }
    }

    /// Sensor at rest, level, chip up: +1 g on Z at the ±2 g range.
    pub fn at_rest() -> Self {
        let mut mock = Self::new();
        mock.set_sample([0, 0, 16384, 0, 0, 0, 0]);
        mock
    }

    pub fn set_value(&mut self, reg: Register, value: i16) {
        let at = reg as usize;
        self.registers[at..at + 2].copy_from_slice(&encode_axis_pair(value));
    }

    /// Sets all seven measurement registers, in accel, gyro, temperature order.
    pub fn set_sample(&mut self, values: [i16; 7]) {
        for (reg, value) in Register::SAMPLE.iter().zip(values) {
            self.set_value(*reg, value);
        }
    }

    pub fn register(&self, reg: Register) -> u8 {
        self.registers[reg as usize]
    }

    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }

    /// Makes every transaction after the first `count` fail.
    pub fn fail_after(&mut self, count: usize) {
        self.fail_after = Some(count);
    }

    fn execute(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), MockError> {
        if let Some(limit) = self.fail_after {
            if self.transactions.len() >= limit {
                return Err(MockError);
            }
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some((&reg, data)) = bytes.split_first() {
                        self.pointer = reg;
                        for (i, b) in data.iter().enumerate() {
                            self.registers[reg as usize + i] = *b;
                        }
                        if !data.is_empty() {
                            self.transactions.push(I2cTransaction::Write {
                                addr: address,
                                data: bytes.to_vec(),
                            });
                        }
                    }
                }
                Operation::Read(buf) => {
                    let start = self.pointer as usize;
                    buf.copy_from_slice(&self.registers[start..start + buf.len()]);
                    self.transactions.push(I2cTransaction::Read {
                        addr: address,
                        reg: self.pointer,
                        len: buf.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl ErrorType for MockI2c {
    type Error = MockError;
}

impl embedded_hal::i2c::I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.execute(address, operations)
    }
}

impl embedded_hal_async::i2c::I2c for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.execute(address, operations)
    }
}

/// Delay that only records how long it was asked to wait.
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

/// Clock advancing by a fixed step on every read.
#[derive(Debug)]
pub struct StepClock {
    pub now: u64,
    pub step: u64,
}

impl crate::tracker::Clock for StepClock {
    fn now_ms(&mut self) -> u64 {
        let now = self.now;
        self.now += self.step;
        now
    }
}

#[test]
fn write_read_returns_consecutive_registers() {
    use embedded_hal::i2c::I2c;

    let mut i2c = MockI2c::new();
    i2c.set_value(Register::AccelX_H, -2);
    let mut buf = [0u8; 2];
    i2c.write_read(0x68, &[Register::AccelX_H as u8], &mut buf)
        .unwrap();
    assert_eq!(buf, [0xFF, 0xFE]);
    assert_eq!(
        i2c.transactions(),
        &[I2cTransaction::Read {
            addr: 0x68,
            reg: 0x3B,
            len: 2
        }]
    );
}
