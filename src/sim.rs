//! Simulated MCP23008 register file for tests that care about register contents rather than
//! the exact transaction sequence.
use crate::Register;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

pub(crate) struct SimBus {
    addr: u8,
    regs: [u8; 11],
    pointer: u8,
    stuck: Option<Register>,
    transactions: usize,
}

impl SimBus {
    pub(crate) fn new(addr: u8) -> Self {
        Self {
            addr,
            regs: [0x00; 11],
            pointer: 0,
            stuck: None,
            transactions: 0,
        }
    }

    pub(crate) fn fill(&mut self, value: u8) {
        self.regs = [value; 11];
    }

    pub(crate) fn register(&self, reg: Register) -> u8 {
        self.regs[u8::from(reg) as usize]
    }

    pub(crate) fn set_register(&mut self, reg: Register, value: u8) {
        self.regs[u8::from(reg) as usize] = value;
    }

    /// Ignore all writes to `reg` from now on.
    pub(crate) fn stick(&mut self, reg: Register) {
        self.stuck = Some(reg);
    }

    pub(crate) fn transactions(&self) -> usize {
        self.transactions
    }

    fn selected(&self) -> Result<Register, ErrorKind> {
        Register::try_from(self.pointer).map_err(|_| ErrorKind::Other)
    }
}

impl ErrorType for SimBus {
    type Error = ErrorKind;
}

impl I2c for SimBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.transactions += 1;
        if address != self.addr {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some((reg, data)) = bytes.split_first() {
                        self.pointer = *reg;
                        for value in data {
                            let reg = self.selected()?;
                            if self.stuck != Some(reg) {
                                self.set_register(reg, *value);
                                // writing GPIO modifies the output latch
                                if reg == Register::GPIO {
                                    self.set_register(Register::OLAT, *value);
                                }
                            }
                        }
                    }
                }
                Operation::Read(buf) => {
                    let value = self.register(self.selected()?);
                    buf.fill(value);
                }
            }
        }
        Ok(())
    }
}
