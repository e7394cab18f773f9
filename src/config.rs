/// Which address the data phase of a register read is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadTarget {
    /// Read from the device address, like every other transaction.
    #[default]
    Device,
    /// Read from an address equal to the register number.
    ///
    /// Some older Arduino-style MCP23008 code requests the byte from the register number
    /// instead of the device.  This only talks to the expander when the bus ignores the
    /// address of the read, so it exists to reproduce that behaviour against simulated buses.
    Register,
}

/// What `Mcp23008::set_pullup_pin()` writes back to GPPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullupWriteBack {
    /// The current GPPU value with only the requested pin changed.
    #[default]
    Merged,
    /// The requested state itself (`0x00` or `0x01`), discarding all other pull-ups.
    ///
    /// Matches the single-pin pull-up setter of the widely copied Arduino driver.
    Requested,
}

/// Driver configuration.
///
/// ```
/// let config = mcp23008::Config::default()
///     .verify_writes(false)
///     .read_target(mcp23008::ReadTarget::Device);
/// assert!(!config.verifies_writes());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) verify_writes: bool,
    pub(crate) read_target: ReadTarget,
    pub(crate) pullup_write_back: PullupWriteBack,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verify_writes: true,
            read_target: ReadTarget::Device,
            pullup_write_back: PullupWriteBack::Merged,
        }
    }
}

impl Config {
    /// Re-read every register after writing it and compare.
    pub fn verify_writes(mut self, verify: bool) -> Self {
        self.verify_writes = verify;
        self
    }

    pub fn read_target(mut self, target: ReadTarget) -> Self {
        self.read_target = target;
        self
    }

    pub fn pullup_write_back(mut self, write_back: PullupWriteBack) -> Self {
        self.pullup_write_back = write_back;
        self
    }

    pub fn verifies_writes(&self) -> bool {
        self.verify_writes
    }
}
