/// Register map of the MCP23008.
///
/// All registers are a single byte wide.  The reset value is 0x00 for every register except
/// IODIR, which resets to 0xFF (all pins inputs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// IODIR: input/output direction: 0=output; 1=input
    IODIR = 0x00,
    /// IPOL: input polarity: 0=register values match input pins; 1=opposite
    IPOL = 0x01,
    /// GPINTEN: interrupt-on-change: 0=disable; 1=enable
    GPINTEN = 0x02,
    /// DEFVAL: default values for interrupt-on-change
    DEFVAL = 0x03,
    /// INTCON: interrupt-on-change config: 0=compare to previous pin value;
    ///   1=compare to corresponding bit in DEFVAL
    INTCON = 0x04,
    /// IOCON: configuration register
    /// - Pin 5: SEQOP: controls the incrementing function of the address pointer
    /// - Pin 4: DISSLW: disables slew rate control on SDA
    /// - Pin 3: HAEN: no effect on MCP23008
    /// - Pin 2: ODR: interrupt pin is 0=active-driver output or 1=open-drain output
    /// - Pin 1: INTPOL: interrupt pin is 0=active-low or 1=active-high
    IOCON = 0x05,
    /// GPPU: GPIO pull-ups: enables weak internal pull-ups on each pin (when configured
    ///   as an input)
    GPPU = 0x06,
    /// INTF: interrupt flags: 0=no interrupt pending; 1=corresponding pin caused interrupt
    INTF = 0x07,
    /// INTCAP: interrupt captured value: reflects value of each pin at the time that they
    ///   caused an interrupt
    INTCAP = 0x08,
    /// GPIO: reflects logic level on pins
    GPIO = 0x09,
    /// OLAT: output latches: sets state for pins configured as outputs
    OLAT = 0x0a,
}

impl Register {
    /// Every register, in address order.
    pub const ALL: [Register; 11] = [
        Register::IODIR,
        Register::IPOL,
        Register::GPINTEN,
        Register::DEFVAL,
        Register::INTCON,
        Register::IOCON,
        Register::GPPU,
        Register::INTF,
        Register::INTCAP,
        Register::GPIO,
        Register::OLAT,
    ];

    /// Register contents written by `Mcp23008::initialize()`, in write order.
    pub(crate) const DEFAULTS: [(Register, u8); 8] = [
        (Register::IODIR, 0xff),
        (Register::IPOL, 0x00),
        (Register::GPINTEN, 0x00),
        (Register::DEFVAL, 0x00),
        (Register::INTCON, 0x00),
        (Register::IOCON, 0x00),
        (Register::GPPU, 0x00),
        (Register::GPIO, 0x00),
    ];
}

impl From<Register> for u8 {
    fn from(r: Register) -> u8 {
        r as u8
    }
}

impl TryFrom<u8> for Register {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Register::ALL
            .iter()
            .copied()
            .find(|r| u8::from(*r) == value)
            .ok_or(value)
    }
}
