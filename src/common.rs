/// Number of I/O lines on the MCP23008.
pub const PIN_COUNT: u8 = 8;

/// Configuration of a single pin, as stored across the IODIR and GPPU registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PinMode {
    Output = 0,
    Input = 1,
    /// Input with the weak internal pull-up enabled.
    InputPullUp = 2,
}

impl TryFrom<u8> for PinMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PinMode::Output),
            1 => Ok(PinMode::Input),
            2 => Ok(PinMode::InputPullUp),
            v => Err(v),
        }
    }
}

impl From<PinMode> for u8 {
    fn from(m: PinMode) -> u8 {
        m as u8
    }
}

/// Single-bit mask for `bit`, empty for `bit >= 8`.
const fn bit_mask(bit: u8) -> u8 {
    match 1u8.checked_shl(bit as u32) {
        Some(mask) => mask,
        None => 0,
    }
}

/// Return `byte` with bit `bit` set (if `set`) or cleared.
///
/// Bit indices of 8 and above leave `byte` unchanged.
pub(crate) const fn apply_bit(bit: u8, set: bool, byte: u8) -> u8 {
    if set {
        byte | bit_mask(bit)
    } else {
        byte & !bit_mask(bit)
    }
}

/// Extract bit `bit` of `byte`.  Always `false` for `bit >= 8`.
pub(crate) const fn get_bit(bit: u8, byte: u8) -> bool {
    byte & bit_mask(bit) != 0
}

/// Pin Modes
pub mod mode {
    /// Trait for pin-modes which can be used to set a logic level.
    pub trait HasOutput {}
    /// Trait for pin-modes which can be used to read a logic level.
    pub trait HasInput {}

    /// Pin configured as an input.
    pub struct Input;
    impl HasInput for Input {}

    /// Pin configured as an input with the internal pull-up enabled.
    pub struct InputPullUp;
    impl HasInput for InputPullUp {}

    /// Pin configured as an output.
    pub struct Output;
    impl HasOutput for Output {}
}
