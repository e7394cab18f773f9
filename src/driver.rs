//! Register-level driver for the `MCP23008` "8-Bit I/O Expander with Serial Interface"
//!
//! Datasheet: https://ww1.microchip.com/downloads/en/DeviceDoc/MCP23008-MCP23S08-Data-Sheet-20001919F.pdf
//!
//! Every write can optionally be followed by a read of the same register to check that the
//! value arrived.  This is the only way the driver notices a device that is absent or
//! misbehaving on a bus which does not report NAKs.
use crate::common::{apply_bit, get_bit, PIN_COUNT};
use crate::{Config, Error, I2cBus, I2cExt, PinMode, PullupWriteBack, ReadTarget, Register};

/// Fixed upper bits of the 7-bit bus address.  The low three bits come from the A0..A2 pins.
pub const BASE_ADDRESS: u8 = 0x20;

/// `MCP23008` "8-Bit I/O Expander with Serial Interface"
pub struct Mcp23008<I2C> {
    i2c: I2C,
    addr: u8,
    config: Config,
}

impl<I2C> Mcp23008<I2C> {
    /// Create a driver for the device strapped to `addr` (usually `0..=7`, OR'ed onto
    /// [`BASE_ADDRESS`]) with write verification enabled.
    ///
    /// This does not touch the bus; call [`initialize()`](Self::initialize) before use.
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self::with_config(i2c, addr, Config::default())
    }

    pub fn with_config(i2c: I2C, addr: u8, config: Config) -> Self {
        Self {
            i2c,
            addr: addr | BASE_ADDRESS,
            config,
        }
    }

    /// Effective 7-bit bus address.
    pub fn address(&self) -> u8 {
        self.addr
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn verify_writes(&self) -> bool {
        self.config.verify_writes
    }

    pub fn set_verify_writes(&mut self, verify: bool) {
        self.config.verify_writes = verify;
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

fn check_pin<E>(pin: u8) -> Result<(), Error<E>> {
    if pin < PIN_COUNT {
        Ok(())
    } else {
        Err(Error::InvalidPin(pin))
    }
}

impl<I2C: I2cBus> Mcp23008<I2C> {
    /// Put every configuration register into its documented default state.
    ///
    /// Afterwards all pins are inputs without pull-ups, polarity is normal and interrupts are
    /// disabled.  Writes are always verified here regardless of the configured setting, so an
    /// `Ok(())` means the device answered.  All eight registers are written even if one of them
    /// fails; the first error is returned.
    pub fn initialize(&mut self) -> Result<(), Error<I2C::Error>> {
        let old_verify = self.config.verify_writes;
        self.config.verify_writes = true;

        let mut res = Ok(());
        for (reg, value) in Register::DEFAULTS {
            let r = self.write_byte_verified(reg, value);
            res = res.and(r);
        }

        self.config.verify_writes = old_verify;

        #[cfg(feature = "defmt")]
        match &res {
            Ok(()) => defmt::debug!("MCP23008 at {=u8:#x} initialized", self.addr),
            Err(_) => defmt::warn!("MCP23008 at {=u8:#x} failed to initialize", self.addr),
        }

        res
    }

    pub fn set_pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Error<I2C::Error>> {
        self.write_pin_mode(pin, Some(mode))
    }

    /// Like [`set_pin_mode()`](Self::set_pin_mode) but with the numeric mode (0 = output,
    /// 1 = input, 2 = input with pull-up).
    ///
    /// Unknown values still read and rewrite IODIR and GPPU, without changing them.
    pub fn set_pin_mode_raw(&mut self, pin: u8, mode: u8) -> Result<(), Error<I2C::Error>> {
        self.write_pin_mode(pin, PinMode::try_from(mode).ok())
    }

    fn write_pin_mode(
        &mut self,
        pin: u8,
        mode: Option<PinMode>,
    ) -> Result<(), Error<I2C::Error>> {
        check_pin(pin)?;

        let iodir = self.read_byte(Register::IODIR)?;
        let pullup = self.read_byte(Register::GPPU)?;

        let (iodir, pullup) = match mode {
            Some(PinMode::InputPullUp) => {
                (apply_bit(pin, true, iodir), apply_bit(pin, true, pullup))
            }
            Some(PinMode::Input) => (apply_bit(pin, true, iodir), apply_bit(pin, false, pullup)),
            Some(PinMode::Output) => {
                (apply_bit(pin, false, iodir), apply_bit(pin, false, pullup))
            }
            None => (iodir, pullup),
        };

        let res = self.write_byte_verified(Register::IODIR, iodir);
        res.and(self.write_byte_verified(Register::GPPU, pullup))
    }

    /// Current mode of `pin`, derived from IODIR and GPPU.
    pub fn get_pin_mode(&mut self, pin: u8) -> Result<PinMode, Error<I2C::Error>> {
        check_pin(pin)?;

        let iodir = self.read_byte(Register::IODIR)?;
        if !get_bit(pin, iodir) {
            return Ok(PinMode::Output);
        }
        let pullup = self.read_byte(Register::GPPU)?;
        if get_bit(pin, pullup) {
            Ok(PinMode::InputPullUp)
        } else {
            Ok(PinMode::Input)
        }
    }

    /// Write `mask` to IODIR (1 = input).  If `pullup` is set, the same `mask` is also written
    /// to GPPU, so every input gets its pull-up and every output loses it.
    pub fn set_io_direction(&mut self, mask: u8, pullup: bool) -> Result<(), Error<I2C::Error>> {
        let res = self.write_byte_verified(Register::IODIR, mask);
        if pullup {
            res.and(self.write_byte_verified(Register::GPPU, mask))
        } else {
            res
        }
    }

    pub fn set_pullup_mask(&mut self, mask: u8) -> Result<(), Error<I2C::Error>> {
        self.write_byte_verified(Register::GPPU, mask)
    }

    /// Enable or disable the pull-up of a single pin.
    ///
    /// With [`PullupWriteBack::Requested`] configured, GPPU is overwritten with `enabled` as a
    /// byte instead of the updated register value.
    pub fn set_pullup_pin(&mut self, pin: u8, enabled: bool) -> Result<(), Error<I2C::Error>> {
        check_pin(pin)?;

        let pullup = self.read_byte(Register::GPPU)?;
        let value = match self.config.pullup_write_back {
            PullupWriteBack::Merged => apply_bit(pin, enabled, pullup),
            PullupWriteBack::Requested => enabled as u8,
        };

        self.write_byte_verified(Register::GPPU, value)
    }

    pub fn get_pullup_mask(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_byte(Register::GPPU)
    }

    pub fn get_pullup_pin(&mut self, pin: u8) -> Result<bool, Error<I2C::Error>> {
        check_pin(pin)?;
        Ok(get_bit(pin, self.read_byte(Register::GPPU)?))
    }

    pub fn set_polarity_mask(&mut self, mask: u8) -> Result<(), Error<I2C::Error>> {
        self.write_byte_verified(Register::IPOL, mask)
    }

    /// Logic level of all eight pins.
    pub fn read_gpio(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_byte(Register::GPIO)
    }

    pub fn write_gpio(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_byte_verified(Register::GPIO, value)
    }

    /// Levels the output latches are driving, independent of what the pins read back.
    pub fn read_output_latch(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_byte(Register::OLAT)
    }

    /// Read-modify-write a single bit of the GPIO register.
    pub fn digital_write(&mut self, pin: u8, high: bool) -> Result<(), Error<I2C::Error>> {
        check_pin(pin)?;

        let gpio = self.read_byte(Register::GPIO)?;
        self.write_byte_verified(Register::GPIO, apply_bit(pin, high, gpio))
    }

    pub fn digital_read(&mut self, pin: u8) -> Result<bool, Error<I2C::Error>> {
        check_pin(pin)?;
        Ok(get_bit(pin, self.read_byte(Register::GPIO)?))
    }

    /// Raw read of any register.
    pub fn read_register(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        self.read_byte(reg)
    }

    /// Write any register, verified if the driver is configured to do so.
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_byte_verified(reg, value)
    }

    fn read_byte(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        let read_addr = match self.config.read_target {
            ReadTarget::Device => self.addr,
            ReadTarget::Register => reg.into(),
        };
        Ok(self.i2c.read_reg(self.addr, reg, read_addr)?)
    }

    fn write_byte(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        Ok(self.i2c.write_reg(self.addr, reg, value)?)
    }

    fn write_byte_verified(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_byte(reg, value)?;

        if !self.config.verify_writes {
            return Ok(());
        }

        let actual = self.read_byte(reg)?;
        if actual == value {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "MCP23008 at {=u8:#x}: {} wrote {=u8:#x}, read back {=u8:#x}",
                self.addr,
                reg,
                value,
                actual
            );
            Err(Error::VerifyMismatch {
                register: reg,
                expected: value,
                actual,
            })
        }
    }
}
