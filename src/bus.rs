use embedded_hal::i2c as hal_i2c;

/// Blanket trait for types implementing `i2c::I2c` with 7-bit addressing
pub trait I2cBus: hal_i2c::I2c<hal_i2c::SevenBitAddress> {}

impl<T> I2cBus for T where T: hal_i2c::I2c<hal_i2c::SevenBitAddress> {}

pub(crate) trait I2cExt {
    type Error;

    fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error>;

    /// Select `reg` on the device at `addr`, then fetch one byte from `read_addr`.
    ///
    /// This is two separate bus transactions, not a repeated-start `write_read()`.
    fn read_reg<R: Into<u8>>(
        &mut self,
        addr: u8,
        reg: R,
        read_addr: u8,
    ) -> Result<u8, Self::Error>;
}

impl<I2C: I2cBus> I2cExt for I2C {
    type Error = I2C::Error;

    fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error> {
        self.write(addr, &[reg.into(), value])?;
        Ok(())
    }

    fn read_reg<R: Into<u8>>(
        &mut self,
        addr: u8,
        reg: R,
        read_addr: u8,
    ) -> Result<u8, Self::Error> {
        let mut buf = [0x00];
        self.write(addr, &[reg.into()])?;
        self.read(read_addr, &mut buf)?;
        Ok(buf[0])
    }
}
