use crate::common::get_bit;
use crate::{mode, Error, I2cBus, Mcp23008, PinMode, PortMutex};
use core::marker::PhantomData;
use embedded_hal::digital as hal_digital;

/// An [`Mcp23008`] behind a [`PortMutex`], so its pins can be used as independent objects.
///
/// ```no_run
/// # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
/// use embedded_hal::digital::OutputPin;
///
/// let mut mcp = mcp23008::Mcp23008::new(i2c, 0x00);
/// mcp.initialize().unwrap();
///
/// let mut shared = mcp23008::SharedMcp23008::new(mcp);
/// let pins = shared.split();
/// let mut led = pins.gp0.into_output().unwrap();
/// led.set_high().unwrap();
/// ```
pub struct SharedMcp23008<M>(M);

impl<I2C> SharedMcp23008<core::cell::RefCell<Mcp23008<I2C>>>
where
    I2C: I2cBus,
{
    pub fn new(mcp: Mcp23008<I2C>) -> Self {
        Self::with_mutex(mcp)
    }
}

impl<I2C, M> SharedMcp23008<M>
where
    I2C: I2cBus,
    M: PortMutex<Port = Mcp23008<I2C>>,
{
    pub fn with_mutex(mcp: Mcp23008<I2C>) -> Self {
        Self(PortMutex::create(mcp))
    }

    /// Run `f` with exclusive access to the driver.
    pub fn lock<R, F: FnOnce(&mut Mcp23008<I2C>) -> R>(&self, f: F) -> R {
        self.0.lock(f)
    }

    /// Hand out one object per pin.
    ///
    /// All pins start out typed as inputs, which matches the state after
    /// [`Mcp23008::initialize()`].
    pub fn split(&mut self) -> Parts<'_, I2C, M> {
        Parts {
            gp0: Pin::new(0, &self.0),
            gp1: Pin::new(1, &self.0),
            gp2: Pin::new(2, &self.0),
            gp3: Pin::new(3, &self.0),
            gp4: Pin::new(4, &self.0),
            gp5: Pin::new(5, &self.0),
            gp6: Pin::new(6, &self.0),
            gp7: Pin::new(7, &self.0),
        }
    }

    pub fn into_inner(self) -> M {
        self.0
    }
}

pub struct Parts<'a, I2C, M = core::cell::RefCell<Mcp23008<I2C>>>
where
    I2C: I2cBus,
    M: PortMutex<Port = Mcp23008<I2C>>,
{
    pub gp0: Pin<'a, mode::Input, M>,
    pub gp1: Pin<'a, mode::Input, M>,
    pub gp2: Pin<'a, mode::Input, M>,
    pub gp3: Pin<'a, mode::Input, M>,
    pub gp4: Pin<'a, mode::Input, M>,
    pub gp5: Pin<'a, mode::Input, M>,
    pub gp6: Pin<'a, mode::Input, M>,
    pub gp7: Pin<'a, mode::Input, M>,
}

/// Representation of a single MCP23008 pin.
///
/// `Pin` is not constructed directly, this type is created by wrapping the driver in a
/// [`SharedMcp23008`] and then getting access to all its pins using the `.split()` method.
pub struct Pin<'a, MODE, MUTEX> {
    pin: u8,
    port: &'a MUTEX,
    _m: PhantomData<MODE>,
}

impl<'a, MODE, MUTEX, I2C> Pin<'a, MODE, MUTEX>
where
    I2C: I2cBus,
    MUTEX: PortMutex<Port = Mcp23008<I2C>>,
{
    fn new(pin: u8, port: &'a MUTEX) -> Self {
        Self {
            pin,
            port,
            _m: PhantomData,
        }
    }

    pub fn pin_number(&self) -> u8 {
        self.pin
    }

    fn into_mode<NEW>(self, mode: PinMode) -> Result<Pin<'a, NEW, MUTEX>, Error<I2C::Error>> {
        self.port.lock(|drv| drv.set_pin_mode(self.pin, mode))?;
        Ok(Pin {
            pin: self.pin,
            port: self.port,
            _m: PhantomData,
        })
    }

    pub fn into_input(self) -> Result<Pin<'a, mode::Input, MUTEX>, Error<I2C::Error>> {
        self.into_mode(PinMode::Input)
    }

    pub fn into_input_pullup(
        self,
    ) -> Result<Pin<'a, mode::InputPullUp, MUTEX>, Error<I2C::Error>> {
        self.into_mode(PinMode::InputPullUp)
    }

    pub fn into_output(self) -> Result<Pin<'a, mode::Output, MUTEX>, Error<I2C::Error>> {
        self.into_mode(PinMode::Output)
    }
}

impl<'a, MODE: mode::HasInput, MUTEX, I2C> Pin<'a, MODE, MUTEX>
where
    I2C: I2cBus,
    MUTEX: PortMutex<Port = Mcp23008<I2C>>,
{
    pub fn is_high(&self) -> Result<bool, Error<I2C::Error>> {
        self.port.lock(|drv| drv.digital_read(self.pin))
    }

    pub fn is_low(&self) -> Result<bool, Error<I2C::Error>> {
        self.is_high().map(|b| !b)
    }
}

impl<'a, MODE: mode::HasOutput, MUTEX, I2C> Pin<'a, MODE, MUTEX>
where
    I2C: I2cBus,
    MUTEX: PortMutex<Port = Mcp23008<I2C>>,
{
    pub fn set_state(&mut self, high: bool) -> Result<(), Error<I2C::Error>> {
        self.port.lock(|drv| drv.digital_write(self.pin, high))
    }

    pub fn set_high(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_state(true)
    }

    pub fn set_low(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_state(false)
    }

    /// Latched output level, from OLAT.
    pub fn is_set_high(&self) -> Result<bool, Error<I2C::Error>> {
        let pin = self.pin;
        self.port
            .lock(|drv| drv.read_output_latch())
            .map(|olat| get_bit(pin, olat))
    }

    pub fn is_set_low(&self) -> Result<bool, Error<I2C::Error>> {
        self.is_set_high().map(|b| !b)
    }

    pub fn toggle(&mut self) -> Result<(), Error<I2C::Error>> {
        let high = self.is_set_high()?;
        self.set_state(!high)
    }
}

impl<'a, MODE, MUTEX, I2C> hal_digital::ErrorType for Pin<'a, MODE, MUTEX>
where
    I2C: I2cBus,
    MUTEX: PortMutex<Port = Mcp23008<I2C>>,
{
    type Error = Error<I2C::Error>;
}

impl<'a, MODE: mode::HasInput, MUTEX, I2C> hal_digital::InputPin for Pin<'a, MODE, MUTEX>
where
    I2C: I2cBus,
    MUTEX: PortMutex<Port = Mcp23008<I2C>>,
{
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Pin::is_high(self)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Pin::is_low(self)
    }
}

impl<'a, MODE: mode::HasOutput, MUTEX, I2C> hal_digital::OutputPin for Pin<'a, MODE, MUTEX>
where
    I2C: I2cBus,
    MUTEX: PortMutex<Port = Mcp23008<I2C>>,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Pin::set_low(self)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Pin::set_high(self)
    }
}

impl<'a, MODE: mode::HasOutput, MUTEX, I2C> hal_digital::StatefulOutputPin
    for Pin<'a, MODE, MUTEX>
where
    I2C: I2cBus,
    MUTEX: PortMutex<Port = Mcp23008<I2C>>,
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Pin::is_set_high(self)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Pin::is_set_low(self)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        Pin::toggle(self)
    }
}
