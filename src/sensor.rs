use crate::{
    address::Address,
    aggregator::CalibratedMpu6050,
    calibration::{CalibrationOffsets, CalibrationParameters},
    calibration_blocking::calibrate,
    config::SensorRange,
    error::{Error, InitError},
    registers::Register,
    sample::{decode_axis_pair, RawSample},
};
use embedded_hal::{delay::DelayNs, i2c::I2c};

/// Time the device needs after leaving sleep before it samples reliably.
const WAKE_DELAY_MS: u32 = 100;

/// InvenSense MPU-6050 register interface (blocking).
///
/// Reads raw signed values, one register pair per bus transaction. No filtering and no
/// units at this level.
pub struct Mpu6050<I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
    range: SensorRange,
}

impl<I> Mpu6050<I>
where
    I: I2c,
{
    /// Wake the sensor and program its full-scale ranges.
    pub fn new(
        i2c: I,
        address: Address,
        range: SensorRange,
        delay: &mut impl DelayNs,
    ) -> Result<Self, InitError<I>> {
        let mut sensor = Self {
            i2c,
            address: address.into(),
            range,
        };

        if let Err(error) = sensor.configure(delay) {
            Err(InitError {
                error,
                i2c: sensor.i2c,
            })
        } else {
            Ok(sensor)
        }
    }

    fn configure(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        self.write_register(Register::PwrMgmt1, 0x00)?;
        delay.delay_ms(WAKE_DELAY_MS);
        self.write_register(
            Register::AccelConfig,
            (self.range.accel as u8) << Register::FS_SEL_SHIFT,
        )?;
        self.write_register(
            Register::GyroConfig,
            (self.range.gyro as u8) << Register::FS_SEL_SHIFT,
        )?;
        debug!("mpu6050 awake at {=u8:#x}", self.address);
        Ok(())
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.i2c
    }

    /// Ranges programmed at construction.
    pub fn range(&self) -> SensorRange {
        self.range
    }

    pub(crate) fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .map_err(Error::WriteReadError)
    }

    pub(crate) fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c
            .write(self.address, bytes)
            .map_err(Error::WriteError)
    }

    pub(crate) fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I>> {
        self.write(&[reg as u8, value])
    }

    /// Read the signed 16-bit value stored big-endian at `reg` and `reg + 1`.
    pub fn read_axis_pair(&mut self, reg: Register) -> Result<i16, Error<I>> {
        let mut buf = [0; 2];
        self.read(&[reg as u8], &mut buf)?;
        Ok(decode_axis_pair(buf))
    }

    /// Read all six axes plus temperature, one register pair at a time.
    pub fn raw_sample(&mut self) -> Result<RawSample, Error<I>> {
        let mut values = [0i16; 7];
        for (value, reg) in values.iter_mut().zip(Register::SAMPLE) {
            *value = self.read_axis_pair(reg)?;
        }
        Ok(RawSample::from_values(values))
    }

    /// Measure per-axis bias of the stationary sensor.
    ///
    /// The hand must be held still and level for the whole run; nothing here can tell
    /// whether it was. Blocks for roughly `samples * delay_ms`. A failed read aborts the
    /// run and no offsets are produced.
    pub fn calibrate(
        &mut self,
        delay: &mut impl DelayNs,
        parameters: &CalibrationParameters,
    ) -> Result<CalibrationOffsets, Error<I>> {
        calibrate(self, delay, parameters)
    }

    /// Attach offsets, producing the driver that can emit scaled readings.
    pub fn into_calibrated(self, offsets: CalibrationOffsets) -> CalibratedMpu6050<I> {
        CalibratedMpu6050::new(self, offsets)
    }
}
