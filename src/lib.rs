//! Hand gesture to direction commands with an InvenSense MPU-6050.
//!
//! The pipeline, leaf first:
//! raw register pairs ([`sample`]) → calibration offsets ([`calibration`]) → averaged,
//! scaled readings ([`reading`]) → low-pass smoothing ([`smoothing`]) → complementary
//! filter orientation ([`orientation`]) → debounced direction label ([`direction`]).
//!
//! Bus access comes in a blocking flavour (`embedded-hal`) and an async one
//! (`embedded-hal-async`); the numerical stages are shared.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod accel;
pub mod address;
pub mod aggregator;
pub mod aggregator_async;
pub mod calibration;
pub mod calibration_async;
pub mod calibration_blocking;
pub mod config;
pub mod direction;
pub mod error;
pub mod error_async;
pub mod gyro;
pub mod orientation;
pub mod reading;
pub mod registers;
pub mod sample;
pub mod sensor;
pub mod sensor_async;
pub mod smoothing;
pub mod temperature;
pub mod tracker;
pub mod tracker_async;
pub mod tracker_blocking;
pub mod vector;

#[cfg(test)]
mod mock;
