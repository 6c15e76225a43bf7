//! Lightweight unit-tagged quantities.
//!
//! [`Quantity`] wraps a raw value with a zero-sized unit marker so that volts cannot be
//! passed where volts per meter are expected. The raw formulas in [`crate::fields`] stay
//! on plain `f64`; the typed layer converts at its boundary.

use std::fmt;
use std::marker::PhantomData;

/// Marker trait for unit tags.
pub trait Unit {
    /// Symbol printed after the value.
    const SYMBOL: &'static str;
}

macro_rules! unit_marker {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
        pub struct $name;

        impl Unit for $name {
            const SYMBOL: &'static str = $symbol;
        }
    };
}

unit_marker!(
    /// Meter (m).
    Meter,
    "m"
);
unit_marker!(
    /// Volt (V).
    Volt,
    "V"
);
unit_marker!(
    /// Volt per meter (V/m).
    VoltPerMeter,
    "V/m"
);
unit_marker!(
    /// Coulomb per meter (C/m), linear charge density.
    CoulombPerMeter,
    "C/m"
);

/// A value tagged with a unit marker.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Quantity<T, U> {
    value: T,
    unit: PhantomData<U>,
}

impl<T, U> Quantity<T, U> {
    /// Wraps `value` in the unit `U`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }
}

impl<T: Copy, U> Quantity<T, U> {
    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<T: fmt::Display, U: Unit> fmt::Display for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.value, U::SYMBOL),
            None => write!(f, "{} {}", self.value, U::SYMBOL),
        }
    }
}

/// Length in meters.
pub type Length<T> = Quantity<T, Meter>;
/// Electric potential in volts.
pub type Voltage<T> = Quantity<T, Volt>;
/// Electric field strength in volts per meter.
pub type FieldStrength<T> = Quantity<T, VoltPerMeter>;
/// Linear charge density in coulombs per meter.
pub type LineChargeDensity<T> = Quantity<T, CoulombPerMeter>;
