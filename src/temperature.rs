//! Fahrenheit-backed thermostat with a read/write Celsius view.

use std::fmt;

/// A temperature stored in Fahrenheit.
///
/// The Celsius value is never stored: [`Thermostat::celsius`] derives it on
/// every read and [`Thermostat::set_celsius`] writes back through the inverse
/// formula, so both views always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermostat {
    fahrenheit: f64,
}

impl Thermostat {
    /// Create a thermostat from a Fahrenheit reading
    pub fn new(fahrenheit: f64) -> Self {
        Self { fahrenheit }
    }

    /// Create a thermostat from a Celsius reading
    pub fn from_celsius(celsius: f64) -> Self {
        let mut thermostat = Self::default();
        thermostat.set_celsius(celsius);
        thermostat
    }

    pub fn fahrenheit(&self) -> f64 {
        self.fahrenheit
    }

    /// Current temperature in Celsius: `5/9 * (F - 32)`
    pub fn celsius(&self) -> f64 {
        5.0 / 9.0 * (self.fahrenheit - 32.0)
    }

    /// Set the temperature in Celsius, stored as `C * 9/5 + 32` Fahrenheit
    pub fn set_celsius(&mut self, celsius: f64) {
        self.fahrenheit = celsius * 9.0 / 5.0 + 32.0;
    }
}

impl Default for Thermostat {
    /// Freezing point of water (32 °F / 0 °C)
    fn default() -> Self {
        Self::new(32.0)
    }
}

impl fmt::Display for Thermostat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} °F ({:.2} °C)", self.fahrenheit, self.celsius())
    }
}
