//! Logging shims: forward to `defmt` when the feature is on, vanish otherwise.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
    }};
}
