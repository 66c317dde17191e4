//! Logging shims that forward to `defmt` when the feature is enabled.
//!
//! Without the feature every macro expands to a no-op that still borrows its
//! arguments, so call sites do not produce unused-variable warnings.
//! `warning!` is not called `warn!` because that name clashes with the
//! built-in `#[warn]` attribute.
#![allow(unused_macros, unused_imports)]

macro_rules! trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($(&$arg,)*);
    }};
}

macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($(&$arg,)*);
    }};
}

macro_rules! warning {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($(&$arg,)*);
    }};
}

pub(crate) use debug;
pub(crate) use trace;
pub(crate) use warning;

#[cfg(test)]
mod tests {
    #![deny(unused_parens, unused_variables)]

    use super::{debug, trace, warning};

    #[test]
    fn macros_accept_any_argument_count() {
        let mode = 3u8;
        let offset = -1.5f32;

        trace!("max31856: no arguments");
        debug!("max31856: one argument {}", mode);
        warning!("max31856: two arguments {} {}", mode, offset);
        trace!("max31856: trailing comma {}", mode,);
    }
}
