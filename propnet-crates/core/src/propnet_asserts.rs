//! Leveled assertions for the engine.
//!
//! Cheap checks run at [`PROPNET_ASSERT_SIMPLE`]; checks which re-evaluate the network run at
//! [`PROPNET_ASSERT_EXTREME`] and are only enabled with the `debug-checks` feature.

#[cfg(not(feature = "debug-checks"))]
pub const PROPNET_ASSERT_LEVEL_DEFINITION: u8 = PROPNET_ASSERT_SIMPLE;

#[cfg(feature = "debug-checks")]
pub const PROPNET_ASSERT_LEVEL_DEFINITION: u8 = PROPNET_ASSERT_EXTREME;

pub const PROPNET_ASSERT_SIMPLE: u8 = 1;
pub const PROPNET_ASSERT_MODERATE: u8 = 2;
pub const PROPNET_ASSERT_EXTREME: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! propnet_assert_simple {
    ($($arg:tt)*) => {
        if $crate::propnet_asserts::PROPNET_ASSERT_LEVEL_DEFINITION >= $crate::propnet_asserts::PROPNET_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! propnet_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::propnet_asserts::PROPNET_ASSERT_LEVEL_DEFINITION >= $crate::propnet_asserts::PROPNET_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! propnet_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::propnet_asserts::PROPNET_ASSERT_LEVEL_DEFINITION >= $crate::propnet_asserts::PROPNET_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! propnet_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::propnet_asserts::PROPNET_ASSERT_LEVEL_DEFINITION >= $crate::propnet_asserts::PROPNET_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
