//! Every macro here logs its call site when the `err-location-log` feature is on,
//! then defers to the function of the same name.

use super::error_messages::{
    Errors,
    WrappedError,
};
use crate::{
    anyhow,
    bail,
    ensure,
    Error,
    Result,
};
use core::fmt::Debug;

#[doc(hidden)]
#[macro_export]
macro_rules! log_location {
    () => {
        if $crate::LOCATION_LOG {
            $crate::println!("\n!!! Error occurred @ {}, {}", file!(), line!());
        }
    };
}

/// `Ok(())` if the condition holds, the given `Errors` otherwise.
#[macro_export]
macro_rules! try_or {
    ($cond:expr, $err:expr) => {{
        let holds: bool = $cond;
        if !holds {
            $crate::log_location!();
        }
        $crate::try_or(holds, $err)
    }};
}

#[macro_export]
macro_rules! err {
    ($err:expr) => {{
        $crate::log_location!();
        $crate::err($err)
    }};
}

/// Assert an internal invariant.
#[macro_export]
macro_rules! panic_if_not {
    ($cond:expr) => {{
        let holds: bool = $cond;
        if !holds {
            $crate::log_location!();
        }
        $crate::panic_if_not(holds)
    }};
}

/// Attach a foreign error (io, parse, ...) as the cause of one of ours.
#[macro_export]
macro_rules! wrapped_err {
    ($err:expr, $wrapped:expr) => {{
        $crate::log_location!();
        $crate::wrapped_err($err, $wrapped)
    }};
}

pub fn try_or(cond: bool, err: Errors) -> Result<()> {
    ensure!(cond, err);
    Ok(())
}

pub fn err<T>(err: Errors) -> Result<T> {
    bail!(err)
}

pub fn panic_if_not(cond: bool) {
    assert!(cond, "sponge invariant violated")
}

pub fn wrapped_err<T: Debug>(err: Errors, cause: WrappedError<T>) -> Error {
    anyhow!("{}: {:?}", err, cause.0)
}
