use crate::{
    err,
    panic_if_not,
    prelude::ToString,
    try_or,
    wrapped_err,
    Errors::{
        self,
        InputReadFailure,
        LengthMismatch,
        SpongeNotCommitted,
    },
    Result,
    WrappedError,
};

#[test]
fn try_or_passes_through_on_success() {
    assert!(try_or!(1 + 1 == 2, LengthMismatch(1, 2)).is_ok());

    let e = try_or!(1 + 1 == 3, LengthMismatch(2, 3)).unwrap_err();
    assert_eq!(Some(&LengthMismatch(2, 3)), e.downcast_ref::<Errors>());
}

#[test]
fn try_or_evaluates_condition_once() {
    let mut calls = 0;
    let r = try_or!(
        {
            calls += 1;
            calls == 1
        },
        SpongeNotCommitted(0)
    );
    assert!(r.is_ok());
    assert_eq!(1, calls);
}

#[test]
fn err_carries_the_variant() {
    let r: Result<u8> = err!(SpongeNotCommitted(3));
    let e = r.unwrap_err();
    assert_eq!(Some(&SpongeNotCommitted(3)), e.downcast_ref::<Errors>());
    assert_eq!("Sponge is not committed, outer position is not 0 (found: 3)", format!("{}", e));
}

#[test]
fn wrapped_err_shows_cause() {
    let e = wrapped_err!(InputReadFailure("a.txt".to_string()), WrappedError("no such file"));
    assert_eq!("Failed to read input a.txt: \"no such file\"", format!("{}", e));
}

#[test]
#[should_panic(expected = "sponge invariant violated")]
fn panic_if_not_panics_on_false() {
    panic_if_not!(2 < 1);
}
