#[cfg(feature = "tracing")]
macro_rules! pwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "pagestop", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! pwarn {
    ($($tt:tt)*) => {};
}
