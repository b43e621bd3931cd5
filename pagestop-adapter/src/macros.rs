#[cfg(feature = "tracing")]
macro_rules! ptrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "pagestop_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ptrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! pdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "pagestop_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! pdebug {
    ($($tt:tt)*) => {};
}
