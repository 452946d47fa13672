/// Expands to the crate version, prefixed with the given string (e.g. `v0.1.0`).
macro_rules! version {
    ($prefix:expr) => {
        concat!($prefix, env!("CARGO_PKG_VERSION"))
    };
}
