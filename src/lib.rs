//! Normalize live text input: fold accented characters to ASCII, drop disallowed
//! characters, collapse or strip whitespace, and sync the result to an input handle or
//! a bound form control.

pub mod cli;
pub mod logging;
pub mod normalizer;
pub mod sync;

pub use cli::{run, Args};
pub use normalizer::{transform, ConfigError, MatchFlags, NormalizationConfig, Normalizer};
pub use sync::{
    ControlBinding, FormControl, InputHandle, SetValueOptions, SyncAdapter, SyncOutcome,
    Unbound, ValueControl,
};
