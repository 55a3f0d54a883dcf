//! Bind the normalizer to input events and sync the result to a handle or form control.

mod adapter;
mod control;

pub use adapter::{SyncAdapter, SyncOutcome};
pub use control::{
    ControlBinding, FormControl, InputHandle, SetValueOptions, Unbound, ValueControl,
};
