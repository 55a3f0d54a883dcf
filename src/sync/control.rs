//! Value holders the adapter reads from and writes to.

/// The handle an input event came from: anything with a readable, settable text value.
pub trait InputHandle {
    fn value(&self) -> &str;
    fn set_value(&mut self, value: String);
}

impl InputHandle for String {
    fn value(&self) -> &str {
        self
    }

    fn set_value(&mut self, value: String) {
        *self = value;
    }
}

/// Options for [`FormControl::set_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetValueOptions {
    /// Notify the control's subscribers of the new value.
    pub emit_event: bool,
}

impl Default for SetValueOptions {
    fn default() -> Self {
        Self { emit_event: true }
    }
}

/// An externally owned form field the adapter can write through.
pub trait FormControl {
    fn set_value(&mut self, value: &str, options: SetValueOptions);
}

/// Resolves the bound form control, if any, at call time.
pub trait ControlBinding {
    fn control_mut(&mut self) -> Option<&mut dyn FormControl>;
}

/// Binding with a possibly unset control.
impl<C: FormControl> ControlBinding for Option<C> {
    fn control_mut(&mut self) -> Option<&mut dyn FormControl> {
        self.as_mut().map(|c| c as &mut dyn FormControl)
    }
}

/// No bound control; every write goes to the input handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbound;

impl ControlBinding for Unbound {
    fn control_mut(&mut self) -> Option<&mut dyn FormControl> {
        None
    }
}

type Subscriber = Box<dyn FnMut(&str)>;

/// A form control holding a text value, with change subscribers.
#[derive(Default)]
pub struct ValueControl {
    value: String,
    subscribers: Vec<Subscriber>,
}

impl ValueControl {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            subscribers: Vec::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Call `f` with the new value on every write made with `emit_event: true`.
    pub fn subscribe(&mut self, f: impl FnMut(&str) + 'static) {
        self.subscribers.push(Box::new(f));
    }
}

impl std::fmt::Debug for ValueControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueControl")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl FormControl for ValueControl {
    fn set_value(&mut self, value: &str, options: SetValueOptions) {
        self.value = value.to_string();
        if options.emit_event {
            for s in &mut self.subscribers {
                s(&self.value);
            }
        }
    }
}
