use crate::app_logic::adapter::{AdapterMessage, AdapterProps, FieldAdapter, Outbox};
use crate::platform_layer::AdapterInput;

// A toggle. Activation flips the value; there is no overlay.
#[derive(Debug, Default)]
pub struct CheckboxAdapter;

impl CheckboxAdapter {
    pub fn new() -> Self {
        CheckboxAdapter
    }
}

impl FieldAdapter for CheckboxAdapter {
    type Value = bool;

    fn kind(&self) -> &'static str {
        "CheckboxAdapter"
    }

    fn activate(&mut self, props: &AdapterProps<'_, bool>, outbox: &mut Outbox<bool>) {
        if props.disabled {
            return;
        }
        outbox.push(AdapterMessage::Changed(!*props.value));
    }

    fn handle_input(
        &mut self,
        input: AdapterInput,
        props: &AdapterProps<'_, bool>,
        outbox: &mut Outbox<bool>,
    ) {
        match input {
            AdapterInput::ClearRequested if *props.value => {
                outbox.push(AdapterMessage::Changed(false));
            }
            other => log::trace!("CheckboxAdapter: Ignoring {other:?}."),
        }
    }
}
