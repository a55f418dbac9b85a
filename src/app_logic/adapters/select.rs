use super::filtered_rows;
use crate::app_logic::adapter::{AdapterMessage, AdapterProps, FieldAdapter, Outbox};
use crate::app_logic::field_value::FieldValueCodec;
use crate::app_logic::overlay_controller::OverlayController;
use crate::platform_layer::{AdapterInput, OverlayContent};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<V> {
    pub label: String,
    pub value: V,
}

impl<V> SelectOption<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        SelectOption {
            label: label.into(),
            value,
        }
    }
}

/*
 * A dropdown list with a search box. The search text lives in the overlay
 * controller and is cleared every time the list closes. Choosing an option
 * commits it and closes the list; a field that is not required can also be
 * cleared back to no value.
 */
pub struct SelectAdapter<V> {
    options: Vec<SelectOption<V>>,
    overlay: OverlayController,
}

impl<V> SelectAdapter<V> {
    pub fn new(options: Vec<SelectOption<V>>) -> Self {
        SelectAdapter {
            options,
            overlay: OverlayController::new(),
        }
    }

    pub fn options(&self) -> &[SelectOption<V>] {
        &self.options
    }
}

impl<V> FieldAdapter for SelectAdapter<V>
where
    V: FieldValueCodec + Clone + PartialEq + fmt::Debug + Send + 'static,
{
    type Value = Option<V>;

    fn kind(&self) -> &'static str {
        "SelectAdapter"
    }

    fn overlay(&self) -> Option<&OverlayController> {
        Some(&self.overlay)
    }

    fn overlay_mut(&mut self) -> Option<&mut OverlayController> {
        Some(&mut self.overlay)
    }

    fn overlay_content(&self, value: &Option<V>) -> Option<OverlayContent> {
        let labels = self.options.iter().map(|option| option.label.as_str());
        let rows = filtered_rows(labels, self.overlay.search_text(), |index| {
            value.as_ref() == Some(&self.options[index].value)
        });
        Some(OverlayContent::Options {
            search_text: self.overlay.search_text().to_string(),
            rows,
        })
    }

    fn handle_input(
        &mut self,
        input: AdapterInput,
        props: &AdapterProps<'_, Option<V>>,
        outbox: &mut Outbox<Option<V>>,
    ) {
        match input {
            AdapterInput::SearchTextChanged(text) => {
                self.overlay.set_search_text(text);
                self.refresh_content(props.value, outbox);
            }
            AdapterInput::OptionChosen(index) => match self.options.get(index) {
                Some(option) => {
                    log::debug!("SelectAdapter: Chose '{}'.", option.label);
                    outbox.push(AdapterMessage::Changed(Some(option.value.clone())));
                    self.dismiss(outbox);
                }
                None => log::warn!("SelectAdapter: Option index {index} out of range."),
            },
            AdapterInput::ClearRequested => {
                if props.required {
                    log::debug!("SelectAdapter: Required field cannot be cleared.");
                } else if props.value.is_some() {
                    outbox.push(AdapterMessage::Changed(None));
                    self.dismiss(outbox);
                }
            }
            other => log::trace!("SelectAdapter: Ignoring {other:?}."),
        }
    }
}
