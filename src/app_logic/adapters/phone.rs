use super::filtered_rows;
use crate::app_logic::adapter::{AdapterMessage, AdapterProps, FieldAdapter, Outbox};
use crate::app_logic::overlay_controller::OverlayController;
use crate::platform_layer::{AdapterInput, OverlayContent, PhoneNumber};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDialCode {
    pub name: String,
    pub dial_code: String,
}

impl CountryDialCode {
    pub fn new(name: impl Into<String>, dial_code: impl Into<String>) -> Self {
        CountryDialCode {
            name: name.into(),
            dial_code: dial_code.into(),
        }
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.dial_code)
    }
}

/*
 * Phone number entry: a searchable country dial-code dropdown attached to the
 * field, next to a free text box for the national number. Only digits are
 * kept from the typed number.
 */
pub struct PhoneAdapter {
    countries: Vec<CountryDialCode>,
    labels: Vec<String>,
    overlay: OverlayController,
}

impl PhoneAdapter {
    pub fn new(countries: Vec<CountryDialCode>) -> Self {
        let labels = countries.iter().map(CountryDialCode::label).collect();
        PhoneAdapter {
            countries,
            labels,
            overlay: OverlayController::new(),
        }
    }
}

impl FieldAdapter for PhoneAdapter {
    type Value = PhoneNumber;

    fn kind(&self) -> &'static str {
        "PhoneAdapter"
    }

    fn overlay(&self) -> Option<&OverlayController> {
        Some(&self.overlay)
    }

    fn overlay_mut(&mut self) -> Option<&mut OverlayController> {
        Some(&mut self.overlay)
    }

    fn overlay_content(&self, value: &PhoneNumber) -> Option<OverlayContent> {
        let rows = filtered_rows(
            self.labels.iter().map(String::as_str),
            self.overlay.search_text(),
            |index| self.countries[index].dial_code == value.dial_code,
        );
        Some(OverlayContent::Options {
            search_text: self.overlay.search_text().to_string(),
            rows,
        })
    }

    fn handle_input(
        &mut self,
        input: AdapterInput,
        props: &AdapterProps<'_, PhoneNumber>,
        outbox: &mut Outbox<PhoneNumber>,
    ) {
        match input {
            AdapterInput::SearchTextChanged(text) => {
                self.overlay.set_search_text(text);
                self.refresh_content(props.value, outbox);
            }
            AdapterInput::OptionChosen(index) => match self.countries.get(index) {
                Some(country) => {
                    outbox.push(AdapterMessage::Changed(PhoneNumber {
                        dial_code: country.dial_code.clone(),
                        national_number: props.value.national_number.clone(),
                    }));
                    self.dismiss(outbox);
                }
                None => log::warn!("PhoneAdapter: Country index {index} out of range."),
            },
            AdapterInput::TextEdited(text) => {
                let digits: String = text.chars().filter(char::is_ascii_digit).collect();
                if digits != props.value.national_number {
                    outbox.push(AdapterMessage::Changed(PhoneNumber {
                        dial_code: props.value.dial_code.clone(),
                        national_number: digits,
                    }));
                }
            }
            other => log::trace!("PhoneAdapter: Ignoring {other:?}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeometryConfig;
    use crate::platform_layer::NodeHandle;

    fn props(value: &PhoneNumber) -> AdapterProps<'_, PhoneNumber> {
        AdapterProps {
            value,
            disabled: false,
            required: true,
            calculated_radius: 22.0,
            container_ref: Some(NodeHandle(1)),
            input_ref: NodeHandle(2),
            geometry: GeometryConfig::default(),
        }
    }

    fn adapter() -> PhoneAdapter {
        PhoneAdapter::new(vec![
            CountryDialCode::new("Sweden", "+46"),
            CountryDialCode::new("Norway", "+47"),
            CountryDialCode::new("Switzerland", "+41"),
        ])
    }

    #[test]
    fn test_national_number_keeps_digits_only() {
        let mut adapter = adapter();
        let value = PhoneNumber { dial_code: "+46".to_string(), national_number: String::new() };
        let mut outbox = Vec::new();

        adapter.handle_input(
            AdapterInput::TextEdited("070-123 45 67".to_string()),
            &props(&value),
            &mut outbox,
        );

        assert_eq!(
            outbox,
            vec![AdapterMessage::Changed(PhoneNumber {
                dial_code: "+46".to_string(),
                national_number: "0701234567".to_string(),
            })]
        );
    }

    #[test]
    fn test_country_rows_filter_and_mark_selection() {
        let mut adapter = adapter();
        adapter.overlay.set_search_text("sw".to_string());
        let value = PhoneNumber { dial_code: "+41".to_string(), national_number: "1".to_string() };

        let Some(OverlayContent::Options { rows, .. }) = adapter.overlay_content(&value) else {
            panic!("expected option rows");
        };

        let summary: Vec<_> = rows.iter().map(|row| (row.index, row.selected)).collect();
        assert_eq!(summary, vec![(0, false), (2, true)]);
    }

    #[test]
    fn test_choosing_country_keeps_number() {
        let mut adapter = adapter();
        let value = PhoneNumber { dial_code: "+46".to_string(), national_number: "555".to_string() };
        let mut outbox = Vec::new();

        adapter.handle_input(AdapterInput::OptionChosen(1), &props(&value), &mut outbox);

        assert_eq!(
            outbox[0],
            AdapterMessage::Changed(PhoneNumber {
                dial_code: "+47".to_string(),
                national_number: "555".to_string(),
            })
        );
    }
}
