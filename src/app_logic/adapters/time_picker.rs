use crate::app_logic::adapter::{AdapterMessage, AdapterProps, FieldAdapter, Outbox};
use crate::app_logic::overlay_controller::OverlayController;
use crate::platform_layer::{AdapterInput, OverlayContent};
use time::Time;

const HOURS_PER_DAY: u8 = 24;
const MINUTES_PER_HOUR: u8 = 60;

/*
 * Two scrolling columns, hours and minutes. Picking an hour updates the value
 * and keeps the overlay open so a minute can follow; picking a minute commits
 * and closes. Minutes are listed at the configured step.
 */
pub struct TimeAdapter {
    overlay: OverlayController,
    minute_step: u8,
}

impl TimeAdapter {
    pub fn new(minute_step: u8) -> Self {
        TimeAdapter {
            overlay: OverlayController::new(),
            minute_step: minute_step.clamp(1, 30),
        }
    }

    fn minutes(&self) -> Vec<u8> {
        (0..MINUTES_PER_HOUR).step_by(usize::from(self.minute_step)).collect()
    }
}

impl FieldAdapter for TimeAdapter {
    type Value = Option<Time>;

    fn kind(&self) -> &'static str {
        "TimeAdapter"
    }

    fn overlay(&self) -> Option<&OverlayController> {
        Some(&self.overlay)
    }

    fn overlay_mut(&mut self) -> Option<&mut OverlayController> {
        Some(&mut self.overlay)
    }

    fn overlay_content(&self, value: &Option<Time>) -> Option<OverlayContent> {
        Some(OverlayContent::TimeColumns {
            hours: (0..HOURS_PER_DAY).collect(),
            minutes: self.minutes(),
            selected_hour: value.map(|t| t.hour()),
            selected_minute: value.map(|t| t.minute()),
        })
    }

    fn handle_input(
        &mut self,
        input: AdapterInput,
        props: &AdapterProps<'_, Option<Time>>,
        outbox: &mut Outbox<Option<Time>>,
    ) {
        let current = *props.value;
        match input {
            AdapterInput::HourChosen(hour) => {
                let minute = current.map_or(0, |t| t.minute());
                match Time::from_hms(hour, minute, 0) {
                    Ok(next) => {
                        outbox.push(AdapterMessage::Changed(Some(next)));
                        self.refresh_content(&Some(next), outbox);
                    }
                    Err(e) => log::warn!("TimeAdapter: Hour {hour} rejected: {e}"),
                }
            }
            AdapterInput::MinuteChosen(minute) => {
                let hour = current.map_or(0, |t| t.hour());
                match Time::from_hms(hour, minute, 0) {
                    Ok(next) => {
                        outbox.push(AdapterMessage::Changed(Some(next)));
                        self.dismiss(outbox);
                    }
                    Err(e) => log::warn!("TimeAdapter: Minute {minute} rejected: {e}"),
                }
            }
            AdapterInput::ClearRequested if !props.required && current.is_some() => {
                outbox.push(AdapterMessage::Changed(None));
                self.dismiss(outbox);
            }
            other => log::trace!("TimeAdapter: Ignoring {other:?}."),
        }
    }
}
