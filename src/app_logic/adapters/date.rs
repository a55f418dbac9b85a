use crate::app_logic::adapter::{AdapterMessage, AdapterProps, FieldAdapter, Outbox};
use crate::app_logic::overlay_controller::OverlayController;
use crate::core::{CalendarMonth, DateBounds, WeekStart};
use crate::platform_layer::{AdapterInput, OverlayContent};
use time::{Date, OffsetDateTime};

/*
 * A calendar overlay. Every open starts on the month of the current value (or
 * today's month for an empty field); stepping months only changes what is
 * displayed. Days outside the bounds are drawn but cannot be chosen.
 */
pub struct DateAdapter {
    overlay: OverlayController,
    week_start: WeekStart,
    bounds: DateBounds,
    today: Date,
    displayed_month: Option<CalendarMonth>,
}

impl DateAdapter {
    pub fn new(week_start: WeekStart) -> Self {
        DateAdapter {
            overlay: OverlayController::new(),
            week_start,
            bounds: DateBounds::default(),
            today: OffsetDateTime::now_utc().date(),
            displayed_month: None,
        }
    }

    pub fn with_bounds(mut self, bounds: DateBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_today(mut self, today: Date) -> Self {
        self.today = today;
        self
    }

    pub fn displayed_month(&self) -> Option<CalendarMonth> {
        self.displayed_month
    }
}

impl FieldAdapter for DateAdapter {
    type Value = Option<Date>;

    fn kind(&self) -> &'static str {
        "DateAdapter"
    }

    fn overlay(&self) -> Option<&OverlayController> {
        Some(&self.overlay)
    }

    fn overlay_mut(&mut self) -> Option<&mut OverlayController> {
        Some(&mut self.overlay)
    }

    fn before_open(&mut self, value: &Option<Date>) {
        self.displayed_month = Some(CalendarMonth::containing(value.unwrap_or(self.today)));
    }

    fn overlay_content(&self, value: &Option<Date>) -> Option<OverlayContent> {
        let month = self
            .displayed_month
            .unwrap_or_else(|| CalendarMonth::containing(value.unwrap_or(self.today)));
        let grid = month.grid(self.week_start, &self.bounds, *value, self.today);
        if grid.is_none() {
            log::warn!("DateAdapter: Cannot build a grid for {month:?}.");
        }
        grid.map(OverlayContent::Calendar)
    }

    fn handle_input(
        &mut self,
        input: AdapterInput,
        props: &AdapterProps<'_, Option<Date>>,
        outbox: &mut Outbox<Option<Date>>,
    ) {
        match input {
            AdapterInput::CalendarStepped(months) => {
                let current = self
                    .displayed_month
                    .unwrap_or_else(|| CalendarMonth::containing(props.value.unwrap_or(self.today)));
                match current.step(months) {
                    Some(next) => {
                        self.displayed_month = Some(next);
                        self.refresh_content(props.value, outbox);
                    }
                    None => log::debug!(
                        "DateAdapter: Cannot step {months} month(s) from {current:?}; ignored."
                    ),
                }
            }
            AdapterInput::DateChosen(date) => {
                if self.bounds.contains(date) {
                    outbox.push(AdapterMessage::Changed(Some(date)));
                    self.dismiss(outbox);
                } else {
                    log::debug!("DateAdapter: {date} is outside {:?}; ignored.", self.bounds);
                }
            }
            AdapterInput::ClearRequested if !props.required && props.value.is_some() => {
                outbox.push(AdapterMessage::Changed(None));
                self.dismiss(outbox);
            }
            other => log::trace!("DateAdapter: Ignoring {other:?}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeometryConfig, MeasuredRect, RequestId};
    use crate::platform_layer::NodeHandle;
    use time::Month;

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).unwrap()
    }

    fn props(value: &Option<Date>) -> AdapterProps<'_, Option<Date>> {
        AdapterProps {
            value,
            disabled: false,
            required: false,
            calculated_radius: 8.0,
            container_ref: Some(NodeHandle(1)),
            input_ref: NodeHandle(2),
            geometry: GeometryConfig::default(),
        }
    }

    fn opened(value: &Option<Date>) -> DateAdapter {
        let mut adapter = DateAdapter::new(WeekStart::Monday).with_today(date(2024, Month::March, 15));
        let mut outbox = Vec::new();
        adapter.activate(&props(value), &mut outbox);
        adapter.measured(
            RequestId(1),
            Some(MeasuredRect::new(0.0, 0.0, 100.0, 40.0)),
            &props(value),
            &mut outbox,
        );
        adapter
    }

    #[test]
    fn test_opens_on_month_of_value() {
        let value = Some(date(2023, Month::November, 2));
        let adapter = opened(&value);
        assert_eq!(
            adapter.displayed_month(),
            Some(CalendarMonth { year: 2023, month: Month::November })
        );
        let empty = opened(&None);
        assert_eq!(
            empty.displayed_month(),
            Some(CalendarMonth { year: 2024, month: Month::March })
        );
    }

    #[test]
    fn test_stepping_redraws_without_changing_value() {
        let value = Some(date(2024, Month::January, 10));
        let mut adapter = opened(&value);
        let mut outbox = Vec::new();

        adapter.handle_input(AdapterInput::CalendarStepped(-1), &props(&value), &mut outbox);

        assert_eq!(outbox.len(), 1);
        let AdapterMessage::OverlayContent(OverlayContent::Calendar(grid)) = &outbox[0] else {
            panic!("expected a calendar, got {outbox:?}");
        };
        assert_eq!(grid.month, CalendarMonth { year: 2023, month: Month::December });
        assert_eq!(grid.cells.len(), 42);
    }

    #[test]
    fn test_unrepresentable_step_keeps_displayed_month() {
        let value = Some(date(2024, Month::March, 1));
        let mut adapter = opened(&value);
        let mut outbox = Vec::new();

        adapter.handle_input(AdapterInput::CalendarStepped(i32::MAX), &props(&value), &mut outbox);
        adapter.handle_input(AdapterInput::CalendarStepped(i32::MIN), &props(&value), &mut outbox);

        assert!(outbox.is_empty());
        assert!(adapter.is_open());
        assert_eq!(
            adapter.displayed_month(),
            Some(CalendarMonth { year: 2024, month: Month::March })
        );
    }

    #[test]
    fn test_out_of_bounds_day_is_not_chosen() {
        let value = None;
        let mut adapter = opened(&value).with_bounds(DateBounds {
            min: Some(date(2024, Month::March, 10)),
            max: None,
        });
        let mut outbox = Vec::new();

        adapter.handle_input(
            AdapterInput::DateChosen(date(2024, Month::March, 9)),
            &props(&value),
            &mut outbox,
        );
        assert!(outbox.is_empty());
        assert!(adapter.is_open());

        adapter.handle_input(
            AdapterInput::DateChosen(date(2024, Month::March, 10)),
            &props(&value),
            &mut outbox,
        );
        assert_eq!(outbox[0], AdapterMessage::Changed(Some(date(2024, Month::March, 10))));
        assert!(!adapter.is_open());
    }
}
