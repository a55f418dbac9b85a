/*
 * Owns the overlay state of one adapter instance. Each adapter has its own
 * controller, so fields nested inside each other (a date and a time field in
 * one composite, a select inside a modal) never share open state.
 *
 * The controller wraps the pure `OverlayState` transitions and turns them into
 * adapter messages: a measurement request when opening, overlay show/hide and
 * dropdown-state notifications when the state actually changes.
 */
use super::adapter::{AdapterMessage, AdapterProps, Outbox};
use crate::core::{MeasureSource, MeasuredRect, OverlayState, RequestId};

#[derive(Debug, Default)]
pub struct OverlayController {
    state: OverlayState,
    last_request: u64,
    search_text: String,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_measuring(&self) -> bool {
        self.state.is_measuring()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: String) {
        self.search_text = text;
    }

    // Every request id allocated from now on is greater than `floor`.
    pub fn start_requests_after(&mut self, floor: u64) {
        self.last_request = self.last_request.max(floor);
    }

    /*
     * Requests a fresh measurement of the node the overlay attaches to. The
     * container's bordered wrapper is preferred; without one the adapter's own
     * inner node is measured and the layout compensates for the border.
     * Returns false if the overlay was not closed.
     */
    pub fn begin_open<V>(&mut self, props: &AdapterProps<'_, V>, outbox: &mut Outbox<V>) -> bool {
        if self.state != OverlayState::Closed {
            log::trace!("OverlayController: Open ignored in state {:?}.", self.state);
            return false;
        }
        let (node, source) = match props.container_ref {
            Some(node) => (node, MeasureSource::Container),
            None => (props.input_ref, MeasureSource::InnerFallback),
        };
        self.last_request += 1;
        let request_id = RequestId(self.last_request);
        self.state = self.state.begin_measure(request_id, source);
        log::debug!("OverlayController: Measuring {node:?} as {source:?} ({request_id:?}).");
        outbox.push(AdapterMessage::Measure { node, request_id });
        true
    }

    /*
     * Consumes a measurement reply. The overlay opens only for a non-empty
     * reply to the outstanding request; anything else is dropped without a
     * trace in the outbox. Returns true if the overlay opened.
     */
    pub fn complete_open<V>(
        &mut self,
        request_id: RequestId,
        rect: Option<MeasuredRect>,
        props: &AdapterProps<'_, V>,
        outbox: &mut Outbox<V>,
    ) -> bool {
        let previous = self.state;
        self.state = previous.open(request_id, rect, props.calculated_radius, &props.geometry);
        match self.state {
            OverlayState::Open {
                layout,
                corner_radii,
            } if !previous.is_open() => {
                log::debug!("OverlayController: Opened at {layout:?}.");
                outbox.push(AdapterMessage::DropdownStateChanged(true));
                outbox.push(AdapterMessage::ShowOverlay {
                    layout,
                    corner_radii,
                });
                true
            }
            OverlayState::Closed if previous.is_measuring() => {
                log::debug!(
                    "OverlayController: Measurement {request_id:?} came back empty; open dropped."
                );
                false
            }
            _ => {
                log::debug!(
                    "OverlayController: Ignoring measurement {request_id:?} in state {previous:?}."
                );
                false
            }
        }
    }

    /*
     * Closes the overlay and clears the search text. Closing a closed overlay
     * does nothing; closing while a measurement is in flight cancels it without
     * notifications, since nothing was shown. Returns true if an open overlay
     * was hidden.
     */
    pub fn close<V>(&mut self, outbox: &mut Outbox<V>) -> bool {
        let was_open = self.state.is_open();
        self.state = self.state.close();
        self.search_text.clear();
        if was_open {
            log::debug!("OverlayController: Closed.");
            outbox.push(AdapterMessage::HideOverlay);
            outbox.push(AdapterMessage::DropdownStateChanged(false));
        }
        was_open
    }
}
