/*
 * The contract between a field container and the adapter hosted in its input
 * slot. The container hands the adapter read-only `AdapterProps` (the current
 * value, disabled flag, calculated radius and the node to measure) and the
 * adapter answers by writing `AdapterMessage`s into an outbox: value changes,
 * dropdown open/close notifications, measurement requests and overlay
 * drawing. The container never looks inside an adapter.
 *
 * Adapters that own an overlay expose their `OverlayController`; the provided
 * methods of `FieldAdapter` then implement the common open/measure/close
 * protocol, and an adapter only describes what goes inside the overlay and how
 * it reacts to input.
 */
use super::field_value::FieldValueCodec;
use super::overlay_controller::OverlayController;
use crate::core::{CornerRadii, GeometryConfig, MeasuredRect, OverlayLayout, RequestId};
use crate::platform_layer::{AdapterInput, NodeHandle, OverlayContent};
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub struct AdapterProps<'a, V> {
    pub value: &'a V,
    pub disabled: bool,
    pub required: bool,
    pub calculated_radius: f64,
    // The container's bordered wrapper, preferred for measurement.
    pub container_ref: Option<NodeHandle>,
    // The adapter's own inner element, the fallback measurement target.
    pub input_ref: NodeHandle,
    pub geometry: GeometryConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdapterMessage<V> {
    // The onChange channel.
    Changed(V),
    DropdownStateChanged(bool),
    Measure {
        node: NodeHandle,
        request_id: RequestId,
    },
    ShowOverlay {
        layout: OverlayLayout,
        corner_radii: CornerRadii,
    },
    OverlayContent(OverlayContent),
    HideOverlay,
    Focus,
    Blur,
    OpenFilePicker {
        multiple: bool,
        accept: Vec<String>,
    },
}

pub type Outbox<V> = Vec<AdapterMessage<V>>;

pub trait FieldAdapter: Send + 'static {
    type Value: FieldValueCodec + Clone + PartialEq + fmt::Debug + Send + 'static;

    // Short name used in log messages.
    fn kind(&self) -> &'static str;

    fn overlay(&self) -> Option<&OverlayController> {
        None
    }

    fn overlay_mut(&mut self) -> Option<&mut OverlayController> {
        None
    }

    // What to draw inside the open overlay for `value`.
    fn overlay_content(&self, _value: &Self::Value) -> Option<OverlayContent> {
        None
    }

    fn start_requests_after(&mut self, floor: u64) {
        if let Some(overlay) = self.overlay_mut() {
            overlay.start_requests_after(floor);
        }
    }

    // Called right before a measurement is requested for a new open.
    fn before_open(&mut self, _value: &Self::Value) {}

    // Called when the caller replaced the value from outside.
    fn value_assigned(&mut self, _value: &Self::Value) {}

    fn handle_input(
        &mut self,
        input: AdapterInput,
        props: &AdapterProps<'_, Self::Value>,
        outbox: &mut Outbox<Self::Value>,
    );

    fn is_open(&self) -> bool {
        self.overlay().is_some_and(OverlayController::is_open)
    }

    /*
     * The user activated the input. A closed overlay starts measuring, an open
     * one closes (a second tap on the input dismisses), and a measurement
     * already in flight is left alone.
     */
    fn activate(
        &mut self,
        props: &AdapterProps<'_, Self::Value>,
        outbox: &mut Outbox<Self::Value>,
    ) {
        if props.disabled {
            log::trace!("{}: Activation ignored, field is disabled.", self.kind());
            return;
        }
        let (open, measuring) = match self.overlay() {
            Some(overlay) => (overlay.is_open(), overlay.is_measuring()),
            None => return,
        };
        if open {
            self.dismiss(outbox);
        } else if !measuring {
            self.before_open(props.value);
            if let Some(overlay) = self.overlay_mut() {
                overlay.begin_open(props, outbox);
            }
        }
    }

    // Measurement reply for a request this adapter made.
    fn measured(
        &mut self,
        request_id: RequestId,
        rect: Option<MeasuredRect>,
        props: &AdapterProps<'_, Self::Value>,
        outbox: &mut Outbox<Self::Value>,
    ) {
        let opened = match self.overlay_mut() {
            Some(overlay) => overlay.complete_open(request_id, rect, props, outbox),
            None => false,
        };
        if opened {
            outbox.push(AdapterMessage::Focus);
            self.refresh_content(props.value, outbox);
        }
    }

    fn dismiss(&mut self, outbox: &mut Outbox<Self::Value>) {
        let closed = match self.overlay_mut() {
            Some(overlay) => overlay.close(outbox),
            None => false,
        };
        if closed {
            outbox.push(AdapterMessage::Blur);
        }
    }

    // Redraws the overlay for `value` if it is showing.
    fn refresh_content(&self, value: &Self::Value, outbox: &mut Outbox<Self::Value>) {
        if !self.is_open() {
            return;
        }
        if let Some(content) = self.overlay_content(value) {
            outbox.push(AdapterMessage::OverlayContent(content));
        }
    }
}
