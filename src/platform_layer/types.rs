/*
 * This module defines core data types used for communication between the
 * field presenters and the platform layer. It includes identifiers for fields,
 * measurable nodes and modals, the plain values exchanged with the caller
 * (`FieldValue`), platform-agnostic events (`AppEvent`), commands for the
 * platform layer (`PlatformCommand`), and the `PlatformEventHandler` trait the
 * application logic implements.
 */
use crate::core::{
    CalendarGrid, ColorChannel, ColorValue, CornerRadii, Hsv, MeasuredRect, OverlayLayout,
};
use crate::platform_layer::styling_primitives::{BoxStyle, FieldBoxStyles};
use std::fmt;
use time::{Date, Time};

pub use crate::core::RequestId;

// An opaque identifier for one field instance, assigned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field#{}", self.0)
    }
}

// A reference to a native node that the platform can measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

// Groups fields hosted in the same modal sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneNumber {
    pub dial_code: String,
    pub national_number: String,
}

/*
 * A field value as the caller sees it. Adapters are generic over their own
 * value type and convert through `FieldValueCodec` at the container boundary.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Empty,
    Text(String),
    Integer(i64),
    Bool(bool),
    Date(Date),
    Time(Time),
    Color(ColorValue),
    Phone(PhoneNumber),
    Files(Vec<PickedFile>),
}

impl FieldValue {
    // What a required field counts as "not filled in". `Bool(false)` is a value.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Phone(phone) => phone.national_number.is_empty(),
            FieldValue::Files(files) => files.is_empty(),
            _ => false,
        }
    }
}

// Interactive edits inside the color picker overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorEdit {
    // Text typed into the hex box.
    Hex(String),
    // Text typed into one of the numeric channel boxes.
    Channel { channel: ColorChannel, text: String },
    // Position on the saturation/value plane, both in [0, 1].
    SaturationValue { saturation: f64, value: f64 },
    Hue(f64),
    Alpha(f64),
}

// Adapter-specific user input, routed to the field's adapter untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterInput {
    SearchTextChanged(String),
    // Index into the adapter's full option list, not the filtered view.
    OptionChosen(usize),
    ClearRequested,
    CalendarStepped(i32),
    DateChosen(Date),
    HourChosen(u8),
    MinuteChosen(u8),
    ColorEdited(ColorEdit),
    TextEdited(String),
    FilesPicked(Vec<PickedFile>),
    FileRemoved(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub index: usize,
    pub label: String,
    pub selected: bool,
}

// What the platform should draw inside an open overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayContent {
    Options {
        search_text: String,
        rows: Vec<OptionRow>,
    },
    Calendar(CalendarGrid),
    TimeColumns {
        hours: Vec<u8>,
        minutes: Vec<u8>,
        selected_hour: Option<u8>,
        selected_minute: Option<u8>,
    },
    ColorPanel {
        color: ColorValue,
        hsv: Hsv,
        hex: String,
    },
}

/*
 * Represents platform-agnostic UI events generated by the native toolkit.
 *
 * The platform layer translates native events (taps, layout passes,
 * measurement replies) into these types and sends them to the presenter.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // The user tapped or otherwise activated the field's input.
    FieldActivated {
        field_id: FieldId,
    },
    // Tap outside, back gesture, escape.
    FieldDismissed {
        field_id: FieldId,
    },
    FieldFocusChanged {
        field_id: FieldId,
        focused: bool,
    },
    // A layout pass reported the bordered wrapper's height.
    FieldLaidOut {
        field_id: FieldId,
        height: f64,
    },
    // Reply to `PlatformCommand::MeasureNode`. `rect` is None if the node is gone.
    NodeMeasured {
        field_id: FieldId,
        node: NodeHandle,
        request_id: RequestId,
        rect: Option<MeasuredRect>,
    },
    AdapterInput {
        field_id: FieldId,
        input: AdapterInput,
    },
    // The caller replaced the value from outside.
    FieldValueAssigned {
        field_id: FieldId,
        value: FieldValue,
    },
    FieldDisabledChanged {
        field_id: FieldId,
        disabled: bool,
    },
    FieldUnmounted {
        field_id: FieldId,
    },
    ModalClosed {
        modal_id: ModalId,
    },
}

/*
 * Represents platform-agnostic commands sent from the presenter to the
 * platform layer.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCommand {
    // Ask for the node's absolute screen rectangle; answered by `AppEvent::NodeMeasured`.
    MeasureNode {
        field_id: FieldId,
        node: NodeHandle,
        request_id: RequestId,
    },
    ShowOverlay {
        field_id: FieldId,
        layout: OverlayLayout,
        corner_radii: CornerRadii,
        style: BoxStyle,
    },
    UpdateOverlayContent {
        field_id: FieldId,
        content: OverlayContent,
    },
    HideOverlay {
        field_id: FieldId,
    },
    ApplyFieldStyles {
        field_id: FieldId,
        styles: FieldBoxStyles,
    },
    // The onChange channel back to the caller.
    ValueCommitted {
        field_id: FieldId,
        value: FieldValue,
    },
    FocusReported {
        field_id: FieldId,
        focused: bool,
    },
    ShowFilePicker {
        field_id: FieldId,
        multiple: bool,
        accept: Vec<String>,
    },
}

impl PlatformCommand {
    pub fn field_id(&self) -> FieldId {
        match self {
            PlatformCommand::MeasureNode { field_id, .. }
            | PlatformCommand::ShowOverlay { field_id, .. }
            | PlatformCommand::UpdateOverlayContent { field_id, .. }
            | PlatformCommand::HideOverlay { field_id }
            | PlatformCommand::ApplyFieldStyles { field_id, .. }
            | PlatformCommand::ValueCommitted { field_id, .. }
            | PlatformCommand::FocusReported { field_id, .. }
            | PlatformCommand::ShowFilePicker { field_id, .. } => *field_id,
        }
    }
}

// A trait to be implemented by the application logic layer to handle UI events.
//
// The platform layer calls methods on this trait to notify the application
// logic about user interactions or system events.
pub trait PlatformEventHandler: Send + 'static {
    // Called by the platform layer when a native UI event has been processed.
    // The implementor should handle the event and enqueue `PlatformCommand`s
    // for the platform layer to execute.
    fn handle_event(&mut self, event: AppEvent);

    // Called by the platform layer when the application is about to exit its main loop.
    fn on_quit(&mut self) {}

    // Attempts to dequeue a single `PlatformCommand` from the internal queue.
    // This is called by the platform layer's run loop.
    fn try_dequeue_command(&mut self) -> Option<PlatformCommand>;
}
