pub mod app;
pub mod error;
pub mod measurement;
pub mod styling_primitives;
pub mod types;

pub use app::{MeasurementMode, PlatformInterface};
pub use error::{PlatformError, Result as PlatformResult};
pub use measurement::{NodeMeasurerOperations, SyntheticMeasurer};
pub use styling_primitives::{BoxStyle, FieldBoxStyles};
pub use types::{
    AdapterInput, AppEvent, ColorEdit, FieldId, FieldValue, ModalId, NodeHandle, OptionRow,
    OverlayContent, PhoneNumber, PickedFile, PlatformCommand, PlatformEventHandler, RequestId,
};
