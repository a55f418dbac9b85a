/*
 * This module provides the application logic layer, centered around
 * `FieldsLogic`, which acts as the Presenter for every mounted field. Each
 * field is a `FieldContainer` hosting one `FieldAdapter` (select, date, time,
 * color, phone, checkbox, file); adapters with a dropdown own an
 * `OverlayController`. Unit tests for `FieldsLogic` are in `handler_tests.rs`.
 */
pub mod adapter;
pub mod adapters;
pub mod field_container;
pub mod field_value;
pub mod handler;
pub mod overlay_controller;
pub mod ui_constants;

#[cfg(test)]
mod handler_tests;

pub use adapter::{AdapterMessage, AdapterProps, FieldAdapter, Outbox};
pub use field_container::{FieldContainer, FieldInstance};
pub use field_value::FieldValueCodec;
pub use handler::FieldsLogic;
pub use overlay_controller::OverlayController;
