/*
 * Defines shared identifiers for the demo form: the logical field IDs the
 * presenter registers and the native node handles the platform measures. The
 * `platform_layer` maps node handles to real views; the headless demo feeds
 * synthetic rectangles for them instead.
 */

use crate::platform_layer::types::{FieldId, ModalId, NodeHandle};

// The "create user" modal hosting every demo field.
pub const USER_MODAL_ID: ModalId = ModalId(1);

// Role dropdown, light border.
pub const ROLE_FIELD_ID: FieldId = FieldId(1);
pub const ROLE_INPUT_NODE: NodeHandle = NodeHandle(101);
pub const ROLE_WRAPPER_NODE: NodeHandle = NodeHandle(201);

// Start date and start time sit side by side as one composite field.
pub const START_DATE_FIELD_ID: FieldId = FieldId(2);
pub const START_DATE_INPUT_NODE: NodeHandle = NodeHandle(102);
pub const START_DATE_WRAPPER_NODE: NodeHandle = NodeHandle(202);

pub const START_TIME_FIELD_ID: FieldId = FieldId(3);
pub const START_TIME_INPUT_NODE: NodeHandle = NodeHandle(103);
pub const START_TIME_WRAPPER_NODE: NodeHandle = NodeHandle(203);

// Accent color, full (pill) border.
pub const ACCENT_FIELD_ID: FieldId = FieldId(4);
pub const ACCENT_INPUT_NODE: NodeHandle = NodeHandle(104);
pub const ACCENT_WRAPPER_NODE: NodeHandle = NodeHandle(204);

pub const PHONE_FIELD_ID: FieldId = FieldId(5);
pub const PHONE_INPUT_NODE: NodeHandle = NodeHandle(105);

pub const ACTIVE_FIELD_ID: FieldId = FieldId(6);
pub const ACTIVE_INPUT_NODE: NodeHandle = NodeHandle(106);

pub const AVATAR_FIELD_ID: FieldId = FieldId(7);
pub const AVATAR_INPUT_NODE: NodeHandle = NodeHandle(107);
