/*
 * Abstraction over "where is this node on screen". Each target platform
 * supplies its own `NodeMeasurerOperations` (browser layout APIs, native view
 * measurement); `SyntheticMeasurer` returns fixed rectangles for tests and the
 * demo binary, and can simulate a node disappearing mid-request.
 */
use super::types::NodeHandle;
use crate::core::MeasuredRect;
use std::collections::HashMap;
use std::sync::Mutex;

pub trait NodeMeasurerOperations: Send + Sync {
    /*
     * Returns the node's absolute screen rectangle, or `None` if the node is
     * no longer mounted. Callers treat `None` as "drop the request".
     */
    fn measure(&self, node: NodeHandle) -> Option<MeasuredRect>;
}

#[derive(Default)]
pub struct SyntheticMeasurer {
    rects: Mutex<HashMap<NodeHandle, MeasuredRect>>,
    measure_calls: Mutex<Vec<NodeHandle>>,
}

impl SyntheticMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rect(self, node: NodeHandle, rect: MeasuredRect) -> Self {
        self.set_rect(node, rect);
        self
    }

    pub fn set_rect(&self, node: NodeHandle, rect: MeasuredRect) {
        if let Ok(mut rects) = self.rects.lock() {
            rects.insert(node, rect);
        }
    }

    // Later measurements of `node` return None.
    pub fn unmount(&self, node: NodeHandle) {
        if let Ok(mut rects) = self.rects.lock() {
            rects.remove(&node);
        }
    }

    pub fn measure_calls(&self) -> Vec<NodeHandle> {
        self.measure_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl NodeMeasurerOperations for SyntheticMeasurer {
    fn measure(&self, node: NodeHandle) -> Option<MeasuredRect> {
        if let Ok(mut calls) = self.measure_calls.lock() {
            calls.push(node);
        }
        let rect = self.rects.lock().ok()?.get(&node).copied();
        log::trace!("SyntheticMeasurer: measure({node:?}) -> {rect:?}");
        rect
    }
}
