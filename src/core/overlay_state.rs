/*
 * The explicit open/closed state of one overlay, owned by a single field
 * instance. Transitions are pure functions from state to state so they can be
 * driven from any event source (UI-thread callback, queued event, test).
 *
 * Opening is a two-step affair because measuring a node is asynchronous on
 * real platforms: `begin_measure` records the outstanding request, and
 * `open` consumes the measurement reply. A reply for any other request, or an
 * empty reply (node unmounted mid-request), leaves no overlay behind.
 */
use super::geometry::{
    self, CornerRadii, GeometryConfig, MeasureSource, MeasuredRect, OverlayLayout,
};

// Identifies one measurement round-trip. Unique per overlay instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Measuring {
        request: RequestId,
        source: MeasureSource,
    },
    Open {
        layout: OverlayLayout,
        corner_radii: CornerRadii,
    },
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open { .. })
    }

    pub fn is_measuring(&self) -> bool {
        matches!(self, OverlayState::Measuring { .. })
    }

    // Only a closed overlay starts a new measurement.
    pub fn begin_measure(self, request: RequestId, source: MeasureSource) -> OverlayState {
        match self {
            OverlayState::Closed => OverlayState::Measuring { request, source },
            other => other,
        }
    }

    /*
     * Completes a measurement. The overlay's bottom corners take `field_radius`,
     * which the caller recomputes for this open (a `Full` radius depends on the
     * height measured right now).
     */
    pub fn open(
        self,
        reply_to: RequestId,
        rect: Option<MeasuredRect>,
        field_radius: f64,
        config: &GeometryConfig,
    ) -> OverlayState {
        match (self, rect) {
            (OverlayState::Measuring { request, source }, Some(rect)) if request == reply_to => {
                OverlayState::Open {
                    layout: geometry::compute_overlay_layout(&rect, source, config),
                    corner_radii: CornerRadii::for_overlay(field_radius),
                }
            }
            (OverlayState::Measuring { request, .. }, None) if request == reply_to => {
                OverlayState::Closed
            }
            (other, _) => other,
        }
    }

    pub fn close(self) -> OverlayState {
        OverlayState::Closed
    }
}
