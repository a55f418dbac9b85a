/*
 * The headless platform driver. It plays the role a native toolkit's message
 * loop plays: events go to the `PlatformEventHandler`, the handler's queued
 * commands are drained and executed, and `MeasureNode` commands are answered
 * by calling the `NodeMeasurerOperations` and feeding `AppEvent::NodeMeasured`
 * back in (the measurement completion callback).
 *
 * Every command other than a measurement is recorded as rendered output,
 * which is what a real platform would turn into drawing calls.
 */
use super::error::{PlatformError, Result as PlatformResult};
use super::measurement::NodeMeasurerOperations;
use super::types::{AppEvent, PlatformCommand, PlatformEventHandler};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// Upper bound on events processed for one dispatched event.
const MAX_EVENTS_PER_DISPATCH: usize = 1024;

/*
 * When measurement replies are delivered. `Immediate` answers within the
 * same dispatch; `Deferred` holds replies until `flush_measurements`, which
 * lets callers interleave other events (an unmount, a dismiss) with an
 * in-flight measurement.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurementMode {
    #[default]
    Immediate,
    Deferred,
}

pub struct PlatformInterface {
    app_name: String,
    measurer: Arc<dyn NodeMeasurerOperations>,
    measurement_mode: MeasurementMode,
    deferred_replies: VecDeque<AppEvent>,
    rendered: Vec<PlatformCommand>,
}

impl PlatformInterface {
    pub fn new(app_name: String, measurer: Arc<dyn NodeMeasurerOperations>) -> Self {
        log::debug!("Platform: Creating headless platform for '{app_name}'.");
        PlatformInterface {
            app_name,
            measurer,
            measurement_mode: MeasurementMode::Immediate,
            deferred_replies: VecDeque::new(),
            rendered: Vec::new(),
        }
    }

    pub fn with_measurement_mode(mut self, mode: MeasurementMode) -> Self {
        self.measurement_mode = mode;
        self
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn rendered_commands(&self) -> &[PlatformCommand] {
        &self.rendered
    }

    pub fn take_rendered_commands(&mut self) -> Vec<PlatformCommand> {
        std::mem::take(&mut self.rendered)
    }

    pub fn pending_measurement_count(&self) -> usize {
        self.deferred_replies.len()
    }

    /*
     * Delivers one event and everything it causes: commands are executed and
     * immediate measurement replies are fed back until the queue settles.
     */
    pub fn dispatch_event(
        &mut self,
        event_handler: &Arc<Mutex<dyn PlatformEventHandler>>,
        event: AppEvent,
    ) -> PlatformResult<()> {
        let mut queue = VecDeque::from([event]);
        let mut processed = 0usize;

        while let Some(next_event) = queue.pop_front() {
            processed += 1;
            if processed > MAX_EVENTS_PER_DISPATCH {
                log::error!("Platform: Event loop exceeded {MAX_EVENTS_PER_DISPATCH} events.");
                return Err(PlatformError::EventLoopStalled(MAX_EVENTS_PER_DISPATCH));
            }

            let commands = {
                let mut handler = event_handler
                    .lock()
                    .map_err(|_| PlatformError::HandlerUnavailable)?;
                log::trace!("Platform: Dispatching {next_event:?}");
                handler.handle_event(next_event);
                let mut commands = Vec::new();
                while let Some(command) = handler.try_dequeue_command() {
                    commands.push(command);
                }
                commands
            };

            for command in commands {
                self.execute_command(command, &mut queue);
            }
        }
        Ok(())
    }

    // Delivers every deferred measurement reply, in request order.
    pub fn flush_measurements(
        &mut self,
        event_handler: &Arc<Mutex<dyn PlatformEventHandler>>,
    ) -> PlatformResult<()> {
        while let Some(reply) = self.deferred_replies.pop_front() {
            self.dispatch_event(event_handler, reply)?;
        }
        Ok(())
    }

    /*
     * Runs a whole scripted session: every event is dispatched in order,
     * deferred measurements are flushed at the end, and the handler is told
     * the loop is over.
     */
    pub fn run<I>(
        &mut self,
        event_handler: Arc<Mutex<dyn PlatformEventHandler>>,
        events: I,
    ) -> PlatformResult<()>
    where
        I: IntoIterator<Item = AppEvent>,
    {
        for event in events {
            self.dispatch_event(&event_handler, event)?;
        }
        self.flush_measurements(&event_handler)?;

        let mut handler = event_handler
            .lock()
            .map_err(|_| PlatformError::HandlerUnavailable)?;
        handler.on_quit();
        log::debug!("Platform: Run loop for '{}' exited cleanly.", self.app_name);
        Ok(())
    }

    fn execute_command(&mut self, command: PlatformCommand, queue: &mut VecDeque<AppEvent>) {
        match command {
            PlatformCommand::MeasureNode {
                field_id,
                node,
                request_id,
            } => {
                let reply = AppEvent::NodeMeasured {
                    field_id,
                    node,
                    request_id,
                    rect: self.measurer.measure(node),
                };
                match self.measurement_mode {
                    MeasurementMode::Immediate => queue.push_back(reply),
                    MeasurementMode::Deferred => self.deferred_replies.push_back(reply),
                }
            }
            other => {
                log::trace!("Platform: Rendering {other:?}");
                self.rendered.push(other);
            }
        }
    }
}
