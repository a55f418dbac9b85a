use crate::app_logic::adapter::{AdapterMessage, AdapterProps, FieldAdapter, Outbox};
use crate::platform_layer::{AdapterInput, PickedFile};

/*
 * File attachment. Activation asks the platform for its native file picker;
 * the picked files come back as adapter input. A single-file field replaces
 * its file, a multi-file field appends.
 */
#[derive(Debug, Clone, Default)]
pub struct FileAdapter {
    multiple: bool,
    accept: Vec<String>,
}

impl FileAdapter {
    pub fn new(multiple: bool) -> Self {
        FileAdapter {
            multiple,
            accept: Vec::new(),
        }
    }

    // MIME types or extensions passed through to the picker.
    pub fn with_accept(mut self, accept: Vec<String>) -> Self {
        self.accept = accept;
        self
    }
}

impl FieldAdapter for FileAdapter {
    type Value = Vec<PickedFile>;

    fn kind(&self) -> &'static str {
        "FileAdapter"
    }

    fn activate(
        &mut self,
        props: &AdapterProps<'_, Vec<PickedFile>>,
        outbox: &mut Outbox<Vec<PickedFile>>,
    ) {
        if props.disabled {
            return;
        }
        outbox.push(AdapterMessage::OpenFilePicker {
            multiple: self.multiple,
            accept: self.accept.clone(),
        });
    }

    fn handle_input(
        &mut self,
        input: AdapterInput,
        props: &AdapterProps<'_, Vec<PickedFile>>,
        outbox: &mut Outbox<Vec<PickedFile>>,
    ) {
        match input {
            AdapterInput::FilesPicked(files) if files.is_empty() => {
                log::debug!("FileAdapter: Picker returned no files.");
            }
            AdapterInput::FilesPicked(mut files) => {
                let next = if self.multiple {
                    let mut next = props.value.clone();
                    next.append(&mut files);
                    next
                } else {
                    files.truncate(1);
                    files
                };
                outbox.push(AdapterMessage::Changed(next));
            }
            AdapterInput::FileRemoved(index) if index < props.value.len() => {
                let mut next = props.value.clone();
                let removed = next.remove(index);
                log::debug!("FileAdapter: Removed '{}'.", removed.name);
                outbox.push(AdapterMessage::Changed(next));
            }
            AdapterInput::ClearRequested if !props.value.is_empty() => {
                outbox.push(AdapterMessage::Changed(Vec::new()));
            }
            other => log::trace!("FileAdapter: Ignoring {other:?}."),
        }
    }
}
