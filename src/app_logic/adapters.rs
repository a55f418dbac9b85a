/*
 * The concrete field adapters. Select, date, time, color and phone adapters
 * attach an overlay below the input; checkbox and file adapters never open one
 * and act directly on activation.
 */
pub mod checkbox;
pub mod color;
pub mod date;
pub mod file;
pub mod phone;
pub mod select;
pub mod time_picker;

pub use checkbox::CheckboxAdapter;
pub use color::ColorAdapter;
pub use date::DateAdapter;
pub use file::FileAdapter;
pub use phone::{CountryDialCode, PhoneAdapter};
pub use select::{SelectAdapter, SelectOption};
pub use time_picker::TimeAdapter;

use crate::core::filter_indexes;
use crate::platform_layer::OptionRow;

// Rows of a searchable list that pass `search_text`, keeping original indexes.
pub(crate) fn filtered_rows<'a, I, F>(labels: I, search_text: &str, is_selected: F) -> Vec<OptionRow>
where
    I: IntoIterator<Item = &'a str> + Clone,
    F: Fn(usize) -> bool,
{
    let visible = filter_indexes(labels.clone(), search_text);
    labels
        .into_iter()
        .enumerate()
        .filter(|(index, _)| visible.contains(index))
        .map(|(index, label)| OptionRow {
            index,
            label: label.to_string(),
            selected: is_selected(index),
        })
        .collect()
}
