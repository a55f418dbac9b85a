use crate::core::geometry::BorderStyle;

/*
 * The caller-owned description of a field: label text, whether a value is
 * required, the border style (which decides the radius rule) and whether the
 * field accepts input. The value itself lives in the field container and is
 * changed only through its onChange channel.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: String,
    pub required: bool,
    pub border_style: BorderStyle,
    pub disabled: bool,
}

impl FieldSpec {
    pub fn new(label: impl Into<String>) -> Self {
        FieldSpec {
            label: label.into(),
            required: false,
            border_style: BorderStyle::Light,
            disabled: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn border_style(mut self, border_style: BorderStyle) -> Self {
        self.border_style = border_style;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

// Per-render flags that change how a field's boxes look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldVisualState {
    pub overlay_open: bool,
    pub focused: bool,
    pub show_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_spec_builder_defaults() {
        let spec = FieldSpec::new("Role");
        assert_eq!(spec.label, "Role");
        assert!(!spec.required);
        assert!(!spec.disabled);
        assert_eq!(spec.border_style, BorderStyle::Light);

        let spec = spec.required(true).border_style(BorderStyle::Full).disabled(true);
        assert!(spec.required && spec.disabled);
        assert_eq!(spec.border_style, BorderStyle::Full);
    }
}
