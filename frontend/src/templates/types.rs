#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Number,
    Date,
    Time,
    Email,
}

impl InputType {
    pub fn as_attr(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Number => "number",
            InputType::Date => "date",
            InputType::Time => "time",
            InputType::Email => "email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldControl {
    Input {
        input_type: InputType,
        placeholder: Option<String>,
        value: Option<String>,
    },
    TextArea {
        rows: u8,
        placeholder: Option<String>,
        value: Option<String>,
    },
    Select {
        options: Vec<String>,
    },
    Checkbox {
        checked: bool,
        required: bool,
        caption: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub control: FieldControl,
}

impl FormField {
    pub fn input(label: &str, input_type: InputType) -> Self {
        Self {
            label: label.into(),
            control: FieldControl::Input {
                input_type,
                placeholder: None,
                value: None,
            },
        }
    }

    pub fn input_with_placeholder(label: &str, input_type: InputType, placeholder: &str) -> Self {
        Self {
            label: label.into(),
            control: FieldControl::Input {
                input_type,
                placeholder: Some(placeholder.into()),
                value: None,
            },
        }
    }

    pub fn input_with_value(label: &str, input_type: InputType, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            control: FieldControl::Input {
                input_type,
                placeholder: None,
                value: Some(value.into()),
            },
        }
    }

    pub fn text_area(label: &str, placeholder: Option<&str>, value: Option<&str>) -> Self {
        Self {
            label: label.into(),
            control: FieldControl::TextArea {
                rows: 3,
                placeholder: placeholder.map(Into::into),
                value: value.map(Into::into),
            },
        }
    }

    pub fn select<I, S>(label: &str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            control: FieldControl::Select {
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn checkbox(label: &str, checked: bool) -> Self {
        Self {
            label: label.into(),
            control: FieldControl::Checkbox {
                checked,
                required: false,
                caption: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub time: String,
    pub booking: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingAccessory {
    Download,
    Status { class: String, label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingItem {
    pub text: String,
    pub accessory: ListingAccessory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

/// Everything a modal body can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateContent {
    Form {
        heading: Option<String>,
        fields: Vec<FormField>,
    },
    Schedule {
        heading: String,
        slots: Vec<ScheduleSlot>,
    },
    Details {
        heading: String,
        rows: Vec<DetailRow>,
    },
    Listing {
        heading: String,
        items: Vec<ListingItem>,
    },
    Choices {
        heading: String,
        name: String,
        options: Vec<Choice>,
    },
    Preview {
        heading: String,
        summary: String,
        sample: String,
    },
}

impl TemplateContent {
    pub fn form(fields: Vec<FormField>) -> Self {
        TemplateContent::Form {
            heading: None,
            fields,
        }
    }

    /// Form fields, empty for non-form content.
    pub fn fields(&self) -> &[FormField] {
        match self {
            TemplateContent::Form { fields, .. } => fields,
            _ => &[],
        }
    }

    pub fn field_labels(&self) -> Vec<&str> {
        self.fields().iter().map(|f| f.label.as_str()).collect()
    }
}

pub(crate) fn detail(label: &str, value: impl Into<String>) -> DetailRow {
    DetailRow {
        label: label.into(),
        value: value.into(),
    }
}
