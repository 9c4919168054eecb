use std::collections::BTreeMap;

/// The rendered registration form: element id, markup and current input values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRoot {
    id: String,
    markup: Option<String>,
    fields: BTreeMap<String, String>,
    submit_enabled: bool,
}

impl FormRoot {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper, mostly used by tests and the CLI loader.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    pub fn set_markup(&mut self, markup: String) {
        self.markup = Some(markup);
    }

    pub fn is_rendered(&self) -> bool {
        self.markup.is_some()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Checkbox state of an input; absent means unchecked.
    pub fn is_checked(&self, name: &str) -> bool {
        self.field(name).is_some_and(super::form::is_checked)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Removes an input value (an unchecked checkbox posts nothing).
    pub fn clear_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }
}
