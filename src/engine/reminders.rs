//! Reminder list and the entry field that feeds it.

/// Ordered, append-only list of reminder strings.
///
/// Order is insertion order; duplicates and empty strings are kept as-is.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReminderList {
    items: Vec<String>,
}

impl ReminderList {
    pub fn with_placeholders<I, S>(placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: placeholders.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, reminder: String) {
        self.items.push(reminder);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// One `(position, text)` pair per display row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &str)> {
        self.iter().enumerate()
    }
}

/// The reminder entry field plus the list it appends to.
#[derive(Debug, Default, Clone)]
pub struct ReminderPanel {
    pub list: ReminderList,
    pub input: String,
}

impl ReminderPanel {
    pub fn new(list: ReminderList) -> Self {
        Self {
            list,
            input: String::new(),
        }
    }

    /// "Add Reminder": move the field text onto the end of the list, leaving
    /// the field empty. Returns the new list length.
    pub fn add_reminder(&mut self) -> usize {
        let reminder = std::mem::take(&mut self.input);
        log::debug!("add_reminder: {reminder:?}");
        self.list.push(reminder);
        self.list.len()
    }
}
