#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Hours,
    Minutes,
    Seconds,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Hours, FormField::Minutes, FormField::Seconds];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Hours => "Hours",
            FormField::Minutes => "Minutes",
            FormField::Seconds => "Seconds",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Hours => "HH",
            FormField::Minutes => "MM",
            FormField::Seconds => "SS",
        }
    }

    /// Suggested range shown next to the field. Not enforced.
    pub fn hint(self) -> &'static str {
        match self {
            FormField::Hours => "0-23",
            FormField::Minutes | FormField::Seconds => "0-59",
        }
    }

    fn next(self) -> Self {
        match self {
            FormField::Hours => FormField::Minutes,
            FormField::Minutes => FormField::Seconds,
            FormField::Seconds => FormField::Hours,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Hours => FormField::Seconds,
            FormField::Minutes => FormField::Hours,
            FormField::Seconds => FormField::Minutes,
        }
    }
}

/// Raw text of the three target fields while the form is open.
#[derive(Clone, Debug)]
pub struct TargetForm {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub field: FormField,
}

impl Default for TargetForm {
    fn default() -> Self {
        Self {
            hours: String::new(),
            minutes: String::new(),
            seconds: String::new(),
            field: FormField::Hours,
        }
    }
}

impl TargetForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Hours => &self.hours,
            FormField::Minutes => &self.minutes,
            FormField::Seconds => &self.seconds,
        }
    }

    fn value_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Hours => &mut self.hours,
            FormField::Minutes => &mut self.minutes,
            FormField::Seconds => &mut self.seconds,
        }
    }

    pub fn focus_next(&mut self) {
        self.field = self.field.next();
    }

    pub fn focus_prev(&mut self) {
        self.field = self.field.prev();
    }

    /// Only digits are typed into the fields.
    pub fn push(&mut self, ch: char) {
        if ch.is_ascii_digit() {
            self.value_mut().push(ch);
        }
    }

    pub fn pop(&mut self) {
        self.value_mut().pop();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
