use chrono::{NaiveTime, Timelike};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerField {
    Hour,
    Minute,
    Meridiem,
}

/// Modal time-of-day picker state. The app shows it on request and reads a
/// `NaiveTime` back on confirm; cancelling discards edits without touching
/// any previously stored alarm.
#[derive(Debug)]
pub struct TimePicker {
    hour12: u32, // 1..=12
    minute: u32, // 0..=59
    pm: bool,
    field: PickerField,
}

impl Default for TimePicker {
    fn default() -> Self {
        Self {
            hour12: 12,
            minute: 0,
            pm: false,
            field: PickerField::Hour,
        }
    }
}

impl TimePicker {
    /// Picker prefilled from an existing time, focus reset to the hour field.
    pub fn from_time(time: NaiveTime) -> Self {
        let (pm, hour12) = time.hour12();
        Self {
            hour12,
            minute: time.minute(),
            pm,
            field: PickerField::Hour,
        }
    }

    pub fn field(&self) -> PickerField {
        self.field
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            PickerField::Hour => PickerField::Minute,
            PickerField::Minute => PickerField::Meridiem,
            PickerField::Meridiem => PickerField::Hour,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            PickerField::Hour => PickerField::Meridiem,
            PickerField::Minute => PickerField::Hour,
            PickerField::Meridiem => PickerField::Minute,
        };
    }

    /// Increment the focused field, wrapping within its range.
    pub fn increment(&mut self) {
        match self.field {
            PickerField::Hour => self.hour12 = self.hour12 % 12 + 1,
            PickerField::Minute => self.minute = (self.minute + 1) % 60,
            PickerField::Meridiem => self.pm = !self.pm,
        }
    }

    /// Decrement the focused field, wrapping within its range.
    pub fn decrement(&mut self) {
        match self.field {
            PickerField::Hour => self.hour12 = if self.hour12 == 1 { 12 } else { self.hour12 - 1 },
            PickerField::Minute => self.minute = (self.minute + 59) % 60,
            PickerField::Meridiem => self.pm = !self.pm,
        }
    }

    /// The currently selected time as a 24-hour `NaiveTime`.
    pub fn selected(&self) -> NaiveTime {
        let hour24 = match (self.hour12, self.pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        // hour24 is 0..=23 and minute 0..=59 by construction
        NaiveTime::from_hms_opt(hour24, self.minute, 0).unwrap()
    }

    pub fn hour_label(&self) -> String {
        format!("{}", self.hour12)
    }

    pub fn minute_label(&self) -> String {
        format!("{:02}", self.minute)
    }

    pub fn meridiem_label(&self) -> &'static str {
        if self.pm {
            "PM"
        } else {
            "AM"
        }
    }
}
