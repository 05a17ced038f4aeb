//! Notification preferences model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lead time before a due date at which a reminder is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReminderTiming {
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "24hours")]
    TwentyFourHours,
    #[serde(rename = "48hours")]
    FortyEightHours,
    #[serde(rename = "1week")]
    OneWeek,
}

impl ReminderTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderTiming::OneHour => "1hour",
            ReminderTiming::TwentyFourHours => "24hours",
            ReminderTiming::FortyEightHours => "48hours",
            ReminderTiming::OneWeek => "1week",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1hour" => Some(ReminderTiming::OneHour),
            "24hours" => Some(ReminderTiming::TwentyFourHours),
            "48hours" => Some(ReminderTiming::FortyEightHours),
            "1week" => Some(ReminderTiming::OneWeek),
            _ => None,
        }
    }
}

/// Per-student notification preferences. Saved as a whole, all-or-nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotificationPreferences {
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub app_enabled: bool,
    pub reminder_timing: ReminderTiming,
}

/// Save preferences request body. The timing arrives as a plain string and
/// is parsed in the service so a bad value gets the same validation error
/// shape as every other one.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePreferences {
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub app_enabled: bool,
    /// One of: 1hour, 24hours, 48hours, 1week
    pub reminder_timing: String,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_enabled: true,
            sms_enabled: false,
            app_enabled: true,
            reminder_timing: ReminderTiming::TwentyFourHours,
        }
    }
}
