//! Data models for the borrowal server

pub mod borrow_record;
pub mod fine;
pub mod overdue;
pub mod preferences;
pub mod student;

// Re-export commonly used types
pub use borrow_record::{BorrowRecord, BorrowStatus, BorrowalShelves};
pub use fine::{Fine, FineStatus, PaymentMethod};
pub use overdue::OverdueEntry;
pub use preferences::{NotificationPreferences, ReminderTiming};
pub use student::{Student, StudentLookup};
