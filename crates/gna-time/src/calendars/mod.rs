//! Country-specific calendars.

/// Greek public holidays and weekends.
pub mod greece;
