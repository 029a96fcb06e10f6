pub mod calendar;
pub mod ids;
pub mod search;
pub mod store;
pub mod theme_pref;
