pub mod service;

pub use service::{SettingsError, SettingsResult, SettingsService};
