pub mod activities;

pub use activities::{ActivityMap, ActivityRow};
