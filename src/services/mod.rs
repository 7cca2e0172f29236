// Service module exports

pub mod adapter;
pub mod channel;
pub mod error;
pub mod settings;
pub mod year_view;
