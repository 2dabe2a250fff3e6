//! Service module

mod lexicheck_api_service;

pub use lexicheck_api_service::{LexicheckApiService, LexicheckApiServiceFull};
