//! Desktop cluster dashboard built around the shared navigation chrome.

pub mod components;
pub mod mock_data;
pub mod router;
