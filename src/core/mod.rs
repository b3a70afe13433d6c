pub mod app_state;
pub mod configure;
pub mod http;
pub mod response;
