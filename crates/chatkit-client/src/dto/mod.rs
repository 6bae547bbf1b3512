//! Data transfer objects for the message API

mod requests;
mod responses;

pub use requests::SendMessageRequest;
pub use responses::ErrorBody;
