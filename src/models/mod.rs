pub mod activity_listing;
pub mod activity_record;
pub mod api_messages;

pub use activity_listing::ActivityListing;
pub use activity_record::ActivityRecord;
pub use api_messages::{ErrorDetail, MessageResponse};
