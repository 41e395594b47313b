pub mod api_error;
pub mod router;
pub mod routes;
