// Request handling module
// Routes inbound requests to the trip endpoint, the docs and the landing page

mod router;

pub use router::handle_request;
