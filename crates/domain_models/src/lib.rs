pub mod orders;
pub mod payments;
pub mod router_data;
pub mod router_flow_types;
pub mod router_request_types;
pub mod router_response_types;
