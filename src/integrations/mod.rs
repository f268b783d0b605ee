pub mod pushover_integration;
pub mod pushover_response;
pub mod remote_integration;
pub mod team_city_integration;
pub mod team_city_response;
