pub mod consumption_method;
pub mod gate;
pub mod repository;
pub mod routes;
pub mod views;

#[cfg(test)]
pub mod fixtures;
