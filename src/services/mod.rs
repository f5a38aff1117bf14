pub mod catalog_service;
pub mod pokeapi_service;

#[cfg(test)]
pub mod stub_source;

pub use pokeapi_service::*;
