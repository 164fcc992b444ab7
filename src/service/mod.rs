pub mod autos_service;


pub use autos_service::AutosService;
