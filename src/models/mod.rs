pub mod automobile;

pub use automobile::{Automobile, AutosList, UpdateOwnerRequest};
