pub mod settings;
mod validations;
