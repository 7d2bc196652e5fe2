pub mod acknowledge;
