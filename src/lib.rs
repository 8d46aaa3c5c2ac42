pub mod carousel;
pub mod config;
pub mod events;
pub mod gesture;
pub mod tasks {
    pub mod controller;
    pub mod input;
    pub mod viewer;
}
