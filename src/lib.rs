pub mod arena;
pub mod components;
pub mod config;
pub mod main_loop;
pub mod prelude;
pub mod systems;
