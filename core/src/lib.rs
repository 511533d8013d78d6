pub mod inventory;
pub mod record;
pub mod render;
pub mod state;
