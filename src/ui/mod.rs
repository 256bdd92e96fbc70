pub mod battle_scene;
pub mod setup;
