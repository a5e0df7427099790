// Game-side systems built on the engine

pub mod characters;
