// Engine modules: assets and sprite hosts

pub mod assets;
pub mod renderer;
