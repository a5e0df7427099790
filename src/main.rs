use anyhow::{Context, Result};
use directional_sprites::engine::assets::AssetLoader;
use directional_sprites::{
    create_with_animations, AnimatedCharacter, AnimationConfig, AssetProvider, Direction,
    FileAssetProvider, HeadlessSprite, MemoryAssetProvider, RasterImage, SheetLayout, SpriteHost,
};
use log::{info, warn};
use std::path::Path;

/// Generated sheets used when the asset directory has none:
/// (name, columns, rows, speed)
const PLACEHOLDER_SHEETS: [(&str, u32, u32, f32); 4] = [
    ("idle", 4, 4, 0.08),
    ("walk", 6, 4, 0.15),
    ("run", 12, 4, 0.25),
    ("hurt", 3, 1, 0.1),
];

const DEFAULT_ASSET_DIR: &str = "assets/characters/";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting directional sprite demo...");

    let asset_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ASSET_DIR.to_string());
    let frame_size = match std::env::var("SPRITE_FRAME_SIZE") {
        Ok(value) => value
            .parse::<u32>()
            .with_context(|| format!("Invalid SPRITE_FRAME_SIZE: {}", value))?,
        Err(_) => 64,
    };

    let layout = SheetLayout::new(frame_size, frame_size);
    let discovered = discover_sheets(&asset_dir)?;

    let (mut character, loaded) = if discovered.is_empty() {
        info!("No sheets in {}, using generated placeholders", asset_dir);
        let (provider, configs) = placeholder_sheets(frame_size);
        load(&provider, configs, &layout)
    } else {
        info!("Found {} sheets in {}", discovered.len(), asset_dir);
        load(&FileAssetProvider::new(&asset_dir), discovered, &layout)
    };

    if loaded == 0 {
        warn!("No animations loaded, nothing to play");
        return Ok(());
    }

    run_demo(&mut character)?;

    info!("Demo finished");
    Ok(())
}

fn load<P: AssetProvider>(
    provider: &P,
    configs: Vec<(String, AnimationConfig)>,
    layout: &SheetLayout,
) -> (AnimatedCharacter<HeadlessSprite>, usize) {
    let (character, result) = pollster::block_on(create_with_animations(
        HeadlessSprite::new(),
        provider,
        configs,
        layout,
        "",
    ));

    for failure in &result.failed {
        warn!("  {}: {}", failure.name, failure.reason);
    }

    (character, result.succeeded.len())
}

/// One config per PNG in the asset directory
fn discover_sheets(asset_dir: &str) -> Result<Vec<(String, AnimationConfig)>> {
    let images = AssetLoader::new(asset_dir)
        .list_images("")
        .with_context(|| format!("Failed to list {}", asset_dir))?;

    Ok(images
        .iter()
        .filter_map(|file| {
            let path = Path::new(file);
            match path.extension() {
                Some(ext) if ext == "png" => path.file_stem(),
                _ => None,
            }
        })
        .map(|stem| (stem.to_string_lossy().to_string(), AnimationConfig::default()))
        .collect())
}

fn placeholder_sheets(frame_size: u32) -> (MemoryAssetProvider, Vec<(String, AnimationConfig)>) {
    let mut provider = MemoryAssetProvider::new();
    let mut configs = Vec::new();

    for (name, columns, rows, speed) in PLACEHOLDER_SHEETS {
        let path = format!("{}.png", name);
        let image = RasterImage::from_color(
            columns * frame_size,
            rows * frame_size,
            [200, 120, 40, 255],
            &path,
        );
        provider.insert(path, image);
        configs.push((name.to_string(), AnimationConfig::new(speed)));
    }

    (provider, configs)
}

/// Walk the character through every animation and direction
fn run_demo(character: &mut AnimatedCharacter<HeadlessSprite>) -> Result<()> {
    for name in character.available_animations() {
        character.change_animation(&name, None)?;
        character.host_mut().update(20.0);
        report(character);

        for direction in character.available_directions(&name) {
            character.change_direction(direction)?;
            character.host_mut().update(5.0);
            report(character);
        }

        let turned = character.current_direction().opposite();
        character.change_direction(turned)?;
        report(character);
    }

    character.pause();
    info!("Paused on frame {}", character.host().current_frame());

    // Unknown names are reported and leave the character untouched
    if let Err(err) = character.change_animation("missing", Some(Direction::Up)) {
        info!("Rejected transition: {}", err);
    }

    Ok(())
}

fn report(character: &AnimatedCharacter<HeadlessSprite>) {
    info!(
        "{} facing {}: frame {}",
        character.current_animation().unwrap_or("-"),
        character.current_direction(),
        character.host().current_frame()
    );
}
