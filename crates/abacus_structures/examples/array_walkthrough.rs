//! Array Walkthrough Demo
//!
//! This example walks a pointer and a sliding window over an array:
//! - Builds an array with hex indices and a custom theme
//! - Moves a pointer and a two-element window one step at a time
//! - Updates values in place and records every frame
//!
//! Run with: RUST_LOG=debug cargo run -p abacus_structures --example array_walkthrough

use abacus_animation::{AnimationPreset, Player};
use abacus_core::{Color, DrawCommand, Scene, Vec2};
use abacus_structures::{
    ArrayOptions, MArray, MArrayPointer, MArraySlidingWindow, MVariable, PointerOptions,
    TextOptions, Theme, VariableOptions, WindowOptions,
};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

const THEME: &str = r##"
window_color = "#FC6255"

[body]
fill_color = "#29ABCA"

[index]
color = "#888888"
"##;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let theme = Theme::from_toml_str(THEME)?;
    let mut scene = Scene::new();

    let mut array = MArray::new(
        &mut scene,
        [3, 1, 4, 1, 5],
        ArrayOptions::new()
            .with_hex_display(true)
            .with_index_start(0x100)
            .with_theme(theme),
    )?;
    let mut pointer = MArrayPointer::new(&mut scene, &array, 0, "i", PointerOptions::new())?;
    let mut window = MArraySlidingWindow::new(&mut scene, &array, 0, 2, WindowOptions::new())?;
    let mut sum = MVariable::new(&mut scene, 0, "sum", VariableOptions::new())?;
    scene.shift(sum.group(), Vec2::UP * 2.5)?;

    for id in [array.group(), pointer.group(), window.frame(), sum.group()] {
        scene.add(id)?;
    }

    let mut player = Player::new();
    player.set_fps(10)?;
    player.start_recording();

    let mut total = 0;
    for step in 0..array.len() {
        if step > 0 {
            let slide = pointer.shift_to_elem(&scene, &array, step)?;
            player.play(&mut scene, [slide])?;
        }
        if step + window.size() <= array.len() && step != window.start() {
            let slide = window.shift_to_elem(&scene, &array, step)?;
            player.play(&mut scene, [slide])?;
        }

        total += array.fetch_arr()[step];
        let body = array.fetch_mob_arr()[step].body();
        player.play(&mut scene, [AnimationPreset::highlight(body, Color::GREEN, 300)])?;
        sum.update_value(&mut scene, total)?;
        tracing::info!(step, total, "visited element");
    }

    let highlight = TextOptions::new().with_color(Color::YELLOW);
    array.update_elem_value(&mut scene, 0, total, &highlight)?;
    player.wait(&scene, 500);

    let frames = player.take_frames();
    tracing::info!(
        frames = frames.len(),
        duration_ms = player.clock_ms(),
        "recorded walkthrough"
    );

    for command in scene.display_list().commands() {
        match command {
            DrawCommand::Rect { bounds, fill, .. } => {
                tracing::debug!(?bounds, fill = %fill.to_hex_string(), "rect")
            }
            DrawCommand::Text {
                content, position, ..
            } => tracing::debug!(%content, ?position, "text"),
            DrawCommand::Arrow { start, end, .. } => tracing::debug!(?start, ?end, "arrow"),
        }
    }

    Ok(())
}
