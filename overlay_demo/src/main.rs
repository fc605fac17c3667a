//! Face-enrollment style overlay rendered onto synthetic camera frames.
//!
//! A background thread plays the part of the windowing system and feeds mouse
//! events through a `MouseHandle` while the main loop renders frames.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use frame_overlay::foundation::logging;
use frame_overlay::prelude::*;
use rand::Rng;

const DEFAULT_FRAMES: &str = "120";
const DEFAULT_WIDTH: &str = "640";
const DEFAULT_HEIGHT: &str = "480";
const DEFAULT_OUTPUT: &str = "overlay.png";
const FRAME_TIME: Duration = Duration::from_millis(33);

#[derive(Debug)]
struct DemoConfig {
    config_file: Option<PathBuf>,
    fonts: Vec<String>,
    frames: u32,
    width: u32,
    height: u32,
    output: PathBuf,
}

fn parse_args() -> Result<DemoConfig> {
    let matches = Command::new("overlay_demo")
        .about("Renders an enrollment overlay onto synthetic frames and saves the last one")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("GUI configuration file (.toml or .ron)"),
        )
        .arg(
            Arg::new("font")
                .short('f')
                .long("font")
                .value_name("FILE")
                .help("TrueType/OpenType font, may be repeated")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("frames")
                .short('n')
                .long("frames")
                .value_name("COUNT")
                .help("Number of frames to render")
                .default_value(DEFAULT_FRAMES),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("PIXELS")
                .default_value(DEFAULT_WIDTH),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("PIXELS")
                .default_value(DEFAULT_HEIGHT),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Where to write the last frame")
                .default_value(DEFAULT_OUTPUT),
        )
        .get_matches();

    let number = |name: &str| -> Result<u32> {
        let value = matches.get_one::<String>(name).map_or("", String::as_str);
        value
            .parse()
            .with_context(|| format!("--{name} expects a positive integer, got '{value}'"))
    };

    Ok(DemoConfig {
        config_file: matches.get_one::<String>("config").map(PathBuf::from),
        fonts: matches
            .get_many::<String>("font")
            .map(|fonts| fonts.cloned().collect())
            .unwrap_or_default(),
        frames: number("frames")?,
        width: number("width")?,
        height: number("height")?,
        output: matches
            .get_one::<String>("output")
            .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from),
    })
}

/// Fill `image` with dim noise standing in for a camera frame
fn synthesize_frame(image: &mut RgbImage, rng: &mut impl Rng) {
    for pixel in image.pixels_mut() {
        let base: u8 = rng.gen_range(40..80);
        *pixel = Rgb([base, base.saturating_add(rng.gen_range(0..10)), base]);
    }
}

/// Wander the cursor over the frame and click now and then
fn spawn_mouse(
    handle: MouseHandle,
    width: u32,
    height: u32,
    running: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut rng = rand::thread_rng();
        while running.load(Ordering::Relaxed) {
            let x = rng.gen_range(0..width.max(1)) as i32;
            let y = rng.gen_range(0..height.max(1)) as i32;
            handle.send(MouseEventKind::Move, x, y);

            if rng.gen_bool(0.2) {
                handle.send(MouseEventKind::LeftButtonDown, x, y);
                handle.send(MouseEventKind::LeftButtonUp, x, y);
            }
            thread::sleep(FRAME_TIME * 3);
        }
    })
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let mut config = match &args.config_file {
        Some(path) => GuiConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => GuiConfig::default(),
    };
    config.fonts.extend(args.fonts.iter().cloned());

    logging::init_with_level(&config.log_level);

    let fonts = FontBook::load(&config.fonts)
        .context("No usable font; pass --font or list fonts in the configuration")?;
    let mut gui = Gui::with_config("Face Enrollment", &config).context("Invalid GUI configuration")?;
    let schemas = gui.color_schemas();

    let running = Arc::new(AtomicBool::new(true));
    let mouse = spawn_mouse(gui.mouse_handle(), args.width, args.height, Arc::clone(&running));

    let mut rng = rand::thread_rng();
    let mut image = RgbImage::new(args.width, args.height);
    let font = Font::default();
    let small = Font::default().with_size(0.8).with_thickness(1);
    let mut pictures = 0u32;
    let mut show_boxes = true;

    log::info!("Rendering {} frames at {}x{}", args.frames, args.width, args.height);
    for index in 0..args.frames {
        synthesize_frame(&mut image, &mut rng);

        let mut cycle_schema = false;
        let quit = {
            let mut canvas = ImageCanvas::new(&mut image, &fonts);
            let mut frame = gui.frame(&mut canvas);
            let interval = frame.fps_update_interval();

            frame.label(
                &format!("Frame {index}, {pictures} pictures taken"),
                Point::nw(2, 2),
                true,
                &small,
            );
            frame.fps_counter(Point::new(0.99, 2, Pivot::NorthEast), interval, &small);

            let show = Point::new(2, 0.99, Pivot::SouthWest);
            if frame.checkbox("show_boxes", "Show face box", show, show_boxes, true, &small) {
                show_boxes = !show_boxes;
                log::debug!("Face box {} on frame {index}", if show_boxes { "shown" } else { "hidden" });
            }

            let (width, height) = frame.canvas_size();
            let (w, h) = ((width / 3) as i32, (height / 2) as i32);
            frame.container("face", w, (height / 4) as i32, w, h, show_boxes);

            if frame.button("Take Picture!", Point::new(0.5, 0.99, Pivot::SouthWest), 0, 0, &font) {
                pictures += 1;
                log::info!("Picture {pictures} taken on frame {index}");
            }
            if frame.button("Schema", Point::new(0.99, 0.5, Pivot::NorthEast), 0, 0, &small) {
                cycle_schema = true;
            }
            frame.button("Quit", Point::new(0.99, 0.99, Pivot::SouthEast), 0, 0, &font)
        };

        // The frame borrows the GUI, so schema switches wait until it is dropped
        if cycle_schema {
            let current = schemas
                .iter()
                .position(|name| name == gui.active_color_schema())
                .unwrap_or(0);
            if let Some(name) = schemas.get((current + 1) % schemas.len()) {
                if let Err(err) = gui.set_color_schema(name) {
                    log::warn!("{err}");
                }
            }
        }
        if quit {
            log::info!("Quit pressed on frame {index}");
            break;
        }
        thread::sleep(FRAME_TIME);
    }

    running.store(false, Ordering::Relaxed);
    if mouse.join().is_err() {
        log::warn!("Mouse thread panicked");
    }

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!(
        "Wrote {} (schema '{}', face box {})",
        args.output.display(),
        gui.active_color_schema(),
        if gui.toggle_value("show_boxes").unwrap_or(show_boxes) { "shown" } else { "hidden" }
    );
    Ok(())
}
