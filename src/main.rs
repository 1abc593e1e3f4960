use qibla_compass::acquisition::ConsoleNotifier;
use qibla_compass::app::CompassController;
use qibla_compass::prefs::{MemoryPreferenceStore, Theme, ThemeManager};
use qibla_compass::sensors::{MockLocationProvider, MockOrientationProvider};
use qibla_compass::utils::config::CompassConfig;

/// Scripted walk through a full compass session using the mock providers:
/// initial acquisition, heading updates, calibration and a refresh.
fn run_demo(config: &CompassConfig, latitude: f64, longitude: f64) -> Result<(), Box<dyn std::error::Error>> {
    let location = MockLocationProvider::new();
    let orientation = MockOrientationProvider::new();

    // Initial fix plus one refresh, slightly displaced
    location.push_position(latitude, longitude);
    location.push_position(latitude + 0.01, longitude - 0.01);

    let mut theme = ThemeManager::new(Box::new(MemoryPreferenceStore::new()), Theme::Light);

    let mut controller = CompassController::with_config(
        Box::new(location.clone()),
        Box::new(orientation.clone()),
        Box::new(ConsoleNotifier),
        config,
    )?;

    controller.start();

    let state = controller.acquisition();
    if let Some(error) = state.error {
        eprintln!("Acquisition failed: {}", error);
        return Err(error.into());
    }

    if let Some((lat, lon)) = controller.formatted_position() {
        println!("Position:  {} / {}", lat, lon);
    }
    if let Some(distance) = state.distance_km() {
        println!("Distance:  {} km", distance);
    }
    if let Some(bearing) = state.bearing_deg() {
        println!("Bearing:   {:.1}° from north", bearing);
    }
    println!(
        "Rotation:  {:.1}° (no heading yet)",
        controller.rotation().unwrap_or(0.0)
    );

    // A few heading samples as the device turns
    for alpha in [350.0, 310.0, 270.0] {
        orientation.push_alpha(alpha);
        controller.tick();
        println!(
            "Heading {:>5.1}° -> rotation {:.1}°",
            controller.acquisition().heading_deg.unwrap_or(0.0),
            controller.rotation().unwrap_or(0.0)
        );
    }

    controller.calibrate();
    println!(
        "Calibrating: {} (dial spinning: {})",
        controller.calibration().active,
        controller.dial_spinning()
    );

    controller.refresh();
    if let Some(distance) = controller.acquisition().distance_km() {
        println!("Distance after refresh: {} km", distance);
    }

    println!("Theme: {}", theme.theme().as_str());
    theme.toggle()?;
    println!("Theme after toggle: {}", theme.theme().as_str());

    controller.shutdown();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = CompassConfig::default();
    // Somewhere in London unless told otherwise
    let mut latitude = 51.5074;
    let mut longitude = -0.1278;

    let mut index = 1;
    while index < args.len() {
        match args[index].as_str() {
            "--config" => {
                let path = args.get(index + 1).ok_or("--config requires a path")?;
                config = CompassConfig::from_file(path)?;
                index += 2;
            }
            "--from" => {
                latitude = args
                    .get(index + 1)
                    .ok_or("--from requires <lat> <lon>")?
                    .parse::<f64>()?;
                longitude = args
                    .get(index + 2)
                    .ok_or("--from requires <lat> <lon>")?
                    .parse::<f64>()?;
                index += 3;
            }
            other => {
                eprintln!(
                    "Usage: {} [--config <path>] [--from <lat> <lon>]",
                    args.get(0).map_or("qibla-compass", |s| s.as_str())
                );
                return Err(format!("Unknown argument: {}", other).into());
            }
        }
    }

    run_demo(&config, latitude, longitude)
}
