#![warn(clippy::all, rust_2018_idioms)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView};
use region_select::{ExportError, Renderer, RegionStore, Scale, SettingsFile, export};

const USAGE: &str =
    "usage: region-export <settings.json> <image> <canvas-width> <canvas-height> <out-dir> [base-name]";

fn main() {
    env_logger::init();

    if let Err(err) = run(std::env::args().skip(1).collect()) {
        log::error!("{}", err);
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let [settings, image_path, canvas_width, canvas_height, out_dir, rest @ ..] = args.as_slice() else {
        return Err(USAGE.into());
    };
    let base = rest.first().map(String::as_str).unwrap_or("region");
    let canvas = (canvas_width.parse::<u32>()?, canvas_height.parse::<u32>()?);

    let store = RegionStore::new();
    let (_, selected) = SettingsFile::new(settings).load()?.restore(&store);

    let image = image::open(image_path)?;
    let scale = Scale::between(canvas, image.dimensions());
    log::info!("{} regions, scale {:?}", store.count(), scale);

    let (crops, processed_path) = write_outputs(&image, &store, selected, scale, Path::new(out_dir), base)?;

    println!("wrote {} crops and {}", crops.len(), processed_path.display());
    Ok(())
}

/// Write the marker image, then one PNG per enabled region.
///
/// Having no region to crop is not an error: the marker image is still written.
fn write_outputs(
    image: &DynamicImage,
    store: &RegionStore,
    selected: usize,
    scale: Scale,
    out_dir: &Path,
    base: &str,
) -> Result<(Vec<PathBuf>, PathBuf), Box<dyn std::error::Error>> {
    fs::create_dir_all(out_dir)?;

    let mut processed = image.to_rgba8();
    Renderer::default().render_markers(&mut processed, store, selected, scale);
    let processed_path = out_dir.join(format!("{}-markers.png", base));
    processed.save(&processed_path)?;

    let crops = match export::save_crops(image, store, scale, out_dir, base) {
        Ok(written) => written,
        Err(ExportError::NothingToExport) => {
            log::warn!("No enabled regions to crop");
            Vec::new()
        }
        Err(err) => return Err(err.into()),
    };

    Ok((crops, processed_path))
}
