use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use chrono::{SecondsFormat, Utc};
use nimbus_engine::logging::{self, LoggingConfig};
use nimbus_engine::{ExportFormat, Exporter, GradientKind, random};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Export size presets, matching common wallpaper targets.
const PRESETS: &[(&str, u32, u32)] = &[
    ("HD 1080p", 1920, 1080),
    ("2K QHD", 2560, 1440),
    ("4K UHD", 3840, 2160),
    ("Ultrawide", 3440, 1440),
    ("5K", 5120, 2880),
    ("Square 1:1", 3000, 3000),
];

const DEFAULT_QUALITY: f32 = 0.95;

/// Command line shape. All arguments are optional and order-free; each one
/// is recognized by its form.
struct StudioArgs {
    /// One kind, or all three when absent.
    kind: Option<GradientKind>,
    width: u32,
    height: u32,
    format: ExportFormat,
    /// Seeds the generator so a liked wallpaper can be re-rendered.
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    // Startup banner, printed before any rendering starts.
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          NIMBUS STUDIO v0.1            ║");
    println!("  ║   cpu rasterizer  ·  nimbus-engine     ║");
    println!("  ╠════════════════════════════════════════╣");
    println!("  ║  Dreaming up wallpapers...             ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    logging::init_logging(LoggingConfig::default());

    let args = parse_args()?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let out_dir = Path::new("exports");
    fs::create_dir_all(out_dir).context("creating the exports directory")?;
    log::debug!("export directory {}", out_dir.display());

    println!(
        "  {}x{} {} at quality {DEFAULT_QUALITY}{}",
        args.width,
        args.height,
        args.format.extension(),
        match args.seed {
            Some(seed) => format!(", seed {seed}"),
            None => String::new(),
        }
    );
    println!();

    let kinds = match args.kind {
        Some(kind) => vec![kind],
        None => vec![GradientKind::Linear, GradientKind::Radial, GradientKind::Mesh],
    };

    let mut exporter = Exporter::new();
    for kind in kinds {
        let gradient = random::gradient_with(&mut rng, kind);
        let image =
            exporter.export(&gradient, args.width, args.height, args.format, DEFAULT_QUALITY)?;
        let path = out_dir.join(export_filename(image.width, image.height, image.format));
        fs::write(&path, &image.bytes)
            .with_context(|| format!("writing {}", path.display()))?;
        let label = format!("{kind:?}");
        println!("  {label:<7} >  {}  ({} KiB)", path.display(), image.bytes.len() / 1024);
    }

    println!();
    println!("  Done. Preset sizes to try as WIDTHxHEIGHT:");
    for (name, w, h) in PRESETS {
        println!("    {name:<12} {w}x{h}");
    }
    println!();
    Ok(())
}

/// Recognizes each argument by shape: a kind name, `WIDTHxHEIGHT`, a format
/// name, or a bare integer seed.
fn parse_args() -> anyhow::Result<StudioArgs> {
    let (_, default_w, default_h) = PRESETS[0];
    let mut args = StudioArgs {
        kind: None,
        width: default_w,
        height: default_h,
        format: ExportFormat::Png,
        seed: None,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "linear" => args.kind = Some(GradientKind::Linear),
            "radial" => args.kind = Some(GradientKind::Radial),
            "mesh" => args.kind = Some(GradientKind::Mesh),
            "png" => args.format = ExportFormat::Png,
            "jpeg" | "jpg" => args.format = ExportFormat::Jpeg,
            "webp" => args.format = ExportFormat::Webp,
            other => {
                if let Some((w, h)) = parse_size(other) {
                    args.width = w;
                    args.height = h;
                } else if let Ok(seed) = other.parse::<u64>() {
                    args.seed = Some(seed);
                } else {
                    bail!(
                        "unrecognized argument {other:?} \
                         (expected a kind, WIDTHxHEIGHT, a format, or a seed)"
                    );
                }
            }
        }
    }
    Ok(args)
}

fn parse_size(arg: &str) -> Option<(u32, u32)> {
    let (w, h) = arg.split_once(['x', 'X'])?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

/// `gradient-{w}x{h}-{timestamp}.{ext}`, with the timestamp flattened so it
/// is safe in filenames on every platform.
fn export_filename(width: u32, height: u32, format: ExportFormat) -> String {
    let stamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("gradient-{width}x{height}-{stamp}.{}", format.extension())
}
