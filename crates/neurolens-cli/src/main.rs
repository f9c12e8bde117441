use argh::FromArgs;
use std::path::PathBuf;

use neurolens_core::{apply_pipeline, legacy_pipeline, load_png, save_png, TransformOp};

#[derive(FromArgs)]
/// Apply a sequence of geometric transforms to an RGBA PNG image
struct Args {
    /// path to the input PNG (8-bit RGBA)
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to write the transformed PNG to
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// transform to apply, repeatable and applied in order:
    /// resize=WxH, crop=X,Y,W,H, flip, rotate=DEG, rotate-gather=DEG
    #[argh(option)]
    op: Vec<TransformOp>,

    /// run the fixed legacy sequence (halve, center crop, rotate 45, flip)
    /// before any --op
    #[argh(switch)]
    legacy: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let image = load_png(&args.input)?;
    log::info!(
        "loaded {} ({}x{})",
        args.input.display(),
        image.width(),
        image.height()
    );

    let mut ops = Vec::new();
    if args.legacy {
        ops.extend(legacy_pipeline(image.width(), image.height()));
    }
    ops.extend_from_slice(&args.op);

    if ops.is_empty() {
        log::warn!("no transforms given, writing the input unchanged");
    }
    for op in &ops {
        log::info!("transform: {op}");
    }

    let result = apply_pipeline(&image, &ops)?;
    // the source buffer is no longer needed
    image.release();

    save_png(&args.output, &result)?;
    log::info!(
        "saved {} ({}x{})",
        args.output.display(),
        result.width(),
        result.height()
    );

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    run(&args).inspect_err(|e| log::error!("{e}"))
}
