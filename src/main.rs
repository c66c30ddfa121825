// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command line entry point: run a headless crop session.

use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, bail, Result};
use clap::Parser;

use imcrop::app::{update, view, AppMessage, AppModel, UpdateResult};
use imcrop::config::AppConfig;
use imcrop::domain::selection::{Ratio, Rect};

/// Select a region of an image and save it as `<name>.resized.png`.
#[derive(Debug, Parser)]
#[command(name = "imcrop", version, about)]
struct Args {
    /// Image to crop.
    file: Option<PathBuf>,

    /// Aspect ratio as W:H (stored for the next session).
    #[arg(long)]
    ratio: Option<Ratio>,

    /// Lock the selection to the aspect ratio.
    #[arg(long, conflicts_with = "free")]
    lock: bool,

    /// Do not lock the selection to the aspect ratio.
    #[arg(long)]
    free: bool,

    /// Selection on the displayed image as X,Y,W,H. Defaults to the
    /// initial selector (top-left, half the displayed size).
    #[arg(long, value_parser = parse_selection)]
    select: Option<Rect>,

    /// Use this config file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not write the selector preferences back on exit.
    #[arg(long)]
    no_save_config: bool,
}

fn parse_selection(s: &str) -> Result<Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in selection: {e}"))?;
    match parts.as_slice() {
        [x, y, w, h] => Ok(Rect::new(*x, *y, *w, *h)),
        _ => Err(format!("expected X,Y,W,H, got '{s}'")),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config_path = args.config.clone().or_else(AppConfig::default_path);
    let config = match &config_path {
        Some(path) => AppConfig::load(path).unwrap_or_else(|e| {
            log::warn!("{e:#}; using default settings");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };

    let Some(file) = args.file else {
        bail!("no input image given");
    };

    let mut model = AppModel::new(config);
    model.open(&file);
    if model.load_failed {
        bail!(
            "{}",
            model.error.take().unwrap_or_else(|| "Error loading image".into())
        );
    }

    if let Some(ratio) = args.ratio {
        update(&mut model, AppMessage::SetRatio(ratio));
    }
    if args.lock || args.free {
        update(&mut model, AppMessage::SetFixRatio(args.lock));
    }
    if let Some(rect) = args.select {
        let message = AppMessage::Select {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        };
        if update(&mut model, message) == UpdateResult::None {
            bail!("selection {:?} does not fit the displayed image", rect.as_tuple());
        }
    }

    if let Some(scene) = view::view(&model) {
        let (w, h) = scene.surface();
        log::debug!("Selection on {w}x{h} surface: {:?}", scene.quads.first().map(|q| q.bounds));
    }

    let result = match update(&mut model, AppMessage::Save) {
        UpdateResult::Saved(path) => {
            if let Some(info) = &model.info {
                log::info!("{info}");
            }
            println!("{}", path.display());
            Ok(())
        }
        _ => Err(anyhow!(
            "{}",
            model.error.clone().unwrap_or_else(|| "save failed".into())
        )),
    };

    model.sync_config();
    if let (Some(path), false) = (&config_path, args.no_save_config) {
        if let Err(e) = model.config.save(path) {
            log::warn!("Could not save settings: {e:#}");
        }
    }

    result
}
