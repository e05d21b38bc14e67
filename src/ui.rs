//! Native window: egui views over [`AppState`].

mod theme;
mod views;

use std::collections::HashMap;
use std::path::PathBuf;

use egui::{ColorImage, TextureHandle, TextureOptions};

use crate::app::{AppState, Message};
use crate::assets::UploadOpts;
use crate::cart::CartItemId;
use crate::config::AppConfig;
use crate::nav::Screen;
use crate::render::PreviewFrame;

/// eframe application wrapper. Owns the state and the textures derived from it.
pub struct ShopApp {
    state: AppState,
    preview_tex: Option<(u64, TextureHandle)>,
    thumbs: HashMap<CartItemId, TextureHandle>,
}

impl ShopApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        theme::apply(&cc.egui_ctx);
        Self {
            state,
            preview_tex: None,
            thumbs: HashMap::new(),
        }
    }

    fn sync_textures(&mut self, ctx: &egui::Context) {
        match (self.state.preview(), self.state.preview_revision()) {
            (Some(frame), Some(rev)) => {
                if self.preview_tex.as_ref().map(|(r, _)| *r) != Some(rev) {
                    let tex =
                        ctx.load_texture("preview", to_color_image(frame), TextureOptions::LINEAR);
                    self.preview_tex = Some((rev, tex));
                }
            }
            _ => self.preview_tex = None,
        }

        let cart = self.state.cart();
        self.thumbs.retain(|id, _| cart.index_of(*id).is_some());
        for item in cart.items() {
            self.thumbs.entry(item.id()).or_insert_with(|| {
                ctx.load_texture(
                    format!("cart-{}", item.id().0),
                    to_color_image(item.preview()),
                    TextureOptions::LINEAR,
                )
            });
        }
    }

    fn collect_dropped_files(&self, ctx: &egui::Context, out: &mut Vec<Message>) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        for path in dropped {
            if self.state.screen() != Screen::Customize {
                tracing::warn!(path = %path.display(), "drop ignored outside customize screen");
                continue;
            }
            out.push(Message::UploadImage(path));
        }
    }
}

impl eframe::App for ShopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_textures(ctx);

        let mut inbox = Vec::new();
        self.collect_dropped_files(ctx, &mut inbox);
        let textures = views::Textures {
            preview: self.preview_tex.as_ref().map(|(_, t)| t),
            thumbs: &self.thumbs,
        };
        views::show(ctx, &self.state, &textures, &mut inbox);

        if inbox.is_empty() {
            return;
        }
        for msg in inbox {
            self.state.update(msg);
        }
        self.sync_textures(ctx);
        ctx.request_repaint();
    }
}

/// Blocking native file dialog filtered to the accepted image extensions.
pub(crate) fn pick_image_file(opts: &UploadOpts) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Choose an image")
        .add_filter("Image files", opts.extensions.as_slice())
        .pick_file()
}

fn to_color_image(frame: &PreviewFrame) -> ColorImage {
    ColorImage::from_rgba_premultiplied(
        [frame.width as usize, frame.height as usize],
        &frame.data,
    )
}

/// Open the main window and block until it is closed.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let state = AppState::new(&config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    tracing::info!(title = %config.window.title, "opening window");
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(|cc| Ok(Box::new(ShopApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("run native window: {e}"))
}
