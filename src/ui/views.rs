use std::collections::HashMap;

use egui::load::SizedTexture;
use egui::{Align, Color32, Layout, RichText, TextureHandle, Ui, Vec2};

use crate::app::{AppState, Message};
use crate::cart::CartItemId;
use crate::customize::{PRODUCT_SWATCHES, Size, Swatch, TEXT_SWATCHES};
use crate::foundation::core::Rgba8;
use crate::nav::Screen;
use crate::ui::theme;

const THUMB_PX: f32 = 64.0;

/// GPU textures derived from the state's rasters.
pub(crate) struct Textures<'a> {
    pub(crate) preview: Option<&'a TextureHandle>,
    pub(crate) thumbs: &'a HashMap<CartItemId, TextureHandle>,
}

/// Draw the current screen. Interactions are pushed to `out`; nothing here mutates state.
pub(crate) fn show(
    ctx: &egui::Context,
    state: &AppState,
    textures: &Textures<'_>,
    out: &mut Vec<Message>,
) {
    let screen = state.screen();
    if screen != Screen::Home {
        header(ctx, state, out);
    }
    egui::CentralPanel::default().show(ctx, |ui| match screen {
        Screen::Home => home(ui, out),
        Screen::Catalog => catalog(ui, state, out),
        Screen::Customize => customize(ui, state, textures, out),
        Screen::Cart => cart(ui, state, textures, out),
        Screen::Checkout => checkout(ui),
    });
}

fn header(ctx: &egui::Context, state: &AppState, out: &mut Vec<Message>) {
    egui::TopBottomPanel::top("header")
        .frame(egui::Frame::side_top_panel(&ctx.style()).fill(Color32::WHITE))
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(state.screen().title())
                        .size(26.0)
                        .strong()
                        .color(theme::TEXT_DARK),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("← Back").clicked() {
                        out.push(Message::Back);
                    }
                    let n = state.cart().len();
                    if n > 0 {
                        ui.label(RichText::new(format!("🛒 {n}")).color(theme::PRIMARY));
                    }
                });
            });
            ui.add_space(6.0);
        });
}

fn home(ui: &mut Ui, out: &mut Vec<Message>) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.35);
        ui.label(
            RichText::new("SnapShop")
                .size(48.0)
                .strong()
                .color(theme::PRIMARY),
        );
        ui.add_space(24.0);
        if ui.add(theme::primary_button("Browse Products")).clicked() {
            out.push(Message::Browse);
        }
    });
}

fn catalog(ui: &mut Ui, state: &AppState, out: &mut Vec<Message>) {
    let catalog = state.catalog();
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(20.0);
        egui::Grid::new("catalog-grid")
            .num_columns(3)
            .spacing([20.0, 20.0])
            .show(ui, |ui| {
                for (id, product) in catalog.iter() {
                    egui::Frame::group(ui.style())
                        .fill(Color32::WHITE)
                        .stroke(egui::Stroke::new(1.0, theme::CARD_BORDER))
                        .show(ui, |ui| {
                            ui.set_min_width(220.0);
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(&product.name).size(16.0).strong());
                                ui.label(
                                    RichText::new(catalog.format_price(product.price))
                                        .size(14.0)
                                        .strong()
                                        .color(theme::PRIMARY),
                                );
                                ui.label(
                                    RichText::new(format!(
                                        "{} · {}",
                                        product.category.label(),
                                        product.description
                                    ))
                                    .weak(),
                                );
                                ui.add_space(6.0);
                                if ui.add(theme::primary_button("Customize")).clicked() {
                                    out.push(Message::PickProduct(id));
                                }
                            });
                        });
                    if (id.0 + 1) % 3 == 0 {
                        ui.end_row();
                    }
                }
            });
    });
}

fn customize(ui: &mut Ui, state: &AppState, textures: &Textures<'_>, out: &mut Vec<Message>) {
    let c = state.customization();
    ui.columns(2, |cols| {
        cols[0].vertical_centered(|ui| {
            if let Some(product) = c.product() {
                ui.label(RichText::new(&product.name).size(20.0).strong());
                ui.label(
                    RichText::new(state.catalog().format_price(product.price))
                        .color(theme::PRIMARY),
                );
            }
            ui.add_space(10.0);
            if let Some(tex) = textures.preview {
                ui.add(egui::Image::from_texture(SizedTexture::new(
                    tex.id(),
                    tex.size_vec2(),
                )));
            }
        });

        egui::ScrollArea::vertical().show(&mut cols[1], |ui| {
            egui::Frame::group(ui.style())
                .fill(Color32::WHITE)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    if ui.add(theme::primary_button("Upload Image")).clicked() {
                        if let Some(path) = super::pick_image_file(state.upload_opts()) {
                            out.push(Message::UploadImage(path));
                        }
                    }
                    ui.label(RichText::new("or drop an image onto the window").weak());
                    ui.add_space(10.0);

                    ui.label("Overlay text:");
                    let mut text = c.overlay_text().to_owned();
                    if ui.text_edit_singleline(&mut text).changed() {
                        out.push(Message::SetOverlayText(text));
                    }
                    ui.add_space(10.0);

                    ui.label("Text Color:");
                    swatch_row(ui, &TEXT_SWATCHES, c.text_color(), |color| {
                        out.push(Message::SetTextColor(color))
                    });
                    ui.add_space(10.0);

                    ui.label("Product Color:");
                    swatch_row(ui, &PRODUCT_SWATCHES, c.product_color(), |color| {
                        out.push(Message::SetProductColor(color))
                    });
                    ui.add_space(10.0);

                    ui.label("Size:");
                    ui.horizontal(|ui| {
                        for size in Size::ALL {
                            if ui.radio(c.size() == size, size.label()).clicked() {
                                out.push(Message::SetSize(size));
                            }
                        }
                    });
                    ui.add_space(16.0);

                    if ui.add(theme::primary_button("Add to Cart")).clicked() {
                        out.push(Message::AddToCart);
                    }
                });
        });
    });
}

fn swatch_row(ui: &mut Ui, swatches: &[Swatch], current: Rgba8, mut on_pick: impl FnMut(Rgba8)) {
    ui.horizontal(|ui| {
        for sw in swatches {
            let selected = sw.color == current;
            if ui
                .add(theme::swatch_button(sw.color, selected))
                .on_hover_text(sw.name)
                .clicked()
            {
                on_pick(sw.color);
            }
        }
    });
}

fn cart(ui: &mut Ui, state: &AppState, textures: &Textures<'_>, out: &mut Vec<Message>) {
    let cart = state.cart();
    let catalog = state.catalog();
    if cart.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("Your cart is empty").size(24.0).strong());
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(20.0);
        for item in cart.items() {
            egui::Frame::group(ui.style())
                .fill(Color32::WHITE)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        if let Some(tex) = textures.thumbs.get(&item.id()) {
                            ui.add(
                                egui::Image::from_texture(SizedTexture::new(
                                    tex.id(),
                                    tex.size_vec2(),
                                ))
                                .fit_to_exact_size(Vec2::splat(THUMB_PX)),
                            );
                        }
                        ui.label(format!(
                            "{} ({}) - {}",
                            item.product().name,
                            item.size(),
                            catalog.format_price(item.price())
                        ));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.button("Remove").clicked() {
                                out.push(Message::RemoveCartItem(item.id()));
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        ui.label(
            RichText::new(format!("Total: {}", catalog.format_price(cart.total())))
                .size(28.0)
                .strong()
                .color(theme::PRIMARY),
        );
        ui.add_space(8.0);
        if ui.add(theme::primary_button("Proceed to Checkout")).clicked() {
            out.push(Message::Checkout);
        }
    });
}

fn checkout(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(
            RichText::new("Processing your order...")
                .size(28.0)
                .strong(),
        );
        ui.add_space(16.0);
        ui.add(
            egui::ProgressBar::new(0.0)
                .desired_width(400.0)
                .show_percentage()
                .animate(true),
        );
    });
}
