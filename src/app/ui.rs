use super::FileCleanerApp;
use crate::utils::file_size::format_size;
use eframe::egui::{self, Align, Color32, RichText};
use rfd::FileDialog;

/// Advisory picker filter only; nothing is enforced on selection.
const DOCUMENT_EXTENSIONS: [&str; 4] = ["txt", "pdf", "docx", "pptx"];

impl FileCleanerApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("File Cleaner");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Upload documents and download the cleaned result")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);

                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            if ui.button("📁 Select Files").clicked() {
                                if let Some(paths) = FileDialog::new()
                                    .add_filter("Documents", &DOCUMENT_EXTENSIONS)
                                    .add_filter("All files", &["*"])
                                    .pick_files()
                                {
                                    self.add_files(paths);
                                }
                            }
                            if self.state.files.is_empty() {
                                ui.label(
                                    RichText::new("No files selected")
                                        .color(ui.visuals().text_color().gamma_multiply(0.6)),
                                );
                            } else {
                                ui.label(format!("{} file(s) queued", self.state.files.len()));
                            }
                        });

                        if !self.state.files.is_empty() {
                            ui.add_space(8.0);
                            for file in &self.state.files {
                                ui.horizontal(|ui| {
                                    ui.label("📄");
                                    ui.label(&file.name);
                                    ui.label(
                                        RichText::new(format_size(file.size))
                                            .color(ui.visuals().text_color().gamma_multiply(0.6)),
                                    );
                                });
                            }
                        }
                    });

                    ui.add_space(20.0);

                    ui.vertical_centered(|ui| {
                        ui.add_enabled_ui(!self.state.is_cleaning, |ui| {
                            let button = egui::Button::new(self.state.submit_label())
                                .min_size(egui::vec2(200.0, 40.0));
                            if ui.add(button).clicked() {
                                self.start_clean();
                            }
                        });

                        if !self.state.files.is_empty() && !self.state.is_cleaning {
                            ui.add_space(5.0);
                            if ui.button("🗑 Clear All").clicked() {
                                self.clear_queue();
                            }
                        }
                    });

                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
            });
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.state.error_message {
            ui.vertical_centered(|ui| {
                ui.colored_label(Color32::from_rgb(220, 50, 50), error);
            });
        } else if let Some(status) = &self.state.status_message {
            ui.vertical_centered(|ui| {
                ui.colored_label(Color32::from_rgb(0, 180, 0), status);
            });
        }
    }
}
