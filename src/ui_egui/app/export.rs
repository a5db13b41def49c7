use anyhow::{anyhow, Result};

use super::ScheduleApp;
use crate::services::export::{RasterImage, DEFAULT_EXPORT_FILE_NAME};

/// Image export of the chosen grid.
impl ScheduleApp {
    /// Asks egui for a screenshot; the capture arrives as an input event on
    /// a later frame and is handled by [`ScheduleApp::handle_screenshot`].
    pub(super) fn request_export(&mut self, ctx: &egui::Context) {
        if self.chosen_grid_rect.is_none() {
            self.toasts.error("Nothing to export yet");
            return;
        }
        self.export_pending = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot);
    }

    pub(super) fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if !self.export_pending {
            return;
        }

        let capture = ctx.input(|i| {
            i.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(capture) = capture else {
            return;
        };
        self.export_pending = false;

        let Some(rect) = self.chosen_grid_rect else {
            return;
        };

        let raster = match capture_to_raster(&capture, rect, ctx.pixels_per_point()) {
            Ok(raster) => raster.with_padding(
                self.settings.export_padding,
                self.theme.export_background(),
            ),
            Err(err) => {
                log::error!("Failed to prepare grid image: {:#}", err);
                self.toasts.error("Could not capture the schedule");
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .set_title("Export Schedule Image")
            .set_file_name(DEFAULT_EXPORT_FILE_NAME)
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            return;
        };

        match raster.export_png(&path) {
            Ok(()) => self.toasts.success("Schedule image saved"),
            Err(err) => {
                log::error!("Failed to export grid image: {:#}", err);
                self.toasts.error("Could not save the image");
            }
        }
    }
}

/// Crops a full-window capture to `rect` (in points). The grid may be
/// partly scrolled out of view, so only the visible part is kept.
fn capture_to_raster(
    capture: &egui::ColorImage,
    rect: egui::Rect,
    pixels_per_point: f32,
) -> Result<RasterImage> {
    let [width, height] = capture.size;
    let bounds = egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(width as f32, height as f32) / pixels_per_point,
    );
    let visible = rect.intersect(bounds);
    if !visible.is_positive() {
        return Err(anyhow!("Schedule grid is not visible in the window"));
    }

    let region = capture.region(&visible, Some(pixels_per_point));
    if region.size[0] == 0 || region.size[1] == 0 {
        return Err(anyhow!("Schedule grid is not visible in the window"));
    }
    let pixels = region.pixels.iter().flat_map(|c| c.to_array()).collect();
    RasterImage::from_rgba(region.size[0] as u32, region.size[1] as u32, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Color32, ColorImage, Rect};

    #[test]
    fn test_capture_is_cropped_to_grid() {
        let capture = ColorImage::new([8, 6], Color32::RED);
        let rect = Rect::from_min_max(pos2(1.0, 1.0), pos2(3.0, 4.0));

        let raster = capture_to_raster(&capture, rect, 1.0).unwrap();
        assert_eq!((raster.width(), raster.height()), (2, 3));
        assert_eq!(raster.pixel(0, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_capture_keeps_visible_part_of_scrolled_grid() {
        let capture = ColorImage::new([8, 6], Color32::RED);
        let rect = Rect::from_min_max(pos2(1.0, 2.0), pos2(3.0, 10.0));

        let raster = capture_to_raster(&capture, rect, 1.0).unwrap();
        assert_eq!((raster.width(), raster.height()), (2, 4));
    }

    #[test]
    fn test_capture_respects_pixels_per_point() {
        let capture = ColorImage::new([8, 6], Color32::RED);
        let rect = Rect::from_min_max(pos2(1.0, 1.0), pos2(6.0, 6.0));

        let raster = capture_to_raster(&capture, rect, 2.0).unwrap();
        assert_eq!((raster.width(), raster.height()), (6, 4));
    }

    #[test]
    fn test_capture_of_hidden_grid_is_an_error() {
        let capture = ColorImage::new([8, 6], Color32::RED);
        let rect = Rect::from_min_max(pos2(10.0, 10.0), pos2(12.0, 12.0));

        assert!(capture_to_raster(&capture, rect, 1.0).is_err());
    }
}
