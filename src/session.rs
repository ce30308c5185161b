// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The annotation session.
//!
//! A session walks an [`ImageSet`] one image at a time, collects the
//! clicked polygon points for the image on screen and writes them to the
//! image's sidecar file on request. Rendering and user messages go
//! through a [`Surface`], so the session runs the same under egui and
//! under test.
//!
//! Points belong to the image they were clicked on. Navigating away
//! drops them; only an explicit save persists them.

use crate::config::AppConfig;
use crate::io::{media, serialization};
use crate::models::annotation::{AnnotationRecord, Point};
use crate::models::image_set::ImageSet;
use crate::ui::surface::{Notice, Surface};
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Input accepted by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RecordPoint(Point),
    Clear,
    Save,
    Next,
    Previous,
}

/// What is already on disk for the current image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSummary {
    pub class_name: String,
    pub point_count: usize,
}

impl SavedSummary {
    fn from_record(record: &AnnotationRecord) -> Option<Self> {
        record.polygon_data.first().map(|entry| Self {
            class_name: entry.class_name.clone(),
            point_count: entry.position.len(),
        })
    }
}

/// Annotation state for one folder of images.
pub struct Session<S: Surface> {
    images: ImageSet,
    cursor: usize,
    points: Vec<Point>,
    label: String,
    saved: Option<SavedSummary>,
    config: AppConfig,
    surface: S,
}

impl<S: Surface> Session<S> {
    /// Create a session positioned on the first image. Nothing is loaded
    /// until [`Session::load_current`] is called.
    pub fn new(images: ImageSet, config: AppConfig, surface: S) -> Self {
        Self {
            images,
            cursor: 0,
            points: Vec::new(),
            label: config.default_label.clone(),
            saved: None,
            config,
            surface,
        }
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Label that the next save will use.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn saved_summary(&self) -> Option<&SavedSummary> {
        self.saved.as_ref()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.images.get(self.cursor)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Dispatch one input command. `label_field` is the current text of the
    /// label entry, consulted on navigation.
    pub fn apply(&mut self, command: Command, label_field: &str) {
        match command {
            Command::RecordPoint(point) => self.record_point(point),
            Command::Clear => self.clear(),
            Command::Save => self.save_and_report(),
            Command::Next => {
                self.next(label_field);
            }
            Command::Previous => {
                self.previous(label_field);
            }
        }
    }

    /// Clear the point list and show the image under the cursor.
    ///
    /// A missing or undecodable file is reported and leaves the canvas
    /// empty; the session stays usable.
    pub fn load_current(&mut self) {
        self.clear();

        let Some(path) = self.current_path().map(Path::to_path_buf) else {
            self.surface.clear_image();
            self.saved = None;
            return;
        };

        match media::load_image(&path) {
            Ok(image) => {
                log::info!(
                    "Showing image {}/{}: {} ({}x{})",
                    self.cursor + 1,
                    self.images.len(),
                    path.display(),
                    image.width,
                    image.height
                );
                self.surface.show_image(&image);
            }
            Err(e) => {
                log::error!("{:#}", e);
                self.surface.clear_image();
                self.surface.notify(Notice::error(format!("{:#}", e)));
            }
        }

        self.saved = self.read_saved(&path);
    }

    /// Append a clicked point and mark it on the canvas.
    pub fn record_point(&mut self, point: Point) {
        self.points.push(point);
        self.surface.draw_marker(point);
        log::debug!(
            "Added point ({}, {}), total points: {}",
            point.x,
            point.y,
            self.points.len()
        );
    }

    /// Drop every point of the current image and erase the markers.
    pub fn clear(&mut self) {
        self.points.clear();
        self.surface.clear_markers();
    }

    /// Write the current points under the current label to the image's
    /// sidecar, replacing any earlier file.
    ///
    /// Points, label and cursor are untouched either way.
    pub fn save(&mut self) -> Result<PathBuf> {
        let path = self.write_current()?;
        self.saved = Some(SavedSummary {
            class_name: self.label.clone(),
            point_count: self.points.len(),
        });
        Ok(path)
    }

    /// Save and tell the user how it went.
    pub fn save_and_report(&mut self) {
        match self.save() {
            Ok(path) => {
                log::info!("Coordinates saved to {}", path.display());
                self.surface
                    .notify(Notice::info(format!("Coordinates saved to {}", path.display())));
            }
            Err(e) => {
                log::error!("Save failed: {:#}", e);
                self.surface
                    .notify(Notice::error(format!("Save failed: {:#}", e)));
            }
        }
    }

    /// Move to the next image, if any. Unsaved points are discarded.
    ///
    /// Returns whether the cursor moved.
    pub fn next(&mut self, label_field: &str) -> bool {
        if self.cursor + 1 >= self.images.len() {
            return false;
        }
        self.cursor += 1;
        self.after_move(label_field);
        true
    }

    /// Move to the previous image, if any. Unsaved points are discarded.
    ///
    /// Returns whether the cursor moved.
    pub fn previous(&mut self, label_field: &str) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.after_move(label_field);
        true
    }

    fn after_move(&mut self, label_field: &str) {
        if !self.points.is_empty() {
            log::info!("Discarding {} unsaved points", self.points.len());
        }
        self.load_current();
        self.label = self.config.label_or_default(label_field);
    }

    fn write_current(&self) -> Result<PathBuf> {
        let image_path = self
            .current_path()
            .ok_or_else(|| anyhow!("No image is loaded"))?;
        let path = serialization::sidecar_path(image_path, &self.config.data_extension);
        let record = AnnotationRecord::polygon(&self.label, &self.points);
        serialization::write_record(&record, &path)?;
        Ok(path)
    }

    fn read_saved(&self, image_path: &Path) -> Option<SavedSummary> {
        let path = serialization::sidecar_path(image_path, &self.config.data_extension);
        if !path.is_file() {
            return None;
        }
        match serialization::read_record(&path) {
            Ok(record) => SavedSummary::from_record(&record),
            Err(e) => {
                log::warn!("{:#}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::media::LoadedImage;

    /// Surface that records what the session asked of it.
    #[derive(Default)]
    struct RecordingSurface {
        images_shown: usize,
        image_visible: bool,
        markers: Vec<Point>,
        notices: Vec<Notice>,
    }

    impl Surface for RecordingSurface {
        fn show_image(&mut self, _image: &LoadedImage) {
            self.images_shown += 1;
            self.image_visible = true;
        }

        fn clear_image(&mut self) {
            self.image_visible = false;
        }

        fn draw_marker(&mut self, point: Point) {
            self.markers.push(point);
        }

        fn clear_markers(&mut self) {
            self.markers.clear();
        }

        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "seglabel-session-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Session over `count` small PNGs in a fresh folder, first image loaded.
    fn session_with_images(name: &str, count: usize) -> (Session<RecordingSurface>, PathBuf) {
        let dir = scratch_dir(name);
        let paths: Vec<PathBuf> = (0..count)
            .map(|i| {
                let path = dir.join(format!("img_{:03}.png", i));
                image::RgbaImage::new(8, 8).save(&path).unwrap();
                path
            })
            .collect();

        let config = AppConfig {
            image_extension: "png".to_string(),
            ..AppConfig::default()
        };
        let mut session = Session::new(
            ImageSet::from_paths(paths),
            config,
            RecordingSurface::default(),
        );
        session.load_current();
        (session, dir)
    }

    fn car_points() -> Vec<Point> {
        vec![Point::new(10, 10), Point::new(20, 10), Point::new(20, 20)]
    }

    #[test]
    fn test_initial_load_shows_first_image() {
        let (session, dir) = session_with_images("initial", 2);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.surface().images_shown, 1);
        assert!(session.surface().image_visible);
        assert_eq!(session.label(), "default_class");
        assert!(session.saved_summary().is_none());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_points_recorded_in_click_order() {
        let (mut session, dir) = session_with_images("order", 1);
        let clicks = vec![
            Point::new(5, 5),
            Point::new(1, 9),
            Point::new(5, 5),
            Point::new(-3, 700),
        ];
        for point in &clicks {
            session.apply(Command::RecordPoint(*point), "");
        }

        assert_eq!(session.points(), clicks.as_slice());
        assert_eq!(session.surface().markers, clicks);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_clear_empties_points_and_markers() {
        let (mut session, dir) = session_with_images("clear", 1);
        for point in car_points() {
            session.record_point(point);
        }
        session.apply(Command::Clear, "");

        assert!(session.points().is_empty());
        assert!(session.surface().markers.is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_navigation_discards_unsaved_points() {
        let (mut session, dir) = session_with_images("discard", 2);
        for point in car_points() {
            session.record_point(point);
        }

        assert!(session.next(""));
        assert!(session.points().is_empty());
        assert!(session.previous(""));
        assert_eq!(session.cursor(), 0);
        assert!(session.points().is_empty());
        assert!(session.surface().markers.is_empty());

        // Nothing was written for either image
        for path in session.images().paths() {
            assert!(!path.with_extension("dat").exists());
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_next_at_last_image_is_noop() {
        let (mut session, dir) = session_with_images("next-end", 2);
        assert!(session.next("car"));
        assert_eq!(session.surface().images_shown, 2);
        session.record_point(Point::new(1, 1));

        assert!(!session.next("truck"));
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.surface().images_shown, 2);
        assert_eq!(session.points().len(), 1);
        assert_eq!(session.label(), "car");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_previous_at_first_image_is_noop() {
        let (mut session, dir) = session_with_images("prev-start", 2);
        session.record_point(Point::new(1, 1));

        session.apply(Command::Previous, "car");
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.surface().images_shown, 1);
        assert_eq!(session.points().len(), 1);
        assert_eq!(session.label(), "default_class");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_navigation_refreshes_label() {
        let (mut session, dir) = session_with_images("label", 3);

        session.apply(Command::Next, "car");
        assert_eq!(session.label(), "car");

        session.apply(Command::Next, "  ");
        assert_eq!(session.label(), "default_class");

        session.apply(Command::Previous, "person");
        assert_eq!(session.label(), "person");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_writes_expected_record() {
        let (mut session, dir) = session_with_images("save", 2);
        session.next("car");
        for point in car_points() {
            session.apply(Command::RecordPoint(point), "");
        }
        session.apply(Command::Save, "ignored until navigation");

        let path = dir.join("img_001.dat");
        let record = serialization::read_record(&path).unwrap();
        let entry = &record.polygon_data[0];
        assert_eq!(entry.class_name, "car");
        assert_eq!(entry.position, car_points());
        assert_eq!(record.total_class, vec!["car".to_string()]);

        let notice = session.surface().notices.last().unwrap();
        assert!(!notice.is_error());
        assert!(notice.message.contains("img_001.dat"));
        assert_eq!(
            session.saved_summary(),
            Some(&SavedSummary {
                class_name: "car".to_string(),
                point_count: 3,
            })
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_is_byte_identical_when_unchanged() {
        let (mut session, dir) = session_with_images("idempotent", 1);
        for point in car_points() {
            session.record_point(point);
        }

        let path = session.save().unwrap();
        let first = std::fs::read(&path).unwrap();
        let path_again = session.save().unwrap();
        let second = std::fs::read(&path_again).unwrap();

        assert_eq!(path, path_again);
        assert_eq!(first, second);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_overwrites_previous_annotation() {
        let (mut session, dir) = session_with_images("overwrite", 1);
        for point in car_points() {
            session.record_point(point);
        }
        let path = session.save().unwrap();

        session.clear();
        session.record_point(Point::new(7, 7));
        session.save().unwrap();

        let record = serialization::read_record(&path).unwrap();
        assert_eq!(record.polygon_data[0].position, vec![Point::new(7, 7)]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_failure_keeps_state() {
        let dir = scratch_dir("save-fail");
        let missing = dir.join("gone").join("img.png");
        let mut session = Session::new(
            ImageSet::from_paths(vec![missing]),
            AppConfig::default(),
            RecordingSurface::default(),
        );
        session.load_current();
        for point in car_points() {
            session.record_point(point);
        }

        assert!(session.save().is_err());

        let notices_before = session.surface().notices.len();
        session.apply(Command::Save, "");
        assert_eq!(session.surface().notices.len(), notices_before + 1);
        let notice = session.surface().notices.last().unwrap();
        assert!(notice.is_error());
        assert!(notice.message.starts_with("Save failed"));

        assert_eq!(session.points(), car_points().as_slice());
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.label(), "default_class");
        assert!(session.saved_summary().is_none());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_label_saved_exactly_as_typed() {
        let (mut session, dir) = session_with_images("label-verbatim", 3);

        session.next(" car ");
        assert_eq!(session.label(), " car ");
        for point in car_points() {
            session.record_point(point);
        }
        session.apply(Command::Save, "");

        let record = serialization::read_record(&dir.join("img_001.dat")).unwrap();
        assert_eq!(record.polygon_data[0].class_name, " car ");
        assert_eq!(
            record.polygon_data[0].class_id,
            crate::models::annotation::class_id(" car ").to_string()
        );
        assert_eq!(record.total_class, vec![" car ".to_string()]);

        // Whitespace-only is still blank
        session.previous(" ");
        assert_eq!(session.label(), "default_class");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_reports_confirmation() {
        let (mut session, dir) = session_with_images("report", 1);
        session.record_point(Point::new(1, 1));

        let notices_before = session.surface().notices.len();
        session.save_and_report();
        assert_eq!(session.surface().notices.len(), notices_before + 1);
        let notice = session.surface().notices.last().unwrap();
        assert!(!notice.is_error());
        assert!(notice.message.starts_with("Coordinates saved to"));
        assert!(dir.join("img_000.dat").is_file());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unreadable_image_is_reported() {
        let dir = scratch_dir("bad-image");
        let good = dir.join("good.png");
        image::RgbaImage::new(4, 4).save(&good).unwrap();
        let bad = dir.join("bad.png");
        std::fs::write(&bad, b"garbage").unwrap();
        let missing = dir.join("missing.png");

        let mut session = Session::new(
            ImageSet::from_paths(vec![good, bad, missing]),
            AppConfig::default(),
            RecordingSurface::default(),
        );
        session.load_current();
        assert!(session.surface().image_visible);

        assert!(session.next(""));
        assert!(!session.surface().image_visible);
        assert!(session.surface().notices.last().unwrap().is_error());

        // Still usable: clicks, navigation and saving keep working
        session.record_point(Point::new(2, 2));
        assert_eq!(session.points().len(), 1);
        assert!(session.next(""));
        assert_eq!(session.surface().notices.len(), 2);
        assert!(session.previous(""));
        assert!(session.previous(""));
        assert!(session.surface().image_visible);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_saved_summary_read_on_load() {
        let (mut session, dir) = session_with_images("summary", 2);
        session.next("tree");
        session.record_point(Point::new(3, 4));
        session.record_point(Point::new(5, 6));
        session.save().unwrap();

        session.previous("");
        assert!(session.saved_summary().is_none());
        session.next("");
        assert_eq!(
            session.saved_summary(),
            Some(&SavedSummary {
                class_name: "tree".to_string(),
                point_count: 2,
            })
        );
        // The saved points are not loaded back into the point list
        assert!(session.points().is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_image_set() {
        let mut session = Session::new(
            ImageSet::default(),
            AppConfig::default(),
            RecordingSurface::default(),
        );
        session.load_current();

        assert!(session.current_path().is_none());
        assert!(!session.next(""));
        assert!(!session.previous(""));
        assert!(session.save().is_err());
        assert_eq!(session.surface().images_shown, 0);
    }
}
