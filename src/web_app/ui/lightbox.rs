// ui/lightbox.rs - Full-screen image viewer state
//
// Keys: ArrowRight/ArrowLeft cycle images, Escape closes, +/= and - zoom,
// r rotates, 0 resets. Panning is only possible while zoomed in.

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.25;

/// What the component should do after a key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Close,
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightboxState {
    image_count: usize,
    pub current_index: usize,
    pub zoom: f64,
    /// Degrees, always one of 0/90/180/270
    pub rotation: u16,
    pub offset: (f64, f64),
    drag_origin: Option<(f64, f64)>,
}

impl LightboxState {
    pub fn new(image_count: usize, start_index: usize) -> Self {
        Self {
            image_count,
            current_index: if image_count == 0 { 0 } else { start_index % image_count },
            zoom: 1.0,
            rotation: 0,
            offset: (0.0, 0.0),
            drag_origin: None,
        }
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    pub fn next(&mut self) {
        if self.image_count > 0 {
            self.current_index = (self.current_index + 1) % self.image_count;
            self.reset_view();
        }
    }

    pub fn previous(&mut self) {
        if self.image_count > 0 {
            self.current_index = (self.current_index + self.image_count - 1) % self.image_count;
            self.reset_view();
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.image_count && index != self.current_index {
            self.current_index = index;
            self.reset_view();
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Mouse wheel: scrolling up zooms in
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y < 0.0 {
            self.zoom_in();
        } else if delta_y > 0.0 {
            self.zoom_out();
        }
    }

    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 90) % 360;
    }

    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.rotation = 0;
        self.offset = (0.0, 0.0);
        self.drag_origin = None;
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom > 1.0
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        if self.is_zoomed() {
            self.drag_origin = Some((x - self.offset.0, y - self.offset.1));
        }
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        if let Some((ox, oy)) = self.drag_origin {
            self.offset = (x - ox, y - oy);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        match key {
            "Escape" => return KeyOutcome::Close,
            "ArrowRight" => self.next(),
            "ArrowLeft" => self.previous(),
            "+" | "=" => self.zoom_in(),
            "-" | "_" => self.zoom_out(),
            "r" | "R" => self.rotate(),
            "0" => self.reset_view(),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Handled
    }

    /// CSS transform for the current image
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.offset.0, self.offset.1, self.zoom, self.rotation
        )
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if !self.is_zoomed() {
            self.offset = (0.0, 0.0);
            self.drag_origin = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_right_wraps() {
        let mut lightbox = LightboxState::new(3, 1);
        assert_eq!(lightbox.handle_key("ArrowRight"), KeyOutcome::Handled);
        assert_eq!(lightbox.current_index, 2);
        lightbox.handle_key("ArrowRight");
        assert_eq!(lightbox.current_index, 0);
    }

    #[test]
    fn test_arrow_left_wraps() {
        let mut lightbox = LightboxState::new(3, 0);
        lightbox.handle_key("ArrowLeft");
        assert_eq!(lightbox.current_index, 2);
    }

    #[test]
    fn test_escape_closes() {
        let mut lightbox = LightboxState::new(2, 0);
        assert_eq!(lightbox.handle_key("Escape"), KeyOutcome::Close);
        assert_eq!(lightbox.handle_key("Tab"), KeyOutcome::Ignored);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut lightbox = LightboxState::new(1, 0);
        for _ in 0..20 {
            lightbox.handle_key("+");
        }
        assert_eq!(lightbox.zoom, MAX_ZOOM);

        for _ in 0..20 {
            lightbox.handle_key("-");
        }
        assert_eq!(lightbox.zoom, MIN_ZOOM);
        assert_eq!(lightbox.zoom_percent(), 50);
    }

    #[test]
    fn test_changing_image_resets_view() {
        let mut lightbox = LightboxState::new(2, 0);
        lightbox.zoom_in();
        lightbox.rotate();
        lightbox.next();
        assert_eq!(lightbox.zoom, 1.0);
        assert_eq!(lightbox.rotation, 0);
    }

    #[test]
    fn test_rotation_cycles() {
        let mut lightbox = LightboxState::new(1, 0);
        for _ in 0..4 {
            lightbox.handle_key("r");
        }
        assert_eq!(lightbox.rotation, 0);
        lightbox.rotate();
        assert_eq!(lightbox.rotation, 90);
    }

    #[test]
    fn test_drag_only_when_zoomed() {
        let mut lightbox = LightboxState::new(1, 0);
        lightbox.begin_drag(10.0, 10.0);
        lightbox.drag_to(50.0, 50.0);
        assert_eq!(lightbox.offset, (0.0, 0.0));

        lightbox.zoom_in();
        lightbox.begin_drag(10.0, 10.0);
        lightbox.drag_to(30.0, 25.0);
        lightbox.end_drag();
        assert_eq!(lightbox.offset, (20.0, 15.0));
        assert!(!lightbox.is_dragging());

        // zooming back out recentres
        lightbox.zoom_out();
        assert_eq!(lightbox.offset, (0.0, 0.0));
    }

    #[test]
    fn test_empty_gallery_is_inert() {
        let mut lightbox = LightboxState::new(0, 5);
        lightbox.next();
        lightbox.previous();
        assert_eq!(lightbox.current_index, 0);
    }

    #[test]
    fn test_wheel_and_transform() {
        let mut lightbox = LightboxState::new(1, 0);
        lightbox.wheel(-120.0);
        assert_eq!(lightbox.zoom, 1.25);
        assert_eq!(lightbox.transform(), "translate(0px, 0px) scale(1.25) rotate(0deg)");
    }
}
