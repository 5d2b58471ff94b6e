/// Display state of the central image view.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Frames left that scroll to the middle. Set after every render.
    recenter_frames: u8,
}

/// Scrollbars appear one frame after the content grows, so the first
/// recentre can see a viewport that is too large.
const RECENTER_FRAMES: u8 = 2;

impl ViewportState {
    pub fn set_texture(&mut self, texture: egui::TextureHandle) {
        self.texture = Some(texture);
        self.recenter_frames = RECENTER_FRAMES;
    }

    /// Consume one frame of a pending recenter request.
    pub fn take_recenter(&mut self) -> bool {
        let pending = self.recenter_frames > 0;
        self.recenter_frames = self.recenter_frames.saturating_sub(1);
        pending
    }

    pub fn image_size(&self) -> Option<[usize; 2]> {
        self.texture.as_ref().map(|t| t.size())
    }
}

/// Scroll offset that puts the middle of `content` in the middle of `view`.
pub fn centered_offset(content: egui::Vec2, view: egui::Vec2) -> egui::Vec2 {
    ((content - view) / 2.0).max(egui::Vec2::ZERO)
}
