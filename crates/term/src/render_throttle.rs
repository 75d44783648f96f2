/// Decides when the visualizer needs a new frame.
///
/// While the search or the animation is running every frame is drawn. Otherwise
/// a frame is drawn when the session revision changes, plus a slow refresh so a
/// resized terminal still repaints.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_revision: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_revision: 0,
            has_rendered: false,
        }
    }

    /// Force the next call to render.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }

    pub fn should_render(&mut self, now_ms: u64, revision: u64, active: bool) -> bool {
        if !self.has_rendered || active || revision != self.last_revision {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_revision = revision;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }
}
