use calorie_core::{FrameError, Nv21Frame};

use super::FrameSource;

const DEFAULT_WIDTH: u32 = 320;
const DEFAULT_HEIGHT: u32 = 240;

// White, yellow, cyan, green, magenta, red, blue, black.
const BARS: [[u8; 3]; 8] = [
    [255, 255, 255],
    [255, 255, 0],
    [0, 255, 255],
    [0, 255, 0],
    [255, 0, 255],
    [255, 0, 0],
    [0, 0, 255],
    [0, 0, 0],
];

/// Frame source that renders vertical colour bars.
///
/// Each capture shifts the bars by one position so consecutive photos differ.
#[derive(Debug, Clone)]
pub(crate) struct TestPatternSource {
    width: u32,
    height: u32,
    frame_index: usize,
}

impl Default for TestPatternSource {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl TestPatternSource {
    #[must_use]
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame_index: 0,
        }
    }

    fn bar_at(&self, x: u32) -> [u8; 3] {
        let bar = (x as usize * BARS.len()) / self.width.max(1) as usize;
        BARS[(bar + self.frame_index) % BARS.len()]
    }
}

impl FrameSource for TestPatternSource {
    fn capture_frame(&mut self) -> Result<Nv21Frame, FrameError> {
        let (width, height) = (self.width, self.height);
        let mut y_plane = Vec::with_capacity((width * height) as usize);
        for _ in 0..height {
            y_plane.extend((0..width).map(|x| to_yuv(self.bar_at(x))[0]));
        }

        let mut u_plane = Vec::with_capacity((width * height / 4) as usize);
        let mut v_plane = Vec::with_capacity((width * height / 4) as usize);
        for _ in 0..height / 2 {
            for x in (0..width).step_by(2) {
                let [_, u, v] = to_yuv(self.bar_at(x));
                u_plane.push(u);
                v_plane.push(v);
            }
        }

        self.frame_index = self.frame_index.wrapping_add(1);
        Nv21Frame::from_planes(width, height, &y_plane, &u_plane, &v_plane)
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_yuv([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let u = 128.0 - 0.168_736 * r - 0.331_264 * g + 0.5 * b;
    let v = 128.0 + 0.5 * r - 0.418_688 * g - 0.081_312 * b;
    [y, u, v].map(|c| c.round().clamp(0.0, 255.0) as u8)
}
