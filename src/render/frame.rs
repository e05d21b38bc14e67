/// A rendered preview as premultiplied RGBA8 pixels.
///
/// Frames are never mutated after rendering; the cart shares them behind `Arc` as frozen
/// snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewFrame {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, premultiplied alpha.
    pub data: Vec<u8>,
}

impl PreviewFrame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}
