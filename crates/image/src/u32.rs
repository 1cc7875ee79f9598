use {crate::*, base::Vec2};

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack HWC RGB bytes as `0x00RRGGBB`, the layout `minifb` displays.
pub fn rgb_to_u32(size: Vec2<usize>, data: &[u8]) -> Vec<u32> {
    let mut buf = Vec::with_capacity(size.area());
    for chunk in data.chunks_exact(3).take(size.area()) {
        buf.push(pack_u32(chunk[0], chunk[1], chunk[2]));
    }
    buf
}

impl Image {
    /// Pack any image for display; undecodable data yields `None`.
    pub fn to_u32(&self) -> Option<Vec<u32>> {
        match self.format {
            PixelFormat::Rgb8 => Some(rgb_to_u32(self.size, &self.data)),
            _ => decode_rgb(self.format, self.size, &self.data)
                .ok()
                .map(|rgb| rgb_to_u32(rgb.size, &rgb.data)),
        }
    }
}
