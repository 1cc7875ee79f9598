use {crate::*, base::Vec2};

/// One image in memory: size, pixel layout and the packed bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl Image {
    /// Build an `Rgb8` image, checking that `data` covers every pixel.
    pub fn rgb(size: Vec2<usize>, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = size.area() * 3;
        if data.len() != expected {
            return Err(ImageError::Size {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            size,
            format: PixelFormat::Rgb8,
            data,
        })
    }

    /// A solid `Rgb8` image.
    pub fn filled(size: Vec2<usize>, color: [u8; 3]) -> Self {
        let data = color.iter().copied().cycle().take(size.area() * 3).collect();
        Self {
            size,
            format: PixelFormat::Rgb8,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// The RGB value at (x, y) of an `Rgb8` image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if self.format != PixelFormat::Rgb8 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        let i = (y * self.size.x + x) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}
