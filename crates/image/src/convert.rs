use {crate::*, base::Vec2};

fn ensure_len(data: &[u8], expected: usize) -> Result<(), ImageError> {
    if data.len() < expected {
        return Err(ImageError::Size {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// YUYV packs two pixels as `[Y0, U, Y1, V]`, sharing U and V.
pub fn yuyv_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(size.area() * 3);
    for chunk in data[..size.area() * 2].chunks_exact(4) {
        let (r0, g0, b0) = yuv_to_rgb(chunk[0], chunk[1], chunk[3]);
        let (r1, g1, b1) = yuv_to_rgb(chunk[2], chunk[1], chunk[3]);
        rgb.extend_from_slice(&[r0, g0, b0, r1, g1, b1]);
    }
    rgb
}

pub fn argb_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    data[..size.area() * 4]
        .chunks_exact(4)
        .flat_map(|c| [c[1], c[2], c[3]])
        .collect()
}

/// Decode a JPEG (or any format the `image` crate sniffs) into `Rgb8`.
pub fn jpeg_to_rgb(data: &[u8]) -> Result<Image, ImageError> {
    let decoded = crates_image::load_from_memory(data)?.to_rgb8();
    let (width, height) = decoded.dimensions();
    Image::rgb(
        Vec2::new(width as usize, height as usize),
        decoded.into_raw(),
    )
}

/// Decode one raw sample of `format` into a packed `Rgb8` image.
///
/// `size` is the negotiated device size; compressed samples carry their own
/// size, which wins over the negotiated one.
pub fn decode_rgb(format: PixelFormat, size: Vec2<usize>, data: &[u8]) -> Result<Image, ImageError> {
    match format {
        PixelFormat::Jpeg => jpeg_to_rgb(data),
        PixelFormat::Rgb8 => {
            ensure_len(data, size.area() * 3)?;
            Image::rgb(size, data[..size.area() * 3].to_vec())
        }
        PixelFormat::Argb8 => {
            ensure_len(data, size.area() * 4)?;
            Image::rgb(size, argb_to_rgb(size, data))
        }
        PixelFormat::Yuyv => {
            if size.x % 2 != 0 {
                return Err(ImageError::Unsupported(format!(
                    "YUYV needs an even width, got {}",
                    size.x
                )));
            }
            ensure_len(data, size.area() * 2)?;
            Image::rgb(size, yuyv_to_rgb(size, data))
        }
    }
}

/// Flip an image left to right in place.
pub fn mirror_horizontal(image: &mut Image) -> Result<(), ImageError> {
    let bpp = image.format.bytes_per_pixel().ok_or_else(|| {
        ImageError::Unsupported(format!("cannot mirror {:?} data", image.format))
    })?;
    let width = image.size.x;
    let stride = width * bpp;
    if stride == 0 {
        return Ok(());
    }
    ensure_len(&image.data, stride * image.size.y)?;
    for row in image.data.chunks_exact_mut(stride).take(image.size.y) {
        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for c in 0..bpp {
                row.swap(left + c, right + c);
            }
        }
    }
    Ok(())
}
