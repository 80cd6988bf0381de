/// Three 8-bit channels in the order the decoder stored them.
pub type Pixel3 = [u8; 3];

/// Borrowed view over a 3-channel 8-bit image.
#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [Pixel3],
}

impl<'a> ImageRgb8<'a> {
    /// Tightly packed view; `data.len()` must be at least `w * h`.
    pub fn packed(w: usize, h: usize, data: &'a [Pixel3]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Pixel3 {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for ImageRgb8<'a> {
    type Pixel = Pixel3;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Pixel3] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
