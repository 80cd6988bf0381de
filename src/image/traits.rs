/// Read-only access to a row-major pixel grid.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Pixels between the starts of consecutive rows.
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// Every pixel with its `(row, col)` coordinate, all of row 0 first.
    fn pixels(&self) -> Pixels<'_, Self>
    where
        Self: Sized,
    {
        Pixels {
            image: self,
            y: 0,
            x: 0,
        }
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}

pub struct Pixels<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
    x: usize,
}

impl<'a, I: ImageView> Iterator for Pixels<'a, I> {
    type Item = (usize, usize, I::Pixel);

    fn next(&mut self) -> Option<Self::Item> {
        if self.image.width() == 0 {
            return None;
        }
        if self.x >= self.image.width() {
            self.x = 0;
            self.y += 1;
        }
        if self.y >= self.image.height() {
            return None;
        }
        let (y, x) = (self.y, self.x);
        self.x += 1;
        Some((y, x, self.image.row(y)[x]))
    }
}
