/// Core trait that any bounding box must implement to be sorted by XY-Cut
///
/// Only `bounds` is required; the geometry helpers derive from it.
pub trait BoundingBox {
    /// Returns bounding box as (x0, y0, x1, y1)
    fn bounds(&self) -> (f32, f32, f32, f32);

    fn width(&self) -> f32 {
        let (x0, _, x1, _) = self.bounds();
        x1 - x0
    }

    fn height(&self) -> f32 {
        let (_, y0, _, y1) = self.bounds();
        y1 - y0
    }

    /// Returns center point (x, y)
    fn center(&self) -> (f32, f32) {
        let (x0, y0, x1, y1) = self.bounds();
        ((x0 + x1) / 2.0, (y0 + y1) / 2.0)
    }
}

impl BoundingBox for [f32; 4] {
    fn bounds(&self) -> (f32, f32, f32, f32) {
        (self[0], self[1], self[2], self[3])
    }
}

impl<T: BoundingBox + ?Sized> BoundingBox for &T {
    fn bounds(&self) -> (f32, f32, f32, f32) {
        (**self).bounds()
    }
}
