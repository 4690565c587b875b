/// An 8-bit RGB color.
///
/// The domain speaks RGB; OpenCV's BGR ordering is applied when painting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const LIGHT_GRAY: Rgb = Rgb(200, 200, 200);

    pub fn to_bgr(self) -> [u8; 3] {
        [self.2, self.1, self.0]
    }
}
