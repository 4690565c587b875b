use opencv::core::{Mat, Point as CvPoint, Scalar};
use opencv::imgproc::{self, FILLED, FONT_HERSHEY_SIMPLEX, LINE_8};

use crate::overlay::domain::overlay::{Overlay, Point, Shape, Stroke};
use crate::shared::color::Rgb;

/// Paints an overlay onto a BGR `Mat` in place.
pub fn paint(mat: &mut Mat, overlay: &Overlay) -> opencv::Result<()> {
    for shape in overlay.shapes() {
        match shape {
            Shape::Rectangle {
                top_left,
                bottom_right,
                color,
                stroke,
            } => {
                let thickness = match stroke {
                    Stroke::Outline(t) => *t,
                    Stroke::Filled => FILLED,
                };
                imgproc::rectangle_points(
                    mat,
                    cv_point(*top_left),
                    cv_point(*bottom_right),
                    bgr_scalar(*color),
                    thickness,
                    LINE_8,
                    0,
                )?;
            }
            Shape::Text {
                text,
                origin,
                scale,
                color,
                thickness,
            } => {
                imgproc::put_text(
                    mat,
                    text,
                    cv_point(*origin),
                    FONT_HERSHEY_SIMPLEX,
                    *scale,
                    bgr_scalar(*color),
                    *thickness,
                    LINE_8,
                    false,
                )?;
            }
        }
    }
    Ok(())
}

fn cv_point(p: Point) -> CvPoint {
    CvPoint::new(p.x, p.y)
}

fn bgr_scalar(color: Rgb) -> Scalar {
    let [b, g, r] = color.to_bgr();
    Scalar::new(b as f64, g as f64, r as f64, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::domain::overlay_builder::OverlayBuilder;
    use crate::status::domain::light_status::LightStatus;
    use opencv::core::{Vec3b, CV_8UC3};
    use opencv::prelude::*;

    fn black(w: i32, h: i32) -> Mat {
        Mat::new_rows_cols_with_default(h, w, CV_8UC3, Scalar::all(0.0)).unwrap()
    }

    fn bgr_at(mat: &Mat, x: i32, y: i32) -> [u8; 3] {
        let px = mat.at_2d::<Vec3b>(y, x).unwrap();
        [px[0], px[1], px[2]]
    }

    #[test]
    fn test_filled_rectangle_uses_bgr_order() {
        let mut mat = black(20, 20);
        let mut overlay = Overlay::new();
        overlay.push(Shape::Rectangle {
            top_left: Point::new(0, 0),
            bottom_right: Point::new(10, 10),
            color: Rgb(80, 0, 0),
            stroke: Stroke::Filled,
        });
        paint(&mut mat, &overlay).unwrap();
        assert_eq!(bgr_at(&mat, 5, 5), [0, 0, 80]);
        assert_eq!(bgr_at(&mat, 15, 15), [0, 0, 0]);
    }

    #[test]
    fn test_outline_leaves_interior_untouched() {
        let mut mat = black(50, 50);
        let mut overlay = Overlay::new();
        overlay.push(Shape::Rectangle {
            top_left: Point::new(5, 5),
            bottom_right: Point::new(45, 45),
            color: Rgb::GREEN,
            stroke: Stroke::Outline(2),
        });
        paint(&mut mat, &overlay).unwrap();
        assert_eq!(bgr_at(&mat, 5, 25), [0, 255, 0]);
        assert_eq!(bgr_at(&mat, 25, 25), [0, 0, 0]);
    }

    #[test]
    fn test_status_banner_painted_across_top() {
        let mut mat = black(320, 240);
        let overlay = OverlayBuilder::build(320, 240, &[], LightStatus::On);
        paint(&mut mat, &overlay).unwrap();
        // Right edge of the banner, clear of the captions
        assert_eq!(bgr_at(&mat, 319, 2), [0, 60, 0]);
        assert_eq!(bgr_at(&mat, 319, 100), [0, 0, 0]);
    }

    #[test]
    fn test_empty_overlay_is_noop() {
        let mut mat = black(8, 8);
        paint(&mut mat, &Overlay::new()).unwrap();
        assert!(mat.data_bytes().unwrap().iter().all(|&v| v == 0));
    }
}
