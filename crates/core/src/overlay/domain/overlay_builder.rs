use crate::overlay::domain::overlay::{Overlay, Point, Shape, Stroke};
use crate::shared::color::Rgb;
use crate::shared::region::Region;
use crate::status::domain::light_status::LightStatus;

pub const FACE_LABEL: &str = "Face";
pub const QUIT_HINT: &str = "Press 'Q' to quit";

pub const BANNER_HEIGHT: i32 = 60;
/// Baseline shared by the status and face count captions.
const BANNER_TEXT_Y: i32 = 42;
const LEFT_MARGIN: i32 = 15;
/// Distance of the face count caption from the right edge.
const COUNT_RIGHT_INSET: i32 = 150;
const HINT_BOTTOM_INSET: i32 = 15;

const BOX_THICKNESS: i32 = 2;
const FACE_LABEL_SCALE: f64 = 0.6;
const STATUS_SCALE: f64 = 1.3;
const STATUS_THICKNESS: i32 = 3;
const COUNT_SCALE: f64 = 1.0;
const COUNT_THICKNESS: i32 = 2;
const HINT_SCALE: f64 = 0.6;
const HINT_THICKNESS: i32 = 1;

/// Lays out the per-frame annotation: face boxes, then the status banner
/// and its captions, then the quit hint.
///
/// The banner is painted after the boxes and covers any box under it.
pub struct OverlayBuilder;

impl OverlayBuilder {
    pub fn build(
        frame_width: i32,
        frame_height: i32,
        regions: &[Region],
        status: LightStatus,
    ) -> Overlay {
        let mut overlay = Overlay::new();

        for region in regions {
            overlay.push(Shape::Rectangle {
                top_left: Point::new(region.x, region.y),
                bottom_right: Point::new(region.right(), region.bottom()),
                color: Rgb::GREEN,
                stroke: Stroke::Outline(BOX_THICKNESS),
            });
            let (lx, ly) = region.label_origin();
            overlay.push(Shape::Text {
                text: FACE_LABEL.to_string(),
                origin: Point::new(lx, ly),
                scale: FACE_LABEL_SCALE,
                color: Rgb::GREEN,
                thickness: BOX_THICKNESS,
            });
        }

        overlay.push(Shape::Rectangle {
            top_left: Point::new(0, 0),
            bottom_right: Point::new(frame_width, BANNER_HEIGHT),
            color: status.banner_color(),
            stroke: Stroke::Filled,
        });
        overlay.push(Shape::Text {
            text: status.label().to_string(),
            origin: Point::new(LEFT_MARGIN, BANNER_TEXT_Y),
            scale: STATUS_SCALE,
            color: status.text_color(),
            thickness: STATUS_THICKNESS,
        });
        overlay.push(Shape::Text {
            text: format!("Faces: {}", regions.len()),
            origin: Point::new(frame_width - COUNT_RIGHT_INSET, BANNER_TEXT_Y),
            scale: COUNT_SCALE,
            color: Rgb::WHITE,
            thickness: COUNT_THICKNESS,
        });
        overlay.push(Shape::Text {
            text: QUIT_HINT.to_string(),
            origin: Point::new(LEFT_MARGIN, frame_height - HINT_BOTTOM_INSET),
            scale: HINT_SCALE,
            color: Rgb::LIGHT_GRAY,
            thickness: HINT_THICKNESS,
        });

        overlay
    }
}
