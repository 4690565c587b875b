use crate::shared::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// How a rectangle is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stroke {
    /// Outline with the given line thickness in pixels.
    Outline(i32),
    Filled,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rectangle {
        top_left: Point,
        bottom_right: Point,
        color: Rgb,
        stroke: Stroke,
    },
    /// Text anchored at its bottom-left corner.
    Text {
        text: String,
        origin: Point,
        scale: f64,
        color: Rgb,
        thickness: i32,
    },
}

/// Shapes to paint over a frame, back to front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overlay {
    shapes: Vec<Shape>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// All text strings, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Text { text, .. } => Some(text.as_str()),
            Shape::Rectangle { .. } => None,
        })
    }
}
