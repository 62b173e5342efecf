/// Collision primitive and the capability traits shared by every entity
/// that lives in the play field.

/// An axis-aligned box. `(x, y)` is the sprite anchor; the box extends
/// `width` along +x and `height` along +y from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Strict overlap on both axes. Boxes that only share an edge do not
    /// overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Free-function form of [`Aabb::overlaps`].
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

// ── Capabilities ──────────────────────────────────────────────────────────────

/// Anything with a place and a heading in world space.
pub trait Positioned {
    fn position(&self) -> (f32, f32);

    /// Heading in degrees, clockwise, 0 = up.
    fn rotation(&self) -> f32;
}

/// Anything that can be hit and can die.
pub trait Collidable: Positioned {
    fn bounds(&self) -> Aabb;

    fn is_dead(&self) -> bool;

    fn collides_with(&self, other: &dyn Collidable) -> bool {
        self.bounds().overlaps(&other.bounds())
    }
}
