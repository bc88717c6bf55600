//! Geometric value types matching PostgreSQL's geometric column types.
//!
//! <https://www.postgresql.org/docs/current/datatype-geometric.html>

/// A point in the plane: the `point` type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PgPoint {
    pub x: f64,
    pub y: f64,
}

impl PgPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An infinite line, stored as the coefficients of Ax + By + C = 0:
/// the `line` type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PgLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl PgLine {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

/// A finite line segment between two endpoints: the `lseg` type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PgLseg {
    pub start: PgPoint,
    pub end: PgPoint,
}

impl PgLseg {
    pub fn new(start: PgPoint, end: PgPoint) -> Self {
        Self { start, end }
    }
}

/// An axis-aligned rectangle, stored as two opposite corners: the `box`
/// type. The wire sends the upper-right corner first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PgBox {
    pub high: PgPoint,
    pub low: PgPoint,
}

impl PgBox {
    pub fn new(high: PgPoint, low: PgPoint) -> Self {
        Self { high, low }
    }
}

/// A connected series of points, open or closed: the `path` type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PgPath {
    pub points: Vec<PgPoint>,
    /// Closed paths connect the last point back to the first.
    pub closed: bool,
}

impl PgPath {
    pub fn new(points: Vec<PgPoint>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A polygon, stored as its vertices in drawing order: the `polygon` type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PgPolygon {
    pub points: Vec<PgPoint>,
}

impl PgPolygon {
    pub fn new(points: Vec<PgPoint>) -> Self {
        Self { points }
    }

    /// Number of vertices in the polygon.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<PgPoint>> for PgPolygon {
    fn from(points: Vec<PgPoint>) -> Self {
        Self { points }
    }
}

/// A circle with a center and a radius: the `circle` type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PgCircle {
    pub center: PgPoint,
    pub radius: f64,
}

impl PgCircle {
    pub fn new(center: PgPoint, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Any geometric value, as the parameter binding layer hands it to the
/// encode entry points. The encoders check the variant and reject a value
/// of the wrong type before any byte is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoValue {
    Point(PgPoint),
    Line(PgLine),
    Lseg(PgLseg),
    Box(PgBox),
    Path(PgPath),
    Polygon(PgPolygon),
    Circle(PgCircle),
}

impl GeoValue {
    /// PostgreSQL's name for the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            GeoValue::Point(_) => "point",
            GeoValue::Line(_) => "line",
            GeoValue::Lseg(_) => "lseg",
            GeoValue::Box(_) => "box",
            GeoValue::Path(_) => "path",
            GeoValue::Polygon(_) => "polygon",
            GeoValue::Circle(_) => "circle",
        }
    }
}

impl From<PgPoint> for GeoValue {
    fn from(value: PgPoint) -> Self {
        GeoValue::Point(value)
    }
}

impl From<PgLine> for GeoValue {
    fn from(value: PgLine) -> Self {
        GeoValue::Line(value)
    }
}

impl From<PgLseg> for GeoValue {
    fn from(value: PgLseg) -> Self {
        GeoValue::Lseg(value)
    }
}

impl From<PgBox> for GeoValue {
    fn from(value: PgBox) -> Self {
        GeoValue::Box(value)
    }
}

impl From<PgPath> for GeoValue {
    fn from(value: PgPath) -> Self {
        GeoValue::Path(value)
    }
}

impl From<PgPolygon> for GeoValue {
    fn from(value: PgPolygon) -> Self {
        GeoValue::Polygon(value)
    }
}

impl From<PgCircle> for GeoValue {
    fn from(value: PgCircle) -> Self {
        GeoValue::Circle(value)
    }
}
