enum Shape {
    Circle(f64),
    Rect(f64, f64),
    Polygon { points: Vec<(f64, f64)> },
    Empty,
}
