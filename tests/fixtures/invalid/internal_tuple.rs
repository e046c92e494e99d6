#[serde(tag = "kind")]
pub enum Shape {
    Rect(f64, f64),
}
