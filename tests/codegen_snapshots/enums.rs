/// Traffic light state.
enum Light {
    Red,
    Amber,
    Green,
}

enum Shape {
    Circle(f64),
    Rect(f64, f64),
    Polygon { points: Vec<(f64, f64)>, closed: bool },
    #[serde(skip)]
    Internal,
}

#[serde(rename_all = "snake_case")]
enum Event {
    UserJoined { user_id: u64 },
    #[serde(rename = "left")]
    UserLeft(u64),
}

enum Void {}
