pub struct Handler {
    pub callback: fn(u32) -> bool,
}
