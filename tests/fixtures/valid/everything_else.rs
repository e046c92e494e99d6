extern crate core;

macro_rules! noop {
    () => {};
}

static GREETING: &str = "hi";

pub trait Named {
    fn name(&self) -> String;
}

pub fn main() {}

pub union Bits {
    int: u32,
    float: f32,
}
