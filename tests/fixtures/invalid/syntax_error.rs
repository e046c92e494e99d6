pub struct Person {
    name: String
    age: u32,
}
