#[serde(rename_all = "Title Case")]
pub struct Person {
    pub name: String,
}
