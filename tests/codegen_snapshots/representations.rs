#[serde(tag = "type")]
enum Message {
    Ping,
    Text { body: String },
    Wrapped(Payload),
}

struct Payload {
    size: u32,
}

#[serde(untagged)]
enum Value {
    Missing,
    Flag(bool),
    Pair(i32, String),
    Named { label: String },
}

#[serde(tag = "kind", content = "data", rename_all = "kebab-case", rename_all_fields = "camelCase")]
enum Command {
    SetVolume { new_level: u8 },
    #[serde(rename_all = "UPPERCASE")]
    Reset { hard_reset: bool },
    Quit,
}
