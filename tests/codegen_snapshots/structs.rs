/// A user account.
struct Account {
    id: u64,
    #[serde(rename = "displayName")]
    display_name: String,
    #[serde(skip)]
    password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    nickname: Option<String>,
    r#type: String,
    #[serde(rename = "e-mail")]
    email: String,
}

#[serde(rename_all = "camelCase")]
struct Settings {
    dark_mode: bool,
    font_size: u8,
}

struct Timestamped {
    created_at: u64,
    #[serde(flatten)]
    settings: Settings,
}

struct UserId(u64);

struct Point(f64, f64);

struct Marker;

#[serde(transparent)]
struct Email {
    address: String,
}

struct Empty {}
