//! Only type declarations are converted.

use std::fmt;

pub mod api {
    /// Request sent by the client.
    pub struct Request {
        pub id: u32,
    }

    fn handle(_req: Request) {}
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status")
    }
}

pub enum Status {
    Ok,
    Failed(String),
}

const LIMIT: usize = 10;

#[cfg(test)]
mod tests {
    struct Fixture;
}
